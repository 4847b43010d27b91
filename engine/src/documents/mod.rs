// Plain-text contract and receipt rendering
pub mod company;
pub mod contract;
pub mod receipt;

use chrono::NaiveDate;
use shared::models::ContractRecord;

use crate::error::EngineError;

pub use company::CompanyProfile;
pub use contract::render_contract;
pub use receipt::render_receipt;

/// Values that vary per rendering rather than per contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentOptions {
    pub receipt_number: u32,
    /// Printed on the receipt, and on the contract when it has no signature date.
    pub issue_date: NaiveDate,
}

/// Children are mentioned only when there are any.
pub(crate) fn guests_phrase(record: &ContractRecord) -> String {
    if record.child_count > 0 {
        format!("{} adultos e {} crianças", record.adult_count, record.child_count)
    } else {
        format!("{} adultos", record.adult_count)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderedDocuments {
    pub contract: String,
    pub receipt: String,
}

pub fn render_documents(
    record: &ContractRecord,
    company: &CompanyProfile,
    options: &DocumentOptions,
) -> Result<RenderedDocuments, EngineError> {
    Ok(RenderedDocuments {
        contract: render_contract(record, company, options)?,
        receipt: render_receipt(record, company, options)?,
    })
}
