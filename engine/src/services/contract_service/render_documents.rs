// Handler for the RenderDocuments RPC
use tonic::{Response, Status};

use super::helpers::{parse_issue_date, parse_record_json};
use crate::calculator::ValueCalculator;
use crate::documents::{render_documents, CompanyProfile, DocumentOptions};
use crate::services::{RenderDocumentsRequest, RenderDocumentsResponse};

pub async fn handle_render_documents(
    req_payload: RenderDocumentsRequest,
    calculator: ValueCalculator,
    company: &CompanyProfile,
) -> Result<Response<RenderDocumentsResponse>, Status> {
    let record = parse_record_json(&req_payload.record_json)?;
    let calculated = calculator.calculate(&record)?;
    let options = DocumentOptions {
        receipt_number: req_payload.receipt_number,
        issue_date: parse_issue_date(&req_payload.issue_date)?,
    };

    let documents = render_documents(&calculated, company, &options)?;
    tracing::debug!(receipt_number = options.receipt_number, "Documents rendered (handler)");
    Ok(Response::new(RenderDocumentsResponse {
        contract_text: documents.contract,
        receipt_text: documents.receipt,
    }))
}
