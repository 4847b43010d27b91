// Down payment receipt text
use shared::models::ContractRecord;

use super::company::CompanyProfile;
use super::{guests_phrase, DocumentOptions};
use crate::data::brazilian_format::{format_currency, format_date_br, format_document, DocumentKind};
use crate::error::EngineError;
use crate::speller::number_to_words;

pub fn render_receipt(
    record: &ContractRecord,
    company: &CompanyProfile,
    options: &DocumentOptions,
) -> Result<String, EngineError> {
    let amount = format_currency(record.down_payment);
    let amount_in_words = number_to_words(record.down_payment)?;
    let document_label = DocumentKind::detect(&record.client_document)
        .map(|kind| kind.label())
        .unwrap_or("CPF/CNPJ");
    let guests = guests_phrase(record);
    let event_date = format_date_br(&record.event_date);

    let mut text = String::new();
    text.push_str(&format!("RECIBO - {}\n", company.name.to_uppercase()));
    text.push_str(&format!(
        "Nº {:04}/{}\n\n",
        options.receipt_number,
        options.issue_date.format("%Y")
    ));
    text.push_str(&format!("{}\n\n", amount));
    text.push_str(&format!(
        "Recebi de {}, inscrito no {} sob o nº {}, a importância de {} ({}), referente ao sinal de pagamento para o serviço de rodízio de pizzas a ser realizado no evento do dia {}, no endereço: {}.\n\n",
        record.client_name.to_uppercase(),
        document_label,
        format_document(&record.client_document),
        amount,
        amount_in_words,
        event_date,
        record.event_address
    ));
    text.push_str(&format!("Valor total: {}\n", format_currency(record.total_value)));
    text.push_str(&format!("Sinal: {}\n", amount));
    text.push_str(&format!("Restante: {}\n", format_currency(record.remaining_payment())));
    text.push_str(&format!(
        "Horário: {} às {}\n",
        record.event_start_time, record.event_end_time
    ));
    text.push_str(&format!("Convidados: {}\n", guests));
    text.push_str(&format!("RG: {}\n", record.client_rg));
    text.push_str(&format!("Endereço: {}\n\n", record.client_address));
    text.push_str(&format!(
        "{}, {}\n\n",
        company.city,
        options.issue_date.format("%d/%m/%Y")
    ));
    text.push_str("__________________________\n");
    text.push_str(&format!("{}\n{}\nCPF: {}\n", company.representative, company.name, company.document));

    Ok(text)
}
