// Service contract text
use shared::models::ContractRecord;

use super::company::CompanyProfile;
use super::{guests_phrase, DocumentOptions};
use crate::calculator::{calculate_base_waiters, waiters_narrative};
use crate::data::brazilian_format::{format_currency, format_date_br};
use crate::error::EngineError;
use crate::speller::number_to_words;

/// Renders the service contract. Payment fields are taken as they are on
/// the record, so callers recalculate before rendering.
pub fn render_contract(
    record: &ContractRecord,
    company: &CompanyProfile,
    options: &DocumentOptions,
) -> Result<String, EngineError> {
    let base_waiters = calculate_base_waiters(record.adult_count, record.child_count);
    let waiters = waiters_narrative(base_waiters, record.extra_waiters);
    let overtime_fee_words = number_to_words(company.overtime_fee)?;
    let signature_date = record
        .signature_date
        .clone()
        .filter(|d| !d.trim().is_empty())
        .unwrap_or_else(|| options.issue_date.format("%d/%m/%Y").to_string());
    let company_name = company.name.to_uppercase();
    let event_date = format_date_br(&record.event_date);
    let start = &record.event_start_time;
    let end = &record.event_end_time;

    let mut text = String::new();
    text.push_str(&format!("{}\n\n", company_name));
    text.push_str(&format!(
        "CONTRATANTE: {}, CPF/CNPJ: n°{}, RG: nº {} residente em Rua: {}.\n\n",
        record.client_name, record.client_document, record.client_rg, record.client_address
    ));
    text.push_str(&format!(
        "CONTRATADA: {}, com sede em {}, na {}, inscrita no CPF sob o nº {}, neste ato representada pelo Responsável Sr. {}.\n\n",
        company_name, company.city, company.headquarters, company.document, company.representative
    ));
    text.push_str(
        "As partes acima identificadas têm, entre si, justo e acertado o presente Contrato de Prestação de Serviços de Rodizio de pizza para festa, que se regerá pelas cláusulas seguintes e pelas condições de preço, forma e termo de pagamento descritas no presente.\n\n",
    );

    text.push_str("DO OBJETO DO CONTRATO\n\n");
    text.push_str(&format!(
        "Cláusula 1ª. É objeto do presente contrato a prestação pela CONTRATADA à CONTRATANTE do serviço de rodizio de pizza, em evento que se realizará na data de {}, no endereço / local: {}.\n\n",
        event_date, record.event_address
    ));

    text.push_str("O EVENTO\n\n");
    text.push_str(&format!(
        "Cláusula 2ª. O evento, para cuja realização são contratados os serviços de Rodizio de Pizza, é a festa de confraternização da CONTRATANTE, e contará com a presença de aproximadamente {} a serem confirmada uma semana antes do evento.\n",
        guests_phrase(record)
    ));
    text.push_str(&format!(
        "Parágrafo único. O evento realizar-se-á no horário e local indicado no caput da cláusula 1ª, devendo o serviço de rodizio de pizza a ser prestado das {} até às {} horas.\n\n",
        start, end
    ));

    text.push_str("OBRIGAÇÕES DA CONTRATANTE\n\n");
    text.push_str(
        "Cláusula 3ª. A CONTRATANTE deverá fornecer à CONTRATADA todas as informações necessárias à realização adequada do serviço de rodizio de pizza, devendo especificar os detalhes do evento, necessários ao perfeito fornecimento do serviço, e a forma como este deverá ser prestado.\n\n",
    );
    text.push_str(
        "Cláusula 4ª. A CONTRATANTE deverá efetuar o pagamento na forma e condições estabelecidas na cláusula 9ª.\n\n",
    );

    text.push_str("OBRIGAÇÕES DA CONTRATADA\n\n");
    text.push_str(&format!(
        "Cláusula 5ª. É dever da CONTRATADA oferecer um serviço de rodizio pizza de acordo com as especificações da CONTRATANTE, devendo o serviço iniciar-se às {} e terminar às {} horas.\n",
        start, end
    ));
    text.push_str(
        "Parágrafo único. A CONTRATADA está obrigada a fornecer aos convidados do CONTRATANTE produtos de alta qualidade, que deverão ser preparados e servidos dentro de rigorosas normas de higiene e limpeza.\n",
    );
    text.push_str(&format!(
        "Obs: O excedente de horário será cobrado {} ({}) a cada meia hora do horário ultrapassado.\n\n",
        format_currency(company.overtime_fee),
        overtime_fee_words
    ));
    text.push_str(
        "Cláusula 6ª. A CONTRATADA se compromete a fornecer o cardápio escolhido pela CONTRATANTE, cujas especificações, inclusive de quantidade a ser servida, encontram-se em documento anexo ao presente contrato.\n\n",
    );
    text.push_str(&format!(
        "Cláusula 7ª. A CONTRATADA fornecerá pelo menos 1 pizzaiolos e {} para servir os convidados nas mesas.\n\n",
        waiters
    ));
    text.push_str(
        "Cláusula 8ª. A CONTRATADA obriga-se a manter todos os seus empregados devidamente uniformizados durante a prestação dos serviços ora contratados, garantindo que todos eles possuem os requisitos de urbanidade, moralidade e educação.\n\n",
    );

    text.push_str("DO PREÇO E DAS CONDIÇÕES DE PAGAMENTO\n\n");
    text.push_str(&format!(
        "Cláusula 9. O serviço contratado no presente instrumento será remunerado dependendo do numero de pessoas confirmadas uma semana antes do evento. A contratada garante que a quantidade de comida seja suficiente para atender o num de pessoas presentes, estando preparada para atender até 10% a mais do numero de pessoas confirmadas, cobrando o valor de {} por adulto e {} por crianças no total de {} assim como combinado pelo telefone. O serviço deve ser pago em dinheiro, com uma entrada de {} (depositados em conta, {}) ANTECIPADO, a diferença no ato da festa no valor de {}.\n\n",
        format_currency(record.adult_price),
        format_currency(record.child_price),
        format_currency(record.total_value),
        format_currency(record.down_payment),
        company.bank_details,
        format_currency(record.remaining_payment())
    ));
    text.push_str(
        "Cláusula 10. O presente contrato poderá ser rescindido unilateralmente por qualquer uma das partes, desde que haja comunicação formal por escrito justificando o motivo. Deverá acontecer, além disso, até 10 dias corridos, antes da data prevista para o evento, com devolução da entrada. Caso o cliente queira ou precise cancelar ou mudar a data da reserva, após ter pago a entrada, a contratada descontará o valor pago na futura contratação do serviço se acontecer nos primeiros 30 dias corridos após o dia antecipadamente reservado.\n\n",
    );

    text.push_str(&format!("{}, {}.\n\n", company.city.to_uppercase(), signature_date));
    text.push_str("__________________________\nCONTRATANTE\n\n");
    text.push_str("__________________________\nCONTRATADA\n");

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{calculate_values, EndTimeMode};
    use chrono::NaiveDate;

    fn options() -> DocumentOptions {
        DocumentOptions {
            receipt_number: 7,
            issue_date: NaiveDate::from_ymd_opt(2025, 4, 2).unwrap(),
        }
    }

    fn record() -> ContractRecord {
        let record = ContractRecord {
            client_name: "Maria Souza".to_string(),
            client_document: "123.456.789-01".to_string(),
            client_rg: "12.345.678-9".to_string(),
            client_address: "das Flores, 10".to_string(),
            event_date: "2025-05-10".to_string(),
            event_address: "Salão Jardim".to_string(),
            adult_count: 30,
            child_count: 0,
            extra_waiters: 0,
            ..ContractRecord::default()
        };
        calculate_values(&record, EndTimeMode::Keep).unwrap()
    }

    #[test]
    fn test_contract_contains_parties_and_event() {
        let text = render_contract(&record(), &CompanyProfile::default(), &options()).unwrap();
        assert!(text.starts_with("JULIO'S PIZZA HOUSE"));
        assert!(text.contains("CONTRATANTE: Maria Souza, CPF/CNPJ: n°123.456.789-01"));
        assert!(text.contains("na data de 10/05/2025, no endereço / local: Salão Jardim."));
        assert!(text.contains("das 20:30 até às 23:30 horas"));
        assert!(text.contains("aproximadamente 30 adultos a serem"));
    }

    #[test]
    fn test_contract_payment_clause() {
        let text = render_contract(&record(), &CompanyProfile::default(), &options()).unwrap();
        assert!(text.contains("cobrando o valor de R$ 55,00 por adulto e R$ 27,00 por crianças no total de R$ 1.650,00"));
        assert!(text.contains("com uma entrada de R$ 660,00"));
        assert!(text.contains("no valor de R$ 990,00."));
        assert!(text.contains("cobrado R$ 300,00 (trezentos reais) a cada meia hora"));
    }

    #[test]
    fn test_waiters_text_without_extra_waiters() {
        let text = render_contract(&record(), &CompanyProfile::default(), &options()).unwrap();
        assert!(text.contains("pelo menos 1 pizzaiolos e 1 garçons para servir"));
        assert!(!text.contains("adicionais"));
    }

    #[test]
    fn test_waiters_text_with_extra_waiters_and_children() {
        let mut r = record();
        r.adult_count = 50;
        r.child_count = 12;
        r.extra_waiters = 2;
        let text = render_contract(&r, &CompanyProfile::default(), &options()).unwrap();
        assert!(text.contains("3 garçons + 2 garçons adicionais"));
        assert!(text.contains("50 adultos e 12 crianças"));
    }

    #[test]
    fn test_signature_date_falls_back_to_issue_date() {
        let text = render_contract(&record(), &CompanyProfile::default(), &options()).unwrap();
        assert!(text.contains("LONDRINA, 02/04/2025."));

        let mut r = record();
        r.signature_date = Some("15 de abril de 2025".to_string());
        let text = render_contract(&r, &CompanyProfile::default(), &options()).unwrap();
        assert!(text.contains("LONDRINA, 15 de abril de 2025."));
    }
}
