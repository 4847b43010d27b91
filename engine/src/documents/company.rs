// The contracted party printed on contracts and receipts
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CompanyProfile {
    pub name: String,
    pub headquarters: String,
    pub city: String,
    pub document: String,
    pub representative: String,
    pub bank_details: String,
    /// Charged per half hour past the agreed end time.
    pub overtime_fee: f64,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        CompanyProfile {
            name: "Julio's Pizza House".to_string(),
            headquarters: "Rua Alzira Postali Gewrher, nº 119, bairro Jardim Catuai, Cep 86086-230, no Estado Paraná"
                .to_string(),
            city: "Londrina".to_string(),
            document: "034.988.389-03".to_string(),
            representative: "Júlio Cesar Fermino".to_string(),
            bank_details: "caixa econômica Ag: 1479 conta: 00028090-5 conta corrente".to_string(),
            overtime_fee: 300.0,
        }
    }
}
