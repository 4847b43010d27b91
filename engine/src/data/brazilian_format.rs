// Brazilian currency, taxpayer document and date formatting
use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto", "setembro", "outubro", "novembro",
    "dezembro",
];

// Groups the integer digits in threes with '.', e.g. 1234567 -> "1.234.567"
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a value as Brazilian Reais: 1234.5 -> "R$ 1.234,50".
pub fn format_currency(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };
    let cents = (value.abs() * 100.0).round() as u64;
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, group_thousands(cents / 100), cents % 100)
}

pub fn digits_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Individual taxpayer number, 11 digits.
    Cpf,
    /// Company taxpayer number, 14 digits.
    Cnpj,
}

impl DocumentKind {
    pub fn detect(raw: &str) -> Option<DocumentKind> {
        match digits_only(raw).len() {
            11 => Some(DocumentKind::Cpf),
            14 => Some(DocumentKind::Cnpj),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::Cpf => "CPF",
            DocumentKind::Cnpj => "CNPJ",
        }
    }
}

/// Formats CPF as xxx.xxx.xxx-xx and CNPJ as xx.xxx.xxx/xxxx-xx.
/// More than 11 digits is read as a CNPJ and cut at 14; incomplete input
/// is returned as bare digits.
pub fn format_document(raw: &str) -> String {
    let mut digits = digits_only(raw);
    if digits.len() > 11 {
        digits.truncate(14);
    }
    match digits.len() {
        11 => format!("{}.{}.{}-{}", &digits[0..3], &digits[3..6], &digits[6..9], &digits[9..11]),
        14 => format!(
            "{}.{}.{}/{}-{}",
            &digits[0..2],
            &digits[2..5],
            &digits[5..8],
            &digits[8..12],
            &digits[12..14]
        ),
        _ => digits,
    }
}

/// Reads an event date stored either as ISO "YYYY-MM-DD" or as "DD/MM/YYYY".
pub fn parse_event_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%d/%m/%Y"))
        .ok()
}

/// ISO dates become "DD/MM/YYYY"; anything else is returned unchanged.
pub fn format_date_br(s: &str) -> String {
    match NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => s.to_string(),
    }
}

/// "10 de maio de 2025"
pub fn format_date_long(date: NaiveDate) -> String {
    format!("{} de {} de {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(55.0), "R$ 55,00");
        assert_eq!(format_currency(27.5), "R$ 27,50");
        assert_eq!(format_currency(1234.56), "R$ 1.234,56");
        assert_eq!(format_currency(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_currency(-10.0), "-R$ 10,00");
        assert_eq!(format_currency(f64::NAN), "R$ 0,00");
    }

    #[test]
    fn test_format_document_cpf() {
        assert_eq!(format_document("12345678901"), "123.456.789-01");
        assert_eq!(format_document("123.456.789-01"), "123.456.789-01");
        assert_eq!(DocumentKind::detect("123.456.789-01"), Some(DocumentKind::Cpf));
    }

    #[test]
    fn test_format_document_cnpj() {
        assert_eq!(format_document("12345678000190"), "12.345.678/0001-90");
        assert_eq!(format_document("12345678000190999"), "12.345.678/0001-90");
        assert_eq!(DocumentKind::detect("12.345.678/0001-90"), Some(DocumentKind::Cnpj));
        assert_eq!(DocumentKind::Cnpj.label(), "CNPJ");
    }

    #[test]
    fn test_format_document_partial_input() {
        assert_eq!(format_document("123.45"), "12345");
        assert_eq!(format_document("1234567890123"), "1234567890123");
        assert_eq!(format_document(""), "");
        assert_eq!(DocumentKind::detect("12345"), None);
    }

    #[test]
    fn test_dates() {
        assert_eq!(format_date_br("2025-05-10"), "10/05/2025");
        assert_eq!(format_date_br("10/05/2025"), "10/05/2025");
        assert_eq!(format_date_br("amanhã"), "amanhã");

        let date = NaiveDate::from_ymd_opt(2025, 5, 10).unwrap();
        assert_eq!(parse_event_date("2025-05-10"), Some(date));
        assert_eq!(parse_event_date("10/05/2025"), Some(date));
        assert_eq!(parse_event_date("sábado"), None);
        assert_eq!(format_date_long(date), "10 de maio de 2025");
        assert_eq!(format_date_long(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()), "1 de março de 2024");
    }
}
