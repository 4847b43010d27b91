// Portuguese cardinal numerals for 1..=999

const UNITS: [&str; 10] = ["", "um", "dois", "três", "quatro", "cinco", "seis", "sete", "oito", "nove"];
const TEENS: [&str; 10] = [
    "dez", "onze", "doze", "treze", "quatorze", "quinze", "dezesseis", "dezessete", "dezoito", "dezenove",
];
const TENS: [&str; 10] = [
    "", "", "vinte", "trinta", "quarenta", "cinquenta", "sessenta", "setenta", "oitenta", "noventa",
];
const HUNDREDS: [&str; 10] = [
    "", "cento", "duzentos", "trezentos", "quatrocentos", "quinhentos", "seiscentos", "setecentos", "oitocentos",
    "novecentos",
];

fn spell_below_hundred(n: u64) -> String {
    debug_assert!(n < 100);
    let n = n as usize;
    match n {
        10..=19 => TEENS[n - 10].to_string(),
        _ => {
            let (tens, units) = (n / 10, n % 10);
            match (tens, units) {
                (0, _) => UNITS[units].to_string(),
                (_, 0) => TENS[tens].to_string(),
                _ => format!("{} e {}", TENS[tens], UNITS[units]),
            }
        }
    }
}

/// Spells one three-digit group. Exactly 100 is "cem"; 101..=199 use "cento e".
/// Zero spells as the empty string.
pub fn spell_group(n: u64) -> String {
    debug_assert!(n < 1000);
    if n == 100 {
        return "cem".to_string();
    }

    let hundreds = (n / 100) as usize;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, 0) => String::new(),
        (0, _) => spell_below_hundred(rest),
        (_, 0) => HUNDREDS[hundreds].to_string(),
        _ => format!("{} e {}", HUNDREDS[hundreds], spell_below_hundred(rest)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_units_and_teens() {
        assert_eq!(spell_group(1), "um");
        assert_eq!(spell_group(3), "três");
        assert_eq!(spell_group(10), "dez");
        assert_eq!(spell_group(14), "quatorze");
        assert_eq!(spell_group(19), "dezenove");
    }

    #[test]
    fn test_tens() {
        assert_eq!(spell_group(20), "vinte");
        assert_eq!(spell_group(22), "vinte e dois");
        assert_eq!(spell_group(50), "cinquenta");
        assert_eq!(spell_group(99), "noventa e nove");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(spell_group(100), "cem");
        assert_eq!(spell_group(101), "cento e um");
        assert_eq!(spell_group(115), "cento e quinze");
        assert_eq!(spell_group(200), "duzentos");
        assert_eq!(spell_group(345), "trezentos e quarenta e cinco");
        assert_eq!(spell_group(500), "quinhentos");
        assert_eq!(spell_group(910), "novecentos e dez");
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(spell_group(0), "");
    }
}
