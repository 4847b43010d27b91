//! Brazilian Portuguese spelling of Real amounts ("valor por extenso"),
//! as printed on payment receipts.
pub mod numerals;

use crate::error::EngineError;
use numerals::spell_group;

/// Smallest amount that can no longer be spelled.
pub const MAX_SPELLABLE_AMOUNT: f64 = 1_000_000_000.0;

/// Spells `amount` in Reais and centavos, e.g. 1500.50 becomes
/// "mil e quinhentos reais e cinquenta centavos".
///
/// The amount is rounded to the centavo first. A zero integer part drops
/// the Real clause, so 0.50 spells as "cinquenta centavos"; only a total of
/// zero spells as "zero". Negative, non-finite and amounts of one billion or
/// more are rejected with [`EngineError::OutOfRange`].
pub fn number_to_words(amount: f64) -> Result<String, EngineError> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(EngineError::OutOfRange(amount));
    }
    let total_cents = (amount * 100.0).round();
    if total_cents >= MAX_SPELLABLE_AMOUNT * 100.0 {
        return Err(EngineError::OutOfRange(amount));
    }

    let total_cents = total_cents as u64;
    let reais = total_cents / 100;
    let centavos = total_cents % 100;

    if reais == 0 && centavos == 0 {
        return Ok("zero".to_string());
    }

    let mut clauses = Vec::with_capacity(2);
    if reais > 0 {
        let noun = if reais == 1 { "real" } else { "reais" };
        clauses.push(format!("{} {}", spell_integer(reais), noun));
    }
    if centavos > 0 {
        let noun = if centavos == 1 { "centavo" } else { "centavos" };
        clauses.push(format!("{} {}", spell_group(centavos), noun));
    }

    let words = clauses.join(" e ");
    tracing::debug!(amount, words = %words, "Spelled amount");
    Ok(words)
}

// Spells 1..1_000_000_000 by scale groups. "e" joins only the last
// populated group to the ones before it.
fn spell_integer(n: u64) -> String {
    let millions = n / 1_000_000;
    let thousands = (n / 1_000) % 1_000;
    let units = n % 1_000;

    let mut groups = Vec::with_capacity(3);
    if millions > 0 {
        let scale = if millions == 1 { "milhão" } else { "milhões" };
        groups.push(format!("{} {}", spell_group(millions), scale));
    }
    if thousands > 0 {
        if thousands == 1 {
            groups.push("mil".to_string());
        } else {
            groups.push(format!("{} mil", spell_group(thousands)));
        }
    }
    if units > 0 {
        groups.push(spell_group(units));
    }

    match groups.split_last() {
        Some((last, [])) => last.clone(),
        Some((last, leading)) => format!("{} e {}", leading.join(" "), last),
        None => String::new(),
    }
}
