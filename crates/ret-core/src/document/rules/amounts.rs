//! Amount extraction and BR number formatting.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::amount_patterns;
use super::{ExtractionMatch, FieldExtractor};
use crate::error::ExtractionError;

/// Amount field extractor.
///
/// Runs the `R$`, `€` and bare patterns over the same text one after the
/// other, so a prefixed amount is usually reported twice.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for pattern in amount_patterns() {
            for caps in pattern.captures_iter(text) {
                let Some(raw) = caps.get(1) else { continue };

                match normalize(raw.as_str()) {
                    Ok(amount) if amount > Decimal::ZERO => {
                        results.push(
                            ExtractionMatch::new(amount, raw.as_str())
                                .with_position(raw.start(), raw.end()),
                        );
                    }
                    Ok(_) => {}
                    Err(e) => tracing::trace!("Discarding amount candidate: {}", e),
                }
            }
        }

        results
    }
}

/// Extract every positive amount from text, in pattern-then-occurrence order.
pub fn extract_amounts(text: &str) -> Vec<Decimal> {
    AmountExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect()
}

/// Parse a BR-formatted numeral (e.g., "1.234,56").
///
/// Every period is dropped as a thousands separator and the comma becomes
/// the decimal point.
pub fn normalize(raw: &str) -> Result<Decimal, ExtractionError> {
    let canonical = raw.replace('.', "").replace(',', ".");

    Decimal::from_str(&canonical).map_err(|_| ExtractionError::Parse {
        field: "amount".to_string(),
        value: raw.to_string(),
    })
}

/// Format amount in BR style (1.234,56).
pub fn format_br_amount(amount: Decimal) -> String {
    let s = format!("{:.2}", amount.abs());
    let Some((integer_part, decimal_part)) = s.split_once('.') else {
        return s;
    };

    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    if amount.is_sign_negative() && !amount.is_zero() {
        formatted.push('-');
    }

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    format!("{},{}", formatted, decimal_part)
}
