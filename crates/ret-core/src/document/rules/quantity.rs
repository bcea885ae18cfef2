//! Quantity extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::QUANTITY;
use super::{ExtractionMatch, FieldExtractor};

/// Extracts the number following a `QT` or `Quantidade` label.
pub struct QuantityExtractor;

impl QuantityExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuantityExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for QuantityExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        // Only the first labelled value counts, even if it fails to parse.
        let caps = QUANTITY.captures(text)?;
        parse_capture(&caps)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        QUANTITY
            .captures_iter(text)
            .filter_map(|caps| parse_capture(&caps))
            .collect()
    }
}

fn parse_capture(caps: &regex::Captures<'_>) -> Option<ExtractionMatch<Decimal>> {
    let raw = caps.get(1)?;
    let value = Decimal::from_str(&raw.as_str().replace(',', ".")).ok()?;

    Some(ExtractionMatch::new(value, &caps[0]).with_position(raw.start(), raw.end()))
}

/// Extract the first quantity from text.
pub fn extract_quantity(text: &str) -> Option<Decimal> {
    QuantityExtractor::new().extract(text).map(|m| m.value)
}
