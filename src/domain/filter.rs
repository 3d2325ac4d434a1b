//! Catalog filtering by category substring and inclusive price range.

use super::{DomainError, FilterCriteria, ProductRecord};

/// Parse a price such as `"$50"` or `"€ 12.99"` into a number.
///
/// A single leading currency symbol is stripped. The remainder must be a finite,
/// non-negative decimal.
pub fn parse_price(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let amount = match chars.next() {
        Some(c) if !(c.is_ascii_digit() || matches!(c, '.' | '+' | '-')) => chars.as_str().trim(),
        _ => trimmed,
    };

    let value: f64 = amount
        .parse()
        .map_err(|_| format!("{:?} is not a number", amount))?;
    if !value.is_finite() {
        return Err(format!("{:?} is not a finite amount", amount));
    }
    if value < 0.0 {
        return Err(format!("{:?} is negative", amount));
    }
    Ok(value)
}

/// Return the records matching `criteria`, in input order.
///
/// Every record's price is checked, matching category or not; the first
/// unparseable price aborts the whole call.
pub fn filter_products<'a>(
    records: &'a [ProductRecord],
    criteria: &FilterCriteria,
) -> Result<Vec<&'a ProductRecord>, DomainError> {
    let needle = criteria.category.to_lowercase();
    let mut matches = Vec::new();

    for record in records {
        let price = parse_price(&record.price).map_err(|_| DomainError::PriceParse {
            product: record.name.clone(),
            raw: record.price.clone(),
        })?;
        let in_category = record.category.to_lowercase().contains(&needle);
        let in_range = criteria.min_price <= price && price <= criteria.max_price;
        if in_category && in_range {
            matches.push(record);
        }
    }

    Ok(matches)
}
