//! Field values for a new recurring order, derived from a sale line.
//!
//! Pure functions: no lookups, no side effects. The caller resolves the
//! product's recurring template beforehand.

use fieldservice_core::{DomainError, DomainResult};
use fieldservice_sales::ServiceLine;

use crate::order::RecurringValues;
use crate::template::RecurringTemplate;

/// Line name, followed by the template description on a new line when the
/// template has one.
pub fn compose_description(line_name: &str, template: Option<&RecurringTemplate>) -> String {
    match template.and_then(|t| t.description.as_deref()) {
        Some(extra) if !extra.is_empty() => format!("{line_name}\n {extra}"),
        _ => line_name.to_string(),
    }
}

/// Derive the values of the recurring order generated for `line`.
///
/// The product's own order template wins over the recurring template's.
pub fn derive_values(line: &ServiceLine, template: Option<&RecurringTemplate>) -> RecurringValues {
    RecurringValues {
        location_id: line.order.location_id,
        start_date: line.order.expected_date,
        template_id: line.product.recurring_template_id,
        description: compose_description(&line.line.name, template),
        max_orders: template.map(|t| t.max_orders).unwrap_or(0),
        frequency_set_id: template.and_then(|t| t.frequency_set_id),
        order_template_id: line
            .product
            .order_template_id
            .or_else(|| template.and_then(|t| t.order_template_id)),
        sale_line_id: Some(line.id()),
        company_id: line.line.company_id,
    }
}

/// [`derive_values`] for callers holding a batch that must contain exactly one line.
pub fn derive_single(
    lines: &[ServiceLine],
    template: Option<&RecurringTemplate>,
) -> DomainResult<RecurringValues> {
    match lines {
        [line] => Ok(derive_values(line, template)),
        _ => Err(DomainError::precondition(format!(
            "expected singleton sale line, got {}",
            lines.len()
        ))),
    }
}
