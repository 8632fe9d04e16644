//! Rendering of `validator` failures into a single stable message.

use validator::ValidationErrors;

/// Describe every failed field as `field: code`, sorted by field name so the
/// message is deterministic.
///
/// ```text
/// Fruit validation failed: color: required, name: length
/// ```
pub fn describe(entity: &str, errors: &ValidationErrors) -> String {
    let mut fields: Vec<(String, String)> = errors
        .field_errors()
        .into_iter()
        .map(|(field, errs)| {
            let codes: Vec<String> = errs.iter().map(|e| e.code.to_string()).collect();
            (field.to_string(), codes.join("/"))
        })
        .collect();
    fields.sort();

    let details: Vec<String> = fields
        .into_iter()
        .map(|(field, codes)| format!("{field}: {codes}"))
        .collect();

    format!("{entity} validation failed: {}", details.join(", "))
}
