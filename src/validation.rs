//! Validation Error Rendering
//!
//! Turns the `details` of a 422 body into `[field.path]: message` lines,
//! preserving server order.

use crate::models::{LocSegment, ValidationDetail};

/// Label used when the server gives no location
pub const UNKNOWN_FIELD: &str = "不明なフィールド";

/// Dotted join of location segments, or [`UNKNOWN_FIELD`]
pub fn field_path(loc: Option<&[LocSegment]>) -> String {
    match loc {
        Some(segments) if !segments.is_empty() => segments
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("."),
        _ => UNKNOWN_FIELD.to_string(),
    }
}

pub fn format_validation_errors(details: &[ValidationDetail]) -> Vec<String> {
    details
        .iter()
        .map(|detail| format!("[{}]: {}", field_path(detail.loc.as_deref()), detail.msg))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(loc: Option<Vec<LocSegment>>, msg: &str) -> ValidationDetail {
        ValidationDetail { loc, msg: msg.to_string() }
    }

    #[test]
    fn test_one_line_per_detail_in_order() {
        let details = vec![
            detail(Some(vec![LocSegment::Name("weight_grams".into())]), "Input should be a valid number"),
            detail(Some(vec![LocSegment::Name("items".into()), LocSegment::Index(2), LocSegment::Name("name".into())]), "required"),
            detail(Some(vec![LocSegment::Name("reason_text".into())]), "invalid reason"),
        ];
        let lines = format_validation_errors(&details);
        assert_eq!(
            lines,
            vec![
                "[weight_grams]: Input should be a valid number",
                "[items.2.name]: required",
                "[reason_text]: invalid reason",
            ]
        );
    }

    #[test]
    fn test_missing_or_empty_loc_uses_fallback() {
        let lines = format_validation_errors(&[detail(None, "a"), detail(Some(vec![]), "b")]);
        assert_eq!(lines[0], format!("[{}]: a", UNKNOWN_FIELD));
        assert_eq!(lines[1], format!("[{}]: b", UNKNOWN_FIELD));
    }

    #[test]
    fn test_empty_details_render_nothing() {
        assert!(format_validation_errors(&[]).is_empty());
    }
}
