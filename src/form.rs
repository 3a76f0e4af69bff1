//! Form Serialization
//!
//! Reads named fields out of a submitted form and shapes them into the
//! JSON bodies the backend expects.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

use crate::models::LossRecordPayload;

/// Field names of the loss record form
pub const LOSS_RECORD_FIELDS: &[&str] = &["item_name", "weight_grams", "reason_text"];
/// Field names of the registration form
pub const REGISTRATION_FIELDS: &[&str] = &["username", "email", "password", "password_confirm"];

/// Snapshot of a form's named values (unchecked radios are absent)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormFields(BTreeMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.0.insert(name.to_string(), value.to_string());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Read the given fields from a live form element
    pub fn read(form: &web_sys::HtmlFormElement, names: &[&str]) -> Self {
        let mut fields = Self::new();
        let data = match web_sys::FormData::new_with_form(form) {
            Ok(data) => data,
            Err(_) => {
                tracing::error!("could not read form data");
                return fields;
            }
        };
        for name in names {
            if let Some(value) = data.get(name).as_string() {
                fields.0.insert(name.to_string(), value);
            }
        }
        fields
    }

    /// Names in `required` that are absent or blank
    pub fn missing(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| self.get(name).map_or(true, |v| v.trim().is_empty()))
            .map(|name| name.to_string())
            .collect()
    }
}

/// Registration rejected before any request is made
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationError {
    PasswordMismatch,
}

/// Leading-number parse: `"150.5g"` -> 150.5, `"abc"` -> None
pub fn parse_leading_float(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => { pos += 1; true }
        Some(b'+') => { pos += 1; false }
        _ => false,
    };
    if s[pos..].starts_with("Infinity") {
        return None;
    }

    let take_digits = |from: usize| {
        let mut end = from;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        end
    };

    let int_end = take_digits(pos);
    let int_part = &s[pos..int_end];
    pos = int_end;

    let mut frac_part = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_end = take_digits(pos + 1);
        frac_part = &s[pos + 1..frac_end];
        pos = frac_end;
    }
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }

    // Exponent only counts when it has digits
    let mut exponent = "";
    if pos < bytes.len() && matches!(bytes[pos], b'e' | b'E') {
        let mut exp_start = pos + 1;
        if exp_start < bytes.len() && matches!(bytes[exp_start], b'+' | b'-') {
            exp_start += 1;
        }
        let exp_end = take_digits(exp_start);
        if exp_end > exp_start {
            exponent = &s[pos..exp_end];
        }
    }

    let normalized = format!(
        "{}{}.{}{}",
        if negative { "-" } else { "" },
        if int_part.is_empty() { "0" } else { int_part },
        if frac_part.is_empty() { "0" } else { frac_part },
        exponent
    );
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Body for `POST /api/add_loss_record`
pub fn loss_record_payload(fields: &FormFields, user_id: u32) -> LossRecordPayload {
    LossRecordPayload {
        user_id,
        item_name: fields.get("item_name").unwrap_or_default().to_string(),
        weight_grams: fields.get("weight_grams").and_then(parse_leading_float),
        reason_text: fields.get("reason_text").unwrap_or_default().to_string(),
    }
}

/// Body for `POST /api/register_user`: every field except the confirmation
pub fn registration_payload(fields: &FormFields) -> Result<Map<String, Value>, RegistrationError> {
    if fields.get("password") != fields.get("password_confirm") {
        return Err(RegistrationError::PasswordMismatch);
    }
    Ok(fields
        .0
        .iter()
        .filter(|(name, _)| name.as_str() != "password_confirm")
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect())
}
