//! Form decoding helpers and per-field validation errors

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationErrors};

/// Validation messages keyed by form field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field error, e.g. a failed credential check
    pub fn single(field: &str, message: &str) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    /// Keeps the first message recorded for a field
    pub fn insert(&mut self, field: &str, message: &str) {
        self.0
            .entry(field.to_string())
            .or_insert_with(|| message.to_string());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when nothing was recorded
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            if let Some(err) = errs.first() {
                let message = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value ({})", err.code));
                fields.insert(&field.to_string(), &message);
            }
        }
        fields
    }
}

/// Run the derived rule set of a form and collect its messages per field
pub fn validate_form<T: Validate>(form: &T) -> Result<(), FieldErrors> {
    form.validate().map_err(FieldErrors::from)
}

/// HTML checkboxes send `on` when ticked and nothing at all otherwise
pub fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(matches!(
        value.as_deref().map(str::trim),
        Some("on") | Some("true") | Some("1")
    ))
}

/// Treats an empty `<select>` value as "not chosen"
pub fn optional_id<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid id: {}", raw))),
    }
}
