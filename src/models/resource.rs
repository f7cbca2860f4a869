// ============================================================================
// RESOURCE - Contract shared by every record managed from the dashboard
// ============================================================================
// Categories, shipping options, taxation rates and stock items all follow the
// same screen pattern (list, filter, create modal, detail). The views are
// generic over this trait; each model only describes its columns, its form
// and its endpoints.
// ============================================================================

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::utils::Named;

/// Sections of the dashboard backed by a REST collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Categories,
    Shipping,
    Taxation,
    Stock,
}

/// Input widget used for a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    TextArea,
    Number,
    Checkbox,
    /// Drop-down filled from another collection
    Select(ResourceKind),
    /// Image files, kept as data URLs
    Images,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FormField {
    pub const fn required(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind, required: true }
    }

    pub const fn optional(key: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self { key, label, kind, required: false }
    }
}

/// Raw values typed into a create form, keyed by `FormField::key`
pub type FormValues = HashMap<&'static str, String>;

/// Entry of a `FieldKind::Select` drop-down
#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub id: i64,
    pub label: String,
}

impl SelectOption {
    pub fn of<R: Resource>(item: &R) -> Self {
        Self {
            id: item.id(),
            label: item.option_label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be a number")]
    NotANumber(&'static str),
    #[error("{0} cannot be negative")]
    Negative(&'static str),
}

pub trait Resource: Named + Clone + PartialEq + DeserializeOwned + 'static {
    /// Payload sent to the create endpoint
    type Draft: Serialize;

    const KIND: ResourceKind;
    /// Plural title, e.g. "Categories"
    const TITLE: &'static str;
    /// Singular label, e.g. "Category"
    const SINGULAR: &'static str;
    /// Collection path relative to the API base URL
    const COLLECTION_PATH: &'static str;

    fn id(&self) -> i64;

    fn columns() -> &'static [&'static str];

    /// One display string per entry of `columns()`
    fn cells(&self) -> Vec<String>;

    /// Label/value pairs shown on the detail page
    fn details(&self) -> Vec<(&'static str, String)>;

    /// Text shown when the record is offered in a drop-down
    fn option_label(&self) -> String {
        self.display_name().to_string()
    }

    /// Image shown above the detail rows, as an `<img src>` value
    fn image_src(&self) -> Option<String> {
        None
    }

    fn form_fields() -> Vec<FormField>;

    fn draft_from_form(values: &FormValues) -> Result<Self::Draft, DraftError>;

    fn item_path(id: i64) -> String {
        format!("{}/{}", Self::COLLECTION_PATH, id)
    }

    fn create_path() -> String {
        Self::COLLECTION_PATH.to_string()
    }
}

// Form parsing helpers shared by the implementations

pub(crate) fn required_text(values: &FormValues, field: &FormField) -> Result<String, DraftError> {
    optional_text(values, field.key).ok_or(DraftError::Missing(field.label))
}

pub(crate) fn optional_text(values: &FormValues, key: &str) -> Option<String> {
    values
        .get(key)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

pub(crate) fn required_amount(values: &FormValues, field: &FormField) -> Result<f64, DraftError> {
    optional_amount(values, field)?.ok_or(DraftError::Missing(field.label))
}

pub(crate) fn optional_amount(values: &FormValues, field: &FormField) -> Result<Option<f64>, DraftError> {
    let Some(raw) = optional_text(values, field.key) else {
        return Ok(None);
    };
    let amount: f64 = raw.parse().map_err(|_| DraftError::NotANumber(field.label))?;
    if !amount.is_finite() {
        return Err(DraftError::NotANumber(field.label));
    }
    if amount < 0.0 {
        return Err(DraftError::Negative(field.label));
    }
    Ok(Some(amount))
}

pub(crate) fn optional_id(values: &FormValues, field: &FormField) -> Result<Option<i64>, DraftError> {
    let Some(raw) = optional_text(values, field.key) else {
        return Ok(None);
    };
    let id: i64 = raw.parse().map_err(|_| DraftError::NotANumber(field.label))?;
    if id < 0 {
        return Err(DraftError::Negative(field.label));
    }
    Ok(Some(id))
}

/// Appends to a multi-value field (one entry per line)
pub fn push_listed(values: &mut FormValues, key: &'static str, entry: String) {
    let slot = values.entry(key).or_default();
    if !slot.is_empty() {
        slot.push('\n');
    }
    slot.push_str(&entry);
}

pub(crate) fn listed(values: &FormValues, key: &str) -> Vec<String> {
    values
        .get(key)
        .map(|value| {
            value
                .lines()
                .map(str::trim)
                .filter(|entry| !entry.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

pub(crate) fn checkbox(values: &FormValues, key: &str) -> bool {
    values.get(key).map(|value| value == "true").unwrap_or(false)
}

/// Placeholder for records the API returns without a name
pub(crate) fn name_or_placeholder(name: &Option<String>) -> &str {
    name.as_deref().unwrap_or("(unnamed)")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE: FormField = FormField::required("price", "Price", FieldKind::Number);

    fn values(pairs: &[(&'static str, &str)]) -> FormValues {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn amounts_are_trimmed_and_parsed() {
        let form = values(&[("price", " 12.5 ")]);
        assert_eq!(required_amount(&form, &PRICE), Ok(12.5));
    }

    #[test]
    fn blank_required_amount_is_missing() {
        let form = values(&[("price", "  ")]);
        assert_eq!(required_amount(&form, &PRICE), Err(DraftError::Missing("Price")));
    }

    #[test]
    fn negative_and_garbage_amounts_are_rejected() {
        assert_eq!(
            required_amount(&values(&[("price", "-1")]), &PRICE),
            Err(DraftError::Negative("Price"))
        );
        assert_eq!(
            required_amount(&values(&[("price", "ten")]), &PRICE),
            Err(DraftError::NotANumber("Price"))
        );
        assert_eq!(
            required_amount(&values(&[("price", "NaN")]), &PRICE),
            Err(DraftError::NotANumber("Price"))
        );
    }

    #[test]
    fn checkbox_only_accepts_true() {
        assert!(checkbox(&values(&[("sale", "true")]), "sale"));
        assert!(!checkbox(&values(&[("sale", "on")]), "sale"));
        assert!(!checkbox(&values(&[]), "sale"));
    }

    #[test]
    fn listed_values_keep_insertion_order() {
        let mut form = values(&[]);
        assert!(listed(&form, "images").is_empty());
        push_listed(&mut form, "images", "data:image/png;base64,AAA".into());
        push_listed(&mut form, "images", "data:image/png;base64,BBB".into());
        assert_eq!(
            listed(&form, "images"),
            vec!["data:image/png;base64,AAA".to_string(), "data:image/png;base64,BBB".to_string()]
        );
    }

    #[test]
    fn draft_errors_read_as_sentences() {
        assert_eq!(DraftError::Missing("Name").to_string(), "Name is required");
        assert_eq!(DraftError::NotANumber("Cost").to_string(), "Cost must be a number");
    }
}
