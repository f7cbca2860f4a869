use serde::{Deserialize, Serialize};

use super::resource::{
    name_or_placeholder, required_amount, required_text, DraftError, FieldKind, FormField,
    FormValues, Resource, ResourceKind,
};
use crate::utils::{format_currency, format_rate, Named};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewCategory {
    pub name: String,
}

const CATEGORY_NAME: FormField = FormField::required("name", "Category Name", FieldKind::Text);

impl Named for Category {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Resource for Category {
    type Draft = NewCategory;

    const KIND: ResourceKind = ResourceKind::Categories;
    const TITLE: &'static str = "Categories";
    const SINGULAR: &'static str = "Category";
    const COLLECTION_PATH: &'static str = "/api/Categories";

    fn id(&self) -> i64 {
        self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Category Name"]
    }

    fn item_path(id: i64) -> String {
        format!("{}/CategoryDetail/{}", Self::COLLECTION_PATH, id)
    }

    fn cells(&self) -> Vec<String> {
        vec![self.name.clone()]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![("Category ID", self.id.to_string()), ("Name", self.name.clone())]
    }

    fn form_fields() -> Vec<FormField> {
        vec![CATEGORY_NAME]
    }

    fn draft_from_form(values: &FormValues) -> Result<NewCategory, DraftError> {
        Ok(NewCategory {
            name: required_text(values, &CATEGORY_NAME)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Shipping options
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ShippingOption {
    pub id: i64,
    pub name: Option<String>,
    pub cost: f64,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewShippingOption {
    pub name: String,
    pub cost: f64,
}

const SHIPPING_NAME: FormField = FormField::required("name", "Shipping Name", FieldKind::Text);
const SHIPPING_COST: FormField = FormField::required("cost", "Cost", FieldKind::Number);

impl Named for ShippingOption {
    fn display_name(&self) -> &str {
        name_or_placeholder(&self.name)
    }
}

impl Resource for ShippingOption {
    type Draft = NewShippingOption;

    const KIND: ResourceKind = ResourceKind::Shipping;
    const TITLE: &'static str = "Shipping";
    const SINGULAR: &'static str = "Shipping Option";
    const COLLECTION_PATH: &'static str = "/api/Shipping";

    fn id(&self) -> i64 {
        self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Cost"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.display_name().to_string(), format_currency(self.cost)]
    }

    fn option_label(&self) -> String {
        format!("{} ({})", self.display_name(), format_currency(self.cost))
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Shipping ID", self.id.to_string()),
            ("Name", self.display_name().to_string()),
            ("Cost", format_currency(self.cost)),
        ]
    }

    fn form_fields() -> Vec<FormField> {
        vec![SHIPPING_NAME, SHIPPING_COST]
    }

    fn draft_from_form(values: &FormValues) -> Result<NewShippingOption, DraftError> {
        Ok(NewShippingOption {
            name: required_text(values, &SHIPPING_NAME)?,
            cost: required_amount(values, &SHIPPING_COST)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Taxation rates
// ---------------------------------------------------------------------------

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct TaxationRate {
    pub id: i64,
    pub name: Option<String>,
    pub rate: f64,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct NewTaxationRate {
    pub name: String,
    pub rate: f64,
}

const TAXATION_NAME: FormField = FormField::required("name", "Taxation Name", FieldKind::Text);
const TAXATION_RATE: FormField = FormField::required("rate", "Rate (%)", FieldKind::Number);

impl Named for TaxationRate {
    fn display_name(&self) -> &str {
        name_or_placeholder(&self.name)
    }
}

impl Resource for TaxationRate {
    type Draft = NewTaxationRate;

    const KIND: ResourceKind = ResourceKind::Taxation;
    const TITLE: &'static str = "Taxation";
    const SINGULAR: &'static str = "Taxation Rate";
    const COLLECTION_PATH: &'static str = "/api/Taxation";

    fn id(&self) -> i64 {
        self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Rate"]
    }

    fn cells(&self) -> Vec<String> {
        vec![self.display_name().to_string(), format_rate(self.rate)]
    }

    fn option_label(&self) -> String {
        format!("{} ({})", self.display_name(), format_rate(self.rate))
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Taxation ID", self.id.to_string()),
            ("Name", self.display_name().to_string()),
            ("Rate", format_rate(self.rate)),
        ]
    }

    fn form_fields() -> Vec<FormField> {
        vec![TAXATION_NAME, TAXATION_RATE]
    }

    fn draft_from_form(values: &FormValues) -> Result<NewTaxationRate, DraftError> {
        Ok(NewTaxationRate {
            name: required_text(values, &TAXATION_NAME)?,
            rate: required_amount(values, &TAXATION_RATE)?,
        })
    }
}
