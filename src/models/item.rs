use serde::{Deserialize, Serialize};

use super::catalog::{Category, TaxationRate};
use super::resource::{
    checkbox, listed, optional_amount, optional_id, optional_text, required_text, DraftError, FieldKind,
    FormField, FormValues, Resource, ResourceKind,
};
use crate::utils::{format_currency, format_rate, format_timestamp, Named};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PriceItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub price: f64,
    #[serde(default)]
    pub is_sale: bool,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ItemImage {
    #[serde(default)]
    pub id: Option<i64>,
    pub base64_data: String,
    #[serde(default)]
    pub is_thumbnail: bool,
    #[serde(default)]
    pub display_order: Option<i32>,
}

/// Stock item as returned by `/api/Items`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct StockItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub taxation_id: Option<i64>,
    #[serde(default)]
    pub taxation: Option<TaxationRate>,
    #[serde(default)]
    pub price_items: Vec<PriceItem>,
    #[serde(default, alias = "itemImages")]
    pub images: Vec<ItemImage>,
    #[serde(default, alias = "itemCategories")]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub stocks: Option<i64>,
}

impl StockItem {
    /// Sale price wins over the regular one when both exist
    pub fn current_price(&self) -> Option<&PriceItem> {
        self.price_items
            .iter()
            .find(|p| p.is_sale)
            .or_else(|| self.price_items.first())
    }

    pub fn thumbnail(&self) -> Option<&ItemImage> {
        self.images
            .iter()
            .find(|img| img.is_thumbnail)
            .or_else(|| self.images.first())
    }

    /// Thumbnail as a data URL; bare base64 payloads are assumed to be JPEG
    pub fn thumbnail_src(&self) -> Option<String> {
        self.thumbnail().map(|img| {
            if img.base64_data.starts_with("data:") {
                img.base64_data.clone()
            } else {
                format!("data:image/jpeg;base64,{}", img.base64_data)
            }
        })
    }

    fn price_label(&self) -> String {
        match self.current_price() {
            Some(p) if p.is_sale => format!("{} (sale)", format_currency(p.price)),
            Some(p) => format_currency(p.price),
            None => "-".to_string(),
        }
    }

    fn taxation_label(&self) -> String {
        match (&self.taxation, self.taxation_id) {
            (Some(tax), _) => format!("{} ({})", tax.display_name(), format_rate(tax.rate)),
            (None, Some(id)) => format!("#{}", id),
            (None, None) => "-".to_string(),
        }
    }
}

/// Payload of `POST /api/Items/CreateWithPrices`
#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewStockItem {
    pub name: String,
    pub description: Option<String>,
    pub taxation_id: Option<i64>,
    pub price_items: Option<Vec<NewPriceItem>>,
    pub images: Option<Vec<NewItemImage>>,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewItemImage {
    pub base64_data: String,
    pub is_thumbnail: bool,
    pub display_order: i32,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewPriceItem {
    pub price: f64,
    pub is_sale: bool,
}

const ITEM_NAME: FormField = FormField::required("name", "Item Name", FieldKind::Text);
const ITEM_DESCRIPTION: FormField = FormField::optional("description", "Description", FieldKind::TextArea);
const ITEM_TAXATION: FormField =
    FormField::optional("taxationId", "Taxation", FieldKind::Select(ResourceKind::Taxation));
const ITEM_PRICE: FormField = FormField::optional("price", "Price", FieldKind::Number);
const ITEM_SALE: FormField = FormField::optional("isSale", "On sale", FieldKind::Checkbox);
const ITEM_IMAGES: FormField = FormField::optional("images", "Images", FieldKind::Images);

impl Named for StockItem {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Resource for StockItem {
    type Draft = NewStockItem;

    const KIND: ResourceKind = ResourceKind::Stock;
    const TITLE: &'static str = "Stock";
    const SINGULAR: &'static str = "Item";
    const COLLECTION_PATH: &'static str = "/api/Items";

    fn id(&self) -> i64 {
        self.id
    }

    fn columns() -> &'static [&'static str] {
        &["Name", "Price", "Taxation", "Stock"]
    }

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.price_label(),
            self.taxation_label(),
            self.stocks.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string()),
        ]
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        let categories = if self.categories.is_empty() {
            "-".to_string()
        } else {
            self.categories
                .iter()
                .map(|c| c.name.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        };
        vec![
            ("Item ID", self.id.to_string()),
            ("Name", self.name.clone()),
            ("Description", self.description.clone().unwrap_or_else(|| "-".to_string())),
            ("Price", self.price_label()),
            ("Taxation", self.taxation_label()),
            ("Categories", categories),
            ("Stock", self.stocks.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())),
            ("Images", self.images.len().to_string()),
            (
                "Created",
                self.created_at
                    .as_deref()
                    .map(format_timestamp)
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]
    }

    fn image_src(&self) -> Option<String> {
        self.thumbnail_src()
    }

    fn form_fields() -> Vec<FormField> {
        vec![ITEM_NAME, ITEM_DESCRIPTION, ITEM_TAXATION, ITEM_PRICE, ITEM_SALE, ITEM_IMAGES]
    }

    fn draft_from_form(values: &FormValues) -> Result<NewStockItem, DraftError> {
        let price_items = optional_amount(values, &ITEM_PRICE)?.map(|price| {
            vec![NewPriceItem {
                price,
                is_sale: checkbox(values, ITEM_SALE.key),
            }]
        });
        // First image is the thumbnail; display order is 1-based
        let images: Vec<NewItemImage> = listed(values, ITEM_IMAGES.key)
            .into_iter()
            .enumerate()
            .map(|(index, base64_data)| NewItemImage {
                base64_data,
                is_thumbnail: index == 0,
                display_order: index as i32 + 1,
            })
            .collect();
        Ok(NewStockItem {
            name: required_text(values, &ITEM_NAME)?,
            description: optional_text(values, ITEM_DESCRIPTION.key),
            taxation_id: optional_id(values, &ITEM_TAXATION)?,
            price_items,
            images: (!images.is_empty()).then_some(images),
        })
    }

    fn create_path() -> String {
        format!("{}/CreateWithPrices", Self::COLLECTION_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resource::push_listed;

    fn form(pairs: &[(&'static str, &str)]) -> FormValues {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn item_decodes_with_sparse_fields() {
        let item: StockItem = serde_json::from_str(
            r#"{"id":7,"name":"Lamp","priceItems":[{"price":10.0},{"price":8.0,"isSale":true}]}"#,
        )
        .unwrap();
        assert_eq!(item.current_price().map(|p| p.price), Some(8.0));
        assert_eq!(item.cells()[1], "$8.00 (sale)");
        assert!(item.thumbnail().is_none());
    }

    #[test]
    fn thumbnail_is_exposed_as_data_url() {
        let item: StockItem = serde_json::from_str(
            r#"{"id":2,"name":"Vase","images":[{"base64Data":"AAA"},{"base64Data":"data:image/png;base64,BBB","isThumbnail":true}]}"#,
        )
        .unwrap();
        assert_eq!(item.image_src().as_deref(), Some("data:image/png;base64,BBB"));

        let plain: StockItem =
            serde_json::from_str(r#"{"id":3,"name":"Cup","images":[{"base64Data":"AAA"}]}"#).unwrap();
        assert_eq!(plain.image_src().as_deref(), Some("data:image/jpeg;base64,AAA"));
    }

    #[test]
    fn detail_payload_names_are_accepted() {
        let item: StockItem = serde_json::from_str(
            r#"{"id":9,"name":"Chair","itemCategories":[{"id":1,"name":"Home"}],"itemImages":[{"base64Data":"AAA","isThumbnail":true}]}"#,
        )
        .unwrap();
        assert_eq!(item.categories, vec![Category { id: 1, name: "Home".into() }]);
        assert_eq!(item.images.len(), 1);
        assert_eq!(item.image_src().as_deref(), Some("data:image/jpeg;base64,AAA"));
        assert!(item.details().contains(&("Categories", "Home".to_string())));
    }

    #[test]
    fn dropped_images_become_ordered_payload() {
        let mut values = form(&[("name", "Lamp")]);
        push_listed(&mut values, "images", "data:image/png;base64,AAA".into());
        push_listed(&mut values, "images", "data:image/png;base64,BBB".into());
        let draft = StockItem::draft_from_form(&values).unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["images"][0]["base64Data"], "data:image/png;base64,AAA");
        assert_eq!(json["images"][0]["isThumbnail"], true);
        assert_eq!(json["images"][1]["isThumbnail"], false);
        assert_eq!(json["images"][1]["displayOrder"], 2);
    }

    #[test]
    fn taxation_is_picked_from_a_drop_down() {
        let field = StockItem::form_fields()
            .into_iter()
            .find(|field| field.key == "taxationId")
            .unwrap();
        assert_eq!(field.kind, FieldKind::Select(ResourceKind::Taxation));
    }

    #[test]
    fn draft_without_price_sends_null_price_items() {
        let draft = StockItem::draft_from_form(&form(&[("name", "Lamp"), ("price", "")])).unwrap();
        assert_eq!(draft.price_items, None);
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json["priceItems"].is_null());
        assert!(json["images"].is_null());
        assert_eq!(json["name"], "Lamp");
    }

    #[test]
    fn draft_with_price_carries_sale_flag() {
        let draft = StockItem::draft_from_form(&form(&[
            ("name", "Lamp"),
            ("price", "19.99"),
            ("isSale", "true"),
            ("taxationId", "2"),
        ]))
        .unwrap();
        assert_eq!(draft.taxation_id, Some(2));
        assert_eq!(draft.price_items, Some(vec![NewPriceItem { price: 19.99, is_sale: true }]));
    }

    #[test]
    fn items_are_created_through_the_prices_endpoint() {
        assert_eq!(StockItem::create_path(), "/api/Items/CreateWithPrices");
        assert_eq!(StockItem::item_path(4), "/api/Items/4");
    }

    #[test]
    fn taxation_label_prefers_embedded_rate() {
        let mut item: StockItem = serde_json::from_str(r#"{"id":1,"name":"Mug","taxationId":3}"#).unwrap();
        assert_eq!(item.cells()[2], "#3");
        item.taxation = Some(TaxationRate { id: 3, name: Some("VAT".into()), rate: 20.0 });
        assert_eq!(item.cells()[2], "VAT (20%)");
    }
}
