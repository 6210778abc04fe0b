use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A catalog entry. `id` is assigned by the repository on creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Option<i64>,
    pub item_name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl Item {
    pub fn new(item_name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            id: None,
            item_name: Some(item_name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    /// Overwrites every mutable field with the update payload, including
    /// fields the payload leaves absent.
    pub fn apply(&mut self, update_param: &ItemUpdateDto) {
        self.item_name = update_param.item_name.clone();
        self.price = update_param.price;
        self.quantity = update_param.quantity;
    }
}

/// Replacement values for an existing item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdateDto {
    pub item_name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl ItemUpdateDto {
    pub fn new(item_name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            item_name: Some(item_name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }
}

/// Search filter for listing items. Absent fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSearchCond {
    pub item_name: Option<String>,
    pub max_price: Option<i32>,
}

impl ItemSearchCond {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item_name(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = Some(item_name.into());
        self
    }

    pub fn with_max_price(mut self, max_price: i32) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// The name filter, with an empty string treated as no filter.
    pub fn name_filter(&self) -> Option<&str> {
        self.item_name.as_deref().filter(|name| !name.is_empty())
    }

    pub fn is_unfiltered(&self) -> bool {
        self.name_filter().is_none() && self.max_price.is_none()
    }

    /// In-memory form of the listing predicate.
    ///
    /// Items with no name or no price never satisfy a present filter on that
    /// field, matching how SQL treats NULL in `instr(..) > 0` and `<=`.
    pub fn matches(&self, item: &Item) -> bool {
        let name_ok = match self.name_filter() {
            Some(name) => item
                .item_name
                .as_deref()
                .is_some_and(|item_name| item_name.contains(name)),
            None => true,
        };
        let price_ok = match self.max_price {
            Some(max_price) => item.price.is_some_and(|price| price <= max_price),
            None => true,
        };
        name_ok && price_ok
    }
}
