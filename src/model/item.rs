use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// A named, priced entry on a restaurant's menu.
///
/// Items are created by [`Restaurant::add_to_menu`](crate::model::Restaurant::add_to_menu)
/// and never change afterwards; there is no price update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: u32,
}

impl Item {
    /// Creates a new Item instance.
    ///
    /// # Arguments
    /// * `name` - Item name, matched exactly when removing or ordering
    /// * `price` - Item price in whole currency units
    pub fn new(name: impl Into<String>, price: u32) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> u32 {
        self.price
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.name, self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_display() {
        let item = Item::new("Sweet corn soup", 119);
        assert_eq!(item.to_string(), "Sweet corn soup:119");
    }

    #[test]
    fn test_item_deserializes_from_json() {
        let item: Item = serde_json::from_str(r#"{"name":"Sizzling brownie","price":319}"#).unwrap();
        assert_eq!(item, Item::new("Sizzling brownie", 319));
    }
}
