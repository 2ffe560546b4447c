use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use itemstore_core::{DomainError, DomainResult, ValueObject};

/// Field names of the canonical item shape, in serialization order.
pub const ITEM_FIELDS: [&str; 3] = ["name", "description", "price"];

/// The sole resource type: a named, described, priced item.
///
/// Items carry no identity; the store keys them by `ItemId`. Every `Item` that exists
/// has passed [`Item::new`], including ones built by deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawItem")]
pub struct Item {
    name: String,
    description: String,
    price: f64,
}

/// Wire shape of an item before validation.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct RawItem {
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) price: f64,
}

impl TryFrom<RawItem> for Item {
    type Error = DomainError;

    fn try_from(raw: RawItem) -> Result<Self, Self::Error> {
        Item::new(raw.name, raw.description, raw.price)
    }
}

impl ValueObject for Item {}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> DomainResult<Self> {
        if !price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }

        Ok(Self {
            name: name.into(),
            description: description.into(),
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// The item's full field set keyed by field name.
    pub fn to_fields(&self) -> Map<String, JsonValue> {
        let mut fields = Map::with_capacity(ITEM_FIELDS.len());
        fields.insert("name".to_string(), JsonValue::from(self.name.clone()));
        fields.insert("description".to_string(), JsonValue::from(self.description.clone()));
        fields.insert("price".to_string(), JsonValue::from(self.price));
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_rejects_non_finite_price() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Item::new("Pen", "Blue pen", price).unwrap_err();
            assert!(matches!(err, DomainError::Validation(_)));
        }
    }

    #[test]
    fn serializes_to_flat_object() {
        let item = Item::new("Pen", "Blue pen", 1.5).unwrap();
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"name": "Pen", "description": "Blue pen", "price": 1.5})
        );
    }

    #[test]
    fn deserialize_accepts_integer_price() {
        let item: Item =
            serde_json::from_value(json!({"name": "Pen", "description": "Blue pen", "price": 2}))
                .unwrap();
        assert_eq!(item.price(), 2.0);
    }

    #[test]
    fn deserialize_requires_every_field() {
        let err = serde_json::from_value::<Item>(json!({"name": "Pen", "price": 1.5})).unwrap_err();
        assert!(err.to_string().contains("description"));
    }

    #[test]
    fn deserialize_rejects_unknown_fields_and_wrong_types() {
        assert!(
            serde_json::from_value::<Item>(
                json!({"name": "Pen", "description": "Blue pen", "price": 1.5, "color": "blue"})
            )
            .is_err()
        );
        assert!(
            serde_json::from_value::<Item>(
                json!({"name": "Pen", "description": "Blue pen", "price": "cheap"})
            )
            .is_err()
        );
    }

    #[test]
    fn to_fields_covers_the_canonical_shape() {
        let item = Item::new("Pen", "Blue pen", 1.5).unwrap();
        let fields = item.to_fields();
        let keys: Vec<&str> = fields.keys().map(String::as_str).collect();
        for name in ITEM_FIELDS {
            assert!(keys.contains(&name), "missing {name}");
        }
        assert_eq!(fields.len(), ITEM_FIELDS.len());
    }
}
