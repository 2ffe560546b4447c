//! Partial updates: sparse field overrides merged onto an existing item.
//!
//! A patch is an untyped `field name -> raw JSON value` mapping. It is applied by
//! overwriting the named fields in the existing item's full field set and then
//! validating the merged result against the item shape exactly once.

use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};

use itemstore_core::{DomainError, DomainResult};

use crate::item::{ITEM_FIELDS, Item, RawItem};

/// Sparse set of field overrides for an [`Item`].
///
/// Deserializes from any JSON object; non-object bodies are rejected by serde.
/// Keys and value types are only checked when the patch is applied.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct ItemPatch {
    fields: Map<String, JsonValue>,
}

impl ItemPatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style override of a single field.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names this patch overrides.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Merge this patch onto `item`, returning the validated result.
    ///
    /// Fields absent from the patch keep their current values. Unknown keys and values
    /// of the wrong type fail with `DomainError::Validation`; `item` is never modified.
    pub fn apply_to(&self, item: &Item) -> DomainResult<Item> {
        let unknown: Vec<&str> = self
            .field_names()
            .filter(|name| !ITEM_FIELDS.contains(name))
            .collect();
        if !unknown.is_empty() {
            return Err(DomainError::validation(format!(
                "unknown field(s): {}",
                unknown.join(", ")
            )));
        }

        let mut merged = item.to_fields();
        for (name, value) in &self.fields {
            merged.insert(name.clone(), value.clone());
        }

        let raw: RawItem = serde_json::from_value(JsonValue::Object(merged))
            .map_err(|e| DomainError::validation(e.to_string()))?;
        Item::try_from(raw)
    }
}
