use axum::body::Bytes;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{MenuError, Result};

/// Menu as the model wrote it: top-level keys in model order, values untouched
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuDocument(pub IndexMap<String, Value>);

impl MenuDocument {
    /// Parse model output
    ///
    /// Any JSON object is accepted as-is. Text that is not JSON, or JSON
    /// whose top level is not an object, is rejected.
    pub fn parse(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| MenuError::Malformed(e.to_string()))
    }

    /// Menu returned whenever extraction fails
    pub fn fallback() -> Self {
        let mut categories = IndexMap::new();
        categories.insert("drinks".to_owned(), json!(["Coke", "Water"]));
        categories.insert("entrees".to_owned(), json!(["Burger", "Salad"]));
        Self(categories)
    }
}

/// Image received from the client
#[derive(Debug, Clone)]
pub struct MenuImage {
    pub bytes: Bytes,
    /// Media type declared on the multipart field
    pub content_type: Option<String>,
    pub file_name: Option<String>,
}

impl MenuImage {
    /// Media type for the data URI: the declared one if it is an image type
    pub fn media_type<'a>(&'a self, default: &'a str) -> &'a str {
        self.content_type
            .as_deref()
            .filter(|ct| ct.starts_with("image/"))
            .unwrap_or(default)
    }
}
