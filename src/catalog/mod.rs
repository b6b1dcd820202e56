//! Message catalog storage and merging

pub mod loader;

use std::collections::HashMap;

/// Flat message catalog mapping dotted keys to translated text
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Message key to translated text
    messages: HashMap<String, String>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a parsed document.
    ///
    /// Nested objects flatten into dotted keys, so `[menu] open = "Open"`
    /// becomes `menu.open`. Strings, numbers and booleans are kept;
    /// arrays and nulls have no message representation and are skipped.
    pub fn from_value(value: &serde_json::Value) -> Self {
        let mut messages = HashMap::new();
        flatten("", value, &mut messages);
        Self { messages }
    }

    /// Get a translated message
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(|s| s.as_str())
    }

    /// Whether the catalog defines the key
    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Add a message
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.messages.insert(key.into(), value.into());
    }

    /// Merge another catalog into this one; the other catalog wins
    /// on key conflicts
    pub fn merge(&mut self, other: Catalog) {
        self.messages.extend(other.messages);
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the catalog holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// All message keys, sorted
    pub fn keys_sorted(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.messages.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        keys
    }
}

/// Flatten a document node into dotted keys
fn flatten(prefix: &str, value: &serde_json::Value, out: &mut HashMap<String, String>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                let full = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(&full, child, out);
            }
        }
        serde_json::Value::String(s) => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), s.clone());
            }
        }
        serde_json::Value::Number(n) => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), n.to_string());
            }
        }
        serde_json::Value::Bool(b) => {
            if !prefix.is_empty() {
                out.insert(prefix.to_string(), b.to_string());
            }
        }
        serde_json::Value::Array(_) | serde_json::Value::Null => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert!(catalog.get("hello").is_none());

        catalog.insert("hello", "Hello");
        assert_eq!(catalog.get("hello"), Some("Hello"));
        assert!(catalog.contains("hello"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_from_value_flattens_nested_tables() {
        let value = serde_json::json!({
            "hello": "Hello",
            "menu": {
                "open": "Open",
                "file": { "save": "Save" }
            },
            "count": 3,
            "enabled": true,
            "ignored": [1, 2, 3],
            "also_ignored": null
        });

        let catalog = Catalog::from_value(&value);
        assert_eq!(catalog.get("hello"), Some("Hello"));
        assert_eq!(catalog.get("menu.open"), Some("Open"));
        assert_eq!(catalog.get("menu.file.save"), Some("Save"));
        assert_eq!(catalog.get("count"), Some("3"));
        assert_eq!(catalog.get("enabled"), Some("true"));
        assert!(catalog.get("ignored").is_none());
        assert!(catalog.get("also_ignored").is_none());
    }

    #[test]
    fn test_merge_later_wins() {
        let mut base = Catalog::new();
        base.insert("hello", "Hello");
        base.insert("world", "World");

        let mut overlay = Catalog::new();
        overlay.insert("hello", "Hi");
        overlay.insert("bye", "Bye");

        base.merge(overlay);
        assert_eq!(base.get("hello"), Some("Hi"));
        assert_eq!(base.get("world"), Some("World"));
        assert_eq!(base.get("bye"), Some("Bye"));
    }

    #[test]
    fn test_keys_sorted() {
        let mut catalog = Catalog::new();
        catalog.insert("b", "2");
        catalog.insert("a", "1");
        catalog.insert("c", "3");

        assert_eq!(catalog.keys_sorted(), vec!["a", "b", "c"]);
    }
}
