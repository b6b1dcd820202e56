//! Placeholder token matching and expansion

use regex::Regex;

use crate::catalog::Catalog;
use crate::core::errors::{I18nError, Result};

/// Compiled matcher for placeholder tokens such as `{#hello}`
#[derive(Debug, Clone)]
pub struct PlaceholderPattern {
    regex: Regex,
}

impl PlaceholderPattern {
    /// Compile a pattern from a delimiter pair.
    ///
    /// Keys may contain letters, digits, `_`, `-` and `.`.
    pub fn new(left: &str, right: &str) -> Result<Self> {
        if left.is_empty() || right.is_empty() {
            return Err(I18nError::ConfigError {
                message: "Delimiters must be non-empty".to_string(),
            });
        }

        let pattern = format!(
            "{}([A-Za-z0-9_.\\-]+){}",
            regex::escape(left),
            regex::escape(right)
        );
        let regex = Regex::new(&pattern).map_err(|e| I18nError::ConfigError {
            message: format!("Invalid delimiters: {}", e),
        })?;

        Ok(Self { regex })
    }

    /// Expand every token against the catalog.
    ///
    /// Tokens whose key is not in the catalog stay verbatim.
    pub fn expand(&self, content: &str, catalog: &Catalog) -> String {
        self.regex
            .replace_all(content, |caps: &regex::Captures<'_>| {
                match catalog.get(&caps[1]) {
                    Some(value) => value.to_string(),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Keys referenced by the content, in order of appearance
    pub fn keys_in<'a>(&self, content: &'a str) -> Vec<&'a str> {
        self.regex
            .captures_iter(content)
            .filter_map(|c| c.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

/// Substitute named arguments: `{name}` becomes the paired value
pub fn substitute_args(content: &str, args: &[(&str, &str)]) -> String {
    let mut result = content.to_string();
    for (name, value) in args {
        result = result.replace(&format!("{{{}}}", name), value);
    }
    result
}
