use serde_json::Value;
use std::collections::HashMap;

/// Attribute name → value lookup for one contact.
///
/// Built fresh for every execution and dropped with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactAttributes {
    values: HashMap<String, Option<String>>,
}

impl ContactAttributes {
    /// Flatten the orchestrator's `inArguments` list.
    ///
    /// Each object contributes its first key (document order); empty objects
    /// and non-object entries are skipped. A repeated name keeps the last
    /// value seen.
    pub fn from_arguments(arguments: &[Value]) -> Self {
        let mut values = HashMap::with_capacity(arguments.len());
        for argument in arguments {
            let Some(object) = argument.as_object() else {
                tracing::debug!("skipping non-object inArguments entry");
                continue;
            };
            let Some((name, value)) = object.iter().next() else {
                continue;
            };
            if object.len() > 1 {
                tracing::debug!(
                    attribute = %name,
                    extra_keys = object.len() - 1,
                    "inArguments entry has several keys, keeping the first"
                );
            }
            values.insert(name.clone(), attribute_text(value));
        }
        Self { values }
    }

    /// Usable value for `name`: present, non-blank and not an unresolved
    /// `{{...}}` data binding.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .and_then(Option::as_deref)
            .filter(|value| !value.trim().is_empty() && !is_unresolved_binding(value))
    }

    pub fn get_or<'a>(&'a self, name: &str, fallback: &'a str) -> &'a str {
        self.get(name).unwrap_or(fallback)
    }

    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}

fn attribute_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
            Some(value.to_string())
        }
    }
}

fn is_unresolved_binding(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.starts_with("{{") && trimmed.ends_with("}}")
}
