use serde::Deserialize;
use serde_json::Value;

/// Verified payload of an `/execute` call.
///
/// Only ever constructed by [`super::RequestAuthenticator`] after the
/// signature checked out.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedClaims {
    /// Ordered single-key attribute objects. Entries of any other shape are
    /// kept here and skipped during normalization.
    #[serde(default)]
    pub in_arguments: Vec<Value>,
    #[serde(default)]
    pub key_value: Option<Value>,
    #[serde(default)]
    pub journey_id: Option<String>,
    #[serde(default)]
    pub activity_id: Option<String>,
    #[serde(default, rename = "activityObjectID")]
    pub activity_object_id: Option<String>,
    #[serde(default)]
    pub definition_instance_id: Option<String>,
    #[serde(default)]
    pub activity_instance_id: Option<String>,
    #[serde(default)]
    pub mode: Option<Value>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub nbf: Option<i64>,
}

impl SignedClaims {
    /// Contact identifier as text; numeric keys are rendered verbatim and
    /// anything else becomes an empty string.
    pub fn contact_key(&self) -> String {
        match &self.key_value {
            Some(Value::String(key)) => key.clone(),
            Some(Value::Number(key)) => key.to_string(),
            _ => String::new(),
        }
    }
}
