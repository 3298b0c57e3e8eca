use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Language the email draft is requested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = String;

    /// Accepts `"es"`, `"ES"`, `"es_MX.UTF-8"` and the like.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let lowered = raw.trim().to_lowercase();
        let base = lowered.split('.').next().unwrap_or(&lowered);
        let lang = base.split(['_', '-']).next().unwrap_or(base);
        match lang {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(format!("unsupported locale {raw:?} (expected \"en\" or \"es\")")),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    #[serde(default)]
    pub locale: Locale,
}
