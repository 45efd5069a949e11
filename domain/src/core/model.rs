//! Model value object naming the hosted LLM that answers the customer

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted chat models (Value Object)
///
/// The named variants are the Groq-hosted Llama models OrderBot has been run
/// against; anything else is carried through verbatim as [`Model::Custom`] so
/// that any OpenAI-compatible endpoint can be targeted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Model {
    #[default]
    Llama3_70b,
    Llama3_8b,
    Llama33_70bVersatile,
    Llama31_8bInstant,
    Custom(String),
}

impl Model {
    /// Get the identifier sent to the provider
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama3_70b => "llama3-70b-8192",
            Model::Llama3_8b => "llama3-8b-8192",
            Model::Llama33_70bVersatile => "llama-3.3-70b-versatile",
            Model::Llama31_8bInstant => "llama-3.1-8b-instant",
            Model::Custom(s) => s,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Model::Custom(_))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s {
            "llama3-70b-8192" => Model::Llama3_70b,
            "llama3-8b-8192" => Model::Llama3_8b,
            "llama-3.3-70b-versatile" => Model::Llama33_70bVersatile,
            "llama-3.1-8b-instant" => Model::Llama31_8bInstant,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Model::from(s))
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default_is_llama3_70b() {
        assert_eq!(Model::default(), Model::Llama3_70b);
        assert_eq!(Model::default().as_str(), "llama3-70b-8192");
    }

    #[test]
    fn test_known_model_parses_to_variant() {
        let model: Model = "llama-3.3-70b-versatile".parse().unwrap();
        assert_eq!(model, Model::Llama33_70bVersatile);
        assert!(!model.is_custom());
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "mixtral-8x7b-32768".parse().unwrap();
        assert_eq!(model, Model::Custom("mixtral-8x7b-32768".to_string()));
        assert_eq!(model.to_string(), "mixtral-8x7b-32768");
        assert!(model.is_custom());
    }

    #[test]
    fn test_model_serializes_as_plain_string() {
        let json = serde_json::to_string(&Model::Llama31_8bInstant).unwrap();
        assert_eq!(json, "\"llama-3.1-8b-instant\"");
        let back: Model = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Model::Llama31_8bInstant);
    }
}
