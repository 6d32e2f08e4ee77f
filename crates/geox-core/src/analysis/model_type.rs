use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{GeoxError, Result};

/// The analysis model the user picked for the uploaded image.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ModelType {
    /// Land classification (forests, urban areas, water, fields).
    #[default]
    Land,
    /// Crop disease detection.
    Crop,
    /// Soil quality assessment.
    Soil,
}

impl ModelType {
    /// Parses a wire key (`land`, `crop`, `soil`), rejecting anything else.
    pub fn parse(key: &str) -> Result<Self> {
        Self::from_str(key.trim()).map_err(|_| GeoxError::UnknownModelType(key.to_string()))
    }

    /// All model types in selector order.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// One-line description shown next to the model in a selector.
    pub fn description(self) -> &'static str {
        match self {
            Self::Land => "Classify land into forests, urban areas, water, fields",
            Self::Crop => "Identify plant health issues from images",
            Self::Soil => "Analyze soil fertility, erosion risks",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_known_keys() {
        assert_eq!(ModelType::parse("land").unwrap(), ModelType::Land);
        assert_eq!(ModelType::parse(" Crop ").unwrap(), ModelType::Crop);
        assert_eq!(ModelType::parse("SOIL").unwrap(), ModelType::Soil);
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let err = ModelType::parse("water").unwrap_err();
        assert_eq!(err, GeoxError::UnknownModelType("water".to_string()));
    }

    #[test]
    fn test_display_and_serde_agree() {
        for model in ModelType::all() {
            let json = serde_json::to_string(&model).unwrap();
            assert_eq!(json, format!("\"{model}\""));
        }
    }

    #[test]
    fn test_selector_order() {
        assert_eq!(
            ModelType::all(),
            vec![ModelType::Land, ModelType::Crop, ModelType::Soil]
        );
    }
}
