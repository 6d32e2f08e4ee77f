use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::error::{GeoxError, Result};

/// Display language of the conversation surface.
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
pub enum Language {
    /// English
    #[default]
    En,
    /// Hindi
    Hi,
    /// Gujarati
    Gu,
}

impl Language {
    /// Parses a language key (`en`, `hi`, `gu`), rejecting anything else.
    pub fn parse(key: &str) -> Result<Self> {
        Self::from_str(key.trim()).map_err(|_| GeoxError::UnknownLanguage(key.to_string()))
    }

    /// All supported languages.
    pub fn all() -> Vec<Self> {
        Self::iter().collect()
    }

    /// The language's own name for itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिन्दी",
            Self::Gu => "ગુજરાતી",
        }
    }
}
