//! Response resolution.
//!
//! Maps `(model type, user text)` to canned reply text. Land queries go through
//! an ordered keyword table (`rules`); crop and soil always return their single
//! answer. The onboarding script (`onboarding`) is the fixed three-message
//! introduction appended when content first becomes available.

mod onboarding;
mod rules;

pub use onboarding::{OnboardingLine, OnboardingStep, onboarding_script};
pub use rules::{LandTopic, classify_land_query};

use crate::analysis::ModelType;

/// Placeholder a presentation layer shows while a reply is being composed.
pub const TYPING_INDICATOR: &str = "Analyzing data...";

/// Produces assistant replies.
///
/// Implementations must be pure: the same `(model_type, query)` always yields
/// the same non-empty text.
pub trait Responder: Send + Sync {
    fn respond(&self, model_type: ModelType, query: &str) -> String;
}

/// The built-in keyword responder.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannedResponder;

impl Responder for CannedResponder {
    fn respond(&self, model_type: ModelType, query: &str) -> String {
        resolve(model_type, query).to_string()
    }
}

/// Resolves a query to its canned answer. Never fails; unmatched land
/// queries get the landscape summary.
pub fn resolve(model_type: ModelType, query: &str) -> &'static str {
    match model_type {
        ModelType::Land => classify_land_query(query).answer(),
        // Crop and soil have a single answer regardless of the query.
        ModelType::Crop => rules::CROP_ANSWER,
        ModelType::Soil => rules::SOIL_ANSWER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_water_beats_agricultural() {
        let answer = resolve(
            ModelType::Land,
            "What percentage of water is here and is it agricultural?",
        );
        assert_eq!(answer, LandTopic::WaterCoverage.answer());
        assert!(answer.contains("12% water coverage"));
    }

    #[test]
    fn test_unmatched_land_query_falls_back() {
        assert_eq!(
            resolve(ModelType::Land, "tell me something"),
            LandTopic::LandscapeSummary.answer()
        );
    }

    #[test]
    fn test_crop_and_soil_ignore_query() {
        let crop_a = resolve(ModelType::Crop, "water?");
        let crop_b = resolve(ModelType::Crop, "anything else");
        assert_eq!(crop_a, crop_b);

        let soil_a = resolve(ModelType::Soil, "urban");
        let soil_b = resolve(ModelType::Soil, "");
        assert_eq!(soil_a, soil_b);
        assert_ne!(crop_a, soil_a);
    }

    #[test]
    fn test_resolve_is_pure() {
        let responder = CannedResponder;
        for model in ModelType::all() {
            let first = responder.respond(model, "Are there any urban areas?");
            let second = responder.respond(model, "Are there any urban areas?");
            assert_eq!(first, second);
            assert!(!first.is_empty());
        }
    }

    #[test]
    fn test_english_suggestions_hit_distinct_land_topics() {
        use crate::locale::{Language, LocaleCatalog};

        let catalog = LocaleCatalog::builtin();
        let topics: Vec<LandTopic> = catalog
            .suggested_questions(Language::En)
            .iter()
            .map(|q| classify_land_query(q))
            .collect();
        assert_eq!(
            topics,
            vec![
                LandTopic::WaterCoverage,
                LandTopic::AgriculturalCoverage,
                LandTopic::UrbanCoverage,
                LandTopic::ForestCoverage,
                LandTopic::CropSuitability,
            ]
        );
    }
}
