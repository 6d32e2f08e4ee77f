use serde::{Deserialize, Serialize};

/// The answer a land-classification query resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandTopic {
    WaterCoverage,
    AgriculturalCoverage,
    UrbanCoverage,
    ForestCoverage,
    CropSuitability,
    /// Nothing matched.
    LandscapeSummary,
}

impl LandTopic {
    /// Canned answer text for the topic.
    pub fn answer(self) -> &'static str {
        match self {
            Self::WaterCoverage => {
                "The image shows approximately 12% water coverage. There is a small lake in the southwest portion of the image that spans about 5 hectares."
            }
            Self::AgriculturalCoverage => {
                "Agricultural areas make up about 45% of the image. These areas primarily consist of crop fields with some evidence of irrigation systems. The main crops appear to be wheat and maize based on the patterns and coloration."
            }
            Self::UrbanCoverage => {
                "Urban areas make up about 20% of the image, primarily concentrated in the southern portion. The urban development appears to be low-density residential with some commercial structures."
            }
            Self::ForestCoverage => {
                "Forests and dense vegetation cover approximately 23% of the image, primarily in the northeast and eastern regions. The vegetation appears to be a mix of deciduous and coniferous trees, with some shrubland areas at the forest edges."
            }
            Self::CropSuitability => {
                "Based on the soil types and existing agricultural patterns, this area shows good potential for crop growth. The existing fields demonstrate successful cultivation, and there are adequate water resources nearby. The soil appears to have good drainage properties in most areas."
            }
            Self::LandscapeSummary => {
                "Based on my analysis, the image shows a diverse landscape with agricultural land (45%), forests (23%), water bodies (12%), and urban development (20%). The agricultural areas appear to be actively cultivated, and the water resources seem adequate for irrigation. Would you like more specific information about any particular feature?"
            }
        }
    }
}

/// One keyword rule: the topic wins if the query contains any keyword.
#[derive(Clone, Copy, Debug)]
pub(crate) struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub topic: LandTopic,
}

/// Land rules in evaluation order. The first match wins.
pub(crate) const LAND_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["water", "percentage"],
        topic: LandTopic::WaterCoverage,
    },
    KeywordRule {
        keywords: &["agriculture", "agricultural"],
        topic: LandTopic::AgriculturalCoverage,
    },
    KeywordRule {
        keywords: &["urban"],
        topic: LandTopic::UrbanCoverage,
    },
    KeywordRule {
        keywords: &["vegetation", "forest"],
        topic: LandTopic::ForestCoverage,
    },
    KeywordRule {
        keywords: &["crop", "support"],
        topic: LandTopic::CropSuitability,
    },
];

pub(crate) const CROP_ANSWER: &str = "Based on my analysis of the crop patterns, the fields show healthy vegetation with good growth patterns. There are small areas showing signs of moisture stress that may benefit from irrigation adjustment. I don't detect any significant disease patterns, though there are some minor nutrient deficiency indicators in the northeastern section.";

pub(crate) const SOIL_ANSWER: &str = "The soil analysis indicates a clay-loam composition with moderate organic matter content. The soil pH appears to be in the 6.2-6.8 range based on vegetation patterns. Some areas show signs of erosion, particularly on slopes. Based on these characteristics, this soil would be suitable for a variety of crops with proper management practices.";

/// Classifies a land query by keyword substring.
///
/// Matching is on the lower-cased text; the caller's text is not modified.
pub fn classify_land_query(query: &str) -> LandTopic {
    let normalized = query.to_lowercase();
    LAND_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| normalized.contains(kw)))
        .map(|rule| rule.topic)
        .unwrap_or(LandTopic::LandscapeSummary)
}
