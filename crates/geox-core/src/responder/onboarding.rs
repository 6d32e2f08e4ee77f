use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::ModelType;

/// One of the three introductory assistant messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    Welcome,
    Analysis,
    Details,
}

impl OnboardingStep {
    /// Steps in the order they are appended.
    pub const ALL: [OnboardingStep; 3] = [Self::Welcome, Self::Analysis, Self::Details];

    /// How far before "now" the step is timestamped.
    pub fn age(self) -> TimeDelta {
        match self {
            Self::Welcome => TimeDelta::seconds(120),
            Self::Analysis => TimeDelta::seconds(60),
            Self::Details => TimeDelta::seconds(30),
        }
    }

    /// Timestamp of the step relative to `now`.
    pub fn timestamp(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - self.age()
    }

    /// Message text for the step under a model type.
    pub fn text(self, model_type: ModelType) -> &'static str {
        match (self, model_type) {
            (Self::Welcome, _) => {
                "Welcome to GeoX AI Analysis! I've processed your satellite image and I'm ready to provide insights."
            }
            (Self::Analysis, ModelType::Land) => {
                "I've analyzed your image and identified various land types including forests (23%), agricultural fields (45%), water bodies (12%), and urban areas (20%). Here are some key observations:"
            }
            (Self::Analysis, ModelType::Crop) => {
                "I've analyzed the crop health in your image. The vegetation appears healthy overall with no significant disease patterns detected. There are some stressed areas in the northeast section. Here's what I found:"
            }
            (Self::Analysis, ModelType::Soil) => {
                "I've analyzed the soil in your image. The soil appears to be primarily clay-loam with moderate fertility. There are signs of erosion in some parts. Here's my assessment:"
            }
            (Self::Details, ModelType::Land) => {
                "The agricultural areas show regular patterns indicating active farming. The forest regions appear denser in the northeast. Urban development is concentrated in the southern section with typical grid patterns. Water bodies include what appears to be a small lake or reservoir system."
            }
            (Self::Details, ModelType::Crop) => {
                "Most crop fields show good NDVI values indicating healthy photosynthetic activity. The northeastern section shows signs of water stress that may require attention. No significant pest activity patterns are detected. Crop rows appear well-maintained with consistent spacing."
            }
            (Self::Details, ModelType::Soil) => {
                "Soil composition appears to be primarily clay-loam with good water retention capacity. Organic matter content is estimated to be moderate. Some sloped areas show signs of erosion that may need attention. pH levels appear to be in the neutral to slightly acidic range based on vegetation patterns."
            }
        }
    }
}

/// A scripted onboarding message, ready to be appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingLine {
    pub step: OnboardingStep,
    pub content: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// Builds the three onboarding lines for a model type, oldest first.
pub fn onboarding_script(model_type: ModelType, now: DateTime<Utc>) -> [OnboardingLine; 3] {
    OnboardingStep::ALL.map(|step| OnboardingLine {
        step,
        content: step.text(model_type),
        timestamp: step.timestamp(now),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_is_ordered_and_in_the_past() {
        let now = Utc::now();
        let script = onboarding_script(ModelType::Land, now);

        let steps: Vec<_> = script.iter().map(|line| line.step).collect();
        assert_eq!(steps, OnboardingStep::ALL.to_vec());
        assert!(script[0].timestamp < script[1].timestamp);
        assert!(script[1].timestamp < script[2].timestamp);
        assert!(script[2].timestamp < now);
        assert_eq!(now - script[0].timestamp, TimeDelta::minutes(2));
    }

    #[test]
    fn welcome_is_shared_and_details_differ() {
        let land = onboarding_script(ModelType::Land, Utc::now());
        let soil = onboarding_script(ModelType::Soil, Utc::now());
        assert_eq!(land[0].content, soil[0].content);
        assert_ne!(land[1].content, soil[1].content);
        assert_ne!(land[2].content, soil[2].content);
        assert!(soil[1].content.contains("clay-loam"));
    }
}
