use super::language::Language;
use crate::analysis::ModelType;

/// Number of quick-reply questions each language provides.
pub const DEMO_QUESTION_COUNT: usize = 5;

/// Display strings for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleStrings {
    /// Header of the conversation surface.
    pub chat_with_ai: &'static str,
    /// Label for [`ModelType::Land`].
    pub land_classification: &'static str,
    /// Label for [`ModelType::Crop`].
    pub crop_disease_detection: &'static str,
    /// Label for [`ModelType::Soil`].
    pub soil_quality_assessment: &'static str,
    /// Quick-reply questions, in display order.
    pub demo_questions: [&'static str; DEMO_QUESTION_COUNT],
}

impl LocaleStrings {
    /// Localized label for a model type.
    pub fn model_label(&self, model_type: ModelType) -> &'static str {
        match model_type {
            ModelType::Land => self.land_classification,
            ModelType::Crop => self.crop_disease_detection,
            ModelType::Soil => self.soil_quality_assessment,
        }
    }
}

const ENGLISH: LocaleStrings = LocaleStrings {
    chat_with_ai: "Chat with AI",
    land_classification: "Land Classification",
    crop_disease_detection: "Crop Disease Detection",
    soil_quality_assessment: "Soil Quality Assessment",
    demo_questions: [
        "What percentage of the image is covered by water bodies?",
        "How much of the land is agricultural?",
        "Are there any urban areas in the image?",
        "What kind of vegetation is present?",
        "Can this area support crop growth?",
    ],
};

const HINDI: LocaleStrings = LocaleStrings {
    chat_with_ai: "AI से चैट करें",
    land_classification: "भूमि वर्गीकरण",
    crop_disease_detection: "फसल रोग का पता लगाना",
    soil_quality_assessment: "मिट्टी की गुणवत्ता का आकलन",
    demo_questions: [
        "छवि का कितना प्रतिशत जल निकायों से ढका है?",
        "कितनी भूमि कृषि है?",
        "क्या छवि में कोई शहरी क्षेत्र हैं?",
        "किस प्रकार का वनस्पति मौजूद है?",
        "क्या यह क्षेत्र फसल की वृद्धि का समर्थन कर सकता है?",
    ],
};

const GUJARATI: LocaleStrings = LocaleStrings {
    chat_with_ai: "AI સાથે ચેટ કરો",
    land_classification: "જમીન વર્ગીકરણ",
    crop_disease_detection: "પાક રોગની શોધ",
    soil_quality_assessment: "માટીની ગુણવત્તાનું મૂલ્યાંકન",
    demo_questions: [
        "છબીનો કેટલો ભાગ પાણીના સ્ત્રોતોથી આવરી લેવાયો છે?",
        "કેટલી જમીન ખેતીની છે?",
        "શું છબીમાં કોઈ શહેરી વિસ્તારો છે?",
        "કયા પ્રકારની વનસ્પતિ હાજર છે?",
        "શું આ વિસ્તાર પાક વૃદ્ધિનું સમર્થન કરી શકે છે?",
    ],
};

/// Read-only string table keyed by [`Language`].
///
/// The catalog is built once by the presentation layer and handed to the
/// engine; the engine only reads from it. Every language has a record, so
/// lookups are total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCatalog {
    en: LocaleStrings,
    hi: LocaleStrings,
    gu: LocaleStrings,
}

impl LocaleCatalog {
    /// Creates a catalog from one record per language.
    pub fn new(en: LocaleStrings, hi: LocaleStrings, gu: LocaleStrings) -> Self {
        Self { en, hi, gu }
    }

    /// The built-in English, Hindi and Gujarati tables.
    pub fn builtin() -> Self {
        Self::new(ENGLISH, HINDI, GUJARATI)
    }

    /// Returns the record for a language.
    pub fn strings(&self, language: Language) -> &LocaleStrings {
        match language {
            Language::En => &self.en,
            Language::Hi => &self.hi,
            Language::Gu => &self.gu,
        }
    }

    /// Quick-reply questions for a language, in display order.
    pub fn suggested_questions(&self, language: Language) -> &[&'static str] {
        &self.strings(language).demo_questions
    }

    /// A single quick-reply question by position.
    pub fn suggestion(&self, language: Language, index: usize) -> Option<&'static str> {
        self.suggested_questions(language).get(index).copied()
    }

    /// Localized label for a model type.
    pub fn model_label(&self, language: Language, model_type: ModelType) -> &'static str {
        self.strings(language).model_label(model_type)
    }
}

impl Default for LocaleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
