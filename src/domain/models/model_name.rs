use serde_derive::Deserialize;
use serde_derive::Serialize;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    EnumIter,
    EnumVariantNames,
    strum::Display,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    #[default]
    Gemini,
    Groq,
}

impl ModelName {
    pub fn parse(text: &str) -> Option<ModelName> {
        let text = text.trim().to_lowercase();
        return ModelName::iter().find(|e| return e.to_string() == text);
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelName::Gemini => return "Gemini",
            ModelName::Groq => return "Groq",
        }
    }

    /// Next model in selection order, wrapping around.
    pub fn next(&self) -> ModelName {
        let models = ModelName::iter().collect::<Vec<ModelName>>();
        let idx = models.iter().position(|e| return e == self).unwrap_or(0);
        return models[(idx + 1) % models.len()];
    }
}
