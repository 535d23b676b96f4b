use std::fmt;

/// Upstream LLM provider a model is served by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provider {
    OpenAi,
    Groq,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::OpenAi => write!(f, "openai"),
            Provider::Groq => write!(f, "groq"),
        }
    }
}

/// The fixed registry of models a user may ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelName {
    Gpt4o,
    Gpt4oMini,
    Gpt41,
    O3Mini,
    Llama33Versatile,
    Llama31Instant,
}

const REGISTRY: [ModelName; 6] = [
    ModelName::Gpt4o,
    ModelName::Gpt4oMini,
    ModelName::Gpt41,
    ModelName::O3Mini,
    ModelName::Llama33Versatile,
    ModelName::Llama31Instant,
];

const DEFAULT_TEMPERATURE: f32 = 0.7;
// Reasoning models only accept the default sampling temperature.
const REASONING_TEMPERATURE: f32 = 1.0;

impl ModelName {
    pub fn all() -> &'static [ModelName] {
        &REGISTRY
    }

    /// Case-insensitive exact lookup against the registry.
    pub fn resolve(raw: &str) -> Option<ModelName> {
        REGISTRY
            .iter()
            .copied()
            .find(|model| model.as_str().eq_ignore_ascii_case(raw))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelName::Gpt4o => "gpt-4o",
            ModelName::Gpt4oMini => "gpt-4o-mini",
            ModelName::Gpt41 => "gpt-4.1",
            ModelName::O3Mini => "o3-mini",
            ModelName::Llama33Versatile => "llama-3.3-70b-versatile",
            ModelName::Llama31Instant => "llama-3.1-8b-instant",
        }
    }

    pub fn provider(&self) -> Provider {
        match self {
            ModelName::Gpt4o | ModelName::Gpt4oMini | ModelName::Gpt41 | ModelName::O3Mini => {
                Provider::OpenAi
            }
            ModelName::Llama33Versatile | ModelName::Llama31Instant => Provider::Groq,
        }
    }

    pub fn temperature(&self) -> f32 {
        match (self.provider(), self) {
            (Provider::OpenAi, ModelName::O3Mini) => REASONING_TEMPERATURE,
            _ => DEFAULT_TEMPERATURE,
        }
    }

    /// Comma separated registry names, used in help and error replies.
    pub fn registry_listing() -> String {
        REGISTRY
            .iter()
            .map(ModelName::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ModelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
