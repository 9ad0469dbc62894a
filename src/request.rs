use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stylistic directive applied to every generated post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Tone {
    Professional,
    Casual,
    Excited,
    Sarcastic,
    Inspiring,
    Humorous,
}

impl Tone {
    pub const ALL: [Tone; 6] = [
        Tone::Professional,
        Tone::Casual,
        Tone::Excited,
        Tone::Sarcastic,
        Tone::Inspiring,
        Tone::Humorous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional",
            Tone::Casual => "Casual",
            Tone::Excited => "Excited",
            Tone::Sarcastic => "Sarcastic",
            Tone::Inspiring => "Inspiring",
            Tone::Humorous => "Humorous",
        }
    }

    /// Help text shown next to the tone selector.
    pub fn description(&self) -> &'static str {
        match self {
            Tone::Professional => "Professional and business-focused",
            Tone::Casual => "Friendly and conversational",
            Tone::Excited => "Enthusiastic and energetic",
            Tone::Sarcastic => "Witty and slightly sarcastic",
            Tone::Inspiring => "Motivational and uplifting",
            Tone::Humorous => "Light-hearted and funny",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who the posts are written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Audience {
    General,
    #[serde(rename = "Tech professionals")]
    TechProfessionals,
    #[serde(rename = "Business owners")]
    BusinessOwners,
    Students,
    Entrepreneurs,
}

impl Audience {
    pub const ALL: [Audience; 5] = [
        Audience::General,
        Audience::TechProfessionals,
        Audience::BusinessOwners,
        Audience::Students,
        Audience::Entrepreneurs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::General => "General",
            Audience::TechProfessionals => "Tech professionals",
            Audience::BusinessOwners => "Business owners",
            Audience::Students => "Students",
            Audience::Entrepreneurs => "Entrepreneurs",
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable snapshot of the operator's input for one round of generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub event_description: String,
    pub tone: Tone,
    pub target_audience: Audience,
    #[serde(default = "default_true")]
    pub include_hashtags: bool,
    #[serde(default = "default_true")]
    pub include_cta: bool,
}

fn default_true() -> bool {
    true
}

impl GenerationRequest {
    /// Whether there is any event text to write about. Whitespace-only text counts as empty.
    pub fn has_event_description(&self) -> bool {
        !self.event_description.trim().is_empty()
    }
}

/// API credential for the completion service. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Returns `None` for blank input so an empty form field counts as "no credential".
    pub fn new(secret: impl Into<String>) -> Option<Self> {
        let secret = secret.into().trim().to_string();
        if secret.is_empty() {
            None
        } else {
            Some(Credential(secret))
        }
    }

    /// Operator-supplied credential first, then the configured default.
    pub fn resolve(operator: Option<&str>, fallback: Option<&str>) -> Option<Self> {
        operator
            .and_then(Credential::new)
            .or_else(|| fallback.and_then(Credential::new))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential(<redacted, {} chars>)", self.0.len())
    }
}
