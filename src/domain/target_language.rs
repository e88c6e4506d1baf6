use std::fmt;
use std::str::FromStr;

/// Translation targets. Each maps to exactly one English-source model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetLanguage {
    French,
    German,
    Spanish,
    Italian,
    Hindi,
    Chinese,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 6] = [
        TargetLanguage::French,
        TargetLanguage::German,
        TargetLanguage::Spanish,
        TargetLanguage::Italian,
        TargetLanguage::Hindi,
        TargetLanguage::Chinese,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TargetLanguage::French => "French",
            TargetLanguage::German => "German",
            TargetLanguage::Spanish => "Spanish",
            TargetLanguage::Italian => "Italian",
            TargetLanguage::Hindi => "Hindi",
            TargetLanguage::Chinese => "Chinese",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TargetLanguage::French => "fr",
            TargetLanguage::German => "de",
            TargetLanguage::Spanish => "es",
            TargetLanguage::Italian => "it",
            TargetLanguage::Hindi => "hi",
            TargetLanguage::Chinese => "zh",
        }
    }

    pub fn model_id(&self) -> &'static str {
        match self {
            TargetLanguage::French => "Helsinki-NLP/opus-mt-en-fr",
            TargetLanguage::German => "Helsinki-NLP/opus-mt-en-de",
            TargetLanguage::Spanish => "Helsinki-NLP/opus-mt-en-es",
            TargetLanguage::Italian => "Helsinki-NLP/opus-mt-en-it",
            TargetLanguage::Hindi => "Helsinki-NLP/opus-mt-en-hi",
            TargetLanguage::Chinese => "Helsinki-NLP/opus-mt-en-zh",
        }
    }
}

impl FromStr for TargetLanguage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(wanted) || l.code().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Unsupported target language: {}", s))
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
