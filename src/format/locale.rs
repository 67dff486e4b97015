use log::warn;
use serde::{Deserialize, Serialize};

/// Separators used when rendering and parsing numbers
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NumberLocale {
    pub tag: String,
    pub decimal_separator: char,
    pub grouping_separator: Option<char>,
}

impl NumberLocale {
    pub fn en_us() -> Self {
        Self::new("en-US", '.', Some(','))
    }

    pub fn en_gb() -> Self {
        Self::new("en-GB", '.', Some(','))
    }

    pub fn de_de() -> Self {
        Self::new("de-DE", ',', Some('.'))
    }

    pub fn fr_fr() -> Self {
        // narrow no-break space
        Self::new("fr-FR", ',', Some('\u{202f}'))
    }

    /// Plain digits, no grouping
    pub fn posix() -> Self {
        Self::new("posix", '.', None)
    }

    fn new(tag: &str, decimal_separator: char, grouping_separator: Option<char>) -> Self {
        Self {
            tag: tag.to_string(),
            decimal_separator,
            grouping_separator,
        }
    }

    /// Resolve a locale tag such as "en-US", "de_DE" or "fr"
    ///
    /// Unknown tags fall back to en-US.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let language = normalized.split('-').next().unwrap_or("");
        match (normalized.as_str(), language) {
            ("en-gb", _) => Self::en_gb(),
            (_, "en") => Self::en_us(),
            (_, "de") => Self::de_de(),
            (_, "fr") => Self::fr_fr(),
            ("posix", _) | ("c", _) => Self::posix(),
            _ => {
                warn!("Unknown locale '{}', using en-US number formatting", tag);
                Self::en_us()
            }
        }
    }
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::en_us()
    }
}
