//! Supported UI languages and text direction.

use serde::{Deserialize, Serialize};

/// Text-flow orientation associated with a language.
///
/// Consumers apply this to the document writing direction (the `dir`
/// attribute) whenever the active language changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// The value used for the HTML `dir` attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A UI language supported by the console.
///
/// The set is closed: language pickers are built from [`Language::ALL`]
/// and setters only accept members of this enum, so an unsupported
/// language is unrepresentable past the parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (default).
    #[default]
    En,
    /// Hindi.
    Hi,
    /// Arabic.
    Ar,
}

impl Language {
    /// Every supported language, in picker display order.
    pub const ALL: [Self; 3] = [Self::En, Self::Hi, Self::Ar];

    /// ISO 639-1 language code, also the persisted cookie value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Ar => "ar",
        }
    }

    /// Native display name shown in the language picker.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिन्दी",
            Self::Ar => "العربية",
        }
    }

    /// Flag glyph shown next to the display name.
    #[must_use]
    pub const fn flag(self) -> &'static str {
        match self {
            Self::En => "🇺🇸",
            Self::Hi => "🇮🇳",
            Self::Ar => "🇦🇪",
        }
    }

    /// Text direction. A pure function of the language.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::En | Self::Hi => Direction::Ltr,
            Self::Ar => Direction::Rtl,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = super::UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            "ar" => Ok(Self::Ar),
            _ => Err(super::UnknownVariant::new("language", s)),
        }
    }
}
