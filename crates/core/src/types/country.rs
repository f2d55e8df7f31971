//! Operating regions.

use serde::{Deserialize, Serialize};

/// A region the console can be scoped to.
///
/// Regions are display-only context: they never participate in permission
/// or feature resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Country {
    #[default]
    India,
    UnitedStates,
    UnitedArabEmirates,
}

impl Country {
    /// Every supported region, in picker display order.
    pub const ALL: [Self; 3] = [Self::India, Self::UnitedStates, Self::UnitedArabEmirates];

    /// Stable identifier used in forms and session storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::India => "india",
            Self::UnitedStates => "united_states",
            Self::UnitedArabEmirates => "united_arab_emirates",
        }
    }

    /// Human-readable name for display.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::India => "India",
            Self::UnitedStates => "United States",
            Self::UnitedArabEmirates => "United Arab Emirates",
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Country {
    type Err = super::UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "india" => Ok(Self::India),
            "united_states" => Ok(Self::UnitedStates),
            "united_arab_emirates" => Ok(Self::UnitedArabEmirates),
            _ => Err(super::UnknownVariant::new("region", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_identifier() {
        for country in Country::ALL {
            assert_eq!(country.as_str().parse::<Country>(), Ok(country));
        }
    }

    #[test]
    fn display_names_are_non_empty() {
        for country in Country::ALL {
            assert!(!country.display_name().is_empty());
        }
    }
}
