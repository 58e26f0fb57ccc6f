//! Product category tag.

use serde::{Deserialize, Serialize};

/// Product category.
///
/// Every catalog product carries exactly one category; the shop page filters
/// on these tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Chain,
    Ring,
    Bracelet,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 4] = [Self::Chain, Self::Ring, Self::Bracelet, Self::Other];
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chain => write!(f, "chain"),
            Self::Ring => write!(f, "ring"),
            Self::Bracelet => write!(f, "bracelet"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "chain" => Ok(Self::Chain),
            "ring" => Ok(Self::Ring),
            "bracelet" => Ok(Self::Bracelet),
            "other" => Ok(Self::Other),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_display_from_str_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.to_string().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("necklace".parse::<Category>().is_err());
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&Category::Bracelet).unwrap(),
            "\"bracelet\""
        );
    }
}
