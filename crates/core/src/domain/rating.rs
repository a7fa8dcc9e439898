use serde::{Deserialize, Serialize};

/// Qualitative level assigned to one environmental factor.
///
/// `VeryGood` is only ever produced by the temperature classifier; the other
/// four factors top out at `Good`. The enum is the complete rating domain, so
/// downstream scoring cannot encounter an unmapped level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorRating {
    VeryGood,
    Good,
    Fair,
    Caution,
}

impl FactorRating {
    /// Korean display label, matching the labels shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryGood => "매우 좋음",
            Self::Good => "좋음",
            Self::Fair => "보통",
            Self::Caution => "주의",
        }
    }

    /// Point value used by the composite scorer.
    pub fn points(&self) -> f64 {
        match self {
            Self::VeryGood => 100.0,
            Self::Good => 75.0,
            Self::Fair => 50.0,
            Self::Caution => 0.0,
        }
    }
}

impl std::fmt::Display for FactorRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::FactorRating;

    #[test]
    fn labels_match_display_strings() {
        assert_eq!(FactorRating::VeryGood.label(), "매우 좋음");
        assert_eq!(FactorRating::Good.label(), "좋음");
        assert_eq!(FactorRating::Fair.label(), "보통");
        assert_eq!(FactorRating::Caution.label(), "주의");
    }

    #[test]
    fn point_table_is_strictly_ordered() {
        assert!(FactorRating::VeryGood.points() > FactorRating::Good.points());
        assert!(FactorRating::Good.points() > FactorRating::Fair.points());
        assert!(FactorRating::Fair.points() > FactorRating::Caution.points());
        assert_eq!(FactorRating::Caution.points(), 0.0);
    }
}
