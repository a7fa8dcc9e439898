use serde::{Deserialize, Serialize};

use crate::domain::rating::FactorRating;

/// The five per-factor ratings feeding one composite score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorRatings {
    pub temperature: FactorRating,
    pub humidity: FactorRating,
    pub wind: FactorRating,
    pub pm10: FactorRating,
    pub pm25: FactorRating,
}

/// Weighted composite walkability score.
///
/// Derived on every evaluation and never persisted. `time` is an opaque
/// display label carried through from forecast points.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkScore {
    pub score: u8,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

/// Qualitative band shown next to each recommended time slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationBand {
    VeryGood,
    Good,
    Fair,
    Caution,
}

impl RecommendationBand {
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::VeryGood
        } else if score >= 60 {
            Self::Good
        } else if score >= 40 {
            Self::Fair
        } else {
            Self::Caution
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryGood => "매우 좋음",
            Self::Good => "좋음",
            Self::Fair => "보통",
            Self::Caution => "주의",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RecommendationBand;

    #[test]
    fn band_boundaries() {
        assert_eq!(RecommendationBand::from_score(80), RecommendationBand::VeryGood);
        assert_eq!(RecommendationBand::from_score(79), RecommendationBand::Good);
        assert_eq!(RecommendationBand::from_score(60), RecommendationBand::Good);
        assert_eq!(RecommendationBand::from_score(59), RecommendationBand::Fair);
        assert_eq!(RecommendationBand::from_score(40), RecommendationBand::Fair);
        assert_eq!(RecommendationBand::from_score(39), RecommendationBand::Caution);
        assert_eq!(RecommendationBand::from_score(0), RecommendationBand::Caution);
    }
}
