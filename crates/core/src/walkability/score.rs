//! Weighted composite scoring.

use crate::domain::score::{FactorRatings, WalkScore};

/// Per-factor contribution to the composite score. Must sum to exactly 1.0.
pub const WEIGHT_TEMPERATURE: f64 = 0.30;
pub const WEIGHT_HUMIDITY: f64 = 0.20;
pub const WEIGHT_WIND: f64 = 0.10;
pub const WEIGHT_PM10: f64 = 0.20;
pub const WEIGHT_PM25: f64 = 0.20;

const COMMENT_GREAT: &str = "산책하기 아주 좋은 날씨예요! 🐾";
const COMMENT_OKAY: &str = "산책하기 괜찮은 날씨예요.";
const COMMENT_SKIP: &str = "산책은 잠시 미루는 게 좋겠어요.";

/// Combines five factor ratings into a 0–100 score with a comment.
///
/// Deterministic and allocation-light; the optional `time` label is carried
/// through untouched for forecast grouping. A score of 0 with the
/// discouraging comment is a legitimate result for genuinely poor conditions,
/// not a failure signal.
pub fn total_walk_score(ratings: &FactorRatings, time: Option<String>) -> WalkScore {
    let weighted = ratings.temperature.points() * WEIGHT_TEMPERATURE
        + ratings.humidity.points() * WEIGHT_HUMIDITY
        + ratings.wind.points() * WEIGHT_WIND
        + ratings.pm10.points() * WEIGHT_PM10
        + ratings.pm25.points() * WEIGHT_PM25;

    // Weights sum to 1.0 and points top out at 100, so this stays in [0,100].
    let score = weighted.round() as u8;

    let comment = if score >= 80 {
        COMMENT_GREAT
    } else if score >= 50 {
        COMMENT_OKAY
    } else {
        COMMENT_SKIP
    };

    WalkScore { score, comment: comment.to_string(), time }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rating::FactorRating::{self, *};

    fn ratings(
        temperature: FactorRating,
        humidity: FactorRating,
        wind: FactorRating,
        pm10: FactorRating,
        pm25: FactorRating,
    ) -> FactorRatings {
        FactorRatings { temperature, humidity, wind, pm10, pm25 }
    }

    #[test]
    fn weights_sum_to_one() {
        let sum =
            WEIGHT_TEMPERATURE + WEIGHT_HUMIDITY + WEIGHT_WIND + WEIGHT_PM10 + WEIGHT_PM25;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn all_good_scores_seventy_five_with_neutral_comment() {
        let score = total_walk_score(&ratings(Good, Good, Good, Good, Good), None);
        assert_eq!(score.score, 75);
        assert_eq!(score.comment, COMMENT_OKAY);
        assert!(score.time.is_none());
    }

    #[test]
    fn very_good_temperature_lifts_all_good_into_top_tier() {
        let score = total_walk_score(&ratings(VeryGood, Good, Good, Good, Good), None);
        // 100*0.3 + 75*0.7 = 82.5, rounds to 83.
        assert_eq!(score.score, 83);
        assert_eq!(score.comment, COMMENT_GREAT);
    }

    #[test]
    fn all_caution_scores_zero_with_discouraging_comment() {
        let score = total_walk_score(&ratings(Caution, Caution, Caution, Caution, Caution), None);
        assert_eq!(score.score, 0);
        assert_eq!(score.comment, COMMENT_SKIP);
    }

    #[test]
    fn raising_any_factor_from_caution_strictly_increases_score() {
        let base = total_walk_score(&ratings(Caution, Caution, Caution, Caution, Caution), None);
        let variants = [
            ratings(Good, Caution, Caution, Caution, Caution),
            ratings(Caution, Good, Caution, Caution, Caution),
            ratings(Caution, Caution, Good, Caution, Caution),
            ratings(Caution, Caution, Caution, Good, Caution),
            ratings(Caution, Caution, Caution, Caution, Good),
        ];
        for variant in variants {
            assert!(total_walk_score(&variant, None).score > base.score);
        }
    }

    #[test]
    fn identical_input_yields_identical_output() {
        let input = ratings(Good, Fair, Good, Fair, Caution);
        let first = total_walk_score(&input, Some("오후 3시".to_string()));
        let second = total_walk_score(&input, Some("오후 3시".to_string()));
        assert_eq!(first, second);
        assert_eq!(first.time.as_deref(), Some("오후 3시"));
    }

    #[test]
    fn score_is_always_in_range_with_nonempty_comment() {
        let levels = [VeryGood, Good, Fair, Caution];
        for t in levels {
            for h in levels {
                for w in levels {
                    for p10 in levels {
                        for p25 in levels {
                            let score =
                                total_walk_score(&ratings(t, h, w, p10, p25), None);
                            assert!(score.score <= 100);
                            assert!(!score.comment.is_empty());
                        }
                    }
                }
            }
        }
    }
}
