//! Walkability evaluation: classify five environmental factors and fold them
//! into one weighted score, for the current reading and for each forecast slot.

pub mod classify;
pub mod score;

use serde::{Deserialize, Serialize};

use crate::domain::forecast::ForecastPoint;
use crate::domain::reading::EnvReading;
use crate::domain::score::{FactorRatings, RecommendationBand, WalkScore};

pub use classify::{
    classify_humidity, classify_pm10, classify_pm25, classify_temperature, classify_wind,
};
pub use score::total_walk_score;

/// Current-conditions result: the composite score plus the per-factor ratings
/// the UI lists individually.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkAssessment {
    pub ratings: FactorRatings,
    pub score: WalkScore,
}

/// One scored forecast slot, banded for the recommendation list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkRecommendation {
    pub time: String,
    pub score: u8,
    pub band: RecommendationBand,
    pub comment: String,
}

/// Classifies all five factors of a reading.
pub fn classify_reading(reading: &EnvReading) -> FactorRatings {
    FactorRatings {
        temperature: classify_temperature(reading.temperature),
        humidity: classify_humidity(reading.humidity),
        wind: classify_wind(reading.wind_speed),
        pm10: classify_pm10(reading.pm10),
        pm25: classify_pm25(reading.pm25),
    }
}

/// Full current-conditions evaluation: classify, then score.
pub fn evaluate_reading(reading: &EnvReading) -> WalkAssessment {
    let ratings = classify_reading(reading);
    let score = total_walk_score(&ratings, None);
    WalkAssessment { ratings, score }
}

/// Scores every forecast point, preserving chronological order and the KST
/// time label of each slot.
pub fn evaluate_forecast(points: &[ForecastPoint]) -> Vec<WalkRecommendation> {
    points
        .iter()
        .map(|point| {
            let reading = EnvReading::new(
                point.temp,
                point.humidity,
                point.wind,
                point.pm10,
                point.pm25,
            );
            let ratings = classify_reading(&reading);
            let scored = total_walk_score(&ratings, Some(point.time.clone()));
            WalkRecommendation {
                time: point.time.clone(),
                band: RecommendationBand::from_score(scored.score),
                score: scored.score,
                comment: scored.comment,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rating::FactorRating;

    fn pleasant_reading() -> EnvReading {
        EnvReading::new(22.0, 50.0, 2.0, 25.0, 12.0)
    }

    #[test]
    fn pleasant_reading_rates_good_across_the_board() {
        let assessment = evaluate_reading(&pleasant_reading());
        assert_eq!(assessment.ratings.temperature, FactorRating::Good);
        assert_eq!(assessment.ratings.humidity, FactorRating::Good);
        assert_eq!(assessment.ratings.wind, FactorRating::Good);
        assert_eq!(assessment.ratings.pm10, FactorRating::Good);
        assert_eq!(assessment.ratings.pm25, FactorRating::Good);
        assert_eq!(assessment.score.score, 75);
    }

    #[test]
    fn ideal_temperature_reading_reaches_top_tier() {
        let assessment = evaluate_reading(&EnvReading::new(17.0, 50.0, 2.0, 25.0, 12.0));
        assert_eq!(assessment.ratings.temperature, FactorRating::VeryGood);
        assert!(assessment.score.score >= 80);
    }

    #[test]
    fn forecast_evaluation_preserves_order_and_labels() {
        let points = vec![
            ForecastPoint {
                time: "오전 9시".to_string(),
                weather: "Clear".to_string(),
                temp: 17.0,
                pop: 0,
                pm10: 20.0,
                pm25: 10.0,
                humidity: 45.0,
                wind: 1.5,
            },
            ForecastPoint {
                time: "오후 12시".to_string(),
                weather: "Rain".to_string(),
                temp: 33.0,
                pop: 80,
                pm10: 120.0,
                pm25: 60.0,
                humidity: 90.0,
                wind: 12.0,
            },
        ];

        let recommendations = evaluate_forecast(&points);
        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].time, "오전 9시");
        assert_eq!(recommendations[0].band, RecommendationBand::VeryGood);
        assert_eq!(recommendations[1].time, "오후 12시");
        assert_eq!(recommendations[1].score, 0);
        assert_eq!(recommendations[1].band, RecommendationBand::Caution);
    }

    #[test]
    fn empty_forecast_evaluates_to_empty_list() {
        assert!(evaluate_forecast(&[]).is_empty());
    }
}
