pub mod categorize;
pub mod config;
pub mod domain;
pub mod errors;
pub mod forecast;
pub mod providers;
pub mod walkability;

pub use categorize::{categorize_title, ProductCategories, ProductCategory};
pub use domain::forecast::ForecastPoint;
pub use domain::rating::FactorRating;
pub use domain::reading::EnvReading;
pub use domain::saved::{ContentType, SavedItem, SavedItemId};
pub use domain::score::{FactorRatings, RecommendationBand, WalkScore};
pub use errors::{DomainError, ForecastError};
pub use forecast::build_forecast_points;
pub use walkability::{
    evaluate_forecast, evaluate_reading, WalkAssessment, WalkRecommendation,
};
