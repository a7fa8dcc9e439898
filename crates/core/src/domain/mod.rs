pub mod forecast;
pub mod rating;
pub mod reading;
pub mod saved;
pub mod score;
