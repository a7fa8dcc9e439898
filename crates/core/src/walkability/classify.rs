//! Per-factor classifiers.
//!
//! Each function is total over f64: every finite value falls into exactly one
//! contiguous band, and non-finite input (NaN, ±inf can surface from provider
//! payloads) classifies as `Caution` rather than panicking or falling through.
//! Temperature and humidity use a centered comfort band that degrades outward;
//! wind and particulates use an ascending threshold ladder.

use crate::domain::rating::FactorRating;

/// Temperature in degrees Celsius. The only classifier that can return
/// `VeryGood`.
pub fn classify_temperature(celsius: f64) -> FactorRating {
    if !celsius.is_finite() {
        return FactorRating::Caution;
    }
    if (15.0..20.0).contains(&celsius) {
        FactorRating::VeryGood
    } else if (8.0..15.0).contains(&celsius) || (20.0..26.0).contains(&celsius) {
        FactorRating::Good
    } else if (0.0..8.0).contains(&celsius) || (26.0..32.0).contains(&celsius) {
        FactorRating::Fair
    } else {
        FactorRating::Caution
    }
}

/// Relative humidity in percent.
pub fn classify_humidity(percent: f64) -> FactorRating {
    if !percent.is_finite() {
        return FactorRating::Caution;
    }
    if (40.0..=60.0).contains(&percent) {
        FactorRating::Good
    } else if (30.0..40.0).contains(&percent) || (60.0..=75.0).contains(&percent) {
        FactorRating::Fair
    } else {
        FactorRating::Caution
    }
}

/// Wind speed in m/s.
pub fn classify_wind(speed: f64) -> FactorRating {
    if !speed.is_finite() {
        return FactorRating::Caution;
    }
    if speed < 4.0 {
        FactorRating::Good
    } else if speed < 9.0 {
        FactorRating::Fair
    } else {
        FactorRating::Caution
    }
}

/// PM10 in µg/m³, banded per the Korean air-quality index.
pub fn classify_pm10(concentration: f64) -> FactorRating {
    if !concentration.is_finite() {
        return FactorRating::Caution;
    }
    if concentration <= 30.0 {
        FactorRating::Good
    } else if concentration <= 80.0 {
        FactorRating::Fair
    } else {
        FactorRating::Caution
    }
}

/// PM2.5 in µg/m³, banded per the Korean air-quality index.
pub fn classify_pm25(concentration: f64) -> FactorRating {
    if !concentration.is_finite() {
        return FactorRating::Caution;
    }
    if concentration <= 15.0 {
        FactorRating::Good
    } else if concentration <= 35.0 {
        FactorRating::Fair
    } else {
        FactorRating::Caution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::rating::FactorRating::*;

    #[test]
    fn temperature_bands() {
        assert_eq!(classify_temperature(17.0), VeryGood);
        assert_eq!(classify_temperature(15.0), VeryGood);
        assert_eq!(classify_temperature(20.0), Good);
        assert_eq!(classify_temperature(22.0), Good);
        assert_eq!(classify_temperature(8.0), Good);
        assert_eq!(classify_temperature(26.0), Fair);
        assert_eq!(classify_temperature(0.0), Fair);
        assert_eq!(classify_temperature(32.0), Caution);
        assert_eq!(classify_temperature(-0.1), Caution);
    }

    #[test]
    fn temperature_is_total_at_extremes() {
        assert_eq!(classify_temperature(f64::MAX), Caution);
        assert_eq!(classify_temperature(f64::MIN), Caution);
        assert_eq!(classify_temperature(-273.15), Caution);
        assert_eq!(classify_temperature(f64::NAN), Caution);
        assert_eq!(classify_temperature(f64::INFINITY), Caution);
        assert_eq!(classify_temperature(f64::NEG_INFINITY), Caution);
    }

    #[test]
    fn humidity_bands() {
        assert_eq!(classify_humidity(50.0), Good);
        assert_eq!(classify_humidity(40.0), Good);
        assert_eq!(classify_humidity(60.0), Good);
        assert_eq!(classify_humidity(39.9), Fair);
        assert_eq!(classify_humidity(75.0), Fair);
        assert_eq!(classify_humidity(75.1), Caution);
        assert_eq!(classify_humidity(0.0), Caution);
        assert_eq!(classify_humidity(100.0), Caution);
        assert_eq!(classify_humidity(f64::NAN), Caution);
    }

    #[test]
    fn wind_ladder() {
        assert_eq!(classify_wind(0.0), Good);
        assert_eq!(classify_wind(2.0), Good);
        assert_eq!(classify_wind(4.0), Fair);
        assert_eq!(classify_wind(8.9), Fair);
        assert_eq!(classify_wind(9.0), Caution);
        assert_eq!(classify_wind(f64::INFINITY), Caution);
    }

    #[test]
    fn pm10_ladder() {
        assert_eq!(classify_pm10(25.0), Good);
        assert_eq!(classify_pm10(30.0), Good);
        assert_eq!(classify_pm10(30.1), Fair);
        assert_eq!(classify_pm10(80.0), Fair);
        assert_eq!(classify_pm10(80.1), Caution);
        assert_eq!(classify_pm10(f64::NAN), Caution);
    }

    #[test]
    fn pm25_ladder() {
        assert_eq!(classify_pm25(12.0), Good);
        assert_eq!(classify_pm25(15.0), Good);
        assert_eq!(classify_pm25(15.1), Fair);
        assert_eq!(classify_pm25(35.0), Fair);
        assert_eq!(classify_pm25(35.1), Caution);
    }
}
