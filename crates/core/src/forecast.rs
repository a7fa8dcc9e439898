//! Forecast series adapter.
//!
//! Joins the 3-hour-step weather forecast with the hourly air-quality
//! forecast into a bounded, display-ready sequence: each retained weather
//! entry is paired with the air entry closest to it in time.

use chrono::{DateTime, Duration, NaiveDateTime, Timelike, Utc};

use crate::domain::forecast::ForecastPoint;
use crate::domain::reading::KELVIN_OFFSET;
use crate::errors::ForecastError;
use crate::providers::{AirPollutionForecast, AirPollutionForecastEntry, WeatherForecast};

/// 8 slots at 3-hour sampling covers roughly the next 24 hours.
pub const FORECAST_WINDOW: usize = 8;

const KST_OFFSET_HOURS: i64 = 9;
const WEATHER_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Builds the aligned forecast sequence.
///
/// A missing or empty input series is a valid "no data yet" state and yields
/// an empty sequence. Entries that are present but malformed (unparseable
/// timestamp, empty condition list) fail the whole computation so bad
/// provider data never reaches the scorer as silent NaN.
pub fn build_forecast_points(
    weather: Option<&WeatherForecast>,
    air: Option<&AirPollutionForecast>,
) -> Result<Vec<ForecastPoint>, ForecastError> {
    let (weather, air) = match (weather, air) {
        (Some(weather), Some(air)) if !weather.list.is_empty() && !air.list.is_empty() => {
            (weather, air)
        }
        _ => return Ok(Vec::new()),
    };

    weather
        .list
        .iter()
        .take(FORECAST_WINDOW)
        .enumerate()
        .map(|(index, entry)| {
            let timestamp = parse_weather_timestamp(&entry.dt_txt)
                .ok_or_else(|| ForecastError::BadTimestamp {
                    index,
                    raw: entry.dt_txt.clone(),
                })?;
            let condition = entry
                .weather
                .first()
                .ok_or(ForecastError::MissingCondition { index })?;
            let nearest = nearest_air_entry(&air.list, timestamp);

            Ok(ForecastPoint {
                time: kst_hour_label(timestamp),
                weather: condition.main.clone(),
                temp: entry.main.temp - KELVIN_OFFSET,
                pop: (entry.pop * 100.0).round() as u8,
                pm10: nearest.components.pm10,
                pm25: nearest.components.pm2_5,
                humidity: entry.main.humidity,
                wind: entry.wind.speed,
            })
        })
        .collect()
}

fn parse_weather_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, WEATHER_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Linear scan over the whole air series; strict `<` keeps the first entry on
/// a tie. The series are bounded (8 × ~120), so no indexing is needed.
fn nearest_air_entry(
    entries: &[AirPollutionForecastEntry],
    target: DateTime<Utc>,
) -> &AirPollutionForecastEntry {
    let mut best = &entries[0];
    let mut best_diff = (best.dt - target.timestamp()).abs();
    for entry in &entries[1..] {
        let diff = (entry.dt - target.timestamp()).abs();
        if diff < best_diff {
            best = entry;
            best_diff = diff;
        }
    }
    best
}

/// "오전 H시" / "오후 H시" in Korea Standard Time, independent of host
/// timezone. Hour 0 renders as 12.
fn kst_hour_label(timestamp: DateTime<Utc>) -> String {
    let kst = timestamp + Duration::hours(KST_OFFSET_HOURS);
    let hour = kst.hour();
    let meridiem = if hour >= 12 { "오후" } else { "오전" };
    let display_hour = match hour % 12 {
        0 => 12,
        other => other,
    };
    format!("{meridiem} {display_hour}시")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::{
        AirComponents, WeatherCondition, WeatherForecastEntry, WeatherMain, WeatherWind,
    };

    fn weather_entry(dt_txt: &str, temp_k: f64, pop: f64) -> WeatherForecastEntry {
        WeatherForecastEntry {
            dt_txt: dt_txt.to_string(),
            main: WeatherMain { temp: temp_k, humidity: 50.0, feels_like: temp_k },
            wind: WeatherWind { speed: 2.0 },
            weather: vec![WeatherCondition { main: "Clear".to_string() }],
            pop,
        }
    }

    fn air_entry(dt: i64, pm10: f64, pm25: f64) -> AirPollutionForecastEntry {
        AirPollutionForecastEntry { dt, components: AirComponents { pm10, pm2_5: pm25 } }
    }

    #[test]
    fn absent_or_empty_series_yield_empty_output() {
        let weather = WeatherForecast { list: vec![weather_entry("2025-05-10 06:00:00", 295.15, 0.0)] };
        let air = AirPollutionForecast { list: vec![air_entry(1_746_856_800, 20.0, 10.0)] };

        assert!(build_forecast_points(None, Some(&air)).expect("ok").is_empty());
        assert!(build_forecast_points(Some(&weather), None).expect("ok").is_empty());

        let empty_weather = WeatherForecast { list: vec![] };
        assert!(build_forecast_points(Some(&empty_weather), Some(&air)).expect("ok").is_empty());

        let empty_air = AirPollutionForecast { list: vec![] };
        assert!(build_forecast_points(Some(&weather), Some(&empty_air)).expect("ok").is_empty());
    }

    #[test]
    fn output_is_truncated_to_eight_entries() {
        let entries: Vec<_> = (0..12)
            .map(|i| weather_entry(&format!("2025-05-10 {:02}:00:00", i * 2 % 24), 295.15, 0.0))
            .collect();
        let weather = WeatherForecast { list: entries };
        let air = AirPollutionForecast { list: vec![air_entry(1_746_856_800, 20.0, 10.0)] };

        let points = build_forecast_points(Some(&weather), Some(&air)).expect("ok");
        assert_eq!(points.len(), FORECAST_WINDOW);
    }

    #[test]
    fn nearest_air_entry_wins_by_smallest_absolute_difference() {
        // Weather at 2025-05-10 06:00:00 UTC.
        let weather = WeatherForecast { list: vec![weather_entry("2025-05-10 06:00:00", 295.15, 0.0)] };
        let target = NaiveDateTime::parse_from_str("2025-05-10 06:00:00", WEATHER_TIMESTAMP_FORMAT)
            .expect("parse")
            .and_utc()
            .timestamp();

        // One entry 90 minutes before, one 30 minutes after.
        let air = AirPollutionForecast {
            list: vec![
                air_entry(target - 90 * 60, 99.0, 88.0),
                air_entry(target + 30 * 60, 21.0, 11.0),
            ],
        };

        let points = build_forecast_points(Some(&weather), Some(&air)).expect("ok");
        assert_eq!(points[0].pm10, 21.0);
        assert_eq!(points[0].pm25, 11.0);
    }

    #[test]
    fn tie_keeps_first_encountered_air_entry() {
        let weather = WeatherForecast { list: vec![weather_entry("2025-05-10 06:00:00", 295.15, 0.0)] };
        let target = NaiveDateTime::parse_from_str("2025-05-10 06:00:00", WEATHER_TIMESTAMP_FORMAT)
            .expect("parse")
            .and_utc()
            .timestamp();

        let air = AirPollutionForecast {
            list: vec![air_entry(target - 3600, 1.0, 1.0), air_entry(target + 3600, 2.0, 2.0)],
        };

        let points = build_forecast_points(Some(&weather), Some(&air)).expect("ok");
        assert_eq!(points[0].pm10, 1.0);
    }

    #[test]
    fn time_labels_render_in_kst_twelve_hour_format() {
        // 06:00 UTC is 15:00 KST; 03:00 UTC is 12:00 KST; 15:00 UTC is 00:00 KST next day.
        let weather = WeatherForecast {
            list: vec![
                weather_entry("2025-05-10 06:00:00", 295.15, 0.0),
                weather_entry("2025-05-10 03:00:00", 295.15, 0.0),
                weather_entry("2025-05-10 15:00:00", 295.15, 0.0),
                weather_entry("2025-05-10 00:00:00", 295.15, 0.0),
            ],
        };
        let air = AirPollutionForecast { list: vec![air_entry(1_746_856_800, 20.0, 10.0)] };

        let points = build_forecast_points(Some(&weather), Some(&air)).expect("ok");
        assert_eq!(points[0].time, "오후 3시");
        assert_eq!(points[1].time, "오후 12시");
        assert_eq!(points[2].time, "오전 12시");
        assert_eq!(points[3].time, "오전 9시");
    }

    #[test]
    fn temperature_converts_kelvin_to_celsius_and_pop_to_percent() {
        let weather = WeatherForecast { list: vec![weather_entry("2025-05-10 06:00:00", 295.15, 0.37)] };
        let air = AirPollutionForecast { list: vec![air_entry(1_746_856_800, 20.0, 10.0)] };

        let points = build_forecast_points(Some(&weather), Some(&air)).expect("ok");
        assert!((points[0].temp - 22.0).abs() < 1e-9);
        assert_eq!(points[0].pop, 37);
    }

    #[test]
    fn unparseable_timestamp_fails_loudly() {
        let mut entry = weather_entry("2025-05-10 06:00:00", 295.15, 0.0);
        entry.dt_txt = "not-a-timestamp".to_string();
        let weather = WeatherForecast { list: vec![entry] };
        let air = AirPollutionForecast { list: vec![air_entry(1_746_856_800, 20.0, 10.0)] };

        let error = build_forecast_points(Some(&weather), Some(&air)).expect_err("must fail");
        assert!(matches!(error, ForecastError::BadTimestamp { index: 0, .. }));
    }

    #[test]
    fn missing_condition_fails_loudly() {
        let mut entry = weather_entry("2025-05-10 06:00:00", 295.15, 0.0);
        entry.weather.clear();
        let weather = WeatherForecast { list: vec![entry] };
        let air = AirPollutionForecast { list: vec![air_entry(1_746_856_800, 20.0, 10.0)] };

        let error = build_forecast_points(Some(&weather), Some(&air)).expect_err("must fail");
        assert_eq!(error, ForecastError::MissingCondition { index: 0 });
    }

    #[test]
    fn repeated_runs_on_same_input_are_identical() {
        let weather = WeatherForecast {
            list: vec![
                weather_entry("2025-05-10 06:00:00", 295.15, 0.2),
                weather_entry("2025-05-10 09:00:00", 293.15, 0.4),
            ],
        };
        let air = AirPollutionForecast {
            list: vec![air_entry(1_746_856_800, 20.0, 10.0), air_entry(1_746_867_600, 30.0, 15.0)],
        };

        let first = build_forecast_points(Some(&weather), Some(&air)).expect("ok");
        let second = build_forecast_points(Some(&weather), Some(&air)).expect("ok");
        assert_eq!(first, second);
    }
}
