//! Mock weather services

use chrono::{Duration, Local, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

const SIMPLE_CONDITIONS: [&str; 4] = ["sunny", "rainy", "cloudy", "snowy"];
const CURRENT_CONDITIONS: [&str; 5] = ["sunny", "cloudy", "rainy", "snowy", "partly cloudy"];
const FORECAST_CONDITIONS: [&str; 3] = ["sunny", "cloudy", "rainy"];

fn pick<R: Rng>(rng: &mut R, options: &[&'static str]) -> &'static str {
    options.choose(rng).copied().unwrap_or(options[0])
}

/// One-shot forecast used when scoring destinations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleForecast {
    pub city: String,
    pub forecast: &'static str,
    /// Celsius, -5..=25
    pub temperature: i32,
    /// Percent, 0..=100
    pub rainfall: u32,
}

/// Minimal weather service for the travel agent
#[derive(Debug)]
pub struct SimpleWeatherApi<R> {
    rng: R,
}

impl<R: Rng> SimpleWeatherApi<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn forecast(&mut self, city: &str) -> SimpleForecast {
        SimpleForecast {
            city: city.to_string(),
            forecast: pick(&mut self.rng, &SIMPLE_CONDITIONS),
            temperature: self.rng.gen_range(-5..=25),
            rainfall: self.rng.gen_range(0..=100),
        }
    }
}

/// Current conditions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentWeather {
    pub city: String,
    pub condition: &'static str,
    /// Celsius, -5..=34
    pub temperature: i32,
    /// Percent, 20..=90
    pub humidity: u32,
    /// km/h, 0..=25
    pub wind_speed: u32,
    pub timestamp: chrono::DateTime<Local>,
}

/// One day of a multi-day forecast
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyForecast {
    pub date: NaiveDate,
    pub condition: &'static str,
    pub high_temp: i32,
    pub low_temp: i32,
    pub rain_chance: u32,
}

/// Weather service for the weather assistant
#[derive(Debug)]
pub struct MockWeatherApi<R> {
    rng: R,
}

impl<R: Rng> MockWeatherApi<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn current(&mut self, city: &str) -> CurrentWeather {
        CurrentWeather {
            city: city.to_string(),
            condition: pick(&mut self.rng, &CURRENT_CONDITIONS),
            temperature: self.rng.gen_range(-5..35),
            humidity: self.rng.gen_range(20..=90),
            wind_speed: self.rng.gen_range(0..=25),
            timestamp: Local::now(),
        }
    }

    /// `days` consecutive days starting today
    pub fn forecast(&mut self, _city: &str, days: u32) -> Vec<DailyForecast> {
        self.forecast_from(Local::now().date_naive(), days)
    }

    /// `days` consecutive days starting at `start`
    pub fn forecast_from(&mut self, start: NaiveDate, days: u32) -> Vec<DailyForecast> {
        (0..days)
            .map(|day| DailyForecast {
                date: start + Duration::days(i64::from(day)),
                condition: pick(&mut self.rng, &FORECAST_CONDITIONS),
                high_temp: self.rng.gen_range(15..=30),
                low_temp: self.rng.gen_range(5..=20),
                rain_chance: self.rng.gen_range(0..=100),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apis::make_rng;

    #[test]
    fn test_simple_forecast_ranges() {
        let mut api = SimpleWeatherApi::new(make_rng(Some(7)));
        for _ in 0..200 {
            let f = api.forecast("Paris");
            assert!(SIMPLE_CONDITIONS.contains(&f.forecast));
            assert!((-5..=25).contains(&f.temperature));
            assert!(f.rainfall <= 100);
        }
    }

    #[test]
    fn test_current_weather_ranges() {
        let mut api = MockWeatherApi::new(make_rng(Some(11)));
        for _ in 0..200 {
            let w = api.current("Rome");
            assert!(CURRENT_CONDITIONS.contains(&w.condition));
            assert!((-5..=34).contains(&w.temperature));
            assert!((20..=90).contains(&w.humidity));
            assert!(w.wind_speed <= 25);
        }
    }

    #[test]
    fn test_forecast_dates_are_consecutive() {
        let mut api = MockWeatherApi::new(make_rng(Some(3)));
        let start = NaiveDate::from_ymd_opt(2024, 1, 30).unwrap();
        let days = api.forecast_from(start, 5);
        assert_eq!(days.len(), 5);
        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        for day in &days {
            assert!((15..=30).contains(&day.high_temp));
            assert!((5..=20).contains(&day.low_temp));
            assert!(day.rain_chance <= 100);
        }
    }

    #[test]
    fn test_same_seed_same_weather() {
        let a = SimpleWeatherApi::new(make_rng(Some(42))).forecast("Berlin");
        let b = SimpleWeatherApi::new(make_rng(Some(42))).forecast("Berlin");
        assert_eq!(a, b);
    }
}
