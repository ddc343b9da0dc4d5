//! Mock pricing service

use rand::Rng;
use serde::Serialize;

/// Nightly hotel prices for a city, in dollars
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HotelPrices {
    pub city: String,
    pub avg_hotel_price: i64,
    pub budget_options: f64,
    pub luxury_options: f64,
}

/// Base nightly price by city, case-insensitive
pub fn base_hotel_price(city: &str) -> i64 {
    match city.to_lowercase().as_str() {
        "paris" => 120,
        "berlin" => 80,
        "amsterdam" => 100,
        "prague" => 60,
        _ => 90,
    }
}

#[derive(Debug)]
pub struct PriceApi<R> {
    rng: R,
}

impl<R: Rng> PriceApi<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Average is the base price jittered by -20..=40
    pub fn hotel_prices(&mut self, city: &str) -> HotelPrices {
        let base = base_hotel_price(city);
        HotelPrices {
            city: city.to_string(),
            avg_hotel_price: base + self.rng.gen_range(-20..=40),
            budget_options: base as f64 * 0.6,
            luxury_options: base as f64 * 2.5,
        }
    }

    pub fn flight_price(&mut self, _route: &str) -> u32 {
        self.rng.gen_range(200..=800)
    }
}
