//! Mock external services
//!
//! Randomised stand-ins for weather and pricing APIs. Every service owns an
//! injected RNG so a seeded generator makes its output reproducible.

pub mod prices;
pub mod weather;

use rand::rngs::StdRng;
use rand::SeedableRng;

pub use prices::{HotelPrices, PriceApi};
pub use weather::{CurrentWeather, DailyForecast, MockWeatherApi, SimpleForecast, SimpleWeatherApi};

/// Seeded generator when `seed` is set, entropy-seeded otherwise
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
