//! Conversational weather assistant
//!
//! A small tool-using agent: it calls the mock weather service, turns the
//! readings into clothing and planning advice and keeps a log of what it
//! has checked.

use crate::apis::{make_rng, CurrentWeather, DailyForecast, MockWeatherApi};
use crate::display_mode::DisplayMode;
use chrono::{DateTime, Local};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

/// City used when a request does not name one
pub const DEFAULT_CITY: &str = "New York";

/// Days covered by a conversational forecast request
pub const DEFAULT_FORECAST_DAYS: u32 = 3;

const MAX_RECOMMENDATIONS: usize = 4;
const SEPARATOR: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// What a conversational request is asking for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeatherIntent {
    Current(String),
    Forecast(String),
    Help,
}

impl WeatherIntent {
    /// Keyword intent detection
    pub fn detect(input: &str) -> Self {
        let lower = input.to_lowercase();
        if lower.contains("weather") && (lower.contains("today") || lower.contains("current")) {
            Self::Current(extract_city(input))
        } else if lower.contains("forecast") || lower.contains("next few days") {
            Self::Forecast(extract_city(input))
        } else {
            Self::Help
        }
    }
}

/// City named after the first "in", "for" or "at"
pub fn extract_city(input: &str) -> String {
    let words: Vec<&str> = input.split_whitespace().collect();
    words
        .windows(2)
        .find(|pair| matches!(pair[0].to_lowercase().as_str(), "in" | "for" | "at"))
        .map(|pair| pair[1].replace(['?', ','], ""))
        .unwrap_or_else(|| DEFAULT_CITY.to_string())
}

/// One logged request
#[derive(Debug, Clone)]
pub enum WeatherActivity {
    WeatherCheck {
        city: String,
        result: CurrentWeather,
        at: DateTime<Local>,
    },
    ForecastCheck {
        city: String,
        days: u32,
        result: Vec<DailyForecast>,
        at: DateTime<Local>,
    },
}

impl WeatherActivity {
    fn summary_line(&self) -> String {
        match self {
            Self::WeatherCheck { city, result, at } => format!(
                "   {}: Checked {} - {}°C, {}",
                at.format("%H:%M"),
                city,
                result.temperature,
                result.condition
            ),
            Self::ForecastCheck { city, days, at, .. } => {
                format!("   {}: {}-day forecast for {}", at.format("%H:%M"), days, city)
            }
        }
    }
}

/// Clothing and activity advice for current conditions, at most four items
pub fn weather_recommendations(weather: &CurrentWeather) -> Vec<&'static str> {
    let temp = weather.temperature;
    let mut recs: Vec<&'static str> = if temp < 0 {
        vec![
            "🧥 Bundle up! Wear warm layers and winter coat",
            "☕ Perfect weather for hot drinks",
            "❄️ Watch for icy conditions",
        ]
    } else if temp < 10 {
        vec![
            "🧥 Wear a jacket or warm layers",
            "🧤 Consider gloves and hat",
            "🚶 Great weather for brisk walks",
        ]
    } else if temp < 20 {
        vec![
            "👕 Light layers are perfect",
            "🚶 Excellent weather for outdoor activities",
            "☕ Maybe a light jacket for evening",
        ]
    } else if temp < 30 {
        vec![
            "👕 Light, breathable clothing recommended",
            "🌞 Great weather for outdoor activities!",
            "💧 Stay hydrated",
        ]
    } else {
        vec![
            "🩳 Very hot! Light clothing essential",
            "💧 Drink lots of water",
            "🏠 Consider indoor activities during peak heat",
        ]
    };

    let condition = weather.condition.to_lowercase();
    if condition.contains("rain") {
        recs.extend([
            "☔ Don't forget your umbrella!",
            "🏠 Good day for indoor activities",
            "👟 Wear waterproof shoes",
        ]);
    } else if condition.contains("snow") {
        recs.extend([
            "❄️ Bundle up and enjoy the winter wonderland!",
            "👟 Wear boots with good traction",
            "🔥 Perfect day for hot cocoa",
        ]);
    } else if condition.contains("sunny") {
        recs.extend([
            "☀️ Beautiful day to be outside!",
            "🕶️ Don't forget sunglasses",
            "🧴 Apply sunscreen",
        ]);
    }

    recs.truncate(MAX_RECOMMENDATIONS);
    recs
}

/// Trip planning advice for a multi-day forecast, at most four items
pub fn planning_suggestions(forecast: &[DailyForecast]) -> Vec<&'static str> {
    let count = |pred: fn(&DailyForecast) -> bool| forecast.iter().filter(|d| pred(d)).count();
    let rainy = count(|d| d.rain_chance > 60);
    let sunny = count(|d| d.condition == "sunny");
    let cold = count(|d| d.high_temp < 10);
    let hot = count(|d| d.high_temp > 25);

    let mut suggestions = Vec::new();
    if rainy >= 2 {
        suggestions.push("☔ Pack an umbrella - several rainy days ahead");
        suggestions.push("🏛️ Great time to visit museums or indoor attractions");
    }
    if sunny >= 2 {
        suggestions.push("☀️ Perfect for outdoor activities and sightseeing!");
        suggestions.push("📸 Excellent photo opportunities with good lighting");
    }
    if cold >= 1 {
        suggestions.push("🧥 Pack warm layers for the cooler days");
    }
    if hot >= 1 {
        suggestions.push("🌞 Plan indoor activities during peak heat hours");
        suggestions.push("💧 Carry water bottle on hot days");
    }

    if !forecast.is_empty() {
        let swing: i32 = forecast.iter().map(|d| d.high_temp - d.low_temp).sum();
        if f64::from(swing) / forecast.len() as f64 > 15.0 {
            suggestions.push("🌡️ Big temperature swings - pack layers!");
        }
    }

    if suggestions.is_empty() {
        suggestions.push("👍 Looks like generally pleasant weather ahead!");
    }
    suggestions.truncate(MAX_RECOMMENDATIONS);
    suggestions
}

fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Weather assistant agent
#[derive(Debug)]
pub struct WeatherAssistant<R = StdRng> {
    name: String,
    api: MockWeatherApi<R>,
    memory: Vec<WeatherActivity>,
    display: DisplayMode,
}

impl WeatherAssistant<StdRng> {
    pub fn new(name: impl Into<String>, seed: Option<u64>, display: DisplayMode) -> Self {
        Self::with_api(name, MockWeatherApi::new(make_rng(seed)), display)
    }
}

impl<R: Rng> WeatherAssistant<R> {
    pub fn with_api(name: impl Into<String>, api: MockWeatherApi<R>, display: DisplayMode) -> Self {
        Self {
            name: name.into(),
            api,
            memory: Vec::new(),
            display,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn memory(&self) -> &[WeatherActivity] {
        &self.memory
    }

    /// Current conditions report with recommendations
    pub fn check_weather(&mut self, city: &str) -> String {
        self.display
            .say(&format!("🌤️ {} is checking weather for {}...", self.name, city));

        let weather = self.api.current(city);
        debug!(city, condition = weather.condition, temp = weather.temperature, "weather checked");

        let mut report = format!(
            "🌍 CURRENT WEATHER FOR {}\n{}\n\n🌡️ Temperature: {}°C\n☁️ Conditions: {}\n💧 Humidity: {}%\n💨 Wind Speed: {} km/h\n\n\n💡 RECOMMENDATIONS:\n",
            city.to_uppercase(),
            SEPARATOR,
            weather.temperature,
            title_case(weather.condition),
            weather.humidity,
            weather.wind_speed
        );
        for rec in weather_recommendations(&weather) {
            report.push_str(&format!("   {}\n", rec));
        }

        self.memory.push(WeatherActivity::WeatherCheck {
            city: city.to_string(),
            result: weather,
            at: Local::now(),
        });
        report
    }

    /// Multi-day forecast with planning suggestions
    pub fn get_forecast(&mut self, city: &str, days: u32) -> String {
        self.display.say(&format!(
            "📅 {} is getting {}-day forecast for {}...",
            self.name, days, city
        ));

        let forecast = self.api.forecast(city, days);

        let mut report = format!("📅 {}-DAY FORECAST FOR {}\n{}\n\n", days, city.to_uppercase(), SEPARATOR);
        for day in &forecast {
            report.push_str(&format!(
                "📍 {}:\n   🌡️ High: {}°C, Low: {}°C\n   ☁️ Conditions: {}\n   🌧️ Rain Chance: {}%\n\n",
                day.date.format("%Y-%m-%d"),
                day.high_temp,
                day.low_temp,
                title_case(day.condition),
                day.rain_chance
            ));
        }
        report.push_str("🗓️ PLANNING SUGGESTIONS:\n");
        for suggestion in planning_suggestions(&forecast) {
            report.push_str(&format!("   {}\n", suggestion));
        }

        self.memory.push(WeatherActivity::ForecastCheck {
            city: city.to_string(),
            days,
            result: forecast,
            at: Local::now(),
        });
        report
    }

    /// Answer a free-text weather request
    pub fn converse(&mut self, input: &str) -> String {
        match WeatherIntent::detect(input) {
            WeatherIntent::Current(city) => self.check_weather(&city),
            WeatherIntent::Forecast(city) => self.get_forecast(&city, DEFAULT_FORECAST_DAYS),
            WeatherIntent::Help => self.help_text(),
        }
    }

    pub fn help_text(&self) -> String {
        format!(
            "🤖 Hi! I'm {}, your weather assistant.\n\n\
             I can help you with:\n\
             • Current weather conditions\n\
             • Multi-day forecasts\n\
             • Weather-appropriate recommendations\n\
             • Planning suggestions\n\n\
             Try asking:\n\
             • \"What's the weather like today in Paris?\"\n\
             • \"Show me the forecast for Rome\"\n\
             • \"Will it rain tomorrow in London?\"\n",
            self.name
        )
    }

    /// Count of checks plus the three most recent
    pub fn memory_summary(&self) -> String {
        if self.memory.is_empty() {
            return "No weather checks performed yet.".to_string();
        }

        let mut summary = format!(
            "📊 WEATHER ASSISTANT ACTIVITY SUMMARY\n{}\n📈 Total weather checks: {}\n\n🕐 RECENT ACTIVITY:\n",
            SEPARATOR,
            self.memory.len()
        );
        let start = self.memory.len().saturating_sub(3);
        for entry in &self.memory[start..] {
            summary.push_str(&entry.summary_line());
            summary.push('\n');
        }
        summary
    }
}

fn preview(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

/// Walk through current weather, forecast, conversation and memory
pub fn run_demo(seed: Option<u64>, display: DisplayMode) -> WeatherAssistant {
    let d = display.clone();
    d.heading("🌤️ WEATHER ASSISTANT DEMONSTRATION");
    d.rule('=', 50);

    let mut assistant = WeatherAssistant::new("WeatherGuru", seed, display);
    d.say(&format!("\n👋 Meet {}!", assistant.name()));

    d.say("\n1️⃣ CURRENT WEATHER CHECK:");
    d.say(&assistant.check_weather("Rome"));

    d.say("\n2️⃣ WEATHER FORECAST:");
    d.say(&assistant.get_forecast("Paris", 5));

    d.say("\n3️⃣ CONVERSATIONAL WEATHER REQUESTS:");
    for query in [
        "What's the weather like today in London?",
        "Show me the forecast for Berlin",
        "Will it rain tomorrow in Amsterdam?",
    ] {
        d.say(&format!("\nUser: {}", query));
        let response = assistant.converse(query);
        d.say(&format!("Assistant: {}...", preview(&response, 200)));
    }

    d.say("\n4️⃣ ASSISTANT MEMORY SUMMARY:");
    d.say(&assistant.memory_summary());

    d.say("");
    d.rule('=', 50);
    d.show_success("✅ WEATHER ASSISTANT DEMO COMPLETE!");
    d.rule('=', 50);
    for line in [
        "✅ Tool Integration: Weather API usage",
        "✅ Context Awareness: Temperature and condition-based recommendations",
        "✅ Memory System: Remembers previous weather checks",
        "✅ Conversational Interface: Natural language processing",
        "✅ Multi-Day Planning: Forecast analysis and suggestions",
        "✅ Adaptive Responses: Different recommendations for different conditions",
    ] {
        d.say(line);
    }
    assistant
}
