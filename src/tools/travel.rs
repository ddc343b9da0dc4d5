//! Travel planning tools
//!
//! Destination research, monthly weather and budget allocation backed by
//! small built-in tables. Each function also has a [`FnTool`] wrapper so
//! agents can invoke it through a [`ToolRegistry`](crate::tools::ToolRegistry).

use crate::errors::{AgentError, Result};
use crate::tools::types::FnTool;
use crate::types::{Params, ParamsExt};
use serde_json::json;

struct DestinationFacts {
    highlights: &'static [&'static str],
    food: &'static [&'static str],
    history: &'static str,
    art: &'static str,
    budget_tip: &'static str,
}

fn destination_facts(destination: &str) -> Option<DestinationFacts> {
    match destination.to_lowercase().as_str() {
        "rome" => Some(DestinationFacts {
            highlights: &["Colosseum", "Vatican", "Trevi Fountain", "Roman Forum"],
            food: &["Carbonara", "Pizza al Taglio", "Gelato", "Cacio e Pepe"],
            history: "Ancient Roman Empire capital with 2,800 years of history",
            art: "Renaissance masters, Vatican Museums, countless galleries",
            budget_tip: "Book skip-the-line tickets in advance",
        }),
        "paris" => Some(DestinationFacts {
            highlights: &["Eiffel Tower", "Louvre", "Notre-Dame", "Montmartre"],
            food: &["Croissants", "Coq au Vin", "Macarons", "French Cheese"],
            history: "City of Light with revolutionary history and royal palaces",
            art: "World's largest art museum, Impressionist masterpieces",
            budget_tip: "Many museums are free on first Sunday mornings",
        }),
        _ => None,
    }
}

fn split_csv(list: &str) -> Vec<String> {
    list.split(',')
        .map(|item| item.trim().to_lowercase())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Research a destination, with sections for the requested interests
pub fn research_destination(destination: &str, interests: &str) -> String {
    let Some(facts) = destination_facts(destination) else {
        return format!(
            "Limited information available for {}. Consider popular European destinations like Rome or Paris.",
            destination
        );
    };
    let interests = split_csv(interests);
    let wants = |topic: &str| interests.iter().any(|i| i == topic);

    let mut response = format!("🌍 RESEARCH RESULTS FOR {}\n\n", destination.to_uppercase());
    if wants("history") {
        response.push_str(&format!("📚 HISTORY: {}\n\n", facts.history));
    }
    if wants("art") {
        response.push_str(&format!("🎨 ART: {}\n\n", facts.art));
    }
    if wants("food") {
        response.push_str(&format!("🍽️ FOOD: Must-try dishes include {}\n\n", facts.food.join(", ")));
    }
    response.push_str(&format!("🏛️ TOP ATTRACTIONS: {}\n\n", facts.highlights.join(", ")));
    response.push_str(&format!("💡 PRO TIP: {}", facts.budget_tip));
    response
}

/// Typical weather for a destination and month, with packing advice
pub fn get_weather_info(destination: &str, month: &str) -> String {
    let entry = match (destination.to_lowercase().as_str(), month.to_lowercase().as_str()) {
        ("rome", "june") => Some(("20-28°C", "Warm and pleasant", "Low")),
        ("rome", "july") => Some(("23-31°C", "Hot and sunny", "Very low")),
        ("paris", "june") => Some(("15-22°C", "Mild and pleasant", "Moderate")),
        ("paris", "july") => Some(("17-25°C", "Warm", "Low")),
        _ => None,
    };
    let Some((temp, desc, rain)) = entry else {
        return format!("Weather data not available for {} in {}", destination, month);
    };

    let lowered = desc.to_lowercase();
    let mut packing = if lowered.contains("hot") {
        vec!["Light clothing", "Sun protection", "Comfortable shoes"]
    } else if lowered.contains("warm") {
        vec!["Light layers", "Comfortable walking gear"]
    } else {
        vec!["Layered clothing", "Light jacket"]
    };
    if matches!(rain, "Moderate" | "High") {
        packing.push("Umbrella or rain jacket");
    }

    let packing: Vec<String> = packing.iter().map(|item| format!("• {}", item)).collect();
    format!(
        "🌤️ WEATHER FOR {} IN {}\n\n🌡️ Temperature: {}\n☀️ Conditions: {}\n🌧️ Rain Probability: {}\n\n🎒 PACKING RECOMMENDATIONS:\n{}",
        destination.to_uppercase(),
        month.to_uppercase(),
        temp,
        desc,
        rain,
        packing.join("\n")
    )
}

/// Budget allocation adjusted by comma-separated priorities
pub fn budget_analyzer(total_budget: f64, duration: u32, priorities: &str) -> Result<String> {
    if duration == 0 {
        return Err(AgentError::InvalidParameter {
            name: "duration".to_string(),
            reason: "trip duration must be at least one day".to_string(),
        });
    }
    let daily_budget = total_budget / duration as f64;
    let priorities = split_csv(priorities);
    let has = |p: &str| priorities.iter().any(|x| x == p);

    // accommodation, food, activities, transport, shopping
    let mut shares = [
        ("Accommodation", 0.35),
        ("Food", 0.25),
        ("Activities", 0.20),
        ("Transport", 0.15),
        ("Shopping", 0.05),
    ];
    if has("food") || has("culinary") {
        shares[1].1 += 0.10;
        shares[4].1 -= 0.05;
        shares[2].1 -= 0.05;
    }
    if has("luxury") {
        shares[0].1 += 0.15;
        shares[1].1 -= 0.05;
        shares[3].1 -= 0.10;
    }
    if has("activities") || has("culture") {
        shares[2].1 += 0.10;
        shares[4].1 -= 0.05;
        shares[0].1 -= 0.05;
    }

    let recommendations = if daily_budget < 50.0 {
        [
            "Consider hostels or budget accommodations",
            "Mix of street food and local restaurants",
            "Look for free walking tours and activities",
        ]
    } else if daily_budget > 200.0 {
        [
            "You can afford luxury experiences!",
            "Consider fine dining and premium activities",
            "Upscale accommodations with great locations",
        ]
    } else {
        [
            "Good balance between comfort and experiences",
            "Mix of mid-range hotels and restaurants",
            "Focus spending on your top priorities",
        ]
    };

    let mut result = format!(
        "💰 BUDGET ANALYSIS FOR ${:.0} ({} days)\n\n📊 DAILY BUDGET: ${:.2}\n\n💵 RECOMMENDED ALLOCATION:\n",
        total_budget, duration, daily_budget
    );
    for (category, share) in shares {
        result.push_str(&format!(
            "• {}: ${:.0} ({:.1}%)\n",
            category,
            total_budget * share,
            share * 100.0
        ));
    }
    result.push_str("\n💡 SMART RECOMMENDATIONS:\n");
    for rec in recommendations {
        result.push_str(&format!("• {}\n", rec));
    }
    Ok(result)
}

/// Tool wrapper for [`research_destination`]
pub fn research_destination_tool() -> FnTool {
    FnTool::new(
        "research_destination",
        "Research a travel destination based on interests",
        |params: &Params| {
            let destination = params.require_str("destination")?;
            let interests = params.str_param("interests").unwrap_or("");
            Ok(research_destination(destination, interests))
        },
    )
    .with_parameters(json!({
        "type": "object",
        "properties": {
            "destination": {"type": "string"},
            "interests": {"type": "string", "description": "Comma-separated interests"}
        },
        "required": ["destination"]
    }))
}

/// Tool wrapper for [`get_weather_info`]
pub fn weather_info_tool() -> FnTool {
    FnTool::new(
        "get_weather_info",
        "Get weather information for a destination in a specific month",
        |params: &Params| {
            let destination = params.require_str("destination")?;
            let month = params.require_str("month")?;
            Ok(get_weather_info(destination, month))
        },
    )
    .with_parameters(json!({
        "type": "object",
        "properties": {
            "destination": {"type": "string"},
            "month": {"type": "string"}
        },
        "required": ["destination", "month"]
    }))
}

/// Tool wrapper for [`budget_analyzer`]
pub fn budget_analyzer_tool() -> FnTool {
    FnTool::new(
        "budget_analyzer",
        "Analyze and optimize budget allocation for travel",
        |params: &Params| {
            let total = params.require_f64("total_budget")?;
            let duration = params.require_f64("duration")?;
            if duration < 0.0 || duration.fract() != 0.0 {
                return Err(AgentError::InvalidParameter {
                    name: "duration".to_string(),
                    reason: "expected a whole number of days".to_string(),
                });
            }
            let priorities = params.str_param("priorities").unwrap_or("");
            budget_analyzer(total, duration as u32, priorities)
        },
    )
    .with_parameters(json!({
        "type": "object",
        "properties": {
            "total_budget": {"type": "number"},
            "duration": {"type": "integer", "minimum": 1},
            "priorities": {"type": "string"}
        },
        "required": ["total_budget", "duration"]
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::types::Tool;
    use crate::types::params_from;

    #[test]
    fn test_research_sections_follow_interests() {
        let out = research_destination("Rome", "history, food");
        assert!(out.starts_with("🌍 RESEARCH RESULTS FOR ROME"));
        assert!(out.contains("📚 HISTORY: Ancient Roman Empire"));
        assert!(out.contains("Carbonara, Pizza al Taglio, Gelato, Cacio e Pepe"));
        assert!(!out.contains("🎨 ART"));
        assert!(out.ends_with("💡 PRO TIP: Book skip-the-line tickets in advance"));
    }

    #[test]
    fn test_research_unknown_destination() {
        assert_eq!(
            research_destination("Lisbon", "food"),
            "Limited information available for Lisbon. Consider popular European destinations like Rome or Paris."
        );
    }

    #[test]
    fn test_weather_packing_advice() {
        let hot = get_weather_info("Rome", "July");
        assert!(hot.contains("🌡️ Temperature: 23-31°C"));
        assert!(hot.contains("• Sun protection"));

        let mild = get_weather_info("paris", "june");
        assert!(mild.contains("• Layered clothing"));
        assert!(mild.contains("• Umbrella or rain jacket"));

        let warm = get_weather_info("Rome", "June");
        assert!(warm.contains("• Light layers"));
        assert!(!warm.contains("Umbrella"));
    }

    #[test]
    fn test_weather_unknown_pair() {
        assert_eq!(
            get_weather_info("Rome", "December"),
            "Weather data not available for Rome in December"
        );
    }

    #[test]
    fn test_budget_analyzer_priorities() {
        let out = budget_analyzer(2500.0, 14, "food,culture").unwrap();
        assert!(out.contains("💰 BUDGET ANALYSIS FOR $2500 (14 days)"));
        assert!(out.contains("📊 DAILY BUDGET: $178.57"));
        assert!(out.contains("• Food: $875 (35.0%)"));
        assert!(out.contains("• Accommodation: $750 (30.0%)"));
        assert!(out.contains("• Activities: $625 (25.0%)"));
        assert!(out.contains("Good balance between comfort and experiences"));
    }

    #[test]
    fn test_budget_analyzer_zero_duration() {
        assert!(budget_analyzer(1000.0, 0, "").is_err());
    }

    #[test]
    fn test_tool_wrappers() {
        let params = params_from(json!({"destination": "Paris", "month": "July"}));
        let out = weather_info_tool().invoke(&params).unwrap();
        assert!(out.contains("WEATHER FOR PARIS IN JULY"));

        let missing = research_destination_tool().invoke(&Params::new());
        assert!(missing.is_err());

        let params = params_from(json!({"total_budget": 600, "duration": 14}));
        let out = budget_analyzer_tool().invoke(&params).unwrap();
        assert!(out.contains("Consider hostels"));
    }

    #[test]
    fn test_budget_analyzer_daily_thresholds_are_exclusive() {
        // exactly $50 and $200 a day both stay in the balanced tier
        for total in [700.0, 2800.0] {
            let out = budget_analyzer(total, 14, "").unwrap();
            assert!(out.contains("Good balance between comfort and experiences"), "{}", out);
            assert!(!out.contains("Consider hostels"));
            assert!(!out.contains("You can afford luxury experiences!"));
        }

        let out = budget_analyzer(2814.0, 14, "").unwrap();
        assert!(out.contains("You can afford luxury experiences!"));
    }
}
