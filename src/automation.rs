//! Rule-based automation and a keyword chatbot
//!
//! Baselines for the agent demos: neither keeps state, takes initiative or
//! works towards a goal.

use crate::display_mode::DisplayMode;

/// Fixed if-then trip advice.
///
/// Budget rules win over preferences; `_destinations` is accepted but never
/// consulted.
pub fn basic_trip_automation<S: AsRef<str>>(budget: f64, _destinations: &[S], preferences: &[S]) -> &'static str {
    let prefers = |p: &str| preferences.iter().any(|x| x.as_ref() == p);

    if budget < 1000.0 {
        "Budget too low. Consider domestic travel."
    } else if budget > 5000.0 {
        "High budget! Consider luxury destinations."
    } else if prefers("beach") {
        "Recommended: Thailand, Greece, or Mexico"
    } else if prefers("culture") {
        "Recommended: Italy, Japan, or Egypt"
    } else {
        "Popular destinations: Paris, London, New York"
    }
}

/// Keyword responder; first matching keyword wins
pub fn traditional_chatbot(question: &str) -> &'static str {
    let question = question.to_lowercase();
    if question.contains("paris") {
        "Paris is great! The Eiffel Tower is a must-see. Hotels average €120/night."
    } else if question.contains("budget") {
        "Budget travel tips: Stay in hostels, eat local food, use public transport."
    } else if question.contains("weather") {
        "Check weather forecasts before traveling. Pack accordingly."
    } else {
        "I can help with travel questions. What would you like to know?"
    }
}

/// Print the automation / chatbot / agentic comparison
pub fn run_comparison(display: &DisplayMode) {
    display.rule('=', 60);
    display.heading("BASIC AUTOMATION VS TRADITIONAL AI VS AGENTIC AI");
    display.rule('=', 60);
    display.say("");

    display.heading("1️⃣ BASIC AUTOMATION (Rule-based):");
    display.say("🤖 Basic Automation Response:");
    let result = basic_trip_automation(2500.0, &["Paris", "Berlin"], &["culture"]);
    display.say("   Input: Budget $2500, want culture");
    display.say(&format!("   Output: {}", result));
    display.show_warning("   ❌ Problem: Can't adapt, no memory, no initiative");
    display.say("");

    display.heading("2️⃣ TRADITIONAL AI (Q&A based):");
    for question in [
        "Tell me about Paris hotels",
        "What's the weather like?",
        "Help me plan a trip",
    ] {
        display.say("🤖 Traditional AI Response:");
        display.say(&format!("   Q: {}", question));
        display.say(&format!("   A: {}", traditional_chatbot(question)));
    }
    display.show_warning("   ❌ Problem: Reactive only, no goal-seeking, no coordination");
    display.say("");

    display.heading("3️⃣ AGENTIC AI:");
    for line in [
        "   ✅ Autonomous: Works toward goals without constant prompting",
        "   ✅ Proactive: Takes initiative to research and plan",
        "   ✅ Goal-oriented: Every action serves your trip objectives",
        "   ✅ Adaptive: Learns and adjusts based on new information",
        "   ✅ Memory: Remembers research and preferences",
        "   ✅ Reasoning: Makes decisions based on multiple factors",
    ] {
        display.show_success(line);
    }
    display.say("");
    display.say("   👉 Run `tripwise travel` to see the difference!");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_rules_win() {
        assert_eq!(
            basic_trip_automation(800.0, &["Paris"], &["beach"]),
            "Budget too low. Consider domestic travel."
        );
        assert_eq!(
            basic_trip_automation(6000.0, &["Paris"], &["culture"]),
            "High budget! Consider luxury destinations."
        );
    }

    #[test]
    fn test_preference_rules() {
        assert_eq!(
            basic_trip_automation(2500.0, &["Paris", "Berlin"], &["culture"]),
            "Recommended: Italy, Japan, or Egypt"
        );
        assert_eq!(
            basic_trip_automation(2500.0, &["Bali"], &["beach", "culture"]),
            "Recommended: Thailand, Greece, or Mexico"
        );
        assert_eq!(
            basic_trip_automation::<&str>(1000.0, &[], &[]),
            "Popular destinations: Paris, London, New York"
        );
    }

    #[test]
    fn test_chatbot_keywords() {
        assert!(traditional_chatbot("Tell me about PARIS hotels").starts_with("Paris is great!"));
        assert!(traditional_chatbot("budget in paris?").starts_with("Paris is great!"));
        assert!(traditional_chatbot("What's the weather like?").starts_with("Check weather"));
        assert_eq!(
            traditional_chatbot("Help me plan a trip"),
            "I can help with travel questions. What would you like to know?"
        );
    }

    #[test]
    fn test_comparison_output() {
        let display = DisplayMode::capture();
        run_comparison(&display);
        let lines = display.captured();
        assert!(lines.contains(&"   Output: Recommended: Italy, Japan, or Egypt".to_string()));
        assert_eq!(lines.iter().filter(|l| l.starts_with("   Q: ")).count(), 3);
    }
}
