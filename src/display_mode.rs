//! Display mode abstraction for agent narration
//!
//! Agents narrate what they are doing ("🎯 added goal", "🧠 remembered").
//! Narration is routed through [`DisplayMode`] so the same agent code can
//! print to the terminal, stay silent, or record lines for inspection.

use colored::Colorize;
use std::cell::RefCell;
use std::rc::Rc;

/// Display mode determines how narration is rendered
#[derive(Clone, Debug)]
pub enum DisplayMode {
    /// Direct terminal output
    Cli { color: bool },

    /// Discard all narration
    Quiet,

    /// Record narration lines in memory
    Capture(Rc<RefCell<Vec<String>>>),
}

impl Default for DisplayMode {
    fn default() -> Self {
        Self::cli()
    }
}

impl DisplayMode {
    /// Create coloured CLI display mode
    pub fn cli() -> Self {
        Self::Cli { color: true }
    }

    /// Create CLI display mode without ANSI colours
    pub fn plain() -> Self {
        Self::Cli { color: false }
    }

    /// Create quiet display mode
    pub fn quiet() -> Self {
        Self::Quiet
    }

    /// Create capturing display mode
    pub fn capture() -> Self {
        Self::Capture(Rc::new(RefCell::new(Vec::new())))
    }

    /// Plain narration line
    pub fn say(&self, message: &str) {
        match self {
            Self::Cli { .. } => println!("{}", message),
            Self::Quiet => {}
            Self::Capture(lines) => lines.borrow_mut().push(message.to_string()),
        }
    }

    /// Section heading
    pub fn heading(&self, message: &str) {
        match self {
            Self::Cli { color: true } => println!("{}", message.bold().cyan()),
            _ => self.say(message),
        }
    }

    /// Horizontal rule of `width` copies of `ch`
    pub fn rule(&self, ch: char, width: usize) {
        self.say(&ch.to_string().repeat(width));
    }

    /// Show a success message
    pub fn show_success(&self, message: &str) {
        match self {
            Self::Cli { color: true } => println!("{}", message.green()),
            _ => self.say(message),
        }
    }

    /// Show a warning message
    pub fn show_warning(&self, message: &str) {
        match self {
            Self::Cli { color: true } => println!("{}", message.yellow()),
            _ => self.say(message),
        }
    }

    /// Show an error message
    pub fn show_error(&self, message: &str) {
        match self {
            Self::Cli { color: true } => eprintln!("{}", message.red()),
            Self::Cli { color: false } => eprintln!("{}", message),
            _ => self.say(message),
        }
    }

    /// Lines recorded so far (empty unless capturing)
    pub fn captured(&self) -> Vec<String> {
        match self {
            Self::Capture(lines) => lines.borrow().clone(),
            _ => Vec::new(),
        }
    }

    /// Check if this is CLI mode
    pub fn is_cli(&self) -> bool {
        matches!(self, Self::Cli { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_mode_creation() {
        assert!(DisplayMode::cli().is_cli());
        assert!(DisplayMode::plain().is_cli());
        assert!(!DisplayMode::quiet().is_cli());
    }

    #[test]
    fn test_capture_records_all_message_kinds() {
        let mode = DisplayMode::capture();
        mode.say("one");
        mode.heading("two");
        mode.show_success("three");
        mode.show_warning("four");
        mode.show_error("five");
        mode.rule('=', 3);
        assert_eq!(mode.captured(), vec!["one", "two", "three", "four", "five", "==="]);
    }

    #[test]
    fn test_capture_clones_share_buffer() {
        let mode = DisplayMode::capture();
        let clone = mode.clone();
        clone.say("shared");
        assert_eq!(mode.captured(), vec!["shared"]);
    }

    #[test]
    fn test_quiet_records_nothing() {
        let mode = DisplayMode::quiet();
        mode.say("dropped");
        assert!(mode.captured().is_empty());
    }
}
