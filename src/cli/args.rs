//! Command-line argument parsing for tripwise
//!
//! Provides clap-based CLI with one subcommand per agent demonstration and
//! verbosity control.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tripwise - from rule-based automation to goal-seeking travel agents
#[derive(Parser, Debug)]
#[command(name = "tripwise")]
#[command(version)]
#[command(about = "Travel planning agents, from fixed rules to autonomous planning", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Seed for every mock service (overrides the config file)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Verbosity level: -q (quiet), default (normal), -v (verbose), -vv (very verbose)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress narration)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable coloured output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Compare fixed rules, a canned chatbot and a goal-seeking agent
    Compare,

    /// Run the basic goal / tool / memory agent
    Basic {
        /// Planning cycles to run (config value by default)
        #[arg(long)]
        cycles: Option<usize>,
    },

    /// Run the autonomous multi-destination trip planner
    Travel {
        /// Maximum planning steps (config value by default)
        #[arg(long)]
        max_steps: Option<usize>,

        /// Pause between steps in milliseconds (config value by default)
        #[arg(long)]
        pace_ms: Option<u64>,
    },

    /// Run the research and budget agents together
    Specialized,

    /// Run the destination research agent
    Research,

    /// Run the budget planner with sample expenses
    Budget,

    /// Run the weather assistant
    Weather {
        /// Interactive conversation instead of the scripted demo
        #[arg(long)]
        chat: bool,
    },

    /// Run the production-pattern agent (demo mode without credentials)
    Production,

    /// Display current configuration
    Config,
}

/// Verbosity level enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Normal,
    Verbose,
    VeryVerbose,
}

impl Args {
    /// Get verbosity level based on flags
    pub fn verbosity(&self) -> Verbosity {
        if self.quiet {
            Verbosity::Quiet
        } else {
            match self.verbose {
                0 => Verbosity::Normal,
                1 => Verbosity::Verbose,
                _ => Verbosity::VeryVerbose,
            }
        }
    }

    /// Flags win; without `-q`/`-v` the configured level applies
    pub fn effective_verbosity(&self, configured: &str) -> Verbosity {
        if self.quiet || self.verbose > 0 {
            self.verbosity()
        } else {
            Verbosity::from_name(configured).unwrap_or(Verbosity::Normal)
        }
    }
}

impl Verbosity {
    /// Convert to string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "quiet",
            Verbosity::Normal => "normal",
            Verbosity::Verbose => "verbose",
            Verbosity::VeryVerbose => "very_verbose",
        }
    }

    /// Parse the config-file spelling; unknown names are `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "very_verbose" => Some(Verbosity::VeryVerbose),
            _ => None,
        }
    }

    /// Default `tracing` filter directive when `RUST_LOG` is unset
    pub fn log_filter(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "tripwise=info",
            Verbosity::VeryVerbose => "tripwise=debug",
        }
    }

    /// Check if agent narration should be printed
    pub fn show_narration(&self) -> bool {
        !matches!(self, Verbosity::Quiet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_verbosity_quiet() {
        assert_eq!(parse(&["tripwise", "-q", "compare"]).verbosity(), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        assert_eq!(parse(&["tripwise", "compare"]).verbosity(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose() {
        assert_eq!(parse(&["tripwise", "-v", "basic"]).verbosity(), Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_very_verbose() {
        assert_eq!(parse(&["tripwise", "travel", "-vv"]).verbosity(), Verbosity::VeryVerbose);
    }

    #[test]
    fn test_effective_verbosity_prefers_flags() {
        assert_eq!(parse(&["tripwise", "config"]).effective_verbosity("quiet"), Verbosity::Quiet);
        assert_eq!(parse(&["tripwise", "-v", "config"]).effective_verbosity("quiet"), Verbosity::Verbose);
        assert_eq!(parse(&["tripwise", "config"]).effective_verbosity("bogus"), Verbosity::Normal);
    }

    #[test]
    fn test_subcommand_options() {
        let args = parse(&["tripwise", "--seed", "7", "travel", "--max-steps", "3", "--pace-ms", "0"]);
        assert_eq!(args.seed, Some(7));
        assert_eq!(
            args.command,
            Commands::Travel {
                max_steps: Some(3),
                pace_ms: Some(0)
            }
        );

        let args = parse(&["tripwise", "weather", "--chat", "--no-color"]);
        assert!(args.no_color);
        assert_eq!(args.command, Commands::Weather { chat: true });
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["tripwise"]).is_err());
    }

    #[test]
    fn test_verbosity_methods() {
        assert!(!Verbosity::Quiet.show_narration());
        assert!(Verbosity::Normal.show_narration());

        assert_eq!(Verbosity::Verbose.log_filter(), "tripwise=info");
        for v in [Verbosity::Quiet, Verbosity::Normal, Verbosity::Verbose, Verbosity::VeryVerbose] {
            assert_eq!(Verbosity::from_name(v.as_str()), Some(v));
        }
        assert_eq!(Verbosity::from_name("loud"), None);
    }
}
