#![forbid(unsafe_code)]

//! Command-line argument parsing for the showcase.
//!
//! Parses args manually (no external dependencies) to keep the binary
//! lean. Supports environment variable overrides via `VITRINE_*`.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Vitrine Showcase — accordion widget showroom

USAGE:
    vitrine-showcase [OPTIONS]

OPTIONS:
    --screen=N      Start on screen N, 1-indexed (default: 1)
    --no-mouse      Disable mouse event capture
    --help, -h      Show this help message
    --version, -V   Show version

SCREENS:
    1  Simple       Spaced, bordered headers
    2  Compact      Dense list, tight padding
    3  Divided      Flush list with divider rules
    4  Exclusive    One-open-at-a-time behavior

KEYBINDINGS:
    Up/Down/Home/End   Move focus between headers
    Enter/Space        Toggle the focused item
    Tab / Shift-Tab    Next / previous screen
    1-4                Jump to screen
    d                  Toggle dark mode
    r                  Toggle right-to-left layout
    q / Esc            Quit

ENVIRONMENT:
    VITRINE_SCREEN       Same as --screen
    VITRINE_CONFIG_DIR   Override the settings directory
    VITRINE_LOG          Log filter for diagnostics on stderr
";

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct Opts {
    /// 1-indexed start screen.
    pub start_screen: usize,
    /// Whether to capture mouse events.
    pub mouse: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            start_screen: 1,
            mouse: true,
        }
    }
}

impl Opts {
    /// Parse `std::env::args`, exiting on `--help`/`--version` or bad input.
    #[must_use]
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(screen) = env::var("VITRINE_SCREEN")
            && let Ok(n) = screen.parse()
        {
            opts.start_screen = n;
        }

        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    print!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("vitrine-showcase {VERSION}");
                    process::exit(0);
                }
                "--no-mouse" => opts.mouse = false,
                other => {
                    if let Some(value) = other.strip_prefix("--screen=") {
                        match value.parse() {
                            Ok(n) if n >= 1 => opts.start_screen = n,
                            _ => {
                                eprintln!("invalid --screen value: {value}");
                                process::exit(2);
                            }
                        }
                    } else {
                        eprintln!("unknown option: {other}\n\n{HELP_TEXT}");
                        process::exit(2);
                    }
                }
            }
        }
        opts
    }
}
