//! Report rendering: theme resolution, banners, labeled lines
//!
//! Colors are cosmetic only. Every fact renders as "label: value"; failed
//! probes were already collapsed to the placeholder by [`crate::probe`], so
//! nothing here needs to care why a value is missing.

use crate::checks::{CheckOutcome, CheckResult};
use crate::config::Config;
use crate::data::{InterfaceMap, LinkState, SystemReport, LOOPBACK};
use crate::probe::PLACEHOLDER;
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

const SECTION_WIDTH: usize = 50;
const BANNER_WIDTH: usize = 60;

/// Resolved ANSI styles for each semantic label, built once at startup and
/// passed by reference to every render call.
#[derive(Debug, Clone)]
pub struct Theme {
    pub banner: String,
    pub header: String,
    pub section: String,
    pub label: String,
    pub value: String,
    pub success: String,
    pub warning: String,
    pub failure: String,
    pub separator: String,
    banner_art: Vec<String>,
}

struct ThemeDefault {
    label: &'static str,
    color: &'static str,
}

const THEME_DEFAULTS: [ThemeDefault; 8] = [
    ThemeDefault { label: "banner", color: "bright_magenta" },
    ThemeDefault { label: "header", color: "bright_magenta" },
    ThemeDefault { label: "section", color: "bright_cyan" },
    ThemeDefault { label: "label", color: "bright_blue" },
    ThemeDefault { label: "value", color: "bright_green" },
    ThemeDefault { label: "success", color: "bright_green" },
    ThemeDefault { label: "warning", color: "bright_yellow" },
    ThemeDefault { label: "failure", color: "bright_red" },
];

impl Theme {
    pub fn from_config(config: &Config) -> Theme {
        let resolve = |label: &str| -> String {
            let default = THEME_DEFAULTS
                .iter()
                .find(|entry| entry.label == label)
                .map(|entry| entry.color)
                .unwrap_or("reset");

            match config.colors.get(label) {
                Some(color) => color_code(color).unwrap_or_else(|| {
                    eprintln!(
                        "Warning: unknown color '{}' for '{}', using default",
                        color, label
                    );
                    color_code(default).unwrap_or_else(|| RESET.to_string())
                }),
                None => color_code(default).unwrap_or_else(|| RESET.to_string()),
            }
        };

        Theme {
            banner: resolve("banner"),
            header: resolve("header"),
            section: resolve("section"),
            label: resolve("label"),
            value: resolve("value"),
            success: resolve("success"),
            warning: resolve("warning"),
            failure: resolve("failure"),
            separator: config
                .display
                .separator
                .clone()
                .unwrap_or_else(|| ": ".to_string()),
            banner_art: load_banner_art(config.display.banner_path.as_deref()),
        }
    }
}

/// Translate a named ANSI color or "#rrggbb" into an escape prefix.
pub fn color_code(color: &str) -> Option<String> {
    if let Some(code) = named_color_code(color) {
        return Some(code);
    }
    parse_hex_color(color)
}

fn named_color_code(name: &str) -> Option<String> {
    match name.to_lowercase().as_str() {
        // Standard 8 colors (30-37)
        "black" => Some("\x1b[30m".to_string()),
        "red" => Some("\x1b[31m".to_string()),
        "green" => Some("\x1b[32m".to_string()),
        "yellow" => Some("\x1b[33m".to_string()),
        "blue" => Some("\x1b[34m".to_string()),
        "magenta" => Some("\x1b[35m".to_string()),
        "cyan" => Some("\x1b[36m".to_string()),
        "white" => Some("\x1b[37m".to_string()),

        // Bright colors (90-97)
        "bright_black" | "gray" | "grey" => Some("\x1b[90m".to_string()),
        "bright_red" => Some("\x1b[91m".to_string()),
        "bright_green" => Some("\x1b[92m".to_string()),
        "bright_yellow" => Some("\x1b[93m".to_string()),
        "bright_blue" => Some("\x1b[94m".to_string()),
        "bright_magenta" => Some("\x1b[95m".to_string()),
        "bright_cyan" => Some("\x1b[96m".to_string()),
        "bright_white" => Some("\x1b[97m".to_string()),

        "reset" | "default" => Some(RESET.to_string()),

        _ => None,
    }
}

fn parse_hex_color(color: &str) -> Option<String> {
    if color.starts_with('#') && color.len() == 7 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&color[1..3], 16),
            u8::from_str_radix(&color[3..5], 16),
            u8::from_str_radix(&color[5..7], 16),
        ) {
            return Some(format!("\x1b[38;2;{};{};{}m", r, g, b));
        }
    }
    None
}

fn load_banner_art(path: Option<&str>) -> Vec<String> {
    let path = match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => shellexpand::tilde(path).to_string(),
        None => return vec![],
    };

    if !Path::new(&path).exists() {
        return vec![];
    }
    match fs::File::open(&path) {
        Ok(file) => io::BufReader::new(file)
            .lines()
            .filter_map(std::result::Result::ok)
            .collect(),
        Err(_) => vec![],
    }
}

fn centered(text: &str, width: usize) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    format!("{}{}", " ".repeat(left), text)
}

/// Boxed `=` banner preceding a section
pub fn print_header(theme: &Theme, title: &str) {
    let rule = "=".repeat(SECTION_WIDTH);
    println!("\n{}{}{}{}", theme.header, BOLD, rule, RESET);
    println!(
        "{}{}{}{}",
        theme.header,
        BOLD,
        centered(title, SECTION_WIDTH),
        RESET
    );
    println!("{}{}{}{}", theme.header, BOLD, rule, RESET);
}

pub fn print_section(theme: &Theme, title: &str) {
    println!("\n{}{}{}:{}", theme.section, BOLD, title, RESET);
}

pub fn print_fact(theme: &Theme, label: &str, value: &str) {
    print_fact_styled(theme, label, value, &theme.value);
}

pub fn print_fact_styled(theme: &Theme, label: &str, value: &str, value_style: &str) {
    if label.is_empty() {
        println!("{}{}{}", value_style, value, RESET);
    } else {
        println!(
            "{}{}{}{}{}{}{}",
            theme.label, label, theme.separator, RESET, value_style, value, RESET
        );
    }
}

/// Opening banner, check progress notes
pub fn print_opening(theme: &Theme) {
    for line in &theme.banner_art {
        println!("{}{}{}", theme.banner, line, RESET);
    }

    let rule = "=".repeat(BANNER_WIDTH);
    println!("{}{}{}", theme.banner, BOLD, rule);
    println!("{}", centered("boardcheck - Board Bring-Up Demo", BANNER_WIDTH));
    println!("{}{}", rule, RESET);

    println!("\n{}Starting system demonstration...{}", theme.section, RESET);
    println!(
        "{}This will take about 10 seconds{}",
        theme.warning, RESET
    );
}

pub fn render_report(theme: &Theme, report: &SystemReport) {
    print_header(theme, "System Status");

    print_section(theme, "System Information");
    let system = &report.system;
    print_fact(theme, "Hostname", &system.hostname.render());
    print_fact(theme, "Operating System", &system.os_name.render());
    print_fact(theme, "Uptime", &system.uptime.render());
    print_fact(theme, "Kernel", &system.kernel_version.render());
    print_fact(theme, "Architecture", &system.architecture.render());
    print_fact(theme, "CPU Model", &system.cpu_model.render());
    print_fact(theme, "CPU Cores", &system.cpu_count.render());
    print_fact(theme, "Temperature", &system.temperature.render());
    print_fact(theme, "Load Average", &system.load_average.render());

    print_section(theme, "Memory Information");
    print_fact(theme, "Total Memory", &report.memory.total.render());
    print_fact(theme, "Available Memory", &report.memory.available.render());
    print_fact(theme, "Free Memory", &report.memory.free.render());

    print_section(theme, "Network Interfaces");
    match report.interfaces.known() {
        Some(map) => {
            let lines = interface_lines(map);
            if lines.is_empty() {
                print_fact_styled(theme, "Network", "No interfaces found", &theme.warning);
            } else {
                for (label, value, up) in &lines {
                    let style = if *up { &theme.success } else { &theme.warning };
                    print_fact_styled(theme, label, value, style);
                }
            }
        }
        None => print_fact_styled(theme, "Network", PLACEHOLDER, &theme.warning),
    }

    print_section(theme, "Filesystem Information");
    print_fact(theme, "Root Filesystem", &report.filesystem.root.render());

    print_section(theme, "Release Information");
    match report.release.lines.known() {
        Some(lines) if !lines.is_empty() => {
            for line in lines {
                print_fact(theme, "", line);
            }
        }
        _ => print_fact(theme, "Image Release", "Information not available"),
    }
}

/// Label/value pairs for the interface section, loopback excluded.
/// The bool marks interfaces whose link is up.
pub fn interface_lines(interfaces: &InterfaceMap) -> Vec<(String, String, bool)> {
    interfaces
        .iter()
        .filter(|(name, _)| name.as_str() != LOOPBACK)
        .map(|(name, status)| {
            (
                format!("Interface {}", name),
                format!("{} ({})", status.address_or_default(), status.state),
                status.state == LinkState::Up,
            )
        })
        .collect()
}

pub fn render_checks(theme: &Theme, results: &[CheckResult]) {
    print_header(theme, "System Test");
    println!();
    for result in results {
        let style = outcome_style(theme, result.outcome);
        print_fact_styled(theme, result.name, &result.outcome.to_string(), style);
    }
}

pub fn outcome_style<'a>(theme: &'a Theme, outcome: CheckOutcome) -> &'a str {
    match outcome {
        CheckOutcome::Pass => &theme.success,
        CheckOutcome::Fail | CheckOutcome::Error => &theme.failure,
    }
}

pub fn print_closing(theme: &Theme, delay_secs: u64) {
    print_header(theme, "Demo Complete");
    println!(
        "{}Status report generated successfully!{}",
        theme.success, RESET
    );
    println!("{}Smoke checks finished{}", theme.success, RESET);
    println!(
        "{}Board is ready for application workloads{}",
        theme.success, RESET
    );
    println!(
        "\n{}Press Ctrl+C to exit now, or this will auto-exit in {} seconds...{}",
        BOLD, delay_secs, RESET
    );
}

pub fn print_farewell(theme: &Theme, interrupted: bool) {
    if interrupted {
        println!("\n{}Interrupted by user{}", theme.section, RESET);
    }
    println!("\n{}Board check complete.{}\n", theme.success, RESET);
}
