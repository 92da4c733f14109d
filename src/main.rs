use boardcheck::checks::run_smoke_checks;
use boardcheck::config::load_config;
use boardcheck::display::{self, Theme};
use boardcheck::{collect_report, delay};

/// Pause before exit so the report can be read on a console
const EXIT_DELAY_SECS: u64 = 5;

fn main() {
    let config = load_config();
    let theme = Theme::from_config(&config);

    display::print_opening(&theme);

    let report = collect_report();
    display::render_report(&theme, &report);

    let results = run_smoke_checks();
    display::render_checks(&theme, &results);

    display::print_closing(&theme, EXIT_DELAY_SECS);

    let interrupted = delay::pause(EXIT_DELAY_SECS);
    display::print_farewell(&theme, interrupted);
}
