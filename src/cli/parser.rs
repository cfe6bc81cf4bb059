use clap::Parser;

/// Command-line interface definition for arbeitskal
/// Interactive CLI to collect work shifts and save them as iCalendar events
#[derive(Parser)]
#[command(
    name = "arbeitskal",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive work-shift logger: collects shifts and saves them as iCalendar (.ics) events",
    long_about = None
)]
pub struct Cli {
    /// Override calendar file path (useful for tests or a custom file)
    #[arg(long = "file")]
    pub file: Option<String>,

    /// Override the local-to-UTC offset in hours (e.g. 2 for CEST, 1 for CET)
    #[arg(long = "offset", allow_hyphen_values = true)]
    pub offset: Option<i64>,
}
