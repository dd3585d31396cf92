use clap::builder::{styling::AnsiColor, Styles};
use clap::Parser;

const ABOUT: &str = "Weather station forecast TUI";

const LONG_ABOUT: &str = "
TUI for browsing weather stations and their temperature forecasts.

Pick a station from the built-in list (or pass its numeric id on the command
line) and the dashboard charts the forecast reported by the backend API.

The API location is taken from --api-url, then the WXDASH_API_URL environment
variable, and defaults to `/api`. Set RUST_LOG (e.g. RUST_LOG=wxdash=debug) to
see request diagnostics on stderr.
";

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default())
    .usage(AnsiColor::Green.on_default())
    .literal(AnsiColor::Green.on_default())
    .placeholder(AnsiColor::Green.on_default());

#[derive(Parser, Debug)]
#[command(version, styles=STYLES, about=ABOUT, long_about = LONG_ABOUT)]
pub struct Args {
    #[arg(help = "Numeric station id to preselect (e.g. 12840)")]
    pub station: Option<i64>,

    #[arg(long, help = "Base URL of the forecast API (overrides WXDASH_API_URL)")]
    pub api_url: Option<String>,
}
