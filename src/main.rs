use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::{error::Error, io};
use tracing_subscriber::EnvFilter;

use ratatui::{backend::CrosstermBackend, Terminal};

mod api;
mod app;
mod cli;
mod forecast;
mod stations;

use crate::api::{ClientConfig, ForecastClient};
use crate::app::{run_app, App};

fn main() -> Result<(), Box<dyn Error>> {
    let args = cli::Args::parse();

    // stdout belongs to the dashboard, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_writer(io::stderr)
        .init();

    let mut config = ClientConfig::from_env();
    if let Some(url) = args.api_url {
        config = config.with_base_url(url);
    }
    let client = ForecastClient::new(&config)?;
    let runtime = tokio::runtime::Runtime::new()?;

    let mut app = App::new(stations::list_stations());
    let startup = app.bootstrap(args.station);

    // setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // create app and run it
    let res = run_app(&mut terminal, app, client, runtime.handle().clone(), startup);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{:?}", err)
    }

    Ok(())
}
