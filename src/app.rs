use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use std::io;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedSender};

use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Block, BorderType, Borders, Cell, Chart, Dataset, GraphType, List, ListItem,
        ListState, Paragraph, Row, Table,
    },
    Frame, Terminal,
};

use crate::api::ForecastClient;
use crate::forecast::{self, ForecastPoint, TimeRange};
use crate::stations::{self, StationRecord};

const MISSING: &str = "--";
const TICK: Duration = Duration::from_millis(250);

/// What a key press asks the event loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cmd {
    Quit,
    FetchStations,
    FetchForecast(i64),
}

/// Outcome of a spawned fetch, reported back to the draw loop. Errors arrive
/// as display strings; the client already logged the diagnostics.
#[derive(Debug)]
pub enum Msg {
    Stations(Result<Vec<StationRecord>, String>),
    Forecast {
        station_id: i64,
        result: Result<Vec<ForecastPoint>, String>,
    },
}

/// Dashboard state. Key handling returns [`Cmd`]s and fetch outcomes enter
/// through [`App::on_msg`], so the whole type works without a terminal or a
/// network attached.
pub struct App {
    stations: Vec<StationRecord>,
    filter: String,
    filter_mode: bool,
    cursor: usize,
    selected_id: Option<i64>,
    points: Vec<ForecastPoint>,
    range: TimeRange,
    loading_stations: bool,
    loading_forecast: bool,
    stations_error: Option<String>,
    forecast_error: Option<String>,
}

impl App {
    pub fn new(seed: Vec<StationRecord>) -> Self {
        Self {
            stations: stations::dedup_by_id(seed),
            filter: String::new(),
            filter_mode: false,
            cursor: 0,
            selected_id: None,
            points: Vec::new(),
            range: TimeRange::default(),
            loading_stations: false,
            loading_forecast: false,
            stations_error: None,
            forecast_error: None,
        }
    }

    /// Commands to issue at startup: one station-list refresh, plus the
    /// forecast for a preselected station when the CLI named one.
    pub fn bootstrap(&mut self, preselect: Option<i64>) -> Vec<Cmd> {
        let mut cmds = vec![self.request_stations()];
        if let Some(id) = preselect {
            if let Some(pos) = self.stations.iter().position(|s| s.id == id) {
                self.cursor = pos;
            }
            cmds.push(self.request_forecast(id));
        }
        cmds
    }

    /// Stations whose name or id matches the free-text filter, in catalog
    /// order.
    pub fn visible(&self) -> Vec<&StationRecord> {
        if self.filter.is_empty() {
            return self.stations.iter().collect();
        }
        let needle = self.filter.to_lowercase();
        self.stations
            .iter()
            .filter(|s| {
                s.name.to_lowercase().contains(&needle) || s.id.to_string().contains(&needle)
            })
            .collect()
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Option<Cmd> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if self.filter_mode {
            match key.code {
                KeyCode::Esc => {
                    self.filter.clear();
                    self.filter_mode = false;
                }
                KeyCode::Enter => self.filter_mode = false,
                KeyCode::Backspace => {
                    self.filter.pop();
                }
                KeyCode::Char(c) => self.filter.push(c),
                _ => {}
            }
            self.clamp_cursor();
            return None;
        }

        match key.code {
            KeyCode::Char('q') => Some(Cmd::Quit),
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                None
            }
            KeyCode::Char('/') => {
                self.filter_mode = true;
                None
            }
            KeyCode::Char('t') => {
                self.range = self.range.next();
                None
            }
            KeyCode::Char('s') if !self.loading_stations => Some(self.request_stations()),
            KeyCode::Char('r') => match self.selected_id {
                Some(id) if !self.loading_forecast => Some(self.request_forecast(id)),
                _ => None,
            },
            KeyCode::Enter => {
                let id = self.visible().get(self.cursor).map(|s| s.id);
                match id {
                    // re-requesting the station already in flight is a no-op
                    Some(id) if !(self.loading_forecast && self.selected_id == Some(id)) => {
                        Some(self.request_forecast(id))
                    }
                    _ => None,
                }
            }
            _ => None,
        }
    }

    pub fn on_msg(&mut self, msg: Msg) {
        match msg {
            Msg::Stations(result) => {
                self.loading_stations = false;
                match result {
                    // a remote list supersedes the built-in one, even when empty
                    Ok(list) => {
                        self.stations = list;
                        self.stations_error = None;
                        self.clamp_cursor();
                    }
                    // on failure the last good list stays up
                    Err(message) => self.stations_error = Some(message),
                }
            }
            Msg::Forecast { station_id, result } => {
                if self.selected_id != Some(station_id) {
                    return; // stale reply for a station no longer selected
                }
                self.loading_forecast = false;
                match result {
                    Ok(points) => {
                        self.points = points;
                        self.forecast_error = None;
                    }
                    Err(message) => {
                        self.points.clear();
                        self.forecast_error = Some(message);
                    }
                }
            }
        }
    }

    fn request_stations(&mut self) -> Cmd {
        self.loading_stations = true;
        self.stations_error = None;
        Cmd::FetchStations
    }

    fn request_forecast(&mut self, id: i64) -> Cmd {
        if self.selected_id != Some(id) {
            self.points.clear();
        }
        self.selected_id = Some(id);
        self.loading_forecast = true;
        self.forecast_error = None;
        Cmd::FetchForecast(id)
    }

    fn selected_station(&self) -> Option<&StationRecord> {
        self.selected_id
            .and_then(|id| self.stations.iter().find(|s| s.id == id))
    }

    fn in_range(&self) -> &[ForecastPoint] {
        forecast::clip_to_range(&self.points, self.range)
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.visible().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let cur = self.cursor.min(len - 1) as isize;
        self.cursor = (cur + delta).clamp(0, len as isize - 1) as usize;
    }

    fn clamp_cursor(&mut self) {
        let len = self.visible().len();
        self.cursor = if len == 0 { 0 } else { self.cursor.min(len - 1) };
    }
}

pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    client: ForecastClient,
    handle: Handle,
    startup: Vec<Cmd>,
) -> io::Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    for cmd in startup {
        dispatch(cmd, &client, &handle, &tx);
    }

    loop {
        terminal.draw(|f| ui(f, &app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if let Some(cmd) = app.on_key(key) {
                    if cmd == Cmd::Quit {
                        return Ok(());
                    }
                    dispatch(cmd, &client, &handle, &tx);
                }
            }
        }

        while let Ok(msg) = rx.try_recv() {
            app.on_msg(msg);
        }
    }
}

/// Spawn the fetch a command asks for; the task reports back over `tx`.
/// Payload decoding happens here, next to the view that consumes it, so the
/// client stays a passthrough.
fn dispatch(cmd: Cmd, client: &ForecastClient, handle: &Handle, tx: &UnboundedSender<Msg>) {
    let client = client.clone();
    let tx = tx.clone();
    match cmd {
        Cmd::Quit => {}
        Cmd::FetchStations => {
            handle.spawn(async move {
                let result = client
                    .fetch_stations()
                    .await
                    .map(|body| stations::decode_stations(&body))
                    .map_err(|e| e.to_string());
                let _ = tx.send(Msg::Stations(result));
            });
        }
        Cmd::FetchForecast(id) => {
            handle.spawn(async move {
                let result = client
                    .fetch_forecast(&id.to_string())
                    .await
                    .map(|body| forecast::decode_points(&body))
                    .map_err(|e| e.to_string());
                let _ = tx.send(Msg::Forecast {
                    station_id: id,
                    result,
                });
            });
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let vert_layout = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    f.render_widget(display_headline(app), vert_layout[0]);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(vert_layout[1]);

    let lchunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(4),
            Constraint::Length(8),
        ])
        .split(chunks[0]);

    f.render_widget(display_filter(app), lchunks[0]);
    render_station_list(f, app, lchunks[1]);
    f.render_widget(display_conditions(app), lchunks[2]);

    render_forecast_panel(f, app, chunks[1]);

    f.render_widget(display_help(app), vert_layout[2]);
}

fn panel_block(title: &str) -> Block {
    Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(Color::Yellow),
        ))
        .title_alignment(Alignment::Left)
        .border_style(Style::default().fg(Color::Cyan))
        .border_type(BorderType::Rounded)
}

fn display_headline(app: &App) -> Paragraph {
    let mut line1 = vec![
        Span::raw(" "),
        Span::styled(
            "wxdash",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    match app.selected_station() {
        Some(s) => {
            line1.push(Span::styled(
                s.id.to_string(),
                Style::default().fg(Color::Blue),
            ));
            line1.push(Span::raw(" : "));
            line1.push(Span::styled(
                s.name.clone(),
                Style::default().fg(Color::Yellow),
            ));
        }
        None => line1.push(Span::styled(
            "no station selected",
            Style::default().fg(Color::DarkGray),
        )),
    }

    let line2 = match app.selected_station() {
        Some(s) => format!(" {:.4}N {:.4}E", s.latitude, s.longitude),
        None => format!(" {} stations", app.stations.len()),
    };

    Paragraph::new(vec![Line::from(line1), Line::from(line2)]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .border_type(BorderType::Rounded),
    )
}

fn display_filter(app: &App) -> Paragraph {
    let content = if app.filter.is_empty() && !app.filter_mode {
        Span::styled("press / to filter", Style::default().fg(Color::DarkGray))
    } else if app.filter_mode {
        Span::styled(app.filter.clone(), Style::default().fg(Color::Yellow))
    } else {
        Span::raw(app.filter.clone())
    };
    let mut block = panel_block("Filter");
    if app.filter_mode {
        block = block.border_style(Style::default().fg(Color::Yellow));
    }
    Paragraph::new(Line::from(vec![Span::raw(" "), content])).block(block)
}

fn render_station_list(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let visible = app.visible();
    let items: Vec<ListItem> = visible
        .iter()
        .map(|s| {
            let marker = if app.selected_id == Some(s.id) {
                Span::styled("* ", Style::default().fg(Color::Green))
            } else {
                Span::raw("  ")
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::styled(format!("{:>6}", s.id), Style::default().fg(Color::Blue)),
                Span::raw("  "),
                Span::raw(s.name.clone()),
            ]))
        })
        .collect();

    let title = format!("Stations ({})", visible.len());
    let list = List::new(items)
        .block(panel_block(&title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !visible.is_empty() {
        state.select(Some(app.cursor.min(visible.len() - 1)));
    }
    f.render_stateful_widget(list, chunks[0], &mut state);

    let status = if let Some(err) = &app.stations_error {
        Span::styled(format!(" {err}"), Style::default().fg(Color::Red))
    } else if app.loading_stations {
        Span::styled(
            " refreshing station list...",
            Style::default().fg(Color::DarkGray),
        )
    } else if visible.is_empty() {
        Span::styled(" no stations", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw("")
    };
    f.render_widget(Paragraph::new(Line::from(status)), chunks[1]);
}

fn display_conditions(app: &App) -> Table {
    let point = app.in_range().first();

    let temp = if let Some(p) = point {
        format!("{:.1} C", p.temperature)
    } else {
        MISSING.to_string()
    };
    let humid = if let Some(h) = point.and_then(|p| p.humidity) {
        format!("{h:.0}%")
    } else {
        MISSING.to_string()
    };
    let text = if let Some(c) = point.and_then(|p| p.condition.clone()) {
        c
    } else {
        MISSING.to_string()
    };
    let when = if let Some(p) = point {
        p.timestamp.format("%d-%m-%Y %H:%M").to_string()
    } else {
        MISSING.to_string()
    };

    let value_style = Style::default().fg(Color::Green);
    let rows = vec![
        Row::new(vec![Cell::from("")]),
        Row::new(vec![
            Cell::from(" Temperature"),
            Cell::from(temp).style(value_style),
        ]),
        Row::new(vec![
            Cell::from(" Humidity"),
            Cell::from(humid).style(value_style),
        ]),
        Row::new(vec![
            Cell::from(" Conditions"),
            Cell::from(text).style(value_style),
        ]),
        Row::new(vec![
            Cell::from(" Time"),
            Cell::from(when).style(value_style),
        ]),
    ];

    Table::new(rows, [Constraint::Length(13), Constraint::Length(22)])
        .block(panel_block("Next Prediction"))
}

fn render_forecast_panel(f: &mut Frame, app: &App, area: Rect) {
    let title = format!("Temperature ({})", app.range.label());
    let block = panel_block(&title);

    if let Some(err) = &app.forecast_error {
        let msg = Paragraph::new(Line::from(Span::styled(
            err.clone(),
            Style::default().fg(Color::Red),
        )))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(msg, area);
        return;
    }

    let points = app.in_range();
    if points.is_empty() {
        let text = if app.loading_forecast {
            "loading forecast..."
        } else if app.selected_id.is_some() {
            "no forecast data"
        } else {
            "select a station and press Enter"
        };
        let msg = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::DarkGray),
        )))
        .block(block)
        .alignment(Alignment::Center);
        f.render_widget(msg, area);
        return;
    }

    let data: Vec<(f64, f64)> = points
        .iter()
        .map(|p| (p.epoch_seconds() as f64, p.temperature))
        .collect();

    let (x_bounds, x_labels) = x_axis_of(points);
    let (y_bounds, y_labels) = y_axis_of(&data);

    let name = match app.selected_station() {
        Some(s) => s.name.clone(),
        None => app
            .selected_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| MISSING.to_string()),
    };

    let dataset = Dataset::default()
        .name(name)
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green))
        .data(&data);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );
    f.render_widget(chart, area);
}

fn x_axis_of(points: &[ForecastPoint]) -> ([f64; 2], Vec<String>) {
    let first = &points[0];
    let last = &points[points.len() - 1];
    let (mut lo, mut hi) = (first.epoch_seconds() as f64, last.epoch_seconds() as f64);
    if lo >= hi {
        // a single sample still needs a drawable span
        lo -= 1800.0;
        hi += 1800.0;
    }
    let mid = first.timestamp + (last.timestamp - first.timestamp) / 2;
    let labels = vec![
        first.timestamp.format("%d %H:%M").to_string(),
        mid.format("%d %H:%M").to_string(),
        last.timestamp.format("%d %H:%M").to_string(),
    ];
    ([lo, hi], labels)
}

fn y_axis_of(data: &[(f64, f64)]) -> ([f64; 2], Vec<String>) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &(_, t) in data {
        min = min.min(t);
        max = max.max(t);
    }
    let pad = ((max - min) * 0.1).max(1.0);
    let (lo, hi) = (min - pad, max + pad);
    let labels = vec![
        format!("{lo:.1}"),
        format!("{:.1}", (lo + hi) / 2.0),
        format!("{hi:.1}"),
    ];
    ([lo, hi], labels)
}

fn display_help(app: &App) -> Paragraph {
    let text = if app.filter_mode {
        " type to filter   enter keep   esc clear"
    } else {
        " q quit   j/k move   enter select   / filter   t range   r forecast   s stations"
    };
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(Color::DarkGray),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn seed() -> Vec<StationRecord> {
        vec![
            StationRecord {
                id: 1,
                name: "Station 1".to_string(),
                latitude: 47.0,
                longitude: 19.0,
            },
            StationRecord {
                id: 2,
                name: "Station 2".to_string(),
                latitude: 46.0,
                longitude: 18.0,
            },
        ]
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn point(hours: i64, temperature: f64) -> ForecastPoint {
        ForecastPoint {
            timestamp: chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                + chrono::Duration::hours(hours),
            temperature,
            humidity: None,
            condition: None,
        }
    }

    #[test]
    fn enter_selects_highlighted_station() {
        let mut app = App::new(seed());
        app.on_key(press(KeyCode::Down));
        let cmd = app.on_key(press(KeyCode::Enter));
        assert_eq!(cmd, Some(Cmd::FetchForecast(2)));
        assert_eq!(app.selected_id, Some(2));
        assert!(app.loading_forecast);
    }

    #[test]
    fn duplicate_request_while_loading_is_ignored() {
        let mut app = App::new(seed());
        assert_eq!(
            app.on_key(press(KeyCode::Enter)),
            Some(Cmd::FetchForecast(1))
        );
        assert_eq!(app.on_key(press(KeyCode::Enter)), None);
        // a different station may still be requested mid-flight
        app.on_key(press(KeyCode::Down));
        assert_eq!(
            app.on_key(press(KeyCode::Enter)),
            Some(Cmd::FetchForecast(2))
        );
    }

    #[test]
    fn filter_narrows_visible_list() {
        let mut app = App::new(seed());
        app.on_key(press(KeyCode::Char('/')));
        for c in "station 2".chars() {
            app.on_key(press(KeyCode::Char(c)));
        }
        let matches: Vec<String> = app.visible().iter().map(|s| s.name.clone()).collect();
        assert_eq!(matches, vec!["Station 2".to_string()]);

        // esc clears the filter and leaves filter mode
        app.on_key(press(KeyCode::Esc));
        assert!(!app.filter_mode);
        assert_eq!(app.visible().len(), 2);
    }

    #[test]
    fn keys_type_into_filter_instead_of_acting() {
        let mut app = App::new(seed());
        app.on_key(press(KeyCode::Char('/')));
        assert_eq!(app.on_key(press(KeyCode::Char('q'))), None);
        assert_eq!(app.filter, "q");
        app.on_key(press(KeyCode::Enter)); // keep filter, leave mode
        assert!(!app.filter_mode);
        assert_eq!(app.filter, "q");
        assert_eq!(app.on_key(press(KeyCode::Char('q'))), Some(Cmd::Quit));
    }

    #[test]
    fn cursor_follows_filtered_view() {
        let mut app = App::new(seed());
        app.on_key(press(KeyCode::Down));
        assert_eq!(app.cursor, 1);
        app.on_key(press(KeyCode::Char('/')));
        for c in "station 1".chars() {
            app.on_key(press(KeyCode::Char(c)));
        }
        // one match left, cursor clamped onto it
        assert_eq!(app.cursor, 0);
        assert_eq!(app.on_key(press(KeyCode::Enter)), None); // leaves filter mode
        assert_eq!(
            app.on_key(press(KeyCode::Enter)),
            Some(Cmd::FetchForecast(1))
        );
    }

    #[test]
    fn stations_failure_keeps_local_list() {
        let mut app = App::new(seed());
        let cmds = app.bootstrap(None);
        assert_eq!(cmds, vec![Cmd::FetchStations]);
        assert!(app.loading_stations);

        app.on_msg(Msg::Stations(Err("Network Error".to_string())));
        assert!(!app.loading_stations);
        assert_eq!(app.stations_error.as_deref(), Some("Network Error"));
        assert_eq!(app.stations.len(), 2);
    }

    #[test]
    fn remote_stations_supersede_local_list() {
        let mut app = App::new(seed());
        app.bootstrap(None);
        app.on_key(press(KeyCode::Down));

        app.on_msg(Msg::Stations(Ok(vec![StationRecord {
            id: 9,
            name: "Remote Only".to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }])));
        assert_eq!(app.stations.len(), 1);
        assert!(app.stations_error.is_none());
        // cursor clamped into the shorter list
        assert_eq!(app.cursor, 0);
    }

    #[test]
    fn stale_forecast_reply_is_dropped() {
        let mut app = App::new(seed());
        app.on_key(press(KeyCode::Enter)); // requests station 1
        app.on_key(press(KeyCode::Down));
        app.on_key(press(KeyCode::Enter)); // switches to station 2

        app.on_msg(Msg::Forecast {
            station_id: 1,
            result: Ok(vec![point(0, 20.0)]),
        });
        assert!(app.points.is_empty());
        assert!(app.loading_forecast);

        app.on_msg(Msg::Forecast {
            station_id: 2,
            result: Ok(vec![point(0, 21.0)]),
        });
        assert!(!app.loading_forecast);
        assert_eq!(app.points.len(), 1);
        assert_eq!(app.points[0].temperature, 21.0);
    }

    #[test]
    fn forecast_error_clears_series() {
        let mut app = App::new(seed());
        app.on_key(press(KeyCode::Enter));
        app.on_msg(Msg::Forecast {
            station_id: 1,
            result: Ok(vec![point(0, 20.0)]),
        });
        assert_eq!(app.in_range().len(), 1);

        assert_eq!(
            app.on_key(press(KeyCode::Char('r'))),
            Some(Cmd::FetchForecast(1))
        );
        app.on_msg(Msg::Forecast {
            station_id: 1,
            result: Err("Network Error".to_string()),
        });
        assert_eq!(app.forecast_error.as_deref(), Some("Network Error"));
        assert!(app.in_range().is_empty());
    }

    #[test]
    fn empty_forecast_is_not_an_error() {
        let mut app = App::new(seed());
        app.on_key(press(KeyCode::Enter));
        app.on_msg(Msg::Forecast {
            station_id: 1,
            result: Ok(Vec::new()),
        });
        assert!(app.forecast_error.is_none());
        assert!(app.in_range().is_empty());
        assert!(!app.loading_forecast);
    }

    #[test]
    fn range_key_cycles_window() {
        let mut app = App::new(seed());
        app.points = (0..168).map(|h| point(h, h as f64)).collect();

        assert_eq!(app.range, TimeRange::Day);
        assert_eq!(app.in_range().len(), 25);
        app.on_key(press(KeyCode::Char('t')));
        assert_eq!(app.range, TimeRange::ThreeDays);
        assert_eq!(app.in_range().len(), 73);
        app.on_key(press(KeyCode::Char('t')));
        assert_eq!(app.in_range().len(), 168);
    }

    #[test]
    fn bootstrap_preselects_station() {
        let mut app = App::new(seed());
        let cmds = app.bootstrap(Some(2));
        assert_eq!(cmds, vec![Cmd::FetchStations, Cmd::FetchForecast(2)]);
        assert_eq!(app.cursor, 1);
        assert_eq!(app.selected_id, Some(2));
        assert!(app.loading_forecast && app.loading_stations);
    }

    #[test]
    fn duplicate_seed_entries_collapse() {
        let mut doubled = seed();
        doubled.extend(seed());
        let app = App::new(doubled);
        assert_eq!(app.stations.len(), 2);
    }
}
