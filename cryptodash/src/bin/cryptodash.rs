/// CryptoDash terminal
///
/// Fetches the top 100 assets once, then shows the ticker, the top-10
/// carousel, gainers/losers, the search box with its detail panel, and the
/// rotating "Buy X now!" banner.
use std::{
    error::Error,
    fs::OpenOptions,
    io,
    path::PathBuf,
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use cryptodash::{
    render_dashboard, spawn_market_feed, Dashboard, DashboardEvent, MarketClient,
    MarketClientConfig, RotatorConfig,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;
use tracing::info;

/// Get API root from CRYPTODASH_API_URL env var (default: public CoinGecko)
fn get_api_url() -> String {
    std::env::var("CRYPTODASH_API_URL")
        .unwrap_or_else(|_| cryptodash::shared::client::DEFAULT_API_URL.to_string())
}

/// Get quote currency from CRYPTODASH_CURRENCY env var (default: usd)
fn get_currency() -> String {
    std::env::var("CRYPTODASH_CURRENCY")
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_else(|_| "usd".to_string())
}

/// Get log file path from CRYPTODASH_LOG env var (default: <tmp>/cryptodash.log)
fn get_log_path() -> PathBuf {
    std::env::var("CRYPTODASH_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("cryptodash.log"))
}

/// CRYPTODASH_RESET_ON_DISMISS=1 restarts the rotation period on dismissal
fn get_reset_on_dismiss() -> bool {
    std::env::var("CRYPTODASH_RESET_ON_DISMISS")
        .map(|s| matches!(s.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    init_logging()?;

    let client_config = MarketClientConfig::new(get_api_url()).with_currency(get_currency());
    let rotator_config = RotatorConfig::default().with_reset_on_dismiss(get_reset_on_dismiss());
    info!(
        "Starting CryptoDash against {} ({})",
        client_config.base_url, client_config.vs_currency
    );

    // Setup panic hook to restore terminal on crash
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    spawn_market_feed(Arc::new(MarketClient::with_config(client_config)), event_tx);

    let mut dashboard = Dashboard::new(rotator_config);
    let result = run_app(&mut terminal, &mut dashboard, &mut event_rx);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("CryptoDash stopped");
    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    dashboard: &mut Dashboard,
    event_rx: &mut mpsc::UnboundedReceiver<DashboardEvent>,
) -> Result<(), Box<dyn Error>> {
    let tick_rate = Duration::from_millis(250);
    let mut last_tick = Instant::now();
    let mut ticker_offset = 0usize;

    loop {
        while let Ok(event) = event_rx.try_recv() {
            dashboard.dispatch(event);
        }
        dashboard.dispatch(DashboardEvent::Tick);

        terminal.draw(|f| render_dashboard(f, dashboard.state(), ticker_offset))?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key(dashboard, key) {
                    return Ok(());
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            ticker_offset = ticker_offset.wrapping_add(1);
            last_tick = Instant::now();
        }
    }
}

/// Translate a key press into dashboard events. Returns true to quit.
fn handle_key(dashboard: &mut Dashboard, key: KeyEvent) -> bool {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => return true,
        KeyCode::Char('d') if ctrl => dashboard.dispatch(DashboardEvent::NotificationDismissed),
        KeyCode::Esc => {
            let has_selection = dashboard.state().selection.is_some();
            let has_query = !dashboard.state().search.query.is_empty();
            if has_selection {
                dashboard.dispatch(DashboardEvent::SelectionCleared);
            } else if has_query {
                dashboard.dispatch(DashboardEvent::QueryChanged(String::new()));
            } else {
                return true;
            }
        }
        KeyCode::Enter => dashboard.select_highlighted(),
        KeyCode::Up => dashboard.dispatch(DashboardEvent::HighlightPrev),
        KeyCode::Down => dashboard.dispatch(DashboardEvent::HighlightNext),
        KeyCode::Left => dashboard.dispatch(DashboardEvent::CarouselPrev),
        KeyCode::Right => dashboard.dispatch(DashboardEvent::CarouselNext),
        KeyCode::Backspace => {
            let mut query = dashboard.state().search.query.clone();
            query.pop();
            dashboard.dispatch(DashboardEvent::QueryChanged(query));
        }
        KeyCode::Char(c) if !ctrl => {
            let query = format!("{}{}", dashboard.state().search.query, c);
            dashboard.dispatch(DashboardEvent::QueryChanged(query));
        }
        _ => {}
    }
    false
}

// Initialise an INFO `Subscriber` for `Tracing` logs, written to a file so the
// alternate screen stays clean
fn init_logging() -> io::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(get_log_path())?;

    tracing_subscriber::fmt()
        // Filter messages based on the INFO level
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(log_file))
        // Install this Tracing subscriber as global default
        .init();
    Ok(())
}
