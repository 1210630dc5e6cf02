//! Terminal demo for paint-select.
//!
//! Press the left mouse button on a row and drag across others to select or
//! deselect all of them in one stroke.  Drag past the top or bottom edge to
//! auto-scroll.

use std::io::{self, stderr};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use paint_select::app::{
    event::{self, spawn_event_reader, AppEvent},
    handler,
    list::ListModel,
    state::AppState,
    ticker::TokioTicker,
};
use paint_select::config::{self, AppConfig};
use paint_select::core::GestureStateMachine;
use paint_select::ui::{
    layout::AppLayout,
    list_widget::{stroke_label, ListWidget},
    theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Drag-to-select list demo")]
struct Cli {
    /// Number of rows in the list (overrides the config file).
    #[arg(long)]
    rows: Option<usize>,

    /// Auto-scroll tick interval in milliseconds.
    #[arg(long = "tick-ms")]
    tick_ms: Option<u64>,

    /// Skip commands for rows that already match the stroke.
    #[arg(long)]
    skip_unchanged: bool,

    /// Only start strokes on the checkbox column.
    #[arg(long)]
    checkbox_column: bool,

    /// Print selected row indices to stdout on exit.
    #[arg(long)]
    print_selection: bool,

    /// Write the effective configuration to the config file and exit.
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(rows) = self.rows {
            config.row_count = rows.max(1);
        }
        if let Some(ms) = self.tick_ms {
            config.tick_interval_ms = ms.clamp(10, 1000);
        }
        config.skip_unchanged_rows |= self.skip_unchanged;
        config.checkbox_column_only |= self.checkbox_column;
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();
    let mut user_config = AppConfig::load();
    cli.apply(&mut user_config);

    if cli.save_config {
        user_config.save()?;
        println!("{}", config::config_path().display());
        return Ok(());
    }

    // ── async channels ────────────────────────────────────────
    let (tx, mut events) = event::channel();
    let selector = GestureStateMachine::new(
        ListModel::new(user_config.row_count),
        TokioTicker::new(tx.clone()),
        user_config.selector_config(),
    );
    let mut state = AppState::new(selector, user_config);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stderr(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    spawn_event_reader(Duration::from_millis(100), tx);

    let result = run(&mut terminal, &mut state, &mut events).await;

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    result?;

    if cli.print_selection {
        for row in state.list().selected_rows() {
            println!("{row}");
        }
    }

    Ok(())
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    state: &mut AppState,
    events: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
) -> Result<()> {
    loop {
        let mut rows_area = Rect::default();
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area());
            let list = state.list();

            let block = Block::default()
                .title(format!(
                    " {} rows, {} selected, reload {} ",
                    list.len(),
                    list.selected_count(),
                    list.generation()
                ))
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());
            rows_area = block.inner(layout.list_area);

            let widget = ListWidget::new(list)
                .stroke(state.selector.stroke())
                .block(block);
            frame.render_widget(widget, layout.list_area);

            let hint = Paragraph::new(
                "drag: paint select | wheel/↑↓: scroll | r: reload | c: clear | q: quit",
            )
            .style(Theme::hint_style());
            frame.render_widget(hint, layout.hint_area);

            let label = stroke_label(state.selector.stroke(), state.selector.is_auto_scrolling());
            let (text, style) = match (&state.status_message, state.selector.stroke()) {
                (_, Some(_)) => (label, Theme::status_tracking_style()),
                (Some(msg), None) => (msg.clone(), Theme::status_bar_style()),
                (None, None) => (label, Theme::status_bar_style()),
            };
            frame.render_widget(Paragraph::new(text).style(style), layout.status_area);
        })?;
        handler::sync_viewport(state, rows_area);

        let Some(event) = events.recv().await else {
            break;
        };
        match event {
            AppEvent::Key(k) => handler::handle_key(state, k),
            AppEvent::Mouse(m) => handler::handle_mouse(state, m),
            AppEvent::AutoScroll(tick) => handler::handle_auto_scroll_tick(state, tick),
            AppEvent::Resize(_, _) | AppEvent::Tick => {}
        }
        handler::flush_scroll_requests(state);

        if state.should_quit {
            break;
        }
    }
    Ok(())
}
