use std::io;
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};

use rentride_core::catalog::Catalog;
use rentride_core::AppConfig;
use rentride_tui::{
    app::{App, Tab},
    event::{AppEvent, EventHandler},
    input::{apply_action, handle_key_event},
    widgets::{ContentWidget, StatusBarWidget, TabBarWidget, TripWidget},
    Theme,
};

/// Rows reserved for the tab bar slot
const TAB_BAR_ROWS: u16 = 3;

/// Run the TUI; `log_warning` is shown in the status bar and repeated on
/// stderr after the terminal is restored
pub async fn run(config: Arc<AppConfig>, log_warning: Option<String>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Rentride"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, config, log_warning.clone());

    // Restore terminal even if the loop failed
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(warning) = log_warning {
        eprintln!("{}", warning);
    }

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Arc<AppConfig>,
    log_warning: Option<String>,
) -> Result<()> {
    let theme = Theme::default();
    let mut app = App::new(config.clone(), Catalog::sample());
    app.status_message = log_warning;
    app.tab_bar.set_on_settled(|visibility| {
        tracing::debug!(?visibility, "Tab bar settled");
    });

    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);

    let mut viewport_height: u16 = 0;
    let mut last_frame = Instant::now();

    loop {
        // Advance the tab bar by the real time since the previous frame
        let now = Instant::now();
        app.on_frame(now.duration_since(last_frame));
        last_frame = now;

        terminal.draw(|frame| {
            let size = frame.area();

            // Content + tab bar + status bar
            let main_layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),
                    Constraint::Length(TAB_BAR_ROWS),
                    Constraint::Length(1),
                ])
                .split(size);

            if app.tab == Tab::Trips {
                let trip_layout = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Min(4), Constraint::Length(12)])
                    .split(main_layout[0]);
                ContentWidget::render(frame, trip_layout[0], &app, &theme);
                TripWidget::render(frame, trip_layout[1], &app, &theme);
                viewport_height = trip_layout[0].height;
            } else {
                ContentWidget::render(frame, main_layout[0], &app, &theme);
                viewport_height = main_layout[0].height;
            }

            TabBarWidget::render(frame, main_layout[1], &app, &theme);
            StatusBarWidget::render(frame, main_layout[2], &app, &theme);
        })?;

        // Each row takes two lines plus the list border
        let rows_visible = viewport_height.saturating_sub(2) / 2;

        if let Some(event) = event_handler.next(app.needs_fast_update())? {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    apply_action(&mut app, action, rows_visible);
                }
                AppEvent::Resize | AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
