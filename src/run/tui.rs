use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::import::Dataset;
use crate::report::Report;
use crate::ui::app::{App, Screen};

pub(crate) fn as_tui(config: &Config) -> Result<()> {
    // Load before touching the terminal so errors print normally
    let dataset = Dataset::load(&config.data_dir).with_context(|| {
        format!(
            "Failed to load data from {} (use --data-dir or {})",
            config.data_dir.display(),
            crate::config::DATA_DIR_ENV
        )
    })?;
    let report = Report::build(dataset, chrono::Local::now().date_naive());
    let mut app = App::new(report, config.data_dir.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 message + 2 borders + 1 header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            handle_key(key, app);
        }
    }
    Ok(())
}

fn handle_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                app.move_down();
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                app.move_up();
            }
        }
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.goto_top(),
        KeyCode::Char('G') | KeyCode::End => app.goto_bottom(),
        KeyCode::Char('1') => app.screen = Screen::Insights,
        KeyCode::Char('2') => app.screen = Screen::Transactions,
        KeyCode::Tab => app.screen = app.screen.next(),
        KeyCode::BackTab => app.screen = app.screen.prev(),
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('r') => {
            if let Err(e) = app.reload() {
                tracing::warn!(error = %e, "Reload failed");
                app.set_status(format!("Reload failed: {e:#}"));
            }
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
}
