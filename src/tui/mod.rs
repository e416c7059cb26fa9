//! Terminal User Interface for sharepop

pub mod input;
pub mod render;

use crate::app::{App, Event, Handler};
use anyhow::{Context, Result};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{DisableMouseCapture, EnableMouseCapture},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    layout::Rect,
};
use std::io;

/// Run the TUI application until the user quits
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored
pub fn run(mut app: App) -> Result<()> {
    let mut terminal = restore_on_error(setup_terminal(), restore_terminal)?;

    let event_handler = Handler::new(app.config.poll_interval_ms);
    let result = run_loop(&mut terminal, &mut app, &event_handler);

    restore_terminal()?;
    terminal.show_cursor()?;

    result
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
        .context("Failed to leave alternate screen")?;
    Ok(())
}

/// Undo a partial setup before handing its error back
fn restore_on_error<T>(setup: Result<T>, restore: impl FnOnce() -> Result<()>) -> Result<T> {
    match setup {
        Ok(value) => Ok(value),
        Err(e) => {
            if let Err(restore_err) = restore() {
                tracing::warn!(error = %restore_err, "Failed to restore terminal");
            }
            Err(e)
        }
    }
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &Handler,
) -> Result<()> {
    loop {
        let frame_area: Rect = terminal.draw(|frame| render::render(frame, app))?.area;

        match event_handler.next()? {
            Event::Key(key) => input::handle_key_event(app, key.code, key.modifiers),
            Event::Mouse(mouse) => input::handle_mouse_event(app, mouse, frame_area),
            Event::Tick | Event::Resize(_, _) => {}
        }

        if app.should_quit {
            tracing::info!("Quitting");
            break;
        }
    }

    Ok(())
}
