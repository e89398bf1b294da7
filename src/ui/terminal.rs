use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use log::{error, info};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::app::App;

type RosterTerminal = Terminal<CrosstermBackend<Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// What the loop does after one key press.
#[derive(Debug, PartialEq, Eq)]
enum LoopStep {
    Continue,
    /// Leave the loop; the label names the exit path for the log.
    Stop(&'static str),
}

/// Run the roster menus in the alternate screen.
///
/// The loop ends when the main menu's Exit entry is chosen, when `q` or `Esc`
/// is pressed on the main menu, or on `Ctrl+C` from anywhere. The terminal is
/// restored on every one of those paths and when drawing or reading fails.
pub fn run_app(app: &mut App) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(err) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(err).context("failed to enter alternate screen");
    }
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("failed to create terminal backend")?;
    info!("event=tui_start status=ok");

    let result = event_loop(&mut terminal, app);
    let restored = restore_terminal(&mut terminal);

    match &result {
        Ok(exit_path) => info!("event=tui_stop status=ok via={exit_path}"),
        Err(err) => error!("event=tui_stop status=error reason={err:#}"),
    }
    result.and(restored)
}

fn event_loop(terminal: &mut RosterTerminal, app: &mut App) -> Result<&'static str> {
    loop {
        terminal
            .draw(|frame| app.draw(frame))
            .context("failed to draw frame")?;

        if !event::poll(POLL_INTERVAL).context("event polling failed")? {
            continue;
        }
        if let Event::Key(key) = event::read().context("failed to read event")? {
            if let LoopStep::Stop(exit_path) = handle_key_event(app, key)? {
                return Ok(exit_path);
            }
        }
    }
}

/// Route one key event: the Ctrl shortcuts are handled here, every other key
/// press goes to the app's menu dispatcher.
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<LoopStep> {
    if key.kind != KeyEventKind::Press {
        return Ok(LoopStep::Continue);
    }
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Ok(LoopStep::Stop("ctrl_c")),
        (KeyModifiers::CONTROL, KeyCode::Char('o')) => {
            app.handle_ctrl_o()?;
            Ok(LoopStep::Continue)
        }
        (_, code) => Ok(if app.handle_key(code)? {
            LoopStep::Stop("menu")
        } else {
            LoopStep::Continue
        }),
    }
}

fn restore_terminal(terminal: &mut RosterTerminal) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal
        .show_cursor()
        .context("failed to restore cursor visibility")
}
