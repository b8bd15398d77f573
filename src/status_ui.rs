use std::io::{self, IsTerminal};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::progress::ProgressSlot;

/// Drive the foreground status surface until the worker finishes. Falls back
/// to plain line output when stdout is not a terminal, or when the window
/// fails mid-run. The surface is a passive sink: it never ends the run early,
/// so the caller can always join the worker and launch the application.
pub fn run(progress: &ProgressSlot) {
    if io::stdout().is_terminal() {
        if let Err(err) = run_window(progress) {
            tracing::warn!("status window failed: {err:#}");
            run_headless(progress);
        }
    } else {
        run_headless(progress);
    }
}

fn run_window(progress: &ProgressSlot) -> Result<()> {
    let mut stdout = io::stdout();
    enable_raw_mode().context("enable raw mode")?;
    execute!(stdout, EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let res = run_loop(&mut terminal, progress);

    disable_raw_mode().ok();
    execute!(io::stdout(), LeaveAlternateScreen).ok();
    res
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    progress: &ProgressSlot,
) -> Result<()> {
    loop {
        let label = progress.current().label();
        terminal.draw(|f| draw(f, label)).context("draw")?;
        if progress.is_finished() {
            return Ok(());
        }

        // No cancellation is exposed mid-run; input is drained and dropped.
        if event::poll(Duration::from_millis(100)).context("poll")? {
            let _: Event = event::read().context("read event")?;
        }
    }
}

fn draw(f: &mut Frame, label: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(3),
            Constraint::Fill(1),
        ])
        .split(f.area());

    let status = Paragraph::new(label)
        .centered()
        .block(Block::default().borders(Borders::ALL).title("meridian updater"));
    f.render_widget(status, rows[1]);
}

fn run_headless(progress: &ProgressSlot) {
    let mut last = None;
    loop {
        let phase = progress.current();
        if last != Some(phase) {
            println!("{}", phase.label());
            last = Some(phase);
        }
        if progress.is_finished() {
            return;
        }
        std::thread::sleep(Duration::from_millis(100));
    }
}

#[cfg(test)]
#[path = "tests/status_ui_tests.rs"]
mod tests;
