//! Keyboard input handling and interactive loop.

use std::io::Write;

use crossterm::event::{KeyCode, KeyEvent};

use crate::domain::node::NodeId;
use crate::domain::ports::render::RenderSink;
use crate::error::CascadeResult;

use super::menu::{TreeAction, TreeBrowser};
use super::render::RowStyle;

/// Convert a keyboard event to a TreeAction
pub fn key_to_action(key: KeyEvent) -> Option<TreeAction> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(TreeAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(TreeAction::Down),
        KeyCode::Char(' ') => Some(TreeAction::Check),
        KeyCode::Right | KeyCode::Char('l') => Some(TreeAction::Expand),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => Some(TreeAction::Collapse),
        KeyCode::Char('a') => Some(TreeAction::ExpandAll),
        KeyCode::Char('n') => Some(TreeAction::CollapseAll),
        KeyCode::Enter => Some(TreeAction::Confirm),
        KeyCode::Char('q') | KeyCode::Esc => Some(TreeAction::Quit),
        _ => None,
    }
}

/// Run the tree browser interactively.
///
/// Returns the checked ids if confirmed, `None` if quit.
pub fn run_interactive<S: RenderSink>(
    browser: &mut TreeBrowser<S>,
    style: &RowStyle,
    title: &str,
) -> CascadeResult<Option<Vec<NodeId>>> {
    use crossterm::{cursor, execute, terminal};

    terminal::enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, cursor::Hide)?;

    let result = event_loop(&mut stdout, browser, style, title);

    // Restore the terminal even when the loop failed
    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result
}

fn event_loop<S: RenderSink, W: Write>(
    out: &mut W,
    browser: &mut TreeBrowser<S>,
    style: &RowStyle,
    title: &str,
) -> CascadeResult<Option<Vec<NodeId>>> {
    use crossterm::event::{self, Event, KeyEventKind};

    draw(out, browser, style, title)?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        let Some(action) = key_to_action(key) else {
            continue;
        };
        match action {
            TreeAction::Confirm => return Ok(Some(browser.checked_ids())),
            TreeAction::Quit => return Ok(None),
            _ => {
                browser.handle_action(action)?;
                draw(out, browser, style, title)?;
            }
        }
    }
}

/// Redraw the whole screen; raw mode needs explicit carriage returns
fn draw<S: RenderSink, W: Write>(
    out: &mut W,
    browser: &TreeBrowser<S>,
    style: &RowStyle,
    title: &str,
) -> std::io::Result<()> {
    use crossterm::{cursor, queue, terminal};

    queue!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    write!(out, "{}\r\n\r\n", title)?;
    for line in browser.render(style).lines() {
        write!(out, "{}\r\n", line)?;
    }
    write!(out, "{}\r\n", style.glyphs.rule(63))?;
    for line in browser.render_status_bar(&style.glyphs).lines() {
        write!(out, "{}\r\n", line)?;
    }
    write!(out, "\r\n")?;
    for line in browser.render_help_bar(&style.glyphs).lines() {
        write!(out, "{}\r\n", line)?;
    }

    out.flush()
}
