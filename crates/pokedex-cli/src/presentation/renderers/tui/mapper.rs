//! Key bindings: crossterm key events to shell actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::shell::{Focus, ShellAction};

pub(crate) fn map_key(focus: Focus, key: KeyEvent) -> Option<ShellAction> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(ShellAction::Quit);
    }

    match focus {
        Focus::Search => match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(ShellAction::LeaveSearch),
            KeyCode::Backspace => Some(ShellAction::Backspace),
            KeyCode::Char('u') if ctrl => Some(ShellAction::ClearSearch),
            KeyCode::Char(c) if !ctrl => Some(ShellAction::TypeChar(c)),
            KeyCode::Down => Some(ShellAction::ScrollDown),
            KeyCode::Up => Some(ShellAction::ScrollUp),
            _ => None,
        },
        Focus::Browse => match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(ShellAction::Quit),
            KeyCode::Char('/') => Some(ShellAction::FocusSearch),
            KeyCode::Char('c') => Some(ShellAction::NextCategory),
            KeyCode::Char('C') => Some(ShellAction::PrevCategory),
            KeyCode::Right | KeyCode::Char('l') => Some(ShellAction::NextPage),
            KeyCode::Left | KeyCode::Char('h') => Some(ShellAction::PrevPage),
            KeyCode::Char(d @ '1'..='5') => Some(ShellAction::JumpToSlot(
                d.to_digit(10).unwrap_or(1) as usize,
            )),
            KeyCode::Down | KeyCode::Char('j') => Some(ShellAction::ScrollDown),
            KeyCode::Up | KeyCode::Char('k') => Some(ShellAction::ScrollUp),
            KeyCode::Home | KeyCode::Char('t') => Some(ShellAction::BackToTop),
            KeyCode::Char('r') => Some(ShellAction::Reload),
            _ => None,
        },
    }
}
