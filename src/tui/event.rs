use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::core::view::Target;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    Reload,
    ReloadPane(Target),
    ToggleAdmin,
    Resize(u16, u16),
}

/// Poll for an event, blocking up to `timeout`.
pub fn poll_event_timeout(timeout: Duration) -> Option<TuiEvent> {
    if !matches!(event::poll(timeout), Ok(true)) {
        return None;
    }
    map_event(event::read().ok()?)
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(Duration::ZERO)
}

fn map_event(event: Event) -> Option<TuiEvent> {
    match event {
        // Windows reports key releases too; only presses count.
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            log::debug!("Key event: {:?} with modifiers {:?}", key.code, key.modifiers);
            match (key.modifiers, key.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                (_, KeyCode::Char('r')) => Some(TuiEvent::Reload),
                (_, KeyCode::Char('1')) => Some(TuiEvent::ReloadPane(Target::Metrics)),
                (_, KeyCode::Char('2')) => Some(TuiEvent::ReloadPane(Target::Names)),
                (_, KeyCode::Char('3')) => Some(TuiEvent::ReloadPane(Target::Universities)),
                (_, KeyCode::Char('a')) => Some(TuiEvent::ToggleAdmin),
                _ => None,
            }
        }
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}
