//! Translation from terminal events to portfolio input.

use crate::navigation::NavKey;
use crate::section::Section;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Input the portfolio understands
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Input {
    Navigate(NavKey),
    Select(Section),
    /// Scroll gesture with a browser-style delta; positive scrolls down
    Wheel(f64),
    PointerMove { column: u16, row: u16 },
    Click { column: u16, row: u16 },
    NextProject,
    PreviousProject,
    Activate,
    Close,
    ToggleDebug,
    TogglePause,
    Resize { width: u16, height: u16 },
    Quit,
}

/// Maps a terminal event; `wheel_delta` is the delta reported per scroll notch.
pub fn map_event(event: &Event, wheel_delta: f64) -> Option<Input> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse, wheel_delta),
        Event::Resize(width, height) => Some(Input::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Input> {
    // Only presses; repeats from a held key still count as presses
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Input::Quit);
    }
    match key.code {
        KeyCode::Down | KeyCode::Right => Some(Input::Navigate(NavKey::Next)),
        KeyCode::Up | KeyCode::Left => Some(Input::Navigate(NavKey::Previous)),
        KeyCode::Tab => Some(Input::NextProject),
        KeyCode::BackTab => Some(Input::PreviousProject),
        KeyCode::Enter => Some(Input::Activate),
        KeyCode::Esc => Some(Input::Close),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'q' => Some(Input::Quit),
            'd' => Some(Input::ToggleDebug),
            'p' => Some(Input::TogglePause),
            digit @ '1'..='9' => digit
                .to_digit(10)
                .and_then(|n| Section::from_number(n as usize).ok())
                .map(Input::Select),
            _ => None,
        },
        _ => None,
    }
}

fn map_mouse(mouse: &MouseEvent, wheel_delta: f64) -> Option<Input> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => Some(Input::Wheel(wheel_delta)),
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => Some(Input::Wheel(-wheel_delta)),
        MouseEventKind::Moved | MouseEventKind::Drag(_) => Some(Input::PointerMove { column, row }),
        MouseEventKind::Down(MouseButton::Left) => Some(Input::Click { column, row }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 12,
            row: 4,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn arrows_navigate() {
        assert_eq!(map_event(&press(KeyCode::Down), 100.0), Some(Input::Navigate(NavKey::Next)));
        assert_eq!(map_event(&press(KeyCode::Right), 100.0), Some(Input::Navigate(NavKey::Next)));
        assert_eq!(map_event(&press(KeyCode::Up), 100.0), Some(Input::Navigate(NavKey::Previous)));
        assert_eq!(map_event(&press(KeyCode::Left), 100.0), Some(Input::Navigate(NavKey::Previous)));
    }

    #[test]
    fn releases_are_ignored() {
        let release = Event::Key(KeyEvent {
            code: KeyCode::Down,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(map_event(&release, 100.0), None);
    }

    #[test]
    fn number_keys_select_sections() {
        assert_eq!(map_event(&press(KeyCode::Char('1')), 100.0), Some(Input::Select(Section::Hero)));
        assert_eq!(
            map_event(&press(KeyCode::Char('7')), 100.0),
            Some(Input::Select(Section::Contact))
        );
        assert_eq!(map_event(&press(KeyCode::Char('8')), 100.0), None);
    }

    #[test]
    fn scroll_becomes_wheel_delta() {
        assert_eq!(map_event(&mouse(MouseEventKind::ScrollDown), 100.0), Some(Input::Wheel(100.0)));
        assert_eq!(map_event(&mouse(MouseEventKind::ScrollUp), 100.0), Some(Input::Wheel(-100.0)));
        assert_eq!(
            map_event(&mouse(MouseEventKind::Moved), 100.0),
            Some(Input::PointerMove { column: 12, row: 4 })
        );
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(MouseButton::Left)), 100.0),
            Some(Input::Click { column: 12, row: 4 })
        );
    }
}
