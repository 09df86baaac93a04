use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Steer(Direction),
    Quit,
}

pub fn map_key(ev: &KeyEvent) -> Option<Input> {
    if is_ctrl_c(ev) {
        return Some(Input::Quit);
    }

    match ev.code {
        KeyCode::Char('w') | KeyCode::Up => Some(Input::Steer(North)),
        KeyCode::Char('a') | KeyCode::Left => Some(Input::Steer(West)),
        KeyCode::Char('s') | KeyCode::Down => Some(Input::Steer(South)),
        KeyCode::Char('d') | KeyCode::Right => Some(Input::Steer(East)),
        KeyCode::Esc | KeyCode::Char('q') => Some(Input::Quit),
        _ => None,
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd() {
        assert_eq!(map_key(&key(KeyCode::Up)), Some(Input::Steer(North)));
        assert_eq!(map_key(&key(KeyCode::Right)), Some(Input::Steer(East)));
        assert_eq!(map_key(&key(KeyCode::Down)), Some(Input::Steer(South)));
        assert_eq!(map_key(&key(KeyCode::Left)), Some(Input::Steer(West)));
        assert_eq!(map_key(&key(KeyCode::Char('w'))), Some(Input::Steer(North)));
        assert_eq!(map_key(&key(KeyCode::Char('d'))), Some(Input::Steer(East)));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Input::Quit));
        assert_eq!(map_key(&key(KeyCode::Esc)), Some(Input::Quit));
        assert_eq!(map_key(&key(KeyCode::Char('q'))), Some(Input::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(map_key(&key(KeyCode::Char('c'))), None);
        assert_eq!(map_key(&key(KeyCode::Enter)), None);
    }
}
