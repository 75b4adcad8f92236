use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Input transitions observed since the previous frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    /// Raw events in arrival order.
    pub events: Vec<InputEvent>,

    /// Keys pressed this frame. Auto-repeat counts as a press.
    pub keys_pressed: HashSet<Key>,

    pub keys_released: HashSet<Key>,
}

impl InputFrame {
    pub fn apply(&mut self, ev: InputEvent) {
        if let InputEvent::Key { key, state, .. } = ev {
            match state {
                KeyState::Pressed => {
                    self.keys_pressed.insert(key);
                }
                KeyState::Released => {
                    self.keys_released.insert(key);
                }
            }
        }
        self.events.push(ev);
    }

    #[inline]
    pub fn pressed(&self, key: Key) -> bool {
        self.keys_pressed.contains(&key)
    }

    pub fn clear(&mut self) {
        self.events.clear();
        self.keys_pressed.clear();
        self.keys_released.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState) -> InputEvent {
        InputEvent::Key { key, state, repeat: false }
    }

    #[test]
    fn press_is_recorded() {
        let mut f = InputFrame::default();
        f.apply(key(Key::ArrowLeft, KeyState::Pressed));
        assert!(f.pressed(Key::ArrowLeft));
        assert!(!f.pressed(Key::ArrowRight));
        assert_eq!(f.events.len(), 1);
    }

    #[test]
    fn release_does_not_count_as_press() {
        let mut f = InputFrame::default();
        f.apply(key(Key::Space, KeyState::Released));
        assert!(!f.pressed(Key::Space));
        assert!(f.keys_released.contains(&Key::Space));
    }

    #[test]
    fn focus_events_are_kept_in_order() {
        let mut f = InputFrame::default();
        f.apply(InputEvent::Focused(false));
        f.apply(key(Key::Escape, KeyState::Pressed));
        assert_eq!(f.events[0], InputEvent::Focused(false));
        assert!(f.pressed(Key::Escape));
    }

    #[test]
    fn clear_drops_everything() {
        let mut f = InputFrame::default();
        f.apply(key(Key::Enter, KeyState::Pressed));
        f.clear();
        assert!(f.events.is_empty());
        assert!(!f.pressed(Key::Enter));
    }
}
