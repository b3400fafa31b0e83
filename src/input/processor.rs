//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking
//! with a first-event latch, the set of held movement keys) and the
//! key-binding map. It is the only thing that sits between raw window
//! events and the engine's [`execute`](crate::engine::SceneEngine::execute)
//! method.

use std::collections::HashSet;

use super::event::InputEvent;
use crate::camera::MoveDirection;
use crate::engine::SceneCommand;
use crate::options::KeybindingOptions;

/// Map a physical key string to a movement direction.
///
/// The movement layout is fixed (WASD plus E/Q for vertical); only discrete
/// actions go through the configurable binding map.
fn movement_for_key(key: &str) -> Option<MoveDirection> {
    match key {
        "KeyW" => Some(MoveDirection::Forward),
        "KeyS" => Some(MoveDirection::Backward),
        "KeyA" => Some(MoveDirection::Left),
        "KeyD" => Some(MoveDirection::Right),
        "KeyE" => Some(MoveDirection::Up),
        "KeyQ" => Some(MoveDirection::Down),
        _ => None,
    }
}

/// Converts raw window events into [`SceneCommand`]s.
///
/// Held movement keys are not commands: the event loop polls
/// [`held_directions`](Self::held_directions) once per frame and applies
/// them with that frame's delta time, so movement speed is frame-rate
/// independent.
pub struct InputProcessor {
    /// Last observed cursor position, `None` until the first event.
    ///
    /// The first cursor event after startup (or after the cursor is
    /// captured) only latches the position — emitting a delta for it would
    /// jerk the view by the full distance from the window origin.
    last_cursor: Option<(f32, f32)>,
    /// Movement keys currently held.
    held: HashSet<MoveDirection>,
    /// Key string → discrete action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::with_key_bindings(KeybindingOptions::default())
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            last_cursor: None,
            held: HashSet::new(),
            key_bindings,
        }
    }

    /// Movement directions currently held, for per-frame application.
    pub fn held_directions(
        &self,
    ) -> impl Iterator<Item = MoveDirection> + '_ {
        MoveDirection::ALL
            .into_iter()
            .filter(|direction| self.held.contains(direction))
    }

    /// Forget the last cursor position so the next cursor event re-latches.
    ///
    /// Call when the window regains focus or the cursor is re-captured.
    pub fn reset_cursor_latch(&mut self) {
        self.last_cursor = None;
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<SceneCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::Key { key, pressed } => {
                self.handle_key(&key, pressed)
            }
            InputEvent::Scroll { delta } => Some(SceneCommand::Zoom { delta }),
        }
    }

    /// Cursor moved — compute the delta and produce a look command.
    ///
    /// The y delta is sign-flipped here so that moving the mouse up pitches
    /// the camera up, per the camera's caller convention.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<SceneCommand> {
        let command = self.last_cursor.map(|(last_x, last_y)| {
            SceneCommand::Look {
                x_offset: x - last_x,
                y_offset: last_y - y,
            }
        });
        self.last_cursor = Some((x, y));
        command
    }

    /// Key press/release — track held movement keys, look up discrete
    /// actions on press.
    fn handle_key(&mut self, key: &str, pressed: bool) -> Option<SceneCommand> {
        if let Some(direction) = movement_for_key(key) {
            if pressed {
                let _ = self.held.insert(direction);
            } else {
                let _ = self.held.remove(&direction);
            }
            return None;
        }

        if pressed {
            return self
                .key_bindings
                .lookup(key)
                .map(SceneCommand::from_action);
        }
        None
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(x: f32, y: f32) -> InputEvent {
        InputEvent::CursorMoved { x, y }
    }

    fn key(name: &str, pressed: bool) -> InputEvent {
        InputEvent::Key {
            key: name.to_owned(),
            pressed,
        }
    }

    #[test]
    fn first_cursor_event_only_latches() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.handle_event(cursor(400.0, 300.0)), None);
        // Second event produces a delta with flipped y.
        let command = processor.handle_event(cursor(410.0, 290.0));
        assert_eq!(
            command,
            Some(SceneCommand::Look {
                x_offset: 10.0,
                y_offset: 10.0,
            })
        );
    }

    #[test]
    fn cursor_latch_reset_swallows_next_delta() {
        let mut processor = InputProcessor::new();
        let _ = processor.handle_event(cursor(0.0, 0.0));
        processor.reset_cursor_latch();
        assert_eq!(processor.handle_event(cursor(500.0, 500.0)), None);
    }

    #[test]
    fn movement_keys_track_held_state() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.handle_event(key("KeyW", true)), None);
        assert_eq!(processor.handle_event(key("KeyD", true)), None);
        let held: Vec<_> = processor.held_directions().collect();
        assert_eq!(held, vec![MoveDirection::Forward, MoveDirection::Right]);

        let _ = processor.handle_event(key("KeyW", false));
        let held: Vec<_> = processor.held_directions().collect();
        assert_eq!(held, vec![MoveDirection::Right]);
    }

    #[test]
    fn discrete_actions_fire_on_press_only() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(key("KeyP", true)),
            Some(SceneCommand::ToggleProjection)
        );
        assert_eq!(processor.handle_event(key("KeyP", false)), None);
        assert_eq!(
            processor.handle_event(key("Escape", true)),
            Some(SceneCommand::Quit)
        );
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut processor = InputProcessor::new();
        assert_eq!(processor.handle_event(key("KeyZ", true)), None);
    }

    #[test]
    fn scroll_becomes_zoom() {
        let mut processor = InputProcessor::new();
        assert_eq!(
            processor.handle_event(InputEvent::Scroll { delta: 1.5 }),
            Some(SceneCommand::Zoom { delta: 1.5 })
        );
    }
}
