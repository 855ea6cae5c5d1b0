use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::keyboard::{Key, ModifiersState, NamedKey};

use crate::camera::CameraMove;
use crate::game::Action;

/// Something the application should do in response to a window event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Action(Action),
    /// Left click at a pixel position, top-left origin
    Pick { x: u32, y: u32 },
}

/// Map a pressed key to an action. Letter case selects between the
/// lower- and upper-case bindings; Ctrl turns `w a s d` into strafing.
pub fn action_for_key(key: &Key, modifiers: ModifiersState) -> Option<Action> {
    let text = match key {
        Key::Named(NamedKey::Escape) => return Some(Action::Quit),
        Key::Character(text) => text.as_str(),
        _ => return None,
    };

    if modifiers.control_key() {
        let movement = match text {
            "w" | "W" => CameraMove::Up,
            "s" | "S" => CameraMove::Down,
            "a" | "A" => CameraMove::Left,
            "d" | "D" => CameraMove::Right,
            _ => return None,
        };
        return Some(Action::Camera(movement));
    }

    let action = match text {
        "q" | "Q" => Action::Quit,
        "l" | "L" => Action::ToggleLight,
        "w" => Action::Camera(CameraMove::Forward),
        "s" => Action::Camera(CameraMove::Backward),
        "a" => Action::Camera(CameraMove::YawLeft),
        "d" => Action::Camera(CameraMove::YawRight),
        "W" => Action::Camera(CameraMove::PitchUp),
        "S" => Action::Camera(CameraMove::PitchDown),
        "A" => Action::Camera(CameraMove::RollLeft),
        "D" => Action::Camera(CameraMove::RollRight),
        _ => return None,
    };
    Some(action)
}

/// Adapter that turns winit window events into [`Input`]s.
/// Tracks the modifier state and the cursor, which key and click events
/// do not carry themselves.
#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    modifiers: ModifiersState,
    cursor: Option<(f64, f64)>,
}

impl InputAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_event(&mut self, event: &WindowEvent) -> Option<Input> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                None
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Some((position.x, position.y));
                None
            }
            WindowEvent::CursorLeft { .. } => {
                self.cursor = None;
                None
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                action_for_key(&event.logical_key, self.modifiers).map(Input::Action)
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => self.pick_at_cursor(),
            _ => None,
        }
    }

    fn pick_at_cursor(&self) -> Option<Input> {
        let (x, y) = self.cursor?;
        if x < 0.0 || y < 0.0 {
            return None;
        }
        Some(Input::Pick {
            x: x as u32,
            y: y as u32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(text: &str) -> Key {
        Key::Character(text.into())
    }

    #[test]
    fn test_case_selects_binding() {
        let none = ModifiersState::empty();
        assert_eq!(
            action_for_key(&key("w"), none),
            Some(Action::Camera(CameraMove::Forward))
        );
        assert_eq!(
            action_for_key(&key("W"), none),
            Some(Action::Camera(CameraMove::PitchUp))
        );
        assert_eq!(
            action_for_key(&key("A"), none),
            Some(Action::Camera(CameraMove::RollLeft))
        );
    }

    #[test]
    fn test_control_strafes() {
        let ctrl = ModifiersState::CONTROL;
        assert_eq!(action_for_key(&key("w"), ctrl), Some(Action::Camera(CameraMove::Up)));
        assert_eq!(action_for_key(&key("d"), ctrl), Some(Action::Camera(CameraMove::Right)));
        assert_eq!(action_for_key(&key("l"), ctrl), None);
    }

    #[test]
    fn test_quit_and_light() {
        let none = ModifiersState::empty();
        assert_eq!(action_for_key(&key("q"), none), Some(Action::Quit));
        assert_eq!(action_for_key(&key("Q"), none), Some(Action::Quit));
        assert_eq!(action_for_key(&Key::Named(NamedKey::Escape), none), Some(Action::Quit));
        assert_eq!(action_for_key(&key("l"), none), Some(Action::ToggleLight));
        assert_eq!(action_for_key(&key("x"), none), None);
        assert_eq!(action_for_key(&Key::Named(NamedKey::Space), none), None);
    }

    #[test]
    fn test_pick_needs_cursor_inside_window() {
        let mut adapter = InputAdapter::new();
        assert_eq!(adapter.pick_at_cursor(), None);

        adapter.cursor = Some((12.7, 30.2));
        assert_eq!(adapter.pick_at_cursor(), Some(Input::Pick { x: 12, y: 30 }));

        adapter.cursor = Some((-1.0, 5.0));
        assert_eq!(adapter.pick_at_cursor(), None);
    }
}
