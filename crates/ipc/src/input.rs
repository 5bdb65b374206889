//! Input event types for pointer, wheel and keyboard.

use serde::{Deserialize, Serialize};

/// Pointer button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Keyboard input event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyboardEvent {
    pub key: String,
    pub pressed: bool,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    pub fn down(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            pressed: true,
            modifiers: Modifiers::default(),
        }
    }

    pub fn up(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            pressed: false,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.modifiers.ctrl = true;
        self
    }
}

/// Keyboard modifier keys state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Every event the canvas reacts to. Positions are surface pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InputEvent {
    PointerDown { button: PointerButton, x: f64, y: f64 },
    PointerMove { x: f64, y: f64 },
    PointerUp,
    PointerLeave,
    Wheel { delta_y: f64, x: f64, y: f64 },
    Key(KeyboardEvent),
    Resize { width: u32, height: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_event_json_shape() {
        let event = InputEvent::PointerDown {
            button: PointerButton::Secondary,
            x: 10.0,
            y: 20.5,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(
            json,
            r#"{"type":"PointerDown","data":{"button":"Secondary","x":10.0,"y":20.5}}"#
        );

        let parsed: InputEvent = serde_json::from_str(r#"{"type":"PointerLeave"}"#).unwrap();
        assert_eq!(parsed, InputEvent::PointerLeave);
    }

    #[test]
    fn test_keyboard_modifiers_default() {
        let parsed: InputEvent =
            serde_json::from_str(r#"{"type":"Key","data":{"key":"z","pressed":true}}"#).unwrap();
        assert_eq!(parsed, InputEvent::Key(KeyboardEvent::down("z")));
        assert!(KeyboardEvent::down("y").with_ctrl().modifiers.ctrl);
    }
}
