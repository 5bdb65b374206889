//! Input event routing

use glam::DVec2;
use hexpaint_ipc::{InputEvent, KeyboardEvent, PointerButton};
use tracing::{debug, info};

use super::HexCanvas;

impl HexCanvas {
    /// Route one input event. Every state change happens here, synchronously,
    /// and requests a render.
    ///
    /// Returns `false` for events the canvas ignores (unbound keys).
    pub fn handle_input(&mut self, event: InputEvent) -> bool {
        let handled = match event {
            InputEvent::PointerDown { button, x, y } => {
                self.pointer_down(button, DVec2::new(x, y));
                true
            }
            InputEvent::PointerMove { x, y } => {
                self.pointer_move(DVec2::new(x, y));
                true
            }
            InputEvent::PointerUp => {
                self.commit_gesture();
                true
            }
            InputEvent::PointerLeave => {
                self.commit_gesture();
                self.engine.clear_pointer();
                true
            }
            InputEvent::Wheel { delta_y, x, y } => {
                self.viewport.zoom(DVec2::new(x, y), delta_y);
                true
            }
            InputEvent::Key(key) => self.key(&key),
            InputEvent::Resize { width, height } => {
                self.display.width = width;
                self.display.height = height;
                debug!("HexCanvas: resized to {}x{}", width, height);
                true
            }
        };

        if handled {
            self.scheduler.request();
        }
        handled
    }

    fn pointer_down(&mut self, button: PointerButton, pos: DVec2) {
        let pans = match button {
            PointerButton::Primary => self.engine.tool().pans() || self.pan_key_held,
            PointerButton::Secondary | PointerButton::Middle => true,
        };
        if pans {
            self.engine.begin_pan(pos);
        } else {
            self.engine.start_stroke(pos, &self.viewport, &self.layout);
        }
    }

    fn pointer_move(&mut self, pos: DVec2) {
        if self.engine.is_panning() {
            self.engine.pan_to(pos, &mut self.viewport);
        } else {
            self.engine.continue_stroke(pos, &self.viewport, &self.layout);
        }
    }

    /// Finish the active gesture; a stroke always lands in the history.
    fn commit_gesture(&mut self) {
        if let Some(batch) = self.engine.release() {
            self.history.apply(batch);
        }
    }

    fn key(&mut self, event: &KeyboardEvent) -> bool {
        if event.key == self.config.pan_key {
            self.pan_key_held = event.pressed;
            return true;
        }
        if !event.pressed || !event.modifiers.ctrl {
            return false;
        }
        match event.key.to_ascii_lowercase().as_str() {
            "z" => {
                let undone = self.history.undo();
                info!("Undo (changed: {})", undone);
                true
            }
            "y" => {
                let redone = self.history.redo();
                info!("Redo (changed: {})", redone);
                true
            }
            _ => false,
        }
    }
}
