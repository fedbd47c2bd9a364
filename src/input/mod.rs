//! Pointer handling and the sketch surface state machine.
//!
//! This module translates host pointer events and toolbar presses into
//! history changes. It owns the current tool settings (color, thickness,
//! sticker selection) and tracks whether the user is idle, drawing, or
//! hovering with a tool preview.

pub mod action;
pub mod events;
pub mod state;
pub mod tool;

pub use action::Action;
pub use events::MouseButton;
pub use state::{Change, DrawingState, SketchState};
pub use tool::Tool;
