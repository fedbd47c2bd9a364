mod actions;
mod core;
mod mouse;
mod render;
#[cfg(test)]
mod tests;

pub use core::{Change, DrawingState, MAX_THICKNESS, MIN_THICKNESS, SketchState};
