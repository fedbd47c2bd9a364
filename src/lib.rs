//! Library exports for the sketchpad.
//!
//! The [`input::SketchState`] controller is host-independent: any front end
//! (the bundled script replayer, a GUI, tests) feeds it pointer events and
//! toolbar actions and redraws a [`draw::Canvas`] when it reports a change.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod script;
pub mod util;

pub use config::Config;
pub use input::SketchState;
