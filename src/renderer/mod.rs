//! Text rendering module
//!
//! Frames are plain glyphs, rebuilt from the game state on every redraw.

pub mod frame;

pub use frame::{Glyphs, Renderer};
