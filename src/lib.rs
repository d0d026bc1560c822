#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod assets;
pub mod components;
pub mod geometry;
pub mod input;
pub mod interpolate;
pub mod palette;
pub mod session;
pub mod surface;
pub mod tool;

pub use app::PaintApp;
pub use input::{InputHandler, PointerEvent};
pub use session::DrawingSession;
pub use surface::{PaintSurface, StampSink};
pub use tool::{Style, Tool};
