//! Terminal portfolio: seven content sections over a 3D background whose
//! camera glides to a new vantage point whenever the section changes.

pub mod camera;
pub mod config;
pub mod content;
pub mod debounce;
pub mod error;
pub mod graphics;
pub mod input;
pub mod loader;
pub mod logging;
pub mod math;
pub mod navigation;
pub mod overlay;
pub mod scene;
pub mod section;
pub mod state;
pub mod terminal;
pub mod tween;
pub mod vertex;
pub mod widget;
