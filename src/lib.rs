#[cfg(feature = "cli")]
pub mod cli;
pub mod color;
pub mod config;
pub mod palette;
pub mod render;
pub mod request;
#[cfg(feature = "server")]
pub mod server;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use color::{Rgb, WideRgb};
pub use palette::{DerivedPalette, LabelColor, derive};
pub use render::{render_placeholder, render_svg};
pub use request::{Flags, PlaceholderParams, PlaceholderRequest, ValidationError, validate};
pub use theme::Theme;
