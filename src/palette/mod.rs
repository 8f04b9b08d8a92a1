//! Color palette developer tool
//!
//! Assigns six semantic roles to preset or custom colors and writes the
//! resolved values to a style surface as CSS custom properties.

pub mod color;
pub mod export;
pub mod presets;
pub mod roles;
pub mod style;
pub mod tool;

pub use presets::PresetId;
pub use roles::Role;
pub use style::{RootStyle, StyleSurface};
pub use tool::ThemeTool;
