//! Procedural icons for the data scraper extension: a white table glyph
//! over a #667eea → #764ba2 gradient, at 16, 48 and 128 pixels.

pub mod error;
pub mod icon_gen;
pub mod inspect;
pub mod manifest;
pub mod render;

pub use error::{IconError, IconResult};
pub use icon_gen::{generate_icons, GenerateOptions, GenerationReport, ICON_SIZES};
pub use render::{render_icon, save_icon};

/// Fail early when the linked `image` build can't encode PNG.
pub fn check_capabilities() -> IconResult<()> {
    if !image::ImageFormat::Png.can_write() {
        return Err(IconError::MissingCapability(
            "PNG encoding (enable the `png` feature of the image crate)",
        ));
    }
    Ok(())
}
