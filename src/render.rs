//! Icon rendering: gradient background plus the white table glyph.

use crate::error::{IconError, IconResult};
use image::{
    codecs::png::{CompressionType, FilterType as PngFilterType, PngEncoder},
    ColorType, ImageEncoder, Rgb, RgbImage,
};
use std::{
    io::{BufWriter, Write},
    path::Path,
};
use tempfile::NamedTempFile;

/// Gradient color of the first row (#667eea).
pub const GRADIENT_TOP: Rgb<u8> = Rgb([102, 126, 234]);

/// Gradient color the last row approaches (#764ba2).
pub const GRADIENT_BOTTOM: Rgb<u8> = Rgb([118, 75, 162]);

pub const GLYPH_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// Icons at or above this size get the full table grid; smaller ones a cross.
pub const DETAILED_MIN_SIZE: u32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// Three row lines and three column lines.
    Grid,
    /// A single plus sign for tiny icons.
    Cross,
}

impl Glyph {
    pub fn for_size(size: u32) -> Self {
        if size >= DETAILED_MIN_SIZE {
            Glyph::Grid
        } else {
            Glyph::Cross
        }
    }
}

/// Half-open pixel rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Glyph placement derived from the canvas size. Everything scales with
/// `size`; there are no fixed pixel offsets apart from bar thickness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphGeometry {
    pub size: u32,
    pub margin: u32,
    pub center: u32,
    pub row_height: u32,
    pub col_width: u32,
}

impl GlyphGeometry {
    pub fn new(size: u32) -> Self {
        let margin = size / 4;
        Self {
            size,
            margin,
            center: size / 2,
            row_height: size / 6,
            col_width: (size - 2 * margin) / 4,
        }
    }

    pub fn glyph(&self) -> Glyph {
        Glyph::for_size(self.size)
    }

    /// Width of a bar spanning `[margin, size - margin]` inclusive.
    fn span(&self) -> u32 {
        self.size - 2 * self.margin + 1
    }

    /// Horizontal bars, top to bottom.
    pub fn horizontal_bars(&self) -> Vec<Rect> {
        match self.glyph() {
            Glyph::Grid => (0..3)
                .map(|i| Rect {
                    x: self.margin,
                    y: self.center - self.row_height + i * self.row_height,
                    width: self.span(),
                    height: 2,
                })
                .collect(),
            Glyph::Cross => {
                let y = self.center.saturating_sub(2);
                vec![Rect {
                    x: self.margin,
                    y,
                    width: self.span(),
                    height: self.center + 2 - y,
                }]
            }
        }
    }

    /// Vertical bars, left to right.
    pub fn vertical_bars(&self) -> Vec<Rect> {
        match self.glyph() {
            Glyph::Grid => (1..4)
                .map(|i| Rect {
                    x: self.margin + i * self.col_width,
                    y: self.center - self.row_height,
                    width: 1,
                    // [center - row_height, center + 2 * row_height] inclusive
                    height: 3 * self.row_height + 1,
                })
                .collect(),
            Glyph::Cross => {
                let x = self.center.saturating_sub(2);
                vec![Rect {
                    x,
                    y: self.margin,
                    width: self.center + 2 - x,
                    height: self.span(),
                }]
            }
        }
    }
}

/// Color of row `row` on a canvas `size` rows tall.
pub fn gradient_color(row: u32, size: u32) -> Rgb<u8> {
    let t = row as f64 / size as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;

    Rgb([
        lerp(GRADIENT_TOP[0], GRADIENT_BOTTOM[0]),
        lerp(GRADIENT_TOP[1], GRADIENT_BOTTOM[1]),
        lerp(GRADIENT_TOP[2], GRADIENT_BOTTOM[2]),
    ])
}

/// Draw a `size`×`size` icon in memory.
pub fn render_icon(size: u32) -> IconResult<RgbImage> {
    if size == 0 {
        return Err(IconError::InvalidSize(size));
    }

    let mut canvas = RgbImage::new(size, size);

    for (y, row) in canvas.enumerate_rows_mut() {
        let color = gradient_color(y, size);
        for (_, _, pixel) in row {
            *pixel = color;
        }
    }

    let geometry = GlyphGeometry::new(size);
    log::debug!("Rendering {size}x{size} icon with {:?}", geometry);

    for rect in geometry
        .horizontal_bars()
        .into_iter()
        .chain(geometry.vertical_bars())
    {
        fill_rect(&mut canvas, rect, GLYPH_COLOR);
    }

    Ok(canvas)
}

/// Render an icon and write it to `path` as PNG, replacing any existing file.
///
/// The PNG is written to a temporary file next to `path` and renamed into
/// place, so a failed write never leaves a truncated icon behind.
pub fn save_icon(size: u32, path: &Path) -> IconResult<()> {
    let canvas = render_icon(size)?;
    write_png_atomic(&canvas, path)
}

fn fill_rect(canvas: &mut RgbImage, rect: Rect, color: Rgb<u8>) {
    let x_end = (rect.x + rect.width).min(canvas.width());
    let y_end = (rect.y + rect.height).min(canvas.height());

    for y in rect.y..y_end {
        for x in rect.x..x_end {
            canvas.put_pixel(x, y, color);
        }
    }
}

fn write_png_atomic(canvas: &RgbImage, path: &Path) -> IconResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| IconError::io(path, e))?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_png(canvas, &mut writer)?;
        writer.flush().map_err(|e| IconError::io(path, e))?;
    }

    // NamedTempFile is created 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| IconError::io(path, e))?;
    }

    tmp.persist(path).map_err(|e| IconError::io(path, e.error))?;
    Ok(())
}

// Encode RGB data as PNG with compression
fn write_png<W: Write>(canvas: &RgbImage, w: W) -> IconResult<()> {
    let encoder = PngEncoder::new_with_quality(w, CompressionType::Best, PngFilterType::Adaptive);
    encoder.write_image(
        canvas.as_raw(),
        canvas.width(),
        canvas.height(),
        ColorType::Rgb8,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_white(canvas: &RgbImage, x: u32, y: u32) -> bool {
        *canvas.get_pixel(x, y) == GLYPH_COLOR
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(matches!(render_icon(0), Err(IconError::InvalidSize(0))));
    }

    #[test]
    fn test_dimensions_match_requested_size() {
        for size in [1, 2, 5, 16, 47, 48, 100, 128] {
            let canvas = render_icon(size).unwrap();
            assert_eq!(canvas.dimensions(), (size, size), "size {size}");
        }
    }

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(gradient_color(0, 16), GRADIENT_TOP);
        assert_eq!(gradient_color(0, 128), GRADIENT_TOP);

        // 118 - 16/128, 75 + 51/128, 162 + 72/128
        assert_eq!(gradient_color(127, 128), Rgb([118, 75, 163]));
    }

    #[test]
    fn test_gradient_midpoint() {
        // t = 0.5: (110, 100.5, 198) rounded half away from zero
        assert_eq!(gradient_color(64, 128), Rgb([110, 101, 198]));
    }

    #[test]
    fn test_gradient_fills_whole_row() {
        let canvas = render_icon(128).unwrap();
        // Row 2 is above every glyph bar
        let expected = gradient_color(2, 128);
        for x in 0..128 {
            assert_eq!(*canvas.get_pixel(x, 2), expected);
        }
        assert_eq!(*canvas.get_pixel(0, 0), GRADIENT_TOP);
    }

    #[test]
    fn test_geometry_128() {
        let g = GlyphGeometry::new(128);
        assert_eq!((g.margin, g.center, g.row_height, g.col_width), (32, 64, 21, 16));

        let ys: Vec<u32> = g.horizontal_bars().iter().map(|r| r.y).collect();
        assert_eq!(ys, vec![43, 64, 85]);

        let xs: Vec<u32> = g.vertical_bars().iter().map(|r| r.x).collect();
        assert_eq!(xs, vec![48, 64, 80]);
    }

    #[test]
    fn test_grid_pixels_48() {
        let canvas = render_icon(48).unwrap();

        // Row lines at y = 16, 24, 32, two pixels tall, x in [12, 36]
        for y in [16, 17, 24, 25, 32, 33] {
            assert!(is_white(&canvas, 12, y), "row line at y={y}");
            assert!(is_white(&canvas, 36, y), "row line end at y={y}");
            assert!(!is_white(&canvas, 11, y));
            assert!(!is_white(&canvas, 37, y));
        }
        assert!(!is_white(&canvas, 14, 18));

        // Column lines at x = 18, 24, 30, one pixel wide, y in [16, 40]
        for x in [18, 24, 30] {
            assert!(is_white(&canvas, x, 16));
            assert!(is_white(&canvas, x, 40));
            assert!(!is_white(&canvas, x, 41));
            assert!(!is_white(&canvas, x + 1, 20));
        }
    }

    #[test]
    fn test_cross_pixels_16() {
        let canvas = render_icon(16).unwrap();

        // Horizontal arm: rows 6..10, x in [4, 12]
        for y in 6..10 {
            assert!(is_white(&canvas, 4, y));
            assert!(is_white(&canvas, 12, y));
            assert!(!is_white(&canvas, 3, y));
            assert!(!is_white(&canvas, 13, y));
        }
        assert!(!is_white(&canvas, 4, 5));
        assert!(!is_white(&canvas, 4, 10));

        // Vertical arm: columns 6..10, y in [4, 12]
        for x in 6..10 {
            assert!(is_white(&canvas, x, 4));
            assert!(is_white(&canvas, x, 12));
            assert!(!is_white(&canvas, x, 3));
            assert!(!is_white(&canvas, x, 13));
        }
    }

    #[test]
    fn test_branch_boundary() {
        assert_eq!(Glyph::for_size(47), Glyph::Cross);
        assert_eq!(Glyph::for_size(48), Glyph::Grid);
        assert_eq!(GlyphGeometry::new(47).horizontal_bars().len(), 1);
        assert_eq!(GlyphGeometry::new(48).horizontal_bars().len(), 3);
    }

    #[test]
    fn test_tiny_sizes_are_clipped() {
        // Bars extend past the edge for these sizes; must not panic
        for size in 1..8 {
            render_icon(size).unwrap();
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        assert_eq!(render_icon(48).unwrap(), render_icon(48).unwrap());
    }

    #[test]
    fn test_save_icon_missing_parent_dir() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("icon16.png");

        let err = save_icon(16, &path).unwrap_err();
        assert!(matches!(err, IconError::Io { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_save_icon_writes_rgb_png() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("icon48.png");

        save_icon(48, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(decoded.color(), ColorType::Rgb8);
        assert_eq!(decoded.to_rgb8(), render_icon(48).unwrap());
    }
}
