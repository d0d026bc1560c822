//! The raster surface every stamp lands on.
//!
//! Stamps are immediate, independent writes with source-over compositing;
//! there is no batching, no retained shapes, and no undo. Clearing (or
//! resizing, which reallocates the buffer) discards all marks.

use egui::{Color32, ColorImage, Pos2};
use image::{Rgba, RgbaImage};
use log::debug;

use crate::geometry::{self, CurvePath};
use crate::tool::Style;

/// Line segments each heart curve is flattened into before filling.
const CURVE_FLATTEN_STEPS: usize = 16;

/// Receives stamp operations from the drawing session.
///
/// The session is the only mutating caller; tests substitute a recording
/// implementation to observe the stamp stream.
pub trait StampSink {
    /// Fill a disc of diameter `style.size()` at `center`.
    fn stamp_circle(&mut self, center: Pos2, style: &Style);
    /// Fill the closed polygon described by `vertices`.
    fn stamp_polygon(&mut self, vertices: &[Pos2], style: &Style);
    /// Fill the closed curve path.
    fn stamp_curves(&mut self, path: &CurvePath, style: &Style);
    /// Reset every pixel to fully transparent. Idempotent.
    fn clear(&mut self);
}

/// A pixel buffer in surface-local coordinates, origin top-left.
pub struct PaintSurface {
    pixels: RgbaImage,
    dirty: bool,
}

impl PaintSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
            dirty: true,
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Follow a new viewport size. A raster resize invalidates prior content,
    /// so this reallocates and wipes; same-size calls are no-ops.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == self.width() && height == self.height() {
            return;
        }
        debug!("surface resized to {width}x{height}, content wiped");
        self.pixels = RgbaImage::new(width, height);
        self.dirty = true;
    }

    /// True once any stamp or clear has landed since the last `take_dirty`.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Snapshot for texture upload. Pixels are straight (unmultiplied) alpha.
    pub fn as_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.width() as usize, self.height() as usize],
            self.pixels.as_raw(),
        )
    }

    #[cfg(test)]
    fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Source-over one pixel with a straight-alpha source color.
    fn blend_pixel(&mut self, x: u32, y: u32, color: Color32, alpha: f32) {
        let px = self.pixels.get_pixel_mut(x, y);
        let src_a = alpha.clamp(0.0, 1.0);
        let dst_a = px[3] as f32 / 255.0 * (1.0 - src_a);
        let out_a = src_a + dst_a;
        if out_a <= 0.0 {
            return;
        }
        let src = [color.r(), color.g(), color.b()];
        for channel in 0..3 {
            let blended =
                (src[channel] as f32 * src_a + px[channel] as f32 * dst_a) / out_a;
            px[channel] = blended.round() as u8;
        }
        px[3] = (out_a * 255.0).round() as u8;
    }

    /// Fill the pixels whose centers fall inside `[x0, x1]` on row `y`.
    fn fill_span(&mut self, y: u32, x0: f32, x1: f32, color: Color32, alpha: f32) {
        let width = self.width();
        if width == 0 {
            return;
        }
        let first = (x0 - 0.5).ceil().max(0.0) as u32;
        let last = (x1 - 0.5).floor().min(width as f32 - 1.0);
        if last < 0.0 {
            return;
        }
        for x in first..=last as u32 {
            self.blend_pixel(x, y, color, alpha);
        }
    }

    fn fill_disc(&mut self, center: Pos2, radius: f32, style: &Style) {
        if radius <= 0.0 || self.height() == 0 {
            return;
        }
        let top = (center.y - radius - 0.5).ceil().max(0.0) as u32;
        let bottom = (center.y + radius - 0.5).floor().min(self.height() as f32 - 1.0);
        if bottom < 0.0 {
            return;
        }
        for y in top..=bottom as u32 {
            let dy = y as f32 + 0.5 - center.y;
            let half_width_sq = radius * radius - dy * dy;
            if half_width_sq <= 0.0 {
                continue;
            }
            let half_width = half_width_sq.sqrt();
            self.fill_span(
                y,
                center.x - half_width,
                center.x + half_width,
                style.color(),
                style.opacity(),
            );
        }
    }

    /// Scanline fill of a closed polygon, even-odd rule, sampled at pixel
    /// centers.
    fn fill_polygon(&mut self, vertices: &[Pos2], style: &Style) {
        if vertices.len() < 3 || self.height() == 0 {
            return;
        }
        let min_y = vertices.iter().map(|v| v.y).fold(f32::INFINITY, f32::min);
        let max_y = vertices.iter().map(|v| v.y).fold(f32::NEG_INFINITY, f32::max);
        let top = (min_y - 0.5).ceil().max(0.0) as u32;
        let bottom = (max_y - 0.5).floor().min(self.height() as f32 - 1.0);
        if bottom < 0.0 {
            return;
        }

        let mut crossings: Vec<f32> = Vec::with_capacity(vertices.len());
        for y in top..=bottom as u32 {
            let sample = y as f32 + 0.5;
            crossings.clear();
            for i in 0..vertices.len() {
                let a = vertices[i];
                let b = vertices[(i + 1) % vertices.len()];
                if (a.y <= sample) != (b.y <= sample) {
                    let t = (sample - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(f32::total_cmp);
            for pair in crossings.chunks_exact(2) {
                self.fill_span(y, pair[0], pair[1], style.color(), style.opacity());
            }
        }
    }
}

impl Default for PaintSurface {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl StampSink for PaintSurface {
    fn stamp_circle(&mut self, center: Pos2, style: &Style) {
        let circle = geometry::circle_outline(center, style.size());
        self.fill_disc(circle.center, circle.radius, style);
        self.dirty = true;
    }

    fn stamp_polygon(&mut self, vertices: &[Pos2], style: &Style) {
        self.fill_polygon(vertices, style);
        self.dirty = true;
    }

    fn stamp_curves(&mut self, path: &CurvePath, style: &Style) {
        let polygon = path.flatten(CURVE_FLATTEN_STEPS);
        self.fill_polygon(&polygon, style);
        self.dirty = true;
    }

    fn clear(&mut self) {
        for px in self.pixels.pixels_mut() {
            *px = Rgba([0, 0, 0, 0]);
        }
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{heart_outline, star_outline};
    use egui::pos2;

    fn style(size: f32) -> Style {
        Style::new(Color32::from_rgb(0xFF, 0x6B, 0x6B), size)
    }

    fn opaque_pixel_count(surface: &PaintSurface) -> usize {
        (0..surface.height())
            .flat_map(|y| (0..surface.width()).map(move |x| (x, y)))
            .filter(|&(x, y)| surface.pixel(x, y)[3] > 0)
            .count()
    }

    #[test]
    fn test_circle_stamp_covers_the_center_at_stamp_opacity() {
        let mut surface = PaintSurface::new(64, 64);
        surface.stamp_circle(pos2(32.0, 32.0), &style(20.0));

        let px = surface.pixel(32, 32);
        assert_eq!(px[0], 0xFF);
        // 0.9 alpha over transparent
        assert_eq!(px[3], 229);
        // outside the 10px radius stays untouched
        assert_eq!(surface.pixel(32, 50)[3], 0);
    }

    #[test]
    fn test_overlapping_stamps_accumulate_opacity() {
        let mut surface = PaintSurface::new(32, 32);
        surface.stamp_circle(pos2(16.0, 16.0), &style(10.0));
        let once = surface.pixel(16, 16)[3];
        surface.stamp_circle(pos2(16.0, 16.0), &style(10.0));
        let twice = surface.pixel(16, 16)[3];
        assert!(twice > once);
        // 0.9 + 0.9 * 0.1
        assert_eq!(twice, 252);
    }

    #[test]
    fn test_star_stamp_fills_within_its_outer_radius() {
        let mut surface = PaintSurface::new(100, 100);
        let center = pos2(50.0, 50.0);
        surface.stamp_polygon(&star_outline(center, 20.0), &style(20.0));

        assert!(surface.pixel(50, 50)[3] > 0);
        assert!(opaque_pixel_count(&surface) > 0);
        for y in 0..100 {
            for x in 0..100 {
                if surface.pixel(x, y)[3] > 0 {
                    let dist = pos2(x as f32 + 0.5, y as f32 + 0.5).distance(center);
                    assert!(dist <= 21.0, "pixel ({x},{y}) outside the star radius");
                }
            }
        }
    }

    #[test]
    fn test_heart_stamp_marks_the_surface() {
        let mut surface = PaintSurface::new(120, 120);
        surface.stamp_curves(&heart_outline(pos2(60.0, 50.0), 40.0), &style(40.0));
        assert!(surface.pixel(60, 70)[3] > 0); // inside the bottom lobe area
        assert!(opaque_pixel_count(&surface) > 100);
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut surface = PaintSurface::new(16, 16);
        surface.stamp_circle(pos2(8.0, 8.0), &style(8.0));
        assert!(opaque_pixel_count(&surface) > 0);

        surface.clear();
        let after_one = surface.as_color_image();
        surface.clear();
        let after_two = surface.as_color_image();
        assert_eq!(opaque_pixel_count(&surface), 0);
        assert_eq!(after_one.pixels, after_two.pixels);
    }

    #[test]
    fn test_stamps_on_a_zero_sized_surface_are_noops() {
        let mut surface = PaintSurface::new(0, 0);
        surface.stamp_circle(pos2(5.0, 5.0), &style(10.0));
        surface.stamp_polygon(&star_outline(pos2(5.0, 5.0), 10.0), &style(10.0));
        surface.stamp_curves(&heart_outline(pos2(5.0, 5.0), 10.0), &style(10.0));
        surface.clear();
        assert_eq!(surface.width(), 0);
    }

    #[test]
    fn test_stamps_clip_at_the_surface_edge() {
        let mut surface = PaintSurface::new(20, 20);
        surface.stamp_circle(pos2(0.0, 0.0), &style(30.0));
        assert!(surface.pixel(0, 0)[3] > 0);
    }

    #[test]
    fn test_resize_wipes_content_and_same_size_is_a_noop() {
        let mut surface = PaintSurface::new(32, 32);
        surface.stamp_circle(pos2(16.0, 16.0), &style(10.0));
        surface.take_dirty();

        surface.resize(32, 32);
        assert!(!surface.take_dirty());
        assert!(opaque_pixel_count(&surface) > 0);

        surface.resize(48, 48);
        assert!(surface.take_dirty());
        assert_eq!(opaque_pixel_count(&surface), 0);
    }

    #[test]
    fn test_dirty_flag_tracks_stamping() {
        let mut surface = PaintSurface::new(8, 8);
        surface.take_dirty();
        assert!(!surface.take_dirty());
        surface.stamp_circle(pos2(4.0, 4.0), &style(4.0));
        assert!(surface.take_dirty());
    }
}
