//! Owned 2D pixel surface for software rendering
//!
//! A [`Surface`] is the canvas everything draws into: a contiguous buffer of
//! packed `0xAARRGGBB` pixels with an explicit row stride (pitch) that may
//! exceed the visible width. The coordinate origin is the bottom-left corner;
//! y grows upward, matching the full-screen blit in the presentation layer.
//!
//! All drawing operates on the packed representation with channel masks, not
//! on decomposed floats. Blits advance by `pitch - width` between rows so the
//! same inner loop serves surfaces with and without row padding.

use std::path::{Path, PathBuf};

use thiserror::Error;

use super::blend::blend_none;
use super::font;

/// One packed pixel: alpha, red, green, blue, 8 bits each (`0xAARRGGBB`).
pub type Pixel = u32;

/// Failure while importing or exporting surface contents.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// An owned rectangular pixel buffer with a possibly-larger row stride.
///
/// The default value is the empty surface (no buffer, zero dimensions);
/// every drawing operation requires a non-empty one. The buffer length is
/// always exactly `pitch * height`.
#[derive(Debug, Default)]
pub struct Surface {
    pixels: Vec<Pixel>,
    width: i32,
    height: i32,
    pitch: i32,
}

impl Clone for Surface {
    fn clone(&self) -> Self {
        Self {
            pixels: self.pixels.clone(),
            width: self.width,
            height: self.height,
            pitch: self.pitch,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.width = source.width;
        self.height = source.height;
        self.pitch = source.pitch;
        // Vec::clone_from reuses the existing allocation when it fits
        self.pixels.clone_from(&source.pixels);
    }
}

impl Surface {
    /// Allocate a surface with `pitch == width`.
    pub fn with_size(width: i32, height: i32) -> Self {
        Self::with_pitch(width, height, width)
    }

    /// Allocate a surface with an explicit row stride.
    pub fn with_pitch(width: i32, height: i32, pitch: i32) -> Self {
        assert!(width > 0 && height > 0 && pitch >= width);
        Self {
            pixels: vec![0; (pitch * height) as usize],
            width,
            height,
            pitch,
        }
    }

    /// Adopt an existing pixel buffer.
    pub fn from_buffer(width: i32, height: i32, pixels: Vec<Pixel>, pitch: i32) -> Self {
        assert!(width > 0 && height > 0 && pitch >= width);
        assert!(pixels.len() == (pitch * height) as usize);
        Self {
            pixels,
            width,
            height,
            pitch,
        }
    }

    /// Decode a PNG file into a new surface with `pitch == width`.
    ///
    /// PNG rows are stored top-to-bottom; the surface origin is bottom-left,
    /// so file row `height - 1 - y` becomes surface row `y`.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SurfaceError> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| SurfaceError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let rgba = decoded.into_rgba8();
        let (w, h) = rgba.dimensions();

        let mut pixels = vec![0; (w * h) as usize];
        for (y, row) in rgba.rows().enumerate() {
            let flipped = (h as usize - 1 - y) * w as usize;
            for (x, px) in row.enumerate() {
                let [r, g, b, a] = px.0;
                pixels[flipped + x] =
                    (a as Pixel) << 24 | (r as Pixel) << 16 | (g as Pixel) << 8 | b as Pixel;
            }
        }

        Ok(Self {
            pixels,
            width: w as i32,
            height: h as i32,
            pitch: w as i32,
        })
    }

    /// Encode the visible `width x height` region as a PNG file, flipping
    /// rows back to the top-to-bottom order PNG expects.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), SurfaceError> {
        debug_assert!(!self.is_empty());
        let path = path.as_ref();

        let mut rgba = image::RgbaImage::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            let row = ((self.height - 1 - y) * self.pitch) as usize;
            for x in 0..self.width {
                let p = self.pixels[row + x as usize];
                rgba.put_pixel(
                    x as u32,
                    y as u32,
                    image::Rgba([(p >> 16) as u8, (p >> 8) as u8, p as u8, (p >> 24) as u8]),
                );
            }
        }
        rgba.save_with_format(path, image::ImageFormat::Png)
            .map_err(|source| SurfaceError::Encode {
                path: path.to_path_buf(),
                source,
            })
    }

    /// True while no buffer is attached (the default state, or after
    /// [`take`](Self::take)).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Move the surface out, leaving the empty surface behind.
    pub fn take(&mut self) -> Surface {
        std::mem::take(self)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Row stride in pixels; at least `width`, anything beyond is padding.
    #[inline]
    pub fn pitch(&self) -> i32 {
        self.pitch
    }

    #[inline]
    pub fn buffer(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Raw byte view of the whole buffer for streaming-texture upload.
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: Pixel is a plain u32, so any byte pattern is valid, and
        // the length covers exactly the Vec's initialized contents.
        unsafe {
            std::slice::from_raw_parts(self.pixels.as_ptr().cast::<u8>(), self.pixels.len() * 4)
        }
    }

    /// Read one pixel. Coordinates are a debug-asserted precondition.
    #[inline]
    pub fn pixel(&self, x: i32, y: i32) -> Pixel {
        debug_assert!(x >= 0 && y >= 0 && x < self.width && y < self.height);
        self.pixels[(x + y * self.pitch) as usize]
    }

    /// Write one pixel. Coordinates are a debug-asserted precondition.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Pixel) {
        debug_assert!(!self.is_empty());
        debug_assert!(x >= 0 && y >= 0 && x < self.width && y < self.height);
        self.pixels[(x + y * self.pitch) as usize] = color;
    }

    /// Fill the surface with one color.
    ///
    /// When all four bytes of `color` are equal the whole buffer is filled
    /// flat, pitch padding included (the memset fast path). Otherwise rows
    /// are filled one by one and padding is left untouched. The two paths
    /// treat padding differently on purpose; bulk copies observe it.
    pub fn clear(&mut self, color: Pixel) {
        debug_assert!(!self.is_empty());

        let hue = color & 0xff;
        if hue == (color >> 8) & 0xff && hue == (color >> 16) & 0xff && hue == (color >> 24) & 0xff
        {
            self.pixels.fill(color);
            return;
        }

        let width = self.width as usize;
        for row in self.pixels.chunks_exact_mut(self.pitch as usize) {
            row[..width].fill(color);
        }
    }

    /// Render ASCII text with the built-in bitmap font. Bytes below 0x21
    /// advance the pen 4 px without drawing; bytes past the glyph table use
    /// the fallback glyph. No clipping: the caller ensures the string fits.
    pub fn print(&mut self, text: &str, x: i32, y: i32, color: Pixel) {
        debug_assert!(!self.is_empty());
        font::draw_str(&mut self.pixels, self.pitch, text, x, y, color);
    }

    /// Blit a whole surface, replacing destination pixels.
    pub fn draw(&mut self, image: &Surface, x: i32, y: i32) {
        self.draw_part(image, x, y, 0, 0, image.width, image.height);
    }

    /// Blit a source rectangle, replacing destination pixels.
    pub fn draw_part(
        &mut self,
        image: &Surface,
        x: i32,
        y: i32,
        src_x: i32,
        src_y: i32,
        src_width: i32,
        src_height: i32,
    ) {
        self.draw_part_blend(image, x, y, src_x, src_y, src_width, src_height, blend_none);
    }

    /// Blit a whole surface through a blend function.
    pub fn draw_blend<F>(&mut self, image: &Surface, x: i32, y: i32, blend: F)
    where
        F: Fn(Pixel, Pixel) -> Pixel,
    {
        self.draw_part_blend(image, x, y, 0, 0, image.width, image.height, blend);
    }

    /// The general blit: copy a source rectangle to (x, y), storing
    /// `blend(dst, src)` for every covered pixel.
    ///
    /// A negative destination origin shrinks the source rectangle and clamps
    /// the origin to the edge; overrunning the far edges shrinks the extent.
    /// Nothing clips against the source's own bounds beyond the debug
    /// assertion that the clipped rectangle still fits inside it.
    pub fn draw_part_blend<F>(
        &mut self,
        image: &Surface,
        x: i32,
        y: i32,
        src_x: i32,
        src_y: i32,
        src_width: i32,
        src_height: i32,
        blend: F,
    ) where
        F: Fn(Pixel, Pixel) -> Pixel,
    {
        debug_assert!(!image.is_empty());
        debug_assert!(!self.is_empty());

        let (mut x, mut y) = (x, y);
        let (mut src_x, mut src_y) = (src_x, src_y);
        let (mut src_width, mut src_height) = (src_width, src_height);

        // Clip left and bottom edge
        if x < 0 {
            src_x -= x;
            src_width += x;
            x = 0;
        }
        if y < 0 {
            src_y -= y;
            src_height += y;
            y = 0;
        }
        // Clip right and top edge
        if x + src_width > self.width {
            src_width = self.width - x;
        }
        if y + src_height > self.height {
            src_height = self.height - y;
        }

        debug_assert!(src_x + src_width <= image.width);
        debug_assert!(src_y + src_height <= image.height);

        if src_width <= 0 || src_height <= 0 {
            return;
        }

        let mut dst = (x + y * self.pitch) as usize;
        let mut src = (src_x + src_y * image.pitch) as usize;
        let adv_dst = (self.pitch - src_width) as usize;
        let adv_src = (image.pitch - src_width) as usize;
        for _ in 0..src_height {
            for _ in 0..src_width {
                self.pixels[dst] = blend(self.pixels[dst], image.pixels[src]);
                dst += 1;
                src += 1;
            }
            dst += adv_dst;
            src += adv_src;
        }
    }

    /// Walk from (x1, y1) to (x2, y2) in `max(|dx|, |dy|)` unit steps,
    /// plotting the truncated position at each step, endpoints included.
    /// Rejects the whole line if either endpoint is out of bounds.
    pub fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Pixel) {
        debug_assert!(!self.is_empty());

        let w = self.width as f32;
        let h = self.height as f32;
        if x1 < 0.0 || y1 < 0.0 || x1 >= w || y1 >= h || x2 < 0.0 || y2 < 0.0 || x2 >= w || y2 >= h
        {
            return;
        }

        let delta_x = x2 - x1;
        let delta_y = y2 - y1;
        let line_length = delta_x.abs().max(delta_y.abs());

        let step_count = line_length as usize;
        let step_x = delta_x / line_length;
        let step_y = delta_y / line_length;
        let (mut x, mut y) = (x1, y1);
        for _ in 0..=step_count {
            self.pixels[(x as i32 + (y as i32) * self.pitch) as usize] = color;
            x += step_x;
            y += step_y;
        }
    }

    /// 1-px rectangle outline. Corners are normalized first; each edge is
    /// clipped independently and skipped when fully outside. Degenerate
    /// rectangles draw their coincident edges exactly once.
    pub fn rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Pixel) {
        debug_assert!(!self.is_empty());

        let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };

        if x2 >= 0 && x1 < self.width {
            let x_start = x1.max(0) as usize;
            let x_end = x2.min(self.width - 1) as usize;
            // Bottom
            if y1 >= 0 && y1 < self.height {
                let row = (y1 * self.pitch) as usize;
                self.pixels[row + x_start..=row + x_end].fill(color);
            }
            // Top
            if y1 != y2 && y2 >= 0 && y2 < self.height {
                let row = (y2 * self.pitch) as usize;
                self.pixels[row + x_start..=row + x_end].fill(color);
            }
        }
        if y2 >= 0 && y1 < self.height {
            let y_start = y1.max(0);
            let y_end = y2.min(self.height - 1);
            // Left
            if x1 >= 0 && x1 < self.width {
                for y in y_start..=y_end {
                    self.pixels[(y * self.pitch + x1) as usize] = color;
                }
            }
            // Right
            if x1 != x2 && x2 >= 0 && x2 < self.width {
                for y in y_start..=y_end {
                    self.pixels[(y * self.pitch + x2) as usize] = color;
                }
            }
        }
    }

    /// Filled rectangle: corners normalized, all four coordinates clamped
    /// into bounds, every pixel of the (possibly empty) result written.
    pub fn bar(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Pixel) {
        debug_assert!(!self.is_empty());

        let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
        let x1 = x1.max(0);
        let y1 = y1.max(0);
        let x2 = x2.min(self.width - 1);
        let y2 = y2.min(self.height - 1);
        if x1 > x2 || y1 > y2 {
            return;
        }

        let span = (x2 + 1 - x1) as usize;
        let mut row = (y1 * self.pitch + x1) as usize;
        for _ in y1..=y2 {
            self.pixels[row..row + span].fill(color);
            row += self.pitch as usize;
        }
    }

    /// Resampling target. The scaling algorithm is intentionally absent;
    /// [`resize_from`](Self::resize_from) fails when reached.
    pub fn resize(&self, new_width: i32, new_height: i32) -> Surface {
        debug_assert!(!self.is_empty());
        let mut resized = Surface::with_size(new_width, new_height);
        resized.resize_from(self);
        resized
    }

    pub fn resize_from(&mut self, _source: &Surface) {
        debug_assert!(!self.is_empty());
        unimplemented!("surface resampling");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::blend::{blend_add, blend_alpha};

    #[test]
    fn test_allocation_properties() {
        let s = Surface::with_pitch(7, 5, 9);
        assert_eq!(s.width(), 7);
        assert_eq!(s.height(), 5);
        assert_eq!(s.pitch(), 9);
        assert_eq!(s.buffer().len(), 45);
        assert!(!s.is_empty());

        let s = Surface::with_size(3, 2);
        assert_eq!(s.pitch(), 3);
    }

    #[test]
    fn test_default_is_empty() {
        let s = Surface::default();
        assert!(s.is_empty());
        assert_eq!(s.width(), 0);
        assert_eq!(s.height(), 0);
        assert_eq!(s.pitch(), 0);
    }

    #[test]
    #[should_panic]
    fn test_pitch_below_width_rejected() {
        let _ = Surface::with_pitch(8, 8, 7);
    }

    #[test]
    fn test_from_buffer_adopts_pixels() {
        let s = Surface::from_buffer(2, 2, vec![1, 2, 3, 4, 5, 6], 3);
        assert_eq!(s.pixel(0, 0), 1);
        assert_eq!(s.pixel(1, 1), 5);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut s = Surface::with_size(4, 4);
        s.clear(0x11111111);
        let copy = s.clone();
        s.plot(2, 2, 0xffff0000);
        assert_eq!(copy.pixel(2, 2), 0x11111111);
    }

    #[test]
    fn test_clone_from_across_dimension_change() {
        let mut small = Surface::with_size(2, 2);
        let mut big = Surface::with_pitch(5, 4, 6);
        big.clear(0x42424242);
        small.clone_from(&big);
        assert_eq!(small.width(), 5);
        assert_eq!(small.pitch(), 6);
        assert_eq!(small.pixel(4, 3), 0x42424242);
        big.plot(0, 0, 0);
        assert_eq!(small.pixel(0, 0), 0x42424242);
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let mut s = Surface::with_size(4, 4);
        s.clear(0x77777777);
        let taken = s.take();
        assert!(s.is_empty());
        assert_eq!(s.width(), 0);
        assert!(!taken.is_empty());
        assert_eq!(taken.pixel(3, 3), 0x77777777);
    }

    #[test]
    fn test_clear_grayscale_covers_padding() {
        let mut s = Surface::with_pitch(3, 2, 5);
        s.clear(0x55555555);
        assert!(s.buffer().iter().all(|&p| p == 0x55555555));
    }

    #[test]
    fn test_clear_color_skips_padding() {
        let mut s = Surface::with_pitch(3, 2, 5);
        s.clear(0xff102030);
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(s.pixel(x, y), 0xff102030);
            }
        }
        // padding columns stay zeroed
        assert_eq!(s.buffer()[3], 0);
        assert_eq!(s.buffer()[4], 0);
        assert_eq!(s.buffer()[8], 0);
    }

    #[test]
    fn test_draw_copies_source_rect() {
        let mut src = Surface::with_size(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                src.plot(x, y, 0xff000000 | (x * 16 + y) as Pixel);
            }
        }
        let mut dst = Surface::with_size(10, 10);
        dst.draw(&src, 2, 2);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(dst.pixel(x + 2, y + 2), src.pixel(x, y));
            }
        }
        // outside the blit stays untouched
        assert_eq!(dst.pixel(1, 1), 0);
        assert_eq!(dst.pixel(6, 6), 0);
    }

    #[test]
    fn test_draw_part_blits_subrect() {
        let mut src = Surface::with_size(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                src.plot(x, y, (0x10 * x + y) as Pixel);
            }
        }
        let mut dst = Surface::with_size(8, 8);
        dst.draw_part(&src, 1, 1, 2, 1, 2, 3);
        assert_eq!(dst.pixel(1, 1), src.pixel(2, 1));
        assert_eq!(dst.pixel(2, 3), src.pixel(3, 3));
        assert_eq!(dst.pixel(3, 1), 0);
        assert_eq!(dst.pixel(1, 4), 0);
    }

    #[test]
    fn test_draw_clips_negative_destination() {
        let mut src = Surface::with_size(5, 1);
        for x in 0..5 {
            src.plot(x, 0, 0xff000000 | x as Pixel);
        }
        let mut dst = Surface::with_size(10, 1);
        dst.draw(&src, -2, 0);
        // only columns 0..2 written, sourced from source columns 2..4
        assert_eq!(dst.pixel(0, 0), 0xff000002);
        assert_eq!(dst.pixel(1, 0), 0xff000003);
        assert_eq!(dst.pixel(2, 0), 0xff000004);
        assert_eq!(dst.pixel(3, 0), 0);
    }

    #[test]
    fn test_draw_clips_far_edge() {
        let mut src = Surface::with_size(4, 4);
        src.clear(0xffffffff);
        let mut dst = Surface::with_size(6, 6);
        dst.draw(&src, 4, 4);
        assert_eq!(dst.pixel(4, 4), 0xffffffff);
        assert_eq!(dst.pixel(5, 5), 0xffffffff);
        assert_eq!(dst.pixel(3, 3), 0);
    }

    #[test]
    fn test_draw_fully_outside_is_noop() {
        let src = Surface::with_size(4, 4);
        let mut dst = Surface::with_size(6, 6);
        dst.clear(0x99999999);
        dst.draw(&src, -4, 0);
        dst.draw(&src, 0, 6);
        assert!(dst.buffer().iter().all(|&p| p == 0x99999999));
    }

    #[test]
    fn test_draw_blend_applies_strategy() {
        let mut src = Surface::with_size(2, 1);
        src.plot(0, 0, 0x01010101);
        src.plot(1, 0, 0x80ff0000);
        let mut dst = Surface::with_size(2, 1);
        dst.clear(0xffffffff);
        dst.draw_blend(&src, 0, 0, blend_add);
        assert_eq!(dst.pixel(0, 0), 0xffffffff);

        dst.clear(0x0);
        dst.draw_blend(&src, 0, 0, blend_alpha);
        // alpha 0x80 over black: roughly half the source red, alpha zeroed
        assert_eq!(dst.pixel(1, 0) >> 24, 0);
        assert!((dst.pixel(1, 0) & 0x00ff0000) > 0);
    }

    #[test]
    fn test_draw_respects_pitch_padding() {
        let mut src = Surface::with_pitch(2, 2, 4);
        src.plot(0, 0, 1);
        src.plot(1, 0, 2);
        src.plot(0, 1, 3);
        src.plot(1, 1, 4);
        let mut dst = Surface::with_pitch(3, 3, 7);
        dst.draw(&src, 1, 1);
        assert_eq!(dst.pixel(1, 1), 1);
        assert_eq!(dst.pixel(2, 1), 2);
        assert_eq!(dst.pixel(1, 2), 3);
        assert_eq!(dst.pixel(2, 2), 4);
        assert_eq!(dst.pixel(0, 0), 0);
    }

    #[test]
    fn test_line_out_of_bounds_is_noop() {
        let mut s = Surface::with_size(8, 8);
        s.clear(0x12121212);
        s.line(-1.0, 0.0, 4.0, 4.0, 0xffffffff);
        s.line(0.0, 0.0, 8.0, 4.0, 0xffffffff);
        assert!(s.buffer().iter().all(|&p| p == 0x12121212));
    }

    #[test]
    fn test_line_plots_both_endpoints() {
        let mut s = Surface::with_size(8, 8);
        s.line(1.0, 1.0, 5.0, 3.0, 0xffffffff);
        assert_eq!(s.pixel(1, 1), 0xffffffff);
        assert_eq!(s.pixel(5, 3), 0xffffffff);
    }

    #[test]
    fn test_zero_length_line_plots_one_pixel() {
        let mut s = Surface::with_size(4, 4);
        s.line(2.0, 2.0, 2.0, 2.0, 0xffffffff);
        assert_eq!(s.pixel(2, 2), 0xffffffff);
        assert_eq!(s.buffer().iter().filter(|&&p| p != 0).count(), 1);
    }

    #[test]
    fn test_rect_outline_only() {
        let mut s = Surface::with_size(6, 6);
        s.rect(1, 1, 4, 4, 0xffffffff);
        // corners
        assert_eq!(s.pixel(1, 1), 0xffffffff);
        assert_eq!(s.pixel(4, 1), 0xffffffff);
        assert_eq!(s.pixel(1, 4), 0xffffffff);
        assert_eq!(s.pixel(4, 4), 0xffffffff);
        // edge midpoints
        assert_eq!(s.pixel(2, 1), 0xffffffff);
        assert_eq!(s.pixel(1, 3), 0xffffffff);
        assert_eq!(s.pixel(4, 2), 0xffffffff);
        assert_eq!(s.pixel(3, 4), 0xffffffff);
        // interior untouched
        assert_eq!(s.pixel(2, 2), 0);
        assert_eq!(s.pixel(3, 3), 0);
    }

    #[test]
    fn test_rect_degenerate_covers_segment() {
        // zero width: a single vertical segment, nothing else
        let mut s = Surface::with_size(6, 6);
        s.rect(2, 1, 2, 4, 0xffffffff);
        for y in 0..6 {
            for x in 0..6 {
                let expect = x == 2 && (1..=4).contains(&y);
                assert_eq!(s.pixel(x, y) != 0, expect, "at ({x}, {y})");
            }
        }

        // 1x1: exactly one pixel
        let mut s = Surface::with_size(6, 6);
        s.rect(3, 3, 3, 3, 0xffffffff);
        assert_eq!(s.buffer().iter().filter(|&&p| p != 0).count(), 1);
        assert_eq!(s.pixel(3, 3), 0xffffffff);
    }

    #[test]
    fn test_rect_clips_edges_independently() {
        let mut s = Surface::with_size(4, 4);
        s.rect(-2, -2, 2, 2, 0xffffffff);
        // only the top and right edges intersect the surface
        assert_eq!(s.pixel(0, 2), 0xffffffff);
        assert_eq!(s.pixel(2, 0), 0xffffffff);
        assert_eq!(s.pixel(2, 2), 0xffffffff);
        assert_eq!(s.pixel(0, 0), 0);
        assert_eq!(s.pixel(1, 1), 0);
    }

    #[test]
    fn test_bar_fills_inclusive_rect() {
        let mut s = Surface::with_size(6, 6);
        s.bar(1, 1, 4, 4, 0xffaa5500);
        let mut filled = 0;
        for y in 0..6 {
            for x in 0..6 {
                if s.pixel(x, y) == 0xffaa5500 {
                    filled += 1;
                    assert!((1..=4).contains(&x) && (1..=4).contains(&y));
                }
            }
        }
        assert_eq!(filled, 16);
    }

    #[test]
    fn test_bar_clamps_and_normalizes() {
        let mut s = Surface::with_size(4, 4);
        s.bar(5, 5, -5, -5, 0xffffffff);
        assert!(s.buffer().iter().all(|&p| p == 0xffffffff));

        let mut s = Surface::with_size(4, 4);
        s.bar(6, 0, 9, 3, 0xffffffff);
        assert!(s.buffer().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_print_exclamation_layout() {
        // '!': width 1, height 7, bottom offset 2 -> dot, gap, 5-px stem
        let mut s = Surface::with_size(8, 12);
        s.print("!", 1, 0, 0xffffffff);
        assert_eq!(s.pixel(1, 2), 0xffffffff);
        assert_eq!(s.pixel(1, 3), 0);
        for y in 4..=8 {
            assert_eq!(s.pixel(1, y), 0xffffffff);
        }
        assert_eq!(s.pixel(2, 2), 0);
    }

    #[test]
    fn test_print_space_only_advances() {
        let mut s = Surface::with_size(8, 12);
        s.print("  ", 0, 0, 0xffffffff);
        assert!(s.buffer().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_png_round_trip() {
        let mut s = Surface::with_size(5, 4);
        for y in 0..4 {
            for x in 0..5 {
                let a = 0x40 + (x as Pixel) * 0x20;
                s.plot(x, y, a << 24 | (x as Pixel) << 16 | (y as Pixel) << 8 | 0xab);
            }
        }

        let path = std::env::temp_dir().join(format!("slate-roundtrip-{}.png", std::process::id()));
        s.save_to_file(&path).unwrap();
        let loaded = Surface::from_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded.width(), s.width());
        assert_eq!(loaded.height(), s.height());
        assert_eq!(loaded.pitch(), s.width());
        for y in 0..4 {
            for x in 0..5 {
                assert_eq!(loaded.pixel(x, y), s.pixel(x, y));
            }
        }
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let err = Surface::from_file("/nonexistent/slate.png").unwrap_err();
        assert!(matches!(err, SurfaceError::Decode { .. }));
    }
}
