//! Owned RGBA pixel surface with clipped drawing and blit compositing.
//!
//! [`PixelSurface`] is the crate's core: a contiguous, row-major,
//! top-left-origin grid of [`Pixel`]s. Every drawing and blit operation is
//! clipped to the surface and total — nothing here fails after
//! construction. The only out-of-range policy is silent clipping: writes
//! outside the surface are dropped, reads return transparent black.
//!
//! Blits composite with the integer source-over arithmetic in the blend
//! module (round-to-nearest; full coverage reproduces source bytes
//! exactly).

use alloc::vec::Vec;
use core::fmt;

use imgref::{ImgRef, ImgVec};

use crate::blend::{blend_pixel, mul_u8, quantize_fade};
use crate::color::{Pixel, rgba};

/// An owned 2D grid of RGBA pixels.
///
/// The buffer always holds exactly `width * height` pixels, row-major from
/// the top-left. A surface with zero width or height is valid; every
/// operation on it is a no-op.
///
/// A surface has one owner and one mutator at a time. Copying pixels
/// between two surfaces goes through the destination's blit methods;
/// copying within a single surface (the only aliasing case) goes through
/// [`copy_within`](PixelSurface::copy_within).
///
/// # Example
///
/// ```
/// use tinygfx::{PixelSurface, rgb};
///
/// let mut s = PixelSurface::new(320, 240).unwrap();
/// s.clear(rgb(0x80, 0x90, 0xa0));
/// s.fill(10, 10, 50, 30, rgb(255, 0, 0));
/// assert_eq!(s.get(12, 12), rgb(255, 0, 0));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelSurface {
    /// Create a zero-initialized (transparent black) surface.
    ///
    /// Zero width or height yields a valid empty surface. Fails only when
    /// the pixel count overflows the address space or the allocator
    /// refuses the buffer.
    pub fn new(width: u32, height: u32) -> Result<Self, AllocationFailure> {
        let fail = AllocationFailure { width, height };
        let len = (width as u64)
            .checked_mul(height as u64)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or(fail)?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|_| fail)?;
        pixels.resize(len, rgba(0, 0, 0, 0));
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Adopt an existing pixel buffer.
    ///
    /// The buffer length must equal `width * height`.
    pub fn from_pixels(
        width: u32,
        height: u32,
        pixels: Vec<Pixel>,
    ) -> Result<Self, SurfaceSizeMismatch> {
        if pixels.len() as u64 != width as u64 * height as u64 {
            return Err(SurfaceSizeMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Surface width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Surface height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Whether the surface has no pixels (zero width or height).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// The raw pixel buffer, row-major from the top-left.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable access to the raw pixel buffer.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Borrow as an `imgref` view, or `None` for an empty surface
    /// (`imgref` rejects zero-size images).
    pub fn as_img(&self) -> Option<ImgRef<'_, Pixel>> {
        if self.is_empty() {
            return None;
        }
        Some(ImgRef::new(
            &self.pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Convert into an owned `imgref` buffer, or `None` for an empty
    /// surface.
    pub fn into_img(self) -> Option<ImgVec<Pixel>> {
        if self.is_empty() {
            return None;
        }
        Some(ImgVec::new(
            self.pixels,
            self.width as usize,
            self.height as usize,
        ))
    }

    // --- Pixel access ---

    /// Read the pixel at `(x, y)`.
    ///
    /// Out-of-range coordinates return transparent black,
    /// `rgba(0, 0, 0, 0)` — the same silent-clip policy as
    /// [`plot`](PixelSurface::plot).
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Pixel {
        if x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height {
            self.pixels[y as usize * self.width as usize + x as usize]
        } else {
            rgba(0, 0, 0, 0)
        }
    }

    /// Write `color` at `(x, y)`. Out-of-range writes are silently
    /// dropped.
    #[inline]
    pub fn plot(&mut self, x: i32, y: i32, color: Pixel) {
        self.plot_at(x as i64, y as i64, color);
    }

    #[inline]
    fn plot_at(&mut self, x: i64, y: i64, color: Pixel) {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            self.pixels[y as usize * self.width as usize + x as usize] = color;
        }
    }

    // --- Drawing ---

    /// Set every pixel to `color`.
    pub fn clear(&mut self, color: Pixel) {
        self.pixels.fill(color);
    }

    /// Fill the half-open rectangle `[x, x+w) × [y, y+h)` with `color`,
    /// clipped to the surface. Non-positive `w` or `h`, or a rectangle
    /// entirely outside the surface, draws nothing.
    pub fn fill(&mut self, x: i32, y: i32, w: i32, h: i32, color: Pixel) {
        self.fill_span(x as i64, y as i64, w as i64, h as i64, color);
    }

    fn fill_span(&mut self, x: i64, y: i64, w: i64, h: i64, color: Pixel) {
        if w <= 0 || h <= 0 {
            return;
        }
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i64);
        let y1 = (y + h).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let stride = self.width as usize;
        for row in y0 as usize..y1 as usize {
            self.pixels[row * stride + x0 as usize..row * stride + x1 as usize].fill(color);
        }
    }

    /// Draw the 1-pixel outline of the half-open rectangle
    /// `[x, x+w) × [y, y+h)` — top, bottom, left, and right edges only —
    /// with the same clipping and degenerate handling as
    /// [`fill`](PixelSurface::fill).
    pub fn rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Pixel) {
        if w <= 0 || h <= 0 {
            return;
        }
        let (x, y, w, h) = (x as i64, y as i64, w as i64, h as i64);
        self.fill_span(x, y, w, 1, color);
        if h > 1 {
            self.fill_span(x, y + h - 1, w, 1, color);
        }
        if h > 2 {
            self.fill_span(x, y + 1, 1, h - 2, color);
            if w > 1 {
                self.fill_span(x + w - 1, y + 1, 1, h - 2, color);
            }
        }
    }

    /// Draw a single-pixel line from `(x0, y0)` to `(x1, y1)` using
    /// Bresenham's algorithm, both endpoints included.
    ///
    /// Each visited pixel is clipped independently: out-of-bounds pixels
    /// are skipped and the line resumes if it re-enters the surface.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Pixel) {
        let (mut x, mut y) = (x0 as i64, y0 as i64);
        let (x1, y1) = (x1 as i64, y1 as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            self.plot_at(x, y, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    // --- Blitting ---

    /// Copy the half-open source rectangle `[sx, sx+w) × [sy, sy+h)` of
    /// `src` to `(dx, dy)`, overwriting destination color and alpha.
    ///
    /// Source and destination rectangles are clipped independently
    /// against their surfaces and only their intersection is copied: a
    /// partly off-surface source rectangle copies its in-bounds portion
    /// and leaves the corresponding destination pixels untouched.
    pub fn blit(&mut self, src: &PixelSurface, dx: i32, dy: i32, sx: i32, sy: i32, w: i32, h: i32) {
        let Some(c) = clip_blit(
            (src.width, src.height),
            (self.width, self.height),
            sx,
            sy,
            dx,
            dy,
            w,
            h,
        ) else {
            return;
        };
        let sw = src.width as usize;
        let dw = self.width as usize;
        for row in 0..c.h {
            let s = (c.sy + row) * sw + c.sx;
            let d = (c.dy + row) * dw + c.dx;
            self.pixels[d..d + c.w].copy_from_slice(&src.pixels[s..s + c.w]);
        }
    }

    /// Like [`blit`](PixelSurface::blit), but composites each source
    /// pixel over the destination with coverage
    /// `a' = src.a × alpha`, where `alpha` is a global fade multiplier.
    ///
    /// All four channels blend as
    /// `dst = (src·a' + dst·(255 − a') + 127) / 255` (round-to-nearest);
    /// `alpha = 1.0` with a fully opaque source copies it exactly.
    /// `alpha` is clamped to `[0, 1]`.
    pub fn blit_alpha(
        &mut self,
        src: &PixelSurface,
        dx: i32,
        dy: i32,
        sx: i32,
        sy: i32,
        w: i32,
        h: i32,
        alpha: f32,
    ) {
        let fade = quantize_fade(alpha);
        if fade == 0 {
            return;
        }
        let Some(c) = clip_blit(
            (src.width, src.height),
            (self.width, self.height),
            sx,
            sy,
            dx,
            dy,
            w,
            h,
        ) else {
            return;
        };
        let sw = src.width as usize;
        let dw = self.width as usize;
        for row in 0..c.h {
            let s = (c.sy + row) * sw + c.sx;
            let d = (c.dy + row) * dw + c.dx;
            for col in 0..c.w {
                let sp = src.pixels[s + col];
                let dp = &mut self.pixels[d + col];
                *dp = blend_pixel(sp, *dp, mul_u8(sp.a, fade));
            }
        }
    }

    /// Like [`blit_alpha`](PixelSurface::blit_alpha), but first multiplies
    /// each source pixel channel-wise by `tint` (RGB by `tint.rgb / 255`,
    /// alpha by `tint.a / 255`), then blends with the tinted alpha as the
    /// coverage. There is no separate fade multiplier.
    ///
    /// `tint = rgba(255, 255, 255, 255)` behaves identically to
    /// `blit_alpha` with `alpha = 1.0`.
    pub fn blit_tint(
        &mut self,
        src: &PixelSurface,
        dx: i32,
        dy: i32,
        sx: i32,
        sy: i32,
        w: i32,
        h: i32,
        tint: Pixel,
    ) {
        let Some(c) = clip_blit(
            (src.width, src.height),
            (self.width, self.height),
            sx,
            sy,
            dx,
            dy,
            w,
            h,
        ) else {
            return;
        };
        let sw = src.width as usize;
        let dw = self.width as usize;
        for row in 0..c.h {
            let s = (c.sy + row) * sw + c.sx;
            let d = (c.dy + row) * dw + c.dx;
            for col in 0..c.w {
                let sp = src.pixels[s + col];
                let tinted = Pixel {
                    r: mul_u8(sp.r, tint.r),
                    g: mul_u8(sp.g, tint.g),
                    b: mul_u8(sp.b, tint.b),
                    a: mul_u8(sp.a, tint.a),
                };
                let dp = &mut self.pixels[d + col];
                *dp = blend_pixel(tinted, *dp, tinted.a);
            }
        }
    }

    /// Opaque blit within a single surface.
    ///
    /// Borrow rules keep the aliasing case out of
    /// [`blit`](PixelSurface::blit), so it lives here: the clipped source
    /// region is staged through a temporary buffer, making overlapping
    /// rectangles behave exactly as if copied via an independent surface.
    pub fn copy_within(&mut self, sx: i32, sy: i32, dx: i32, dy: i32, w: i32, h: i32) {
        let Some(c) = clip_blit(
            (self.width, self.height),
            (self.width, self.height),
            sx,
            sy,
            dx,
            dy,
            w,
            h,
        ) else {
            return;
        };
        let stride = self.width as usize;
        let mut staged: Vec<Pixel> = Vec::with_capacity(c.w * c.h);
        for row in 0..c.h {
            let s = (c.sy + row) * stride + c.sx;
            staged.extend_from_slice(&self.pixels[s..s + c.w]);
        }
        for row in 0..c.h {
            let d = (c.dy + row) * stride + c.dx;
            self.pixels[d..d + c.w].copy_from_slice(&staged[row * c.w..(row + 1) * c.w]);
        }
    }
}

impl From<ImgVec<Pixel>> for PixelSurface {
    fn from(img: ImgVec<Pixel>) -> Self {
        let (buf, width, height) = img.as_ref().to_contiguous_buf();
        Self {
            width: width as u32,
            height: height as u32,
            pixels: buf.into_owned(),
        }
    }
}

/// A blit request clipped to both surfaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ClippedBlit {
    sx: usize,
    sy: usize,
    dx: usize,
    dy: usize,
    w: usize,
    h: usize,
}

/// Intersect a blit request with the source and destination bounds.
///
/// Returns `None` when the intersection is empty.
#[allow(clippy::too_many_arguments)]
fn clip_blit(
    src: (u32, u32),
    dst: (u32, u32),
    sx: i32,
    sy: i32,
    dx: i32,
    dy: i32,
    w: i32,
    h: i32,
) -> Option<ClippedBlit> {
    let (mut sx, mut sy) = (sx as i64, sy as i64);
    let (mut dx, mut dy) = (dx as i64, dy as i64);
    let (mut w, mut h) = (w as i64, h as i64);

    // Trim left/top so both rectangles start in bounds.
    let cut = (-sx).max(-dx).max(0);
    sx += cut;
    dx += cut;
    w -= cut;
    let cut = (-sy).max(-dy).max(0);
    sy += cut;
    dy += cut;
    h -= cut;

    // Trim right/bottom to both surfaces.
    w = w.min(src.0 as i64 - sx).min(dst.0 as i64 - dx);
    h = h.min(src.1 as i64 - sy).min(dst.1 as i64 - dy);
    if w <= 0 || h <= 0 {
        return None;
    }
    Some(ClippedBlit {
        sx: sx as usize,
        sy: sy as usize,
        dx: dx as usize,
        dy: dy as usize,
        w: w as usize,
        h: h as usize,
    })
}

/// Surface construction could not allocate the pixel buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AllocationFailure {
    /// Requested width.
    pub width: u32,
    /// Requested height.
    pub height: u32,
}

impl fmt::Display for AllocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot allocate a {}x{} pixel surface",
            self.width, self.height
        )
    }
}

impl core::error::Error for AllocationFailure {}

/// An adopted pixel buffer does not match the stated dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceSizeMismatch {
    /// Stated width.
    pub width: u32,
    /// Stated height.
    pub height: u32,
    /// Actual buffer length in pixels.
    pub len: usize,
}

impl fmt::Display for SurfaceSizeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "buffer of {} pixels does not match {}x{} surface",
            self.len, self.width, self.height
        )
    }
}

impl core::error::Error for SurfaceSizeMismatch {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{rgb, rgba};
    use alloc::vec;

    const SENTINEL: Pixel = rgba(9, 9, 9, 9);

    fn sentinel_surface(w: u32, h: u32) -> PixelSurface {
        let mut s = PixelSurface::new(w, h).unwrap();
        s.clear(SENTINEL);
        s
    }

    #[test]
    fn new_is_transparent_black() {
        let s = PixelSurface::new(3, 2).unwrap();
        assert_eq!(s.width(), 3);
        assert_eq!(s.height(), 2);
        assert_eq!(s.pixels().len(), 6);
        assert!(s.pixels().iter().all(|&p| p == rgba(0, 0, 0, 0)));
    }

    #[test]
    fn zero_sized_surfaces_are_valid() {
        for (w, h) in [(0, 0), (0, 5), (5, 0)] {
            let mut s = PixelSurface::new(w, h).unwrap();
            assert!(s.is_empty());
            // Every operation is a no-op, never a panic.
            s.clear(rgb(1, 2, 3));
            s.plot(0, 0, rgb(1, 2, 3));
            s.fill(-1, -1, 10, 10, rgb(1, 2, 3));
            s.rect(0, 0, 4, 4, rgb(1, 2, 3));
            s.line(-5, -5, 5, 5, rgb(1, 2, 3));
            s.copy_within(0, 0, 1, 1, 2, 2);
            assert_eq!(s.get(0, 0), rgba(0, 0, 0, 0));
        }
    }

    #[test]
    fn oversized_allocation_fails() {
        let err = PixelSurface::new(u32::MAX, u32::MAX).unwrap_err();
        assert_eq!(
            err,
            AllocationFailure {
                width: u32::MAX,
                height: u32::MAX
            }
        );
    }

    #[test]
    fn from_pixels_checks_length() {
        let ok = PixelSurface::from_pixels(2, 2, vec![SENTINEL; 4]);
        assert!(ok.is_ok());
        let err = PixelSurface::from_pixels(2, 2, vec![SENTINEL; 5]).unwrap_err();
        assert_eq!(
            err,
            SurfaceSizeMismatch {
                width: 2,
                height: 2,
                len: 5
            }
        );
    }

    #[test]
    fn plot_get_roundtrip() {
        let mut s = PixelSurface::new(4, 4).unwrap();
        let c = rgba(10, 20, 30, 40);
        s.plot(2, 3, c);
        assert_eq!(s.get(2, 3), c);
    }

    #[test]
    fn out_of_range_access_is_silent() {
        let mut s = sentinel_surface(2, 2);
        for (x, y) in [(-1, 0), (0, -1), (2, 0), (0, 2), (i32::MIN, i32::MAX)] {
            s.plot(x, y, rgb(255, 0, 0));
            assert_eq!(s.get(x, y), rgba(0, 0, 0, 0));
        }
        assert!(s.pixels().iter().all(|&p| p == SENTINEL));
    }

    #[test]
    fn clear_sets_every_pixel() {
        let mut s = PixelSurface::new(5, 3).unwrap();
        let c = rgba(1, 2, 3, 4);
        s.clear(c);
        for y in 0..3 {
            for x in 0..5 {
                assert_eq!(s.get(x, y), c);
            }
        }
    }

    #[test]
    fn fill_touches_exactly_the_clipped_rect() {
        let mut s = sentinel_surface(6, 5);
        let c = rgb(200, 0, 0);
        s.fill(-2, -1, 4, 3, c); // clips to [0, 2) x [0, 2)
        for y in 0..5 {
            for x in 0..6 {
                let expected = if x < 2 && y < 2 { c } else { SENTINEL };
                assert_eq!(s.get(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn fill_outside_or_degenerate_is_noop() {
        let mut s = sentinel_surface(4, 4);
        s.fill(10, 10, 3, 3, rgb(1, 1, 1));
        s.fill(-10, -10, 3, 3, rgb(1, 1, 1));
        s.fill(1, 1, 0, 5, rgb(1, 1, 1));
        s.fill(1, 1, 5, -1, rgb(1, 1, 1));
        assert!(s.pixels().iter().all(|&p| p == SENTINEL));
    }

    #[test]
    fn rect_draws_only_the_outline() {
        let mut s = sentinel_surface(8, 8);
        let c = rgb(0, 200, 0);
        s.rect(1, 1, 5, 4, c); // covers [1, 6) x [1, 5)
        for y in 0..8 {
            for x in 0..8 {
                let inside = (1..6).contains(&x) && (1..5).contains(&y);
                let on_edge = inside && (x == 1 || x == 5 || y == 1 || y == 4);
                let expected = if on_edge { c } else { SENTINEL };
                assert_eq!(s.get(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn rect_degenerate_and_thin() {
        let mut s = sentinel_surface(6, 6);
        s.rect(1, 1, 0, 4, rgb(1, 1, 1));
        s.rect(1, 1, 4, -2, rgb(1, 1, 1));
        assert!(s.pixels().iter().all(|&p| p == SENTINEL));

        // A 1-pixel-tall rect is a single row, drawn once.
        let c = rgb(0, 0, 200);
        s.rect(1, 2, 4, 1, c);
        for x in 1..5 {
            assert_eq!(s.get(x, 2), c);
        }
        assert_eq!(s.get(1, 1), SENTINEL);
        assert_eq!(s.get(1, 3), SENTINEL);
    }

    #[test]
    fn line_horizontal_exact_pixels() {
        let mut s = PixelSurface::new(5, 3).unwrap();
        let c = rgb(255, 255, 255);
        s.line(0, 0, 3, 0, c);
        let lit: Vec<(i32, i32)> = (0..3)
            .flat_map(|y| (0..5).map(move |x| (x, y)))
            .filter(|&(x, y)| s.get(x, y) == c)
            .collect();
        assert_eq!(lit, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn line_includes_both_endpoints() {
        let mut s = PixelSurface::new(6, 6).unwrap();
        let c = rgb(255, 0, 255);
        s.line(1, 1, 4, 4, c);
        assert_eq!(s.get(1, 1), c);
        assert_eq!(s.get(4, 4), c);
        // A perfect diagonal visits each step exactly once.
        for i in 1..=4 {
            assert_eq!(s.get(i, i), c);
        }
    }

    #[test]
    fn line_resumes_after_leaving_bounds() {
        // Endpoints outside the surface; the middle crosses it.
        let mut s = PixelSurface::new(3, 1).unwrap();
        let c = rgb(255, 255, 0);
        s.line(-2, 0, 4, 0, c);
        for x in 0..3 {
            assert_eq!(s.get(x, 0), c);
        }
    }

    #[test]
    fn line_single_point() {
        let mut s = sentinel_surface(3, 3);
        let c = rgb(7, 7, 7);
        s.line(1, 1, 1, 1, c);
        assert_eq!(s.get(1, 1), c);
        assert_eq!(
            s.pixels().iter().filter(|&&p| p == c).count(),
            1,
            "only the point itself"
        );
    }

    fn gradient_surface(w: u32, h: u32) -> PixelSurface {
        let mut s = PixelSurface::new(w, h).unwrap();
        for y in 0..h as i32 {
            for x in 0..w as i32 {
                s.plot(x, y, rgba(x as u8, y as u8, 100, 255));
            }
        }
        s
    }

    #[test]
    fn blit_copies_exactly_the_region() {
        let src = gradient_surface(4, 4);
        let mut dst = sentinel_surface(8, 8);
        dst.blit(&src, 3, 2, 1, 1, 2, 2);
        for y in 0..8 {
            for x in 0..8 {
                let expected = if (3..5).contains(&x) && (2..4).contains(&y) {
                    src.get(x - 3 + 1, y - 2 + 1)
                } else {
                    SENTINEL
                };
                assert_eq!(dst.get(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn blit_clips_source_rectangle() {
        let src = gradient_surface(3, 3);
        let mut dst = sentinel_surface(6, 6);
        // Source rect [-1, 2) x [-1, 2): only [0, 2) x [0, 2) exists, and
        // it lands shifted by the same amount.
        dst.blit(&src, 2, 2, -1, -1, 3, 3);
        for y in 0..6 {
            for x in 0..6 {
                let expected = if (3..5).contains(&x) && (3..5).contains(&y) {
                    src.get(x - 3, y - 3)
                } else {
                    SENTINEL
                };
                assert_eq!(dst.get(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn blit_clips_destination_rectangle() {
        let src = gradient_surface(4, 4);
        let mut dst = sentinel_surface(4, 4);
        dst.blit(&src, -2, 3, 0, 0, 4, 4);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if x < 2 && y == 3 {
                    src.get(x + 2, y - 3)
                } else {
                    SENTINEL
                };
                assert_eq!(dst.get(x, y), expected, "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn blit_disjoint_rects_is_noop() {
        let src = gradient_surface(4, 4);
        let mut dst = sentinel_surface(4, 4);
        dst.blit(&src, 10, 10, 0, 0, 4, 4);
        dst.blit(&src, 0, 0, 10, 10, 4, 4);
        dst.blit(&src, 0, 0, 0, 0, 0, 4);
        dst.blit(&src, 0, 0, 0, 0, 4, -1);
        assert!(dst.pixels().iter().all(|&p| p == SENTINEL));
    }

    #[test]
    fn blit_overwrites_alpha() {
        let mut src = PixelSurface::new(1, 1).unwrap();
        src.plot(0, 0, rgba(5, 6, 7, 8));
        let mut dst = sentinel_surface(1, 1);
        dst.blit(&src, 0, 0, 0, 0, 1, 1);
        assert_eq!(dst.get(0, 0), rgba(5, 6, 7, 8));
    }

    #[test]
    fn blit_alpha_zero_is_noop() {
        let src = gradient_surface(4, 4);
        let mut dst = sentinel_surface(4, 4);
        dst.blit_alpha(&src, 0, 0, 0, 0, 4, 4, 0.0);
        assert!(dst.pixels().iter().all(|&p| p == SENTINEL));
    }

    #[test]
    fn blit_alpha_one_opaque_source_is_exact_copy() {
        let src = gradient_surface(4, 4); // alpha 255 everywhere
        let mut dst = sentinel_surface(4, 4);
        dst.blit_alpha(&src, 0, 0, 0, 0, 4, 4, 1.0);
        assert_eq!(dst.pixels(), src.pixels());
    }

    #[test]
    fn blit_alpha_blends_all_channels() {
        let mut src = PixelSurface::new(1, 1).unwrap();
        src.plot(0, 0, rgba(255, 0, 100, 128));
        let mut dst = PixelSurface::new(1, 1).unwrap();
        dst.plot(0, 0, rgba(0, 255, 100, 64));
        dst.blit_alpha(&src, 0, 0, 0, 0, 1, 1, 1.0);
        // a' = 128: each channel is (src*128 + dst*127 + 127) / 255.
        let got = dst.get(0, 0);
        assert_eq!(got.r, 128);
        assert_eq!(got.g, 127);
        assert_eq!(got.b, 100);
        assert_eq!(got.a, 96);
    }

    #[test]
    fn blit_alpha_transparent_source_pixels_leave_dst() {
        let mut src = PixelSurface::new(2, 1).unwrap();
        src.plot(0, 0, rgba(50, 60, 70, 0));
        src.plot(1, 0, rgba(50, 60, 70, 255));
        let mut dst = sentinel_surface(2, 1);
        dst.blit_alpha(&src, 0, 0, 0, 0, 2, 1, 1.0);
        assert_eq!(dst.get(0, 0), SENTINEL);
        assert_eq!(dst.get(1, 0), rgba(50, 60, 70, 255));
    }

    #[test]
    fn blit_alpha_out_of_range_fade_is_clamped() {
        let src = gradient_surface(2, 2);
        let mut faded = sentinel_surface(2, 2);
        let mut full = sentinel_surface(2, 2);
        faded.blit_alpha(&src, 0, 0, 0, 0, 2, 2, 42.0);
        full.blit_alpha(&src, 0, 0, 0, 0, 2, 2, 1.0);
        assert_eq!(faded.pixels(), full.pixels());
    }

    #[test]
    fn blit_tint_white_matches_blit_alpha_one() {
        let mut src = PixelSurface::new(3, 3).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                src.plot(x, y, rgba(x as u8 * 40, y as u8 * 40, 77, (x + y) as u8 * 30));
            }
        }
        let mut a = sentinel_surface(3, 3);
        let mut b = sentinel_surface(3, 3);
        a.blit_tint(&src, 0, 0, 0, 0, 3, 3, rgba(255, 255, 255, 255));
        b.blit_alpha(&src, 0, 0, 0, 0, 3, 3, 1.0);
        assert_eq!(a.pixels(), b.pixels());
    }

    #[test]
    fn blit_tint_recolors_white_source() {
        let mut src = PixelSurface::new(1, 1).unwrap();
        src.plot(0, 0, rgba(255, 255, 255, 255));
        let mut dst = PixelSurface::new(1, 1).unwrap();
        dst.blit_tint(&src, 0, 0, 0, 0, 1, 1, rgba(200, 10, 0, 255));
        assert_eq!(dst.get(0, 0), rgba(200, 10, 0, 255));
    }

    #[test]
    fn blit_tint_alpha_scales_coverage() {
        let mut src = PixelSurface::new(1, 1).unwrap();
        src.plot(0, 0, rgba(255, 255, 255, 255));
        let mut dst = PixelSurface::new(1, 1).unwrap();
        dst.plot(0, 0, rgba(0, 0, 0, 255));
        // Tint alpha 0 means zero coverage: destination untouched.
        dst.blit_tint(&src, 0, 0, 0, 0, 1, 1, rgba(255, 255, 255, 0));
        assert_eq!(dst.get(0, 0), rgba(0, 0, 0, 255));
    }

    #[test]
    fn copy_within_overlap_matches_independent_copy() {
        let mut s = gradient_surface(6, 6);
        let reference = {
            let snapshot = s.clone();
            let mut r = s.clone();
            r.blit(&snapshot, 1, 1, 0, 0, 5, 5);
            r
        };
        s.copy_within(0, 0, 1, 1, 5, 5);
        assert_eq!(s, reference);
    }

    #[test]
    fn copy_within_reverse_overlap() {
        let mut s = gradient_surface(6, 1);
        let reference = {
            let snapshot = s.clone();
            let mut r = s.clone();
            r.blit(&snapshot, 0, 0, 1, 0, 5, 1);
            r
        };
        s.copy_within(1, 0, 0, 0, 5, 1);
        assert_eq!(s, reference);
    }

    #[test]
    fn clip_blit_trims_both_sides() {
        // Fully inside.
        assert_eq!(
            clip_blit((8, 8), (8, 8), 1, 1, 2, 2, 3, 3),
            Some(ClippedBlit {
                sx: 1,
                sy: 1,
                dx: 2,
                dy: 2,
                w: 3,
                h: 3
            })
        );
        // Negative source origin shifts both rects.
        assert_eq!(
            clip_blit((8, 8), (8, 8), -2, 0, 0, 0, 4, 4),
            Some(ClippedBlit {
                sx: 0,
                sy: 0,
                dx: 2,
                dy: 0,
                w: 2,
                h: 4
            })
        );
        // Destination overhang trims the copy width.
        assert_eq!(
            clip_blit((8, 8), (4, 4), 0, 0, 2, 0, 8, 8),
            Some(ClippedBlit {
                sx: 0,
                sy: 0,
                dx: 2,
                dy: 0,
                w: 2,
                h: 4
            })
        );
        // Empty intersection.
        assert_eq!(clip_blit((8, 8), (8, 8), 8, 0, 0, 0, 4, 4), None);
        assert_eq!(clip_blit((8, 8), (8, 8), 0, 0, 0, 0, 0, 4), None);
        assert_eq!(clip_blit((0, 0), (8, 8), 0, 0, 0, 0, 4, 4), None);
    }

    #[test]
    fn imgref_conversions_roundtrip() {
        let src = gradient_surface(3, 2);
        let img = src.clone().into_img().unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        let back = PixelSurface::from(img);
        assert_eq!(back, src);

        let view = src.as_img().unwrap();
        assert_eq!(view.buf()[0], src.get(0, 0));
    }

    #[test]
    fn empty_surface_has_no_img_view() {
        let s = PixelSurface::new(0, 3).unwrap();
        assert!(s.as_img().is_none());
        assert!(s.into_img().is_none());
    }
}
