//! Bitmap-atlas text rendering.
//!
//! A [`Font`] is a glyph atlas surface plus a map from characters to
//! rectangles within it. Drawing text is nothing but a sequence of
//! tinted blits against a [`PixelSurface`], so atlases are typically
//! white-on-transparent and the draw color is supplied per call.
//!
//! Atlases loaded with [`Font::load`] use a delimiter-marked layout: the
//! atlas's top-left pixel defines the delimiter color, rows made
//! entirely of it separate glyph bands, and columns of it within a band
//! separate individual glyphs. Glyphs map to codepoints in the order the
//! selected [`Codepage`] defines.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt;

use once_cell::race::OnceBox;

use crate::color::Pixel;
use crate::surface::PixelSurface;

mod builtin;

/// Unicode scalars for the Windows-1252 bytes 0x80..=0x9F. Zero marks
/// the five bytes that encoding leaves undefined.
const CP1252_HIGH: [u32; 32] = [
    0x20AC, 0, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, 0x02C6, 0x2030, 0x0160, 0x2039,
    0x0152, 0, 0x017D, 0, 0, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, 0x02DC,
    0x2122, 0x0161, 0x203A, 0x0153, 0, 0x017E, 0x0178,
];

/// Which characters an atlas's glyphs stand for, in atlas order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u16)]
pub enum Codepage {
    /// Printable 7-bit ASCII: `' '` through `'~'`, 95 glyphs.
    Ascii = 0,
    /// ASCII plus the defined Windows-1252 characters for bytes
    /// 128..=255, in byte order, 218 glyphs.
    Windows1252 = 1252,
}

impl Codepage {
    /// The characters this codepage assigns glyphs to, in atlas order.
    pub fn codepoints(self) -> Vec<char> {
        let mut out: Vec<char> = (' '..='~').collect();
        if self == Codepage::Windows1252 {
            for byte in 0x80u32..=0xFF {
                let scalar = if byte < 0xA0 {
                    CP1252_HIGH[(byte - 0x80) as usize]
                } else {
                    byte
                };
                if scalar != 0
                    && let Some(c) = char::from_u32(scalar)
                {
                    out.push(c);
                }
            }
        }
        out
    }
}

/// One glyph's rectangle within its atlas.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// The character this glyph renders.
    pub codepoint: char,
    /// Left edge in atlas pixels.
    pub x: u32,
    /// Top edge in atlas pixels.
    pub y: u32,
    /// Width in pixels; also the advance when drawing.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

/// A bitmap font: an atlas surface and its glyph map.
#[derive(Clone, Debug)]
pub struct Font {
    atlas: PixelSurface,
    glyphs: BTreeMap<char, Glyph>,
    line_height: u32,
}

impl Font {
    /// Parse a delimiter-marked glyph atlas.
    ///
    /// The top-left pixel is the delimiter color. Rows consisting
    /// entirely of it split the atlas into bands; within each band,
    /// delimiter-only columns split the band into glyph cells. Cells are
    /// assigned to `codepage` characters left to right, top to bottom,
    /// and the cell count must match the codepage exactly.
    pub fn load(atlas: PixelSurface, codepage: Codepage) -> Result<Self, FontError> {
        if atlas.is_empty() {
            return Err(FontError::EmptyAtlas);
        }
        let delimiter = atlas.get(0, 0);
        let w = atlas.width() as i32;
        let h = atlas.height() as i32;

        let row_is_delim = |y: i32| (0..w).all(|x| atlas.get(x, y) == delimiter);
        let col_is_delim =
            |x: i32, y0: i32, y1: i32| (y0..y1).all(|y| atlas.get(x, y) == delimiter);

        let mut cells: Vec<(u32, u32, u32, u32)> = Vec::new();
        let mut y = 0;
        while y < h {
            if row_is_delim(y) {
                y += 1;
                continue;
            }
            // Band: maximal run of non-delimiter rows.
            let y0 = y;
            while y < h && !row_is_delim(y) {
                y += 1;
            }
            let mut x = 0;
            while x < w {
                if col_is_delim(x, y0, y) {
                    x += 1;
                    continue;
                }
                let x0 = x;
                while x < w && !col_is_delim(x, y0, y) {
                    x += 1;
                }
                cells.push((x0 as u32, y0 as u32, (x - x0) as u32, (y - y0) as u32));
            }
        }
        if cells.is_empty() {
            return Err(FontError::EmptyAtlas);
        }

        let codepoints = codepage.codepoints();
        if cells.len() != codepoints.len() {
            return Err(FontError::GlyphCount {
                expected: codepoints.len(),
                found: cells.len(),
            });
        }

        let mut glyphs = BTreeMap::new();
        let mut line_height = 0;
        for (&codepoint, &(x, y, w, h)) in codepoints.iter().zip(&cells) {
            line_height = line_height.max(h);
            glyphs.insert(
                codepoint,
                Glyph {
                    codepoint,
                    x,
                    y,
                    w,
                    h,
                },
            );
        }
        Ok(Self {
            atlas,
            glyphs,
            line_height,
        })
    }

    /// The embedded 8x8 ASCII font.
    ///
    /// Built on first use, then shared; reading it from any thread is
    /// fine.
    pub fn builtin() -> &'static Font {
        static BUILTIN: OnceBox<Font> = OnceBox::new();
        BUILTIN.get_or_init(|| Box::new(builtin::build()))
    }

    /// The glyph atlas.
    pub fn atlas(&self) -> &PixelSurface {
        &self.atlas
    }

    /// The glyph for `c`, if the font has one.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c)
    }

    /// Height of one text line in pixels.
    pub fn line_height(&self) -> u32 {
        self.line_height
    }

    fn drawable(&self, c: char) -> Option<&Glyph> {
        self.glyphs.get(&c).or_else(|| self.glyphs.get(&'?'))
    }

    /// The pixel size of `text` as [`print`](Font::print) would draw it:
    /// the widest line by the number of lines times the line height.
    ///
    /// `'\n'` starts a new line. Characters without a glyph measure as
    /// `'?'` (or zero when the font lacks one too). Empty text is one
    /// empty line: `(0, line_height)`.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let mut widest = 0;
        let mut line = 0;
        let mut lines = 1u32;
        for c in text.chars() {
            if c == '\n' {
                lines += 1;
                line = 0;
            } else if let Some(g) = self.drawable(c) {
                line += g.w;
                widest = widest.max(line);
            }
        }
        (widest, lines * self.line_height)
    }

    /// Draw `text` onto `dest` with its top-left at `(x, y)`, tinting
    /// every glyph by `color`.
    ///
    /// Each glyph is one tinted blit from the atlas; a
    /// white-on-transparent atlas therefore renders in `color`, and the
    /// usual blit clipping applies at the surface edges. Characters
    /// without a glyph draw as `'?'` when the font has one, otherwise
    /// they are skipped.
    pub fn print(&self, dest: &mut PixelSurface, x: i32, y: i32, color: Pixel, text: &str) {
        let mut cx = x;
        let mut cy = y;
        for c in text.chars() {
            if c == '\n' {
                cx = x;
                cy += self.line_height as i32;
                continue;
            }
            let Some(g) = self.drawable(c) else {
                continue;
            };
            dest.blit_tint(
                &self.atlas,
                cx,
                cy,
                g.x as i32,
                g.y as i32,
                g.w as i32,
                g.h as i32,
                color,
            );
            cx += g.w as i32;
        }
    }
}

/// Atlas parsing failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontError {
    /// The atlas has no pixels, or no glyph cells between delimiters.
    EmptyAtlas,
    /// The atlas's glyph count does not match the codepage.
    GlyphCount {
        /// Characters the codepage assigns.
        expected: usize,
        /// Glyph cells found in the atlas.
        found: usize,
    },
}

impl fmt::Display for FontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontError::EmptyAtlas => write!(f, "font atlas contains no glyphs"),
            FontError::GlyphCount { expected, found } => write!(
                f,
                "font atlas has {found} glyphs, codepage defines {expected}"
            ),
        }
    }
}

impl core::error::Error for FontError {}
