//! Stroke-font text rendering on top of the vector surface.
//!
//! Each glyph is a handful of polylines on a 4×6 grid (y grows downward) and is
//! stroked through [`VectorState`], so text needs no atlas and scales freely.
//! Covers digits, latin letters (lowercase is drawn as uppercase) and a little
//! punctuation; anything else advances like a space.

use glam::Vec2;

use crate::systems::vector::{VectorColor, VectorState};

/// Grid width of one glyph.
const GLYPH_W: f32 = 4.0;
/// Grid height of one glyph.
const GLYPH_H: f32 = 6.0;

type Stroke = &'static [(f32, f32)];

/// Style for a run of stroked text.
#[derive(Debug, Clone, Copy)]
pub struct TextStyle {
    /// Cap height in world units.
    pub size: f32,
    /// Horizontal advance as a fraction of `size`.
    pub spacing: f32,
    /// Stroke width in world units.
    pub line_width: f32,
    pub color: VectorColor,
}

impl TextStyle {
    pub fn new(size: f32, color: VectorColor) -> Self {
        Self {
            size,
            spacing: 0.9,
            line_width: (size * 0.12).max(1.0),
            color,
        }
    }

    /// Width of `text` laid out on one line.
    pub fn measure(&self, text: &str) -> f32 {
        let n = text.chars().count();
        if n == 0 {
            return 0.0;
        }
        let advance = self.size * self.spacing;
        let glyph = self.size * GLYPH_W / GLYPH_H;
        advance * (n - 1) as f32 + glyph
    }
}

/// Polylines for a character, or `None` for blanks and unknown characters.
pub fn glyph(c: char) -> Option<&'static [Stroke]> {
    let strokes: &'static [Stroke] = match c.to_ascii_uppercase() {
        '0' => &[&[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0), (0.0, 0.0)], &[(4.0, 0.0), (0.0, 6.0)]],
        '1' => &[&[(1.0, 1.0), (2.0, 0.0), (2.0, 6.0)], &[(1.0, 6.0), (3.0, 6.0)]],
        '2' => &[&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (0.0, 6.0), (4.0, 6.0)]],
        '3' => &[&[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0)], &[(0.0, 3.0), (4.0, 3.0)]],
        '4' => &[&[(0.0, 0.0), (0.0, 3.0), (4.0, 3.0)], &[(4.0, 0.0), (4.0, 6.0)]],
        '5' => &[&[(4.0, 0.0), (0.0, 0.0), (0.0, 3.0), (4.0, 3.0), (4.0, 6.0), (0.0, 6.0)]],
        '6' => &[&[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0), (4.0, 6.0), (4.0, 3.0), (0.0, 3.0)]],
        '7' => &[&[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0)]],
        '8' => &[&[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0), (0.0, 0.0)], &[(0.0, 3.0), (4.0, 3.0)]],
        '9' => &[&[(4.0, 3.0), (0.0, 3.0), (0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0)]],
        'A' => &[&[(0.0, 6.0), (0.0, 1.0), (1.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 6.0)], &[(0.0, 3.0), (4.0, 3.0)]],
        'B' => &[
            &[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 4.0), (3.0, 3.0), (0.0, 3.0)],
            &[(0.0, 0.0), (3.0, 0.0), (4.0, 1.0), (4.0, 2.0), (3.0, 3.0)],
        ],
        'C' => &[&[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0), (4.0, 6.0)]],
        'D' => &[&[(0.0, 0.0), (0.0, 6.0), (3.0, 6.0), (4.0, 5.0), (4.0, 1.0), (3.0, 0.0), (0.0, 0.0)]],
        'E' => &[&[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0), (4.0, 6.0)], &[(0.0, 3.0), (3.0, 3.0)]],
        'F' => &[&[(4.0, 0.0), (0.0, 0.0), (0.0, 6.0)], &[(0.0, 3.0), (3.0, 3.0)]],
        'G' => &[&[(4.0, 1.0), (4.0, 0.0), (0.0, 0.0), (0.0, 6.0), (4.0, 6.0), (4.0, 3.0), (2.0, 3.0)]],
        'H' => &[&[(0.0, 0.0), (0.0, 6.0)], &[(4.0, 0.0), (4.0, 6.0)], &[(0.0, 3.0), (4.0, 3.0)]],
        'I' => &[&[(1.0, 0.0), (3.0, 0.0)], &[(2.0, 0.0), (2.0, 6.0)], &[(1.0, 6.0), (3.0, 6.0)]],
        'J' => &[&[(4.0, 0.0), (4.0, 6.0), (0.0, 6.0), (0.0, 4.0)]],
        'K' => &[&[(0.0, 0.0), (0.0, 6.0)], &[(4.0, 0.0), (0.0, 3.0), (4.0, 6.0)]],
        'L' => &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0)]],
        'M' => &[&[(0.0, 6.0), (0.0, 0.0), (2.0, 3.0), (4.0, 0.0), (4.0, 6.0)]],
        'N' => &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 6.0), (4.0, 0.0)]],
        'O' => &[&[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0), (0.0, 0.0)]],
        'P' => &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]],
        'Q' => &[&[(0.0, 0.0), (4.0, 0.0), (4.0, 6.0), (0.0, 6.0), (0.0, 0.0)], &[(2.0, 4.0), (4.0, 6.0)]],
        'R' => &[&[(0.0, 6.0), (0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0), (4.0, 6.0)]],
        'S' => &[&[(4.0, 0.0), (0.0, 0.0), (0.0, 3.0), (4.0, 3.0), (4.0, 6.0), (0.0, 6.0)]],
        'T' => &[&[(0.0, 0.0), (4.0, 0.0)], &[(2.0, 0.0), (2.0, 6.0)]],
        'U' => &[&[(0.0, 0.0), (0.0, 6.0), (4.0, 6.0), (4.0, 0.0)]],
        'V' => &[&[(0.0, 0.0), (2.0, 6.0), (4.0, 0.0)]],
        'W' => &[&[(0.0, 0.0), (1.0, 6.0), (2.0, 3.0), (3.0, 6.0), (4.0, 0.0)]],
        'X' => &[&[(0.0, 0.0), (4.0, 6.0)], &[(4.0, 0.0), (0.0, 6.0)]],
        'Y' => &[&[(0.0, 0.0), (2.0, 3.0), (4.0, 0.0)], &[(2.0, 3.0), (2.0, 6.0)]],
        'Z' => &[&[(0.0, 0.0), (4.0, 0.0), (0.0, 6.0), (4.0, 6.0)]],
        '-' => &[&[(1.0, 3.0), (3.0, 3.0)]],
        '_' => &[&[(0.0, 6.0), (4.0, 6.0)]],
        '.' => &[&[(2.0, 5.4), (2.0, 6.0)]],
        ':' => &[&[(2.0, 1.4), (2.0, 2.0)], &[(2.0, 4.4), (2.0, 5.0)]],
        '!' => &[&[(2.0, 0.0), (2.0, 4.0)], &[(2.0, 5.4), (2.0, 6.0)]],
        '#' => &[
            &[(1.0, 0.0), (1.0, 6.0)],
            &[(3.0, 0.0), (3.0, 6.0)],
            &[(0.0, 2.0), (4.0, 2.0)],
            &[(0.0, 4.0), (4.0, 4.0)],
        ],
        _ => return None,
    };
    Some(strokes)
}

/// Stroke `text` with its top-left corner at `origin`. Returns the laid-out width.
pub fn draw_text(vectors: &mut VectorState, text: &str, origin: Vec2, style: &TextStyle) -> f32 {
    let scale = style.size / GLYPH_H;
    let advance = style.size * style.spacing;
    let mut points: Vec<Vec2> = Vec::with_capacity(8);
    for (i, c) in text.chars().enumerate() {
        let Some(strokes) = glyph(c) else { continue };
        let cell = origin + Vec2::new(advance * i as f32, 0.0);
        for stroke in strokes {
            points.clear();
            points.extend(stroke.iter().map(|&(x, y)| cell + Vec2::new(x, y) * scale));
            vectors.stroke_polyline(&points, style.line_width, style.color);
        }
    }
    style.measure(text)
}

/// Stroke `text` centred on `center` (both axes).
pub fn draw_text_centered(vectors: &mut VectorState, text: &str, center: Vec2, style: &TextStyle) {
    let origin = center - Vec2::new(style.measure(text), style.size) * 0.5;
    draw_text(vectors, text, origin, style);
}
