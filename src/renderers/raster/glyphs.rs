use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Transform};
use ttf_parser::{Face, GlyphId, OutlineBuilder};

use super::bitmap_font;
use super::fonts::{FontFace, LoadedFont};
use crate::layout::Rgb;

/// Convierte contornos en unidades de fuente (y hacia arriba) a
/// coordenadas del lienzo sobre la línea base.
struct GlyphSink<'a> {
    builder: &'a mut PathBuilder,
    x: f32,
    baseline: f32,
    scale: f32,
}

impl GlyphSink<'_> {
    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        (self.x + x * self.scale, self.baseline - y * self.scale)
    }
}

impl OutlineBuilder for GlyphSink<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.map(x, y);
        self.builder.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x, y) = self.map(x, y);
        self.builder.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.map(x1, y1);
        let (x2, y2) = self.map(x2, y2);
        let (x, y) = self.map(x, y);
        self.builder.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.builder.close();
    }
}

fn glyph_for(face: &Face<'_>, c: char) -> GlyphId {
    face.glyph_index(c).unwrap_or(GlyphId(0))
}

fn outline_width(font: &LoadedFont, face: &Face<'_>, text: &str, size: f32) -> f32 {
    let scale = size / font.units_per_em;
    text.chars()
        .map(|c| f32::from(face.glyph_hor_advance(glyph_for(face, c)).unwrap_or(0)) * scale)
        .sum()
}

/// Ancho del texto en píxeles.
pub fn measure(face: &FontFace, text: &str, size: f32) -> f32 {
    match face {
        FontFace::Outline(font) => match font.face() {
            Some(parsed) => outline_width(font, &parsed, text, size),
            None => bitmap_font::measure(text, size),
        },
        FontFace::Bitmap => bitmap_font::measure(text, size),
    }
}

/// Dibuja una línea de texto con su borde superior en `top`.
pub fn draw_text(
    pixmap: &mut Pixmap,
    face: &FontFace,
    text: &str,
    x: f32,
    top: f32,
    size: f32,
    color: Rgb,
) {
    let mut builder = PathBuilder::new();

    let outline = match face {
        FontFace::Outline(font) => font.face().map(|parsed| (font, parsed)),
        FontFace::Bitmap => None,
    };

    match outline {
        Some((font, parsed)) => {
            let scale = size / font.units_per_em;
            let mut sink = GlyphSink {
                builder: &mut builder,
                x,
                baseline: top + font.ascender * scale,
                scale,
            };
            for c in text.chars() {
                let id = glyph_for(&parsed, c);
                parsed.outline_glyph(id, &mut sink);
                sink.x += f32::from(parsed.glyph_hor_advance(id).unwrap_or(0)) * scale;
            }
        }
        None => bitmap_font::push_text(&mut builder, text, x, top, size),
    }

    let Some(path) = builder.finish() else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, 255);
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::palette::INK;

    fn dark_pixels(pixmap: &Pixmap) -> usize {
        pixmap
            .data()
            .chunks_exact(4)
            .filter(|px| px[3] > 0 && px[0] < 128)
            .count()
    }

    #[test]
    fn bitmap_text_marks_pixels() {
        let mut pixmap = Pixmap::new(100, 40).unwrap();
        draw_text(&mut pixmap, &FontFace::Bitmap, "Hi", 2.0, 2.0, 16.0, INK);
        assert!(dark_pixels(&pixmap) > 0);
    }

    #[test]
    fn blank_text_draws_nothing() {
        let mut pixmap = Pixmap::new(50, 20).unwrap();
        draw_text(&mut pixmap, &FontFace::Bitmap, "  ", 0.0, 0.0, 16.0, INK);
        assert_eq!(dark_pixels(&pixmap), 0);
    }

    #[test]
    fn bitmap_measure_matches_cell_width() {
        assert_eq!(measure(&FontFace::Bitmap, "abc", 16.0), 18.0);
    }
}
