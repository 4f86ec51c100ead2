use tiny_skia::{Color, LineCap, Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform};

use super::fonts::FontResolver;
use super::glyphs;
use crate::core::{RenderError, RenderResult};
use crate::layout::{Align, Point, Rect, Rgb, StampSpec, Surface, TextRun};

fn paint_for(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.0, color.1, color.2, 255);
    paint.anti_alias = true;
    paint
}

fn new_pixmap(width: u32, height: u32) -> RenderResult<Pixmap> {
    Pixmap::new(width, height).ok_or_else(|| {
        RenderError::SurfaceError(format!("lienzo de {}x{} no válido", width, height))
    })
}

fn stroke_line(pixmap: &mut Pixmap, from: Point, to: Point, width: f32, color: Rgb) {
    let mut builder = PathBuilder::new();
    builder.move_to(from.x, from.y);
    builder.line_to(to.x, to.y);
    let Some(path) = builder.finish() else {
        return;
    };
    let stroke = Stroke {
        width,
        line_cap: LineCap::Butt,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint_for(color), &stroke, Transform::identity(), None);
}

/// Contorno de un rectángulo con el trazo hacia dentro.
fn outline_rect(pixmap: &mut Pixmap, rect: Rect, width: f32, color: Rgb) {
    let inset = width / 2.0;
    let Some(inner) = tiny_skia::Rect::from_xywh(
        rect.x + inset,
        rect.y + inset,
        rect.width - width,
        rect.height - width,
    ) else {
        return;
    };
    let path = PathBuilder::from_rect(inner);
    let stroke = Stroke { width, ..Stroke::default() };
    pixmap.stroke_path(&path, &paint_for(color), &stroke, Transform::identity(), None);
}

/// Lienzo RGB con fondo blanco. `y` de cada texto es el borde superior.
pub struct RasterSurface<'a> {
    pixmap: Pixmap,
    fonts: &'a FontResolver,
}

impl<'a> RasterSurface<'a> {
    pub fn new(width: u32, height: u32, fonts: &'a FontResolver) -> RenderResult<Self> {
        let mut pixmap = new_pixmap(width, height)?;
        pixmap.fill(Color::WHITE);
        Ok(RasterSurface { pixmap, fonts })
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }
}

fn draw_run(target: &mut Pixmap, fonts: &FontResolver, run: &TextRun) {
    let face = fonts.resolve(run.style.role);
    let x = match run.align {
        Align::Left => run.x,
        Align::Right => run.x - glyphs::measure(&face, &run.text, run.style.size),
        Align::Center => run.x - glyphs::measure(&face, &run.text, run.style.size) / 2.0,
    };
    glyphs::draw_text(target, &face, &run.text, x, run.y, run.style.size, run.style.color);
}

impl Surface for RasterSurface<'_> {
    fn draw_text(&mut self, run: &TextRun) -> RenderResult<()> {
        if run.text.is_empty() {
            return Ok(());
        }
        draw_run(&mut self.pixmap, self.fonts, run);
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Rgb) -> RenderResult<()> {
        stroke_line(&mut self.pixmap, from, to, width, color);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> RenderResult<()> {
        if let Some(area) = tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height) {
            self.pixmap
                .fill_rect(area, &paint_for(color), Transform::identity(), None);
        }
        Ok(())
    }

    /// Dibuja el sello en una capa transparente, la rota y la compone sobre
    /// el lienzo. La capa rotada ocupa su caja envolvente con esquina en
    /// `stamp.origin`.
    fn draw_stamp(&mut self, stamp: &StampSpec, label: &str) -> RenderResult<()> {
        let frame = stamp.frame;
        let (layer_w, layer_h) = stamp.layer.unwrap_or((
            (frame.x + frame.width + stamp.border_width).ceil().max(1.0) as u32,
            (frame.y + frame.height + stamp.border_width).ceil().max(1.0) as u32,
        ));
        let mut layer = new_pixmap(layer_w, layer_h)?;

        let run = TextRun::left(label, stamp.text_offset.x, stamp.text_offset.y, stamp.style);
        draw_run(&mut layer, self.fonts, &run);
        outline_rect(&mut layer, frame, stamp.border_width, stamp.style.color);

        let (w, h) = (layer_w as f32, layer_h as f32);
        let (sin, cos) = stamp.rotation_degrees.to_radians().sin_cos();
        let (sin, cos) = (sin.abs(), cos.abs());
        let expanded_w = w * cos + h * sin;
        let expanded_h = w * sin + h * cos;
        let cx = stamp.origin.x + expanded_w / 2.0;
        let cy = stamp.origin.y + expanded_h / 2.0;

        let left = (cx - w / 2.0).round();
        let top = (cy - h / 2.0).round();
        self.pixmap.draw_pixmap(
            left as i32,
            top as i32,
            layer.as_ref(),
            &PixmapPaint::default(),
            Transform::from_rotate_at(-stamp.rotation_degrees, cx, cy),
            None,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutSpec;
    use crate::renderers::raster::fonts::FontCandidates;

    fn bitmap_fonts() -> FontResolver {
        FontResolver::new(FontCandidates::default())
    }

    fn pixel(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8) {
        let px = pixmap.pixel(x, y).unwrap();
        (px.red(), px.green(), px.blue())
    }

    #[test]
    fn starts_white() {
        let fonts = bitmap_fonts();
        let surface = RasterSurface::new(10, 10, &fonts).unwrap();
        assert_eq!(pixel(&surface.into_pixmap(), 5, 5), (255, 255, 255));
    }

    #[test]
    fn zero_sized_canvas_is_a_surface_error() {
        let fonts = bitmap_fonts();
        assert!(matches!(
            RasterSurface::new(0, 10, &fonts),
            Err(RenderError::SurfaceError(_))
        ));
    }

    #[test]
    fn fill_rect_paints_band() {
        let fonts = bitmap_fonts();
        let mut surface = RasterSurface::new(100, 100, &fonts).unwrap();
        surface.fill_rect(Rect::new(10.0, 10.0, 50.0, 20.0), Rgb(240, 240, 240)).unwrap();
        let pixmap = surface.into_pixmap();
        assert_eq!(pixel(&pixmap, 30, 20), (240, 240, 240));
        assert_eq!(pixel(&pixmap, 80, 80), (255, 255, 255));
    }

    #[test]
    fn stamp_is_composited_inside_its_rotated_box() {
        let fonts = bitmap_fonts();
        let spec = LayoutSpec::raster();
        let mut surface = RasterSurface::new(1600, 1000, &fonts).unwrap();
        surface.draw_stamp(&spec.stamp, "PAID").unwrap();
        let pixmap = surface.into_pixmap();

        let accent_like = pixmap
            .pixels()
            .iter()
            .enumerate()
            .filter(|(_, px)| u16::from(px.green()) > u16::from(px.red()) + 60 && px.green() > px.blue())
            .map(|(i, _)| ((i as u32) % 1600, (i as u32) / 1600))
            .collect::<Vec<_>>();
        assert!(!accent_like.is_empty());
        for (x, y) in accent_like {
            assert!((1200..1530).contains(&x) && (400..624).contains(&y), "{x},{y}");
        }
    }
}
