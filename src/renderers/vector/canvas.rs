use lopdf::content::{Content, Operation};
use lopdf::Object;

use super::metrics::text_width;
use crate::core::RenderResult;
use crate::layout::{Align, FontRole, Point, Rect, Rgb, StampSpec, Surface, TextRun};

/// Nombre del recurso de fuente en el diccionario de la página.
pub fn font_resource(role: FontRole) -> &'static str {
    match role {
        FontRole::Regular => "F1",
        FontRole::Bold => "F2",
    }
}

/// Codifica en WinAnsi; lo que no cabe en Latin-1 se sustituye por `?`.
pub fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(byte) if !(0x80..0xA0).contains(&byte) => byte,
            _ => b'?',
        })
        .collect()
}

#[derive(Default)]
struct GraphicsState {
    fill: Option<Rgb>,
    stroke: Option<Rgb>,
    line_width: Option<f32>,
}

/// Superficie que acumula operaciones de contenido PDF.
///
/// Recibe coordenadas de arriba hacia abajo con `y` en la línea base del
/// texto y las convierte al sistema del PDF.
pub struct PdfSurface {
    page_height: f32,
    operations: Vec<Operation>,
    state: GraphicsState,
}

impl PdfSurface {
    pub fn new(page_height: f32) -> Self {
        PdfSurface {
            page_height,
            operations: Vec::new(),
            state: GraphicsState::default(),
        }
    }

    pub fn into_content(self) -> Content {
        Content { operations: self.operations }
    }

    fn pdf_y(&self, y: f32) -> f32 {
        self.page_height - y
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.operations.push(Operation::new(operator, operands));
    }

    fn set_fill(&mut self, color: Rgb) {
        if self.state.fill != Some(color) {
            let (r, g, b) = color.unit();
            self.push("rg", vec![r.into(), g.into(), b.into()]);
            self.state.fill = Some(color);
        }
    }

    fn set_stroke(&mut self, color: Rgb, width: f32) {
        if self.state.stroke != Some(color) {
            let (r, g, b) = color.unit();
            self.push("RG", vec![r.into(), g.into(), b.into()]);
            self.state.stroke = Some(color);
        }
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    fn show_text(&mut self, text: &str, role: FontRole, size: f32, x: f32, pdf_y: f32) {
        self.push("BT", vec![]);
        self.push("Tf", vec![font_resource(role).into(), size.into()]);
        self.push("Td", vec![x.into(), pdf_y.into()]);
        self.push("Tj", vec![Object::string_literal(to_win_ansi(text))]);
        self.push("ET", vec![]);
    }
}

impl Surface for PdfSurface {
    fn draw_text(&mut self, run: &TextRun) -> RenderResult<()> {
        if run.text.is_empty() {
            return Ok(());
        }
        let width = text_width(&run.text, run.style.role, run.style.size);
        let x = match run.align {
            Align::Left => run.x,
            Align::Right => run.x - width,
            Align::Center => run.x - width / 2.0,
        };
        self.set_fill(run.style.color);
        let y = self.pdf_y(run.y);
        self.show_text(&run.text, run.style.role, run.style.size, x, y);
        Ok(())
    }

    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Rgb) -> RenderResult<()> {
        self.set_stroke(color, width);
        let (y0, y1) = (self.pdf_y(from.y), self.pdf_y(to.y));
        self.push("m", vec![from.x.into(), y0.into()]);
        self.push("l", vec![to.x.into(), y1.into()]);
        self.push("S", vec![]);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> RenderResult<()> {
        self.set_fill(color);
        let bottom = self.pdf_y(rect.y + rect.height);
        self.push(
            "re",
            vec![rect.x.into(), bottom.into(), rect.width.into(), rect.height.into()],
        );
        self.push("f", vec![]);
        Ok(())
    }

    fn draw_stamp(&mut self, stamp: &StampSpec, label: &str) -> RenderResult<()> {
        let (sin, cos) = stamp.rotation_degrees.to_radians().sin_cos();
        let color = stamp.style.color;
        let origin = stamp.origin;

        self.push("q", vec![]);
        self.push(
            "cm",
            vec![cos.into(), sin.into(), (-sin).into(), cos.into(), 0f32.into(), 0f32.into()],
        );
        self.set_fill(color);
        self.set_stroke(color, stamp.border_width);

        let text_y = self.pdf_y(origin.y + stamp.text_offset.y);
        self.show_text(label, stamp.style.role, stamp.style.size, origin.x + stamp.text_offset.x, text_y);

        let frame = stamp.frame;
        let bottom = self.pdf_y(origin.y + frame.y + frame.height);
        self.push(
            "re",
            vec![
                (origin.x + frame.x).into(),
                bottom.into(),
                frame.width.into(),
                frame.height.into(),
            ],
        );
        self.push("S", vec![]);
        self.push("Q", vec![]);

        // Q restaura el estado gráfico anterior.
        self.state = GraphicsState::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::palette::{ACCENT, INK};
    use crate::layout::{LayoutSpec, TextStyle};

    fn operators(surface: PdfSurface) -> Vec<String> {
        surface
            .into_content()
            .operations
            .into_iter()
            .map(|op| op.operator)
            .collect()
    }

    #[test]
    fn win_ansi_replaces_unrepresentable_characters() {
        assert_eq!(to_win_ansi("Café"), b"Caf\xe9".to_vec());
        assert_eq!(to_win_ansi("€5 → ok"), b"?5 ? ok".to_vec());
    }

    #[test]
    fn right_aligned_text_ends_at_anchor() {
        let mut surface = PdfSurface::new(100.0);
        let style = TextStyle::regular(10.0, INK);
        surface.draw_text(&TextRun::right("00", 50.0, 20.0, style)).unwrap();
        let content = surface.into_content();
        let td = content.operations.iter().find(|op| op.operator == "Td").unwrap();
        assert_eq!(td.operands[0].as_float().unwrap(), 50.0 - 11.12);
        assert_eq!(td.operands[1].as_float().unwrap(), 80.0);
    }

    #[test]
    fn fill_colour_is_emitted_once_per_change() {
        let mut surface = PdfSurface::new(100.0);
        let style = TextStyle::regular(9.0, INK);
        surface.draw_text(&TextRun::left("a", 0.0, 0.0, style)).unwrap();
        surface.draw_text(&TextRun::left("b", 0.0, 10.0, style)).unwrap();
        surface.draw_text(&TextRun::left("c", 0.0, 20.0, TextStyle::regular(9.0, ACCENT))).unwrap();
        let ops = operators(surface);
        assert_eq!(ops.iter().filter(|op| *op == "rg").count(), 2);
    }

    #[test]
    fn stamp_is_wrapped_in_saved_state_with_rotation() {
        let spec = LayoutSpec::vector();
        let mut surface = PdfSurface::new(spec.height);
        surface.draw_stamp(&spec.stamp, "PAID").unwrap();
        let ops = operators(surface);
        assert_eq!(ops.first().map(String::as_str), Some("q"));
        assert_eq!(ops.get(1).map(String::as_str), Some("cm"));
        assert_eq!(ops.last().map(String::as_str), Some("Q"));
        assert!(ops.contains(&"re".to_string()));
        assert!(ops.contains(&"S".to_string()));
    }
}
