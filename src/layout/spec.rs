use super::palette::{ACCENT, BORDER, INK, MUTED};
use super::{Align, Point, Rect, Rgb, TextStyle};

/// A4 en puntos.
pub const A4_WIDTH: f32 = 595.2756;
pub const A4_HEIGHT: f32 = 841.8898;

pub const RASTER_WIDTH: u32 = 1600;
pub const RASTER_HEIGHT: u32 = 1000;

/// Tamaños de letra permitidos en el PDF.
pub const VECTOR_POINT_SIZES: [f32; 11] =
    [9.0, 10.0, 11.0, 12.0, 14.0, 16.0, 20.0, 22.0, 24.0, 28.0, 48.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineLimit {
    pub chars: usize,
    pub lines: usize,
}

/// Límites de texto por backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLimits {
    pub company_name: usize,
    pub address: LineLimit,
    pub contact: usize,
    pub client_name: usize,
    pub payment_value: usize,
    pub description: LineLimit,
    pub notes: LineLimit,
    /// Máximo de líneas bajo el nombre en los bloques de emisor y cliente.
    pub block_lines: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderGeometry {
    pub x: f32,
    pub top: f32,
    pub name: TextStyle,
    pub lines_gap: f32,
    pub line: TextStyle,
    pub line_step: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleGeometry {
    pub x: f32,
    pub align: Align,
    pub top: f32,
    pub title: TextStyle,
    pub number_gap: f32,
    pub number: TextStyle,
    pub dates_gap: f32,
    pub date: TextStyle,
    pub date_step: f32,
}

/// Sello PAGADO. `text_offset` y `frame` son relativos a `origin`.
///
/// `layer` es el tamaño de la capa fuera de pantalla donde el backend raster
/// dibuja el sello antes de rotarlo; en ese caso `origin` es la esquina
/// superior izquierda de la capa ya rotada. Sin capa, `origin` es la línea
/// base del texto y la rotación se aplica sobre el origen de la página.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampSpec {
    pub origin: Point,
    pub text_offset: Point,
    pub style: TextStyle,
    pub frame: Rect,
    pub border_width: f32,
    pub rotation_degrees: f32,
    pub layer: Option<(u32, u32)>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartyGeometry {
    pub x: f32,
    pub top: f32,
    pub heading: TextStyle,
    pub name_gap: f32,
    pub name: TextStyle,
    pub lines_gap: f32,
    pub line: TextStyle,
    pub line_step: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaymentGeometry {
    pub x: f32,
    pub top: f32,
    pub label: TextStyle,
    pub value: TextStyle,
    pub value_offset: Point,
    pub row_step: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableGeometry {
    pub band: Rect,
    pub band_color: Rgb,
    pub header_y: f32,
    pub header: TextStyle,
    pub row_y: f32,
    pub description_x: f32,
    pub description_step: f32,
    pub description: TextStyle,
    pub cell: TextStyle,
    pub quantity_x: f32,
    pub price_x: f32,
    pub amount_x: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rule {
    pub offset: f32,
    pub from_x: f32,
    pub to_x: f32,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TotalsGeometry {
    pub top: f32,
    /// Si está presente, el bloque baja hasta quedar a esta distancia de la
    /// última línea de la descripción.
    pub gap_after_description: Option<f32>,
    pub leading_rule: Rule,
    pub rows_gap: f32,
    pub label_x: f32,
    pub value_x: f32,
    pub label: TextStyle,
    pub value: TextStyle,
    pub row_step: f32,
    pub total_rule: Rule,
    pub total_gap: f32,
    pub total: TextStyle,
    pub rule_color: Rgb,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotesGeometry {
    pub x: f32,
    pub top: f32,
    pub heading: TextStyle,
    pub lines_gap: f32,
    pub line: TextStyle,
    pub line_step: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FooterGeometry {
    pub x: f32,
    pub y: f32,
    pub style: TextStyle,
}

/// Tabla de geometría de un backend. Coordenadas de arriba hacia abajo en
/// las unidades del lienzo (puntos o píxeles).
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSpec {
    pub width: f32,
    pub height: f32,
    pub limits: TextLimits,
    pub header: HeaderGeometry,
    pub title: TitleGeometry,
    pub stamp: StampSpec,
    pub bill_to: PartyGeometry,
    pub payment: PaymentGeometry,
    pub table: TableGeometry,
    pub totals: TotalsGeometry,
    pub notes: NotesGeometry,
    pub footer: FooterGeometry,
}

impl LayoutSpec {
    pub fn vector() -> Self {
        let w = A4_WIDTH;
        let margin = 50.0;
        let label_x = w - margin - 200.0;
        let rule_grey = Rgb(230, 230, 230);

        LayoutSpec {
            width: w,
            height: A4_HEIGHT,
            limits: TextLimits {
                company_name: 60,
                address: LineLimit { chars: 80, lines: 5 },
                contact: 80,
                client_name: 60,
                payment_value: 32,
                description: LineLimit { chars: 80, lines: 5 },
                notes: LineLimit { chars: 100, lines: 5 },
                block_lines: 8,
            },
            header: HeaderGeometry {
                x: margin,
                top: 50.0,
                name: TextStyle::bold(22.0, INK),
                lines_gap: 20.0,
                line: TextStyle::regular(9.0, MUTED),
                line_step: 12.0,
            },
            title: TitleGeometry {
                x: w - margin,
                align: Align::Right,
                top: 50.0,
                title: TextStyle::bold(28.0, ACCENT),
                number_gap: 30.0,
                number: TextStyle::bold(16.0, INK),
                dates_gap: 25.0,
                date: TextStyle::regular(9.0, MUTED),
                date_step: 12.0,
            },
            stamp: StampSpec {
                origin: Point::new(w - 150.0, 400.0),
                text_offset: Point::new(0.0, 0.0),
                style: TextStyle::bold(48.0, ACCENT),
                frame: Rect::new(-10.0, -50.0, 140.0, 60.0),
                border_width: 3.0,
                rotation_degrees: 15.0,
                layer: None,
            },
            bill_to: PartyGeometry {
                x: margin,
                top: 200.0,
                heading: TextStyle::bold(11.0, INK),
                name_gap: 18.0,
                name: TextStyle::bold(10.0, INK),
                lines_gap: 14.0,
                line: TextStyle::regular(9.0, MUTED),
                line_step: 12.0,
            },
            payment: PaymentGeometry {
                x: w - 250.0,
                top: 200.0,
                label: TextStyle::regular(9.0, MUTED),
                value: TextStyle::regular(9.0, INK),
                value_offset: Point::new(90.0, 0.0),
                row_step: 14.0,
            },
            table: TableGeometry {
                band: Rect::new(margin, 335.0, w - 2.0 * margin, 25.0),
                band_color: Rgb(242, 245, 247),
                header_y: 345.0,
                header: TextStyle::bold(9.0, INK),
                row_y: 370.0,
                description_x: margin + 10.0,
                description_step: 12.0,
                description: TextStyle::regular(9.0, INK),
                cell: TextStyle::regular(9.0, INK),
                quantity_x: w - margin - 230.0,
                price_x: w - margin - 130.0,
                amount_x: w - margin - 10.0,
            },
            totals: TotalsGeometry {
                top: 520.0,
                gap_after_description: None,
                leading_rule: Rule { offset: -10.0, from_x: label_x - 10.0, to_x: w - margin, width: 1.0 },
                rows_gap: 0.0,
                label_x,
                value_x: w - margin - 10.0,
                label: TextStyle::regular(9.0, MUTED),
                value: TextStyle::regular(9.0, INK),
                row_step: 18.0,
                total_rule: Rule { offset: -5.0, from_x: label_x - 10.0, to_x: w - margin, width: 1.0 },
                total_gap: 15.0,
                total: TextStyle::bold(12.0, INK),
                rule_color: rule_grey,
            },
            notes: NotesGeometry {
                x: margin,
                top: A4_HEIGHT - 150.0,
                heading: TextStyle::bold(9.0, INK),
                lines_gap: 15.0,
                line: TextStyle::regular(9.0, MUTED),
                line_step: 12.0,
            },
            footer: FooterGeometry {
                x: w / 2.0,
                y: A4_HEIGHT - 40.0,
                style: TextStyle::regular(9.0, MUTED),
            },
        }
    }

    pub fn raster() -> Self {
        let w = RASTER_WIDTH as f32;
        let h = RASTER_HEIGHT as f32;
        let margin = 60.0;
        let left_col = ((w - 2.0 * margin) * 0.40).floor();
        let right_x = margin + left_col + 40.0;

        let sm = 30.0;
        let body = 36.0;
        let h1 = 52.0;
        let bold = 42.0;

        LayoutSpec {
            width: w,
            height: h,
            limits: TextLimits {
                company_name: 30,
                address: LineLimit { chars: 40, lines: 3 },
                contact: 40,
                client_name: 35,
                payment_value: 30,
                description: LineLimit { chars: 45, lines: 3 },
                notes: LineLimit { chars: 90, lines: 3 },
                block_lines: 4,
            },
            header: HeaderGeometry {
                x: margin,
                top: margin,
                name: TextStyle::bold(bold, INK),
                lines_gap: 50.0,
                line: TextStyle::regular(sm, MUTED),
                line_step: 28.0,
            },
            title: TitleGeometry {
                x: right_x,
                align: Align::Left,
                top: margin,
                title: TextStyle::bold(h1, ACCENT),
                number_gap: 65.0,
                number: TextStyle::bold(bold, INK),
                dates_gap: 45.0,
                date: TextStyle::regular(sm, MUTED),
                date_step: 30.0,
            },
            stamp: StampSpec {
                origin: Point::new(w - 400.0, 400.0),
                text_offset: Point::new(20.0, 30.0),
                style: TextStyle::bold(80.0, ACCENT),
                frame: Rect::new(15.0, 25.0, 205.0, 95.0),
                border_width: 8.0,
                rotation_degrees: 15.0,
                layer: Some((300, 150)),
            },
            bill_to: PartyGeometry {
                x: margin,
                top: 280.0,
                heading: TextStyle::bold(bold, INK),
                name_gap: 38.0,
                name: TextStyle::regular(body, INK),
                lines_gap: 38.0,
                line: TextStyle::regular(sm, MUTED),
                line_step: 28.0,
            },
            payment: PaymentGeometry {
                x: right_x,
                top: 280.0,
                label: TextStyle::regular(sm, MUTED),
                value: TextStyle::regular(sm, INK),
                value_offset: Point::new(0.0, 28.0),
                row_step: 63.0,
            },
            table: TableGeometry {
                band: Rect::new(margin, 480.0, w - 2.0 * margin, 45.0),
                band_color: Rgb(240, 240, 240),
                header_y: 492.0,
                header: TextStyle::regular(body, INK),
                row_y: 545.0,
                description_x: margin + 20.0,
                description_step: 30.0,
                description: TextStyle::regular(sm, INK),
                cell: TextStyle::regular(body, INK),
                quantity_x: 860.0,
                price_x: 1180.0,
                amount_x: w - margin - 20.0,
            },
            totals: TotalsGeometry {
                top: 720.0,
                gap_after_description: Some(40.0),
                leading_rule: Rule { offset: 0.0, from_x: margin, to_x: w - margin, width: 2.0 },
                rows_gap: 30.0,
                label_x: right_x,
                value_x: w - margin - 20.0,
                label: TextStyle::regular(body, MUTED),
                value: TextStyle::regular(body, INK),
                row_step: 40.0,
                total_rule: Rule { offset: 0.0, from_x: right_x - 20.0, to_x: w - margin, width: 3.0 },
                total_gap: 20.0,
                total: TextStyle::bold(bold, INK),
                rule_color: BORDER,
            },
            notes: NotesGeometry {
                x: margin,
                top: h - 190.0,
                heading: TextStyle::bold(bold, INK),
                lines_gap: 45.0,
                line: TextStyle::regular(sm, MUTED),
                line_step: 28.0,
            },
            footer: FooterGeometry {
                x: w / 2.0,
                y: h - 40.0,
                style: TextStyle::regular(sm, MUTED),
            },
        }
    }

    /// Todos los estilos de texto que usa la tabla.
    pub fn text_styles(&self) -> Vec<TextStyle> {
        vec![
            self.header.name,
            self.header.line,
            self.title.title,
            self.title.number,
            self.title.date,
            self.stamp.style,
            self.bill_to.heading,
            self.bill_to.name,
            self.bill_to.line,
            self.payment.label,
            self.payment.value,
            self.table.header,
            self.table.description,
            self.table.cell,
            self.totals.label,
            self.totals.value,
            self.totals.total,
            self.notes.heading,
            self.notes.line,
            self.footer.style,
        ]
    }
}
