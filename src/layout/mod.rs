//! Disposición compartida por los dos renderizadores.
//!
//! `DocumentPlan` decide qué se dibuja, `LayoutSpec` dónde y con qué estilo,
//! y `compose` recorre ambos emitiendo primitivas sobre un `Surface`.

pub mod compose;
pub mod format;
pub mod plan;
pub mod spec;
pub mod text;

pub use compose::compose;
pub use plan::{DocumentPlan, LabeledValue, TableRow};
pub use spec::{LayoutSpec, LineLimit, StampSpec, TextLimits};

use crate::core::RenderResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn unit(&self) -> (f32, f32, f32) {
        (
            self.0 as f32 / 255.0,
            self.1 as f32 / 255.0,
            self.2 as f32 / 255.0,
        )
    }
}

pub mod palette {
    use super::Rgb;

    pub const INK: Rgb = Rgb(17, 24, 39);
    pub const MUTED: Rgb = Rgb(107, 114, 128);
    pub const BORDER: Rgb = Rgb(229, 231, 235);
    pub const ACCENT: Rgb = Rgb(5, 150, 105);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontRole {
    Regular,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub role: FontRole,
    pub size: f32,
    pub color: Rgb,
}

impl TextStyle {
    pub const fn regular(size: f32, color: Rgb) -> Self {
        TextStyle { role: FontRole::Regular, size, color }
    }

    pub const fn bold(size: f32, color: Rgb) -> Self {
        TextStyle { role: FontRole::Bold, size, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Rect { x, y, width, height }
    }
}

/// Una línea de texto posicionada. `x` es el punto de anclaje según `align`.
/// Coordenadas de arriba hacia abajo; qué representa `y` (línea base o borde
/// superior) lo decide cada superficie.
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub style: TextStyle,
    pub align: Align,
}

impl TextRun {
    pub fn new(text: impl Into<String>, x: f32, y: f32, style: TextStyle, align: Align) -> Self {
        TextRun { text: text.into(), x, y, style, align }
    }

    pub fn left(text: impl Into<String>, x: f32, y: f32, style: TextStyle) -> Self {
        Self::new(text, x, y, style, Align::Left)
    }

    pub fn right(text: impl Into<String>, x: f32, y: f32, style: TextStyle) -> Self {
        Self::new(text, x, y, style, Align::Right)
    }
}

/// Primitivas de dibujo que implementa cada backend.
pub trait Surface {
    fn draw_text(&mut self, run: &TextRun) -> RenderResult<()>;

    fn draw_line(&mut self, from: Point, to: Point, width: f32, color: Rgb) -> RenderResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Rgb) -> RenderResult<()>;

    /// Sello rotado (texto y contorno) en la posición de `stamp`.
    fn draw_stamp(&mut self, stamp: &StampSpec, label: &str) -> RenderResult<()>;
}
