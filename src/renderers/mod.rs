pub mod raster;
pub mod renderer_trait;
pub mod vector;

pub use raster::fonts::{FontCandidates, FontResolver};
pub use raster::RasterRenderer;
pub use renderer_trait::{DocumentRenderer, RendererRegistry};
pub use vector::VectorRenderer;
