//! Rasterizes a star outline and classifies every pixel of a canvas as
//! background, border or fill.
//!
//! The pipeline runs in one direction:
//! [`StarGeometry`] computes the vertex rings, each outline [`Edge`] is
//! sampled into pixels, the [`BorderSet`] canonicalizes them, and the
//! [`RegionFiller`] produces a [`ColorPlan`] that a [`Canvas`] can persist.

pub mod border;
pub mod canvas;
pub mod config;
pub mod debug;
pub mod edge;
pub mod error;
pub mod filler;
pub mod geometry;
pub mod plan;
pub mod point;
pub mod scanner;
pub mod winding;

pub use border::BorderSet;
pub use canvas::{Canvas, RgbaCanvas};
pub use config::StarConfig;
pub use edge::Edge;
pub use error::{CanvasErr, ConfigErr, StarErr};
pub use filler::{FillRule, RegionFiller};
pub use geometry::StarGeometry;
pub use plan::{ColorPlan, Palette, Region, Rgba};
pub use point::{Bounds, Pixel, Point};
pub use scanner::Segment;

use tracing::info_span;

/// Runs the whole pipeline for `config`.
pub fn render(config: &StarConfig) -> Result<ColorPlan, StarErr> {
    config.validate()?;
    let _span = info_span!(
        "render",
        width = config.width,
        height = config.height,
        vertices = config.vertex_count
    )
    .entered();

    let geometry = StarGeometry::new(config);
    let border = BorderSet::rasterize(&geometry.edges(), config.bounds());
    RegionFiller::new(config, &geometry, &border).fill()
}
