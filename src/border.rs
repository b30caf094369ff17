use itertools::Itertools;
use tracing::debug;

use crate::{edge::Edge, point::{Bounds, Pixel}};

/// Canonical border: every rasterized outline pixel exactly once, sorted by
/// column and then by row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BorderSet {
    pixels: Vec<Pixel>,
}

impl BorderSet {
    pub fn from_pixels<I: IntoIterator<Item = Pixel>>(pixels: I) -> Self {
        Self {
            pixels: pixels.into_iter().sorted_unstable().dedup().collect(),
        }
    }

    /// Rasterizes `edges` onto a canvas of size `bounds`.
    pub fn rasterize(edges: &[Edge], bounds: Bounds) -> Self {
        let border = Self::from_pixels(
            edges.iter().flat_map(|edge| edge.rasterize(bounds)),
        );
        debug!(
            "rasterized {} edges into {} border pixels",
            edges.len(),
            border.len()
        );
        border
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    #[inline]
    pub fn contains(&self, pixel: Pixel) -> bool {
        self.pixels.binary_search(&pixel).is_ok()
    }

    /// Border pixels in column `x`, in increasing row order.
    pub fn column(&self, x: usize) -> &[Pixel] {
        let start = self.pixels.partition_point(|p| p.x < x);
        let end = start + self.pixels[start..].partition_point(|p| p.x == x);
        &self.pixels[start..end]
    }
}
