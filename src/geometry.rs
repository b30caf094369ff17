use std::f64::consts::PI;

use itertools::Itertools;
use tracing::debug;

use crate::{config::StarConfig, dbg_ring, edge::Edge, info_label, point::Point};

/// Index of the outer vertex whose column needs the cusp exception in the
/// column crossing fill. With the first point facing +x this is the
/// upper-left tip, which shares its column (up to rounding) with the
/// lower-left tip.
pub const CUSP_VERTEX: usize = 3;

/// Vertex rings of a star, computed once per render.
#[derive(Clone, Debug)]
pub struct StarGeometry {
    pub center: Point,
    pub outer: Vec<Point>,
    pub inner: Vec<Point>,
}

impl StarGeometry {
    pub fn new(config: &StarConfig) -> Self {
        let center = config.center();
        let n = config.vertex_count;

        // Inner vertices sit half an outer step further round.
        let outer_step = 2.0 * PI / n as f64;
        let half_step = PI / n as f64;

        let outer = (0..n)
            .map(|i| center.polar_offset(config.outer_radius(), outer_step * i as f64))
            .collect::<Vec<_>>();
        let inner = (0..n)
            .map(|i| {
                center.polar_offset(config.inner_radius(), half_step * (2 * i + 1) as f64)
            })
            .collect::<Vec<_>>();

        debug!("{} {:?}", info_label!("outer"), dbg_ring!(&outer));
        debug!("{} {:?}", info_label!("inner"), dbg_ring!(&inner));

        Self {
            center,
            outer,
            inner,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.outer.len()
    }

    /// The closed outline, alternating outer and inner vertices starting
    /// from `outer[0]`.
    pub fn outline(&self) -> Vec<Point> {
        self.outer
            .iter()
            .interleave(self.inner.iter())
            .copied()
            .collect()
    }

    /// The `2n` outline edges: `outer[i] -> inner[i] -> outer[i + 1]`, with
    /// the last inner vertex closing back onto `outer[0]`.
    pub fn edges(&self) -> Vec<Edge> {
        self.outline()
            .iter()
            .copied()
            .circular_tuple_windows::<(Point, Point)>()
            .map(|(from, to)| Edge::new(from, to))
            .collect()
    }

    /// Column of the cusp vertex, rounded the way the rasterizer rounds.
    pub fn cusp_column(&self) -> Option<usize> {
        let x = self.outer.get(CUSP_VERTEX)?.x.round();
        (x >= 0.0).then_some(x as usize)
    }
}
