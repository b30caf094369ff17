use itertools::Itertools;
use tracing::trace;

use crate::{
    border::BorderSet,
    config::StarConfig,
    dbg_segments,
    debug::{COLOR_ORANGE, STYLE_FILL},
    emit_info,
    error::{ConfigErr, StarErr},
    geometry::StarGeometry,
    plan::{ColorPlan, Palette, Region},
    point::{Bounds, Pixel, Point},
    scanner::{ColumnScanner, Segment},
    winding,
};

/// The only vertex count the column crossing rule has patterns for.
pub const COLUMN_CROSSING_VERTICES: usize = 5;

/// How the filler decides which non-border pixels are inside the star.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FillRule {
    /// Counts border runs per column and applies a fixed in/out pattern for
    /// each count. Reproduces the reference pixel output of the 5-point
    /// star exactly, cusp columns included.
    #[default]
    ColumnCrossings,
    /// Point-in-polygon test with the even-odd rule, for any vertex count.
    EvenOdd,
    /// Point-in-polygon test with the nonzero winding rule, for any vertex
    /// count.
    NonZero,
}

/// Assigns a [`Region`] to every pixel of the canvas, one column at a time.
pub struct RegionFiller<'a> {
    bounds: Bounds,
    palette: Palette,
    rule: FillRule,
    vertex_count: usize,
    border: &'a BorderSet,
    outline: Vec<Point>,
    cusp_column: Option<usize>,
}

impl<'a> RegionFiller<'a> {
    pub fn new(config: &StarConfig, geometry: &StarGeometry, border: &'a BorderSet) -> Self {
        Self {
            bounds: config.bounds(),
            palette: config.palette,
            rule: config.fill_rule,
            vertex_count: geometry.vertex_count(),
            border,
            outline: geometry.outline(),
            cusp_column: geometry.cusp_column(),
        }
    }

    pub fn fill(&self) -> Result<ColorPlan, StarErr> {
        if self.rule == FillRule::ColumnCrossings
            && self.vertex_count != COLUMN_CROSSING_VERTICES
        {
            return Err(StarErr::UnsupportedVertexCount(self.vertex_count));
        }
        if self.bounds.area() == 0 {
            return Err(ConfigErr::EmptyCanvas {
                width: self.bounds.width,
                height: self.bounds.height,
            }
            .into());
        }

        let mut regions = vec![Region::Background; self.bounds.area()];
        self.fill_columns(&mut regions)?;
        let plan = ColorPlan::from_columns(self.bounds, self.palette, regions);

        emit_info!(sty:STYLE_FILL,
            fmt:"filled {}x{} with {:?}: {} border, {} fill, {} background" |
            self.bounds.width,
            self.bounds.height,
            self.rule,
            plan.count(Region::Border),
            plan.count(Region::Fill),
            plan.count(Region::Background)
        );
        Ok(plan)
    }

    /// Columns write disjoint slices of the column-major buffer, so they
    /// can be filled in any order. The first failing column (lowest x) is
    /// reported.
    #[cfg(feature = "multithreading")]
    fn fill_columns(&self, regions: &mut [Region]) -> Result<(), StarErr> {
        use rayon::prelude::*;

        let errors = regions
            .par_chunks_mut(self.bounds.height)
            .enumerate()
            .filter_map(|(x, column)| self.fill_column(x, column).err())
            .collect::<Vec<_>>();

        match errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    #[cfg(not(feature = "multithreading"))]
    fn fill_columns(&self, regions: &mut [Region]) -> Result<(), StarErr> {
        regions
            .chunks_mut(self.bounds.height)
            .enumerate()
            .try_for_each(|(x, column)| self.fill_column(x, column))
    }

    fn fill_column(&self, x: usize, column: &mut [Region]) -> Result<(), StarErr> {
        match self.rule {
            FillRule::ColumnCrossings => self.fill_column_by_crossings(x, column),
            FillRule::EvenOdd => {
                self.fill_column_by_polygon(x, column, winding::inside_even_odd);
                Ok(())
            }
            FillRule::NonZero => {
                self.fill_column_by_polygon(x, column, winding::inside_nonzero);
                Ok(())
            }
        }
    }

    #[inline]
    fn is_cusp_column(&self, x: usize) -> bool {
        self.cusp_column
            .map_or(false, |cusp| x == cusp || x == cusp + 1)
    }

    /// Border pixels of column `x` that lie on the canvas. A border set
    /// built for a taller canvas must not leak rows past `height`.
    fn border_column(&self, x: usize) -> &[Pixel] {
        let column = self.border.column(x);
        let end = column.partition_point(|p| p.y < self.bounds.height);
        &column[..end]
    }

    /// Runs of border rows in column `x`.
    pub fn segments(&self, x: usize) -> Vec<Segment> {
        ColumnScanner::new(self.border_column(x)).scan(self.bounds.height)
    }

    fn fill_column_by_crossings(&self, x: usize, column: &mut [Region]) -> Result<(), StarErr> {
        let segments = self.segments(x);

        // Region of each gap between consecutive segments. A vertical line
        // through the 5-point star meets at most four runs: two runs bound
        // the body, three pass the leftmost notch, four cross two separate
        // points with the outside between them.
        let gaps: &[Region] = match segments.len() {
            0 | 1 => &[],
            // Both runs are tips; nothing of the star lies between them.
            2 if self.is_cusp_column(x) => &[Region::Background],
            2 => &[Region::Fill],
            3 => &[Region::Fill, Region::Fill],
            4 => &[Region::Fill, Region::Background, Region::Fill],
            count => {
                emit_info!(sty:COLOR_ORANGE,
                    fmt:"column {} has {} runs: {:?}" |
                    x, count, dbg_segments!(&segments)
                );
                return Err(StarErr::UnexpectedCrossingCount { column: x, count });
            }
        };
        trace!("column {}: {:?}", x, dbg_segments!(&segments));

        paint_segments(column, &segments, gaps);
        Ok(())
    }

    fn fill_column_by_polygon(
        &self,
        x: usize,
        column: &mut [Region],
        inside: fn(&[Point], Point) -> bool,
    ) {
        column.fill(Region::Background);
        for pixel in self.border_column(x) {
            column[pixel.y] = Region::Border;
        }
        for (y, region) in column.iter_mut().enumerate() {
            let p = Point::new(x as f64, y as f64);
            if *region == Region::Background && inside(&self.outline, p) {
                *region = Region::Fill;
            }
        }
    }
}

/// Background everywhere, border on the segments, and `gaps[i]` between
/// `segments[i]` and `segments[i + 1]`.
fn paint_segments(column: &mut [Region], segments: &[Segment], gaps: &[Region]) {
    debug_assert_eq!(gaps.len(), segments.len().saturating_sub(1));

    column.fill(Region::Background);
    for segment in segments {
        column[segment.from_y..=segment.to_y].fill(Region::Border);
    }
    let pairs = segments.iter().tuple_windows::<(&Segment, &Segment)>();
    for ((above, below), &gap) in pairs.zip(gaps) {
        column[above.to_y + 1..below.from_y].fill(gap);
    }
}
