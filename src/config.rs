use crate::{
    error::ConfigErr,
    filler::FillRule,
    plan::Palette,
    point::{Bounds, Point},
};

pub const DEFAULT_SIZE: usize = 1000;
pub const DEFAULT_VERTEX_COUNT: usize = 5;
pub const DEFAULT_OUTER_RATIO: f64 = 0.5;
pub const DEFAULT_INNER_RATIO: f64 = 0.25;

/// Everything one render reads. Passed by reference into every stage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarConfig {
    pub width: usize,
    pub height: usize,
    pub vertex_count: usize,
    /// Outer radius as a fraction of `width`.
    pub outer_ratio: f64,
    /// Inner radius as a fraction of `width`.
    pub inner_ratio: f64,
    pub palette: Palette,
    pub fill_rule: FillRule,
}

impl Default for StarConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            vertex_count: DEFAULT_VERTEX_COUNT,
            outer_ratio: DEFAULT_OUTER_RATIO,
            inner_ratio: DEFAULT_INNER_RATIO,
            palette: Palette::default(),
            fill_rule: FillRule::default(),
        }
    }
}

impl StarConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    pub fn with_radius_ratios(mut self, outer: f64, inner: f64) -> Self {
        self.outer_ratio = outer;
        self.inner_ratio = inner;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_fill_rule(mut self, fill_rule: FillRule) -> Self {
        self.fill_rule = fill_rule;
        self
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }

    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.width as f64 * self.outer_ratio
    }

    #[inline]
    pub fn inner_radius(&self) -> f64 {
        self.width as f64 * self.inner_ratio
    }

    pub fn validate(&self) -> Result<(), ConfigErr> {
        if self.vertex_count < 3 {
            return Err(ConfigErr::TooFewVertices(self.vertex_count));
        }
        if self.width == 0 || self.height == 0 {
            return Err(ConfigErr::EmptyCanvas {
                width: self.width,
                height: self.height,
            });
        }
        for ratio in [self.outer_ratio, self.inner_ratio] {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(ConfigErr::InvalidRadius(ratio));
            }
        }
        Ok(())
    }
}
