use crate::{
    canvas::Canvas,
    error::CanvasErr,
    point::{Bounds, Pixel},
};

/// 8-bit RGBA color, not premultiplied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba(pub [u8; 4]);

impl Rgba {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }
}

/// The three regions a pixel can belong to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Region {
    #[default]
    Background,
    Border,
    Fill,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgba,
    pub border: Rgba,
    pub fill: Rgba,
}

impl Palette {
    pub const NIGHT_SKY: Palette = Palette {
        background: Rgba::new(0, 0, 64, 255),
        border: Rgba::new(0, 0, 0, 0),
        fill: Rgba::new(255, 215, 0, 255),
    };

    #[inline]
    pub fn color(&self, region: Region) -> Rgba {
        match region {
            Region::Background => self.background,
            Region::Border => self.border,
            Region::Fill => self.fill,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::NIGHT_SKY
    }
}

/// The finished render: one region for every pixel of the canvas.
///
/// Stored column-major so that each column owns a contiguous slice, which is
/// how the filler writes it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPlan {
    bounds: Bounds,
    palette: Palette,
    regions: Vec<Region>,
}

impl ColorPlan {
    pub(crate) fn from_columns(bounds: Bounds, palette: Palette, regions: Vec<Region>) -> Self {
        debug_assert_eq!(regions.len(), bounds.area());
        Self {
            bounds,
            palette,
            regions,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    #[inline]
    pub fn region(&self, pixel: Pixel) -> Option<Region> {
        if self.bounds.contains(pixel) {
            Some(self.regions[pixel.x * self.bounds.height + pixel.y])
        } else {
            None
        }
    }

    #[inline]
    pub fn color(&self, pixel: Pixel) -> Option<Rgba> {
        self.region(pixel).map(|region| self.palette.color(region))
    }

    /// Regions of column `x`, top to bottom, or `None` past the right edge.
    pub fn column(&self, x: usize) -> Option<&[Region]> {
        if x >= self.bounds.width {
            return None;
        }
        let height = self.bounds.height;
        Some(&self.regions[x * height..(x + 1) * height])
    }

    /// Every pixel with its region, column by column.
    pub fn iter(&self) -> impl Iterator<Item = (Pixel, Region)> + '_ {
        let height = self.bounds.height;
        self.regions
            .iter()
            .enumerate()
            .map(move |(ix, &region)| (Pixel::new(ix / height, ix % height), region))
    }

    pub fn count(&self, region: Region) -> usize {
        self.regions.iter().filter(|&&r| r == region).count()
    }

    /// Writes every pixel to `canvas` exactly once.
    pub fn paint<C: Canvas>(&self, canvas: &mut C) -> Result<(), CanvasErr> {
        let canvas_bounds = canvas.bounds();
        if canvas_bounds != self.bounds {
            return Err(CanvasErr::SizeMismatch {
                canvas: (canvas_bounds.width, canvas_bounds.height),
                plan: (self.bounds.width, self.bounds.height),
            });
        }
        for (pixel, region) in self.iter() {
            canvas.set(pixel, self.palette.color(region));
        }
        Ok(())
    }
}
