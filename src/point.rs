use std::cmp::Ordering;

/// A point in continuous canvas space (y grows downwards).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point at `radius` from `self` in direction `radian`.
    #[inline]
    pub fn polar_offset(&self, radius: f64, radian: f64) -> Self {
        Self::new(self.x + radius * radian.cos(), self.y + radius * radian.sin())
    }

    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Rounds to the nearest pixel (halves away from zero), keeping the pixel
    /// only if it lies inside `bounds`.
    #[inline]
    pub fn to_pixel(&self, bounds: Bounds) -> Option<Pixel> {
        let (x, y) = (self.x.round(), self.y.round());
        if x >= 0.0 && y >= 0.0 && x < bounds.width as f64 && y < bounds.height as f64 {
            Some(Pixel::new(x as usize, y as usize))
        } else {
            None
        }
    }
}

/// Canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: usize,
    pub height: usize,
}

impl Bounds {
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn contains(&self, pixel: Pixel) -> bool {
        pixel.x < self.width && pixel.y < self.height
    }

    #[inline]
    pub fn area(&self) -> usize {
        self.width * self.height
    }
}

/// An integer canvas coordinate.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pixel {
    pub x: usize,
    pub y: usize,
}

impl Pixel {
    #[inline]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl PartialEq for Pixel {
    fn eq(&self, other: &Self) -> bool {
        self.x.eq(&other.x) && self.y.eq(&other.y)
    }
}

impl Eq for Pixel {}

impl PartialOrd for Pixel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pixel {
    // Column-major: the filler walks the canvas one column at a time, so
    // pixels sharing an x must be adjacent once sorted.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.x.cmp(&other.x) {
            Ordering::Equal => self.y.cmp(&other.y),
            o => o,
        }
    }
}

impl From<(usize, usize)> for Pixel {
    fn from((x, y): (usize, usize)) -> Self {
        Self::new(x, y)
    }
}
