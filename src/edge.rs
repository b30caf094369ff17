use crate::point::{Bounds, Pixel, Point};

/// A straight outline edge from `from` to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
}

impl Edge {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.from.distance(&self.to)
    }

    /// Points along the edge at unit arc-length steps, starting at `from`
    /// and stopping before `length()` is reached.
    pub fn sample(&self) -> EdgeSamples {
        let radian = (self.to.y - self.from.y).atan2(self.to.x - self.from.x);
        EdgeSamples {
            origin: self.from,
            step: Point::new(radian.cos(), radian.sin()),
            length: self.length(),
            l: 0.0,
        }
    }

    /// Rounded samples that land on the canvas. Consecutive samples may
    /// round to the same pixel; the border set removes those.
    pub fn rasterize(&self, bounds: Bounds) -> impl Iterator<Item = Pixel> {
        self.sample().filter_map(move |p| p.to_pixel(bounds))
    }
}

#[derive(Clone, Debug)]
pub struct EdgeSamples {
    origin: Point,
    step: Point,
    length: f64,
    l: f64,
}

impl Iterator for EdgeSamples {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        if self.l < self.length {
            let p = Point::new(
                self.origin.x + self.l * self.step.x,
                self.origin.y + self.l * self.step.y,
            );
            self.l += 1.0;
            Some(p)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn degenerate_edge_is_empty() {
        let p = Point::new(3.5, 7.25);
        assert_eq!(Edge::new(p, p).sample().count(), 0);
        assert_eq!(Edge::new(p, p).rasterize(Bounds::new(10, 10)).count(), 0);
    }

    #[test]
    fn horizontal_edge_has_one_pixel_per_unit() {
        let edge = Edge::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let pixels = edge.rasterize(Bounds::new(20, 20)).collect::<Vec<_>>();
        assert_eq!(pixels.len(), 10);
        assert!(pixels.iter().all(|p| p.y == 0));
        assert!(pixels.iter().tuple_windows::<(&Pixel, &Pixel)>().all(|(a, b)| a.x < b.x));
        assert_eq!(pixels[0], Pixel::new(0, 0));
        assert_eq!(pixels[9], Pixel::new(9, 0));
    }

    #[test]
    fn fractional_length_includes_last_partial_step() {
        let edge = Edge::new(Point::new(0.0, 0.0), Point::new(0.0, 2.5));
        let ys = edge.sample().map(|p| p.y).collect::<Vec<_>>();
        assert_eq!(ys, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn samples_outside_the_canvas_are_dropped() {
        let edge = Edge::new(Point::new(-5.0, 2.0), Point::new(5.0, 2.0));
        let xs = edge
            .rasterize(Bounds::new(3, 3))
            .map(|p| p.x)
            .collect::<Vec<_>>();
        assert_eq!(xs, vec![0, 1, 2]);
    }

    #[test]
    fn diagonal_edge_walks_the_true_line() {
        let edge = Edge::new(Point::new(0.0, 0.0), Point::new(30.0, 40.0));
        let samples = edge.sample().collect::<Vec<_>>();
        assert_eq!(samples.len(), 50);
        for (l, p) in samples.iter().enumerate() {
            assert!((p.x - 0.6 * l as f64).abs() < 1e-9);
            assert!((p.y - 0.8 * l as f64).abs() < 1e-9);
        }
    }
}
