use crate::point::Pixel;

/// Inclusive run of border rows `[from_y, to_y]` within one column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub from_y: usize,
    pub to_y: usize,
}

impl Segment {
    #[inline]
    pub fn new(from_y: usize, to_y: usize) -> Self {
        debug_assert!(from_y <= to_y);
        Self { from_y, to_y }
    }

    #[inline]
    pub fn contains(&self, y: usize) -> bool {
        self.from_y <= y && y <= self.to_y
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.to_y - self.from_y + 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ScanState {
    Outside,
    OnBorder(Segment),
}

/// Walks one column top to bottom and collects its border runs.
///
/// Runs are found with state transitions rather than by counting hits, so a
/// row hit by several edges still contributes a single row.
#[derive(Clone, Debug)]
pub struct ColumnScanner<'a> {
    border: &'a [Pixel],
    cursor: usize,
    state: ScanState,
    segments: Vec<Segment>,
}

impl<'a> ColumnScanner<'a> {
    /// `border` must hold the border pixels of a single column, sorted by
    /// row (see [`BorderSet::column`](crate::border::BorderSet::column)).
    pub fn new(border: &'a [Pixel]) -> Self {
        Self {
            border,
            cursor: 0,
            state: ScanState::Outside,
            segments: Vec::with_capacity(4),
        }
    }

    /// Is row `y` a border row? Rows must be asked about in increasing
    /// order.
    #[inline]
    fn is_border(&mut self, y: usize) -> bool {
        while let Some(p) = self.border.get(self.cursor) {
            if p.y < y {
                self.cursor += 1;
            } else {
                return p.y == y;
            }
        }
        false
    }

    fn step(&mut self, y: usize) {
        let on_border = self.is_border(y);
        self.state = match (self.state, on_border) {
            (ScanState::Outside, true) => ScanState::OnBorder(Segment::new(y, y)),
            (ScanState::OnBorder(segment), true) => {
                ScanState::OnBorder(Segment::new(segment.from_y, y))
            }
            (ScanState::OnBorder(segment), false) => {
                self.segments.push(segment);
                ScanState::Outside
            }
            (ScanState::Outside, false) => ScanState::Outside,
        };
    }

    /// Scans rows `0..=height`. Row `height` lies below the canvas and is
    /// never a border row, so a run touching the last row still closes.
    pub fn scan(mut self, height: usize) -> Vec<Segment> {
        for y in 0..=height {
            self.step(y);
        }
        self.segments
    }
}
