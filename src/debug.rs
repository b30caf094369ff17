use std::fmt;

use itertools::Itertools;
use procr_ansi_term::{Color, Style};

use crate::{point::Point, scanner::Segment};

pub const STYLE_LABEL: Style = Style::new().fg(Color::Yellow);
pub const STYLE_ITEM: Style = Style::new().fg(Color::Cyan);
pub const STYLE_FILL: Style = Style::new().bold().fg(Color::Purple);

pub const COLOR_GREEN: Color = Color::Fixed(40);
pub const COLOR_ORANGE: Color = Color::Fixed(208);

pub fn debug_with(f: impl Fn(&mut fmt::Formatter) -> fmt::Result) -> impl fmt::Debug {
    struct DebugWith<F>(F);

    impl<F> fmt::Debug for DebugWith<F>
    where
        F: Fn(&mut fmt::Formatter) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            self.0(f)
        }
    }

    DebugWith(f)
}

#[macro_export]
macro_rules! info_label {
    ($label:literal) => {
        $crate::debug::STYLE_LABEL.bold().paint(format!("({})", $label))
    };
}

#[macro_export]
macro_rules! emit_info {
    (sty:$style:expr, msg:$msg:literal) => {
        tracing::info!("{}", $style.paint($msg));
    };
    (sty:$style:expr, fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!("{}", $style.paint(format!($fmt, $($rest)*)));
    };
    (fmt:$fmt:literal | $($rest:tt)+) => {
        tracing::info!($fmt, $($rest)*);
    };
}

#[macro_export]
macro_rules! dbg_ring {
    ($points:expr) => {
        $crate::debug::debug_with($crate::debug::debug_ring($points))
    };
}

/// Vertex ring rounded to the pixels the rasterizer will hit.
pub fn debug_ring(points: &[Point]) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + '_ {
    move |f| {
        write!(
            f,
            "[{}]",
            points
                .iter()
                .enumerate()
                .map(|(ix, p)| format!(
                    "{}{}",
                    STYLE_LABEL.paint(format!("{}:", ix)),
                    STYLE_ITEM.paint(format!("({},{})", p.x.round(), p.y.round()))
                ))
                .join(" ")
        )
    }
}

#[macro_export]
macro_rules! dbg_segments {
    ($segments:expr) => {
        $crate::debug::debug_with($crate::debug::debug_segments($segments))
    };
}

pub fn debug_segments(segments: &[Segment]) -> impl Fn(&mut fmt::Formatter) -> fmt::Result + '_ {
    move |f| {
        write!(
            f,
            "{}[{}]",
            STYLE_LABEL.paint(format!("{} runs", segments.len())),
            segments
                .iter()
                .map(|s| Style::new()
                    .fg(COLOR_GREEN)
                    .paint(format!("{}..={}", s.from_y, s.to_y))
                    .to_string())
                .join(", ")
        )
    }
}
