use std::{error::Error, fmt::Display};

/// A [`StarConfig`](crate::config::StarConfig) the pipeline refuses to run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigErr {
    TooFewVertices(usize),
    EmptyCanvas { width: usize, height: usize },
    InvalidRadius(f64),
}

impl Display for ConfigErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigErr::TooFewVertices(n) => {
                write!(f, "a star needs at least 3 vertices, got {}", n)
            }
            ConfigErr::EmptyCanvas { width, height } => {
                write!(f, "canvas {}x{} has no pixels", width, height)
            }
            ConfigErr::InvalidRadius(ratio) => {
                write!(f, "radius ratio {} is not a positive number", ratio)
            }
        }
    }
}

impl Error for ConfigErr {}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StarErr {
    Config(ConfigErr),
    /// A column crossed the border a number of times the column rule has no
    /// pattern for. Usually a gap in the rasterized border or an outline the
    /// rule was not tuned for.
    UnexpectedCrossingCount { column: usize, count: usize },
    /// The column rule only knows the 5-point star.
    UnsupportedVertexCount(usize),
}

impl Display for StarErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StarErr::Config(err) => write!(f, "invalid configuration: {}", err),
            StarErr::UnexpectedCrossingCount { column, count } => write!(
                f,
                "column {} crosses the border {} times",
                column, count
            ),
            StarErr::UnsupportedVertexCount(n) => write!(
                f,
                "column crossing fill cannot handle {} vertices, use a winding fill rule",
                n
            ),
        }
    }
}

impl Error for StarErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            StarErr::Config(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigErr> for StarErr {
    fn from(err: ConfigErr) -> Self {
        StarErr::Config(err)
    }
}

#[derive(Debug)]
pub enum CanvasErr {
    SizeMismatch {
        canvas: (usize, usize),
        plan: (usize, usize),
    },
    Io(std::io::Error),
    #[cfg(feature = "render_png")]
    Encoding(png::EncodingError),
}

impl Display for CanvasErr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanvasErr::SizeMismatch { canvas, plan } => write!(
                f,
                "canvas is {}x{} but the plan is {}x{}",
                canvas.0, canvas.1, plan.0, plan.1
            ),
            CanvasErr::Io(err) => write!(f, "{}", err),
            #[cfg(feature = "render_png")]
            CanvasErr::Encoding(err) => write!(f, "{}", err),
        }
    }
}

impl Error for CanvasErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CanvasErr::SizeMismatch { .. } => None,
            CanvasErr::Io(err) => Some(err),
            #[cfg(feature = "render_png")]
            CanvasErr::Encoding(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for CanvasErr {
    fn from(err: std::io::Error) -> Self {
        CanvasErr::Io(err)
    }
}

#[cfg(feature = "render_png")]
impl From<png::EncodingError> for CanvasErr {
    fn from(err: png::EncodingError) -> Self {
        CanvasErr::Encoding(err)
    }
}
