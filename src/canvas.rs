use crate::{
    plan::Rgba,
    point::{Bounds, Pixel},
};

/// Destination for a finished [`ColorPlan`](crate::plan::ColorPlan).
pub trait Canvas {
    fn bounds(&self) -> Bounds;

    fn set(&mut self, pixel: Pixel, color: Rgba);
}

/// Row-major 8-bit RGBA pixel buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaCanvas {
    bounds: Bounds,
    data: Vec<u8>,
}

impl RgbaCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bounds: Bounds::new(width, height),
            data: vec![0; width * height * 4],
        }
    }

    #[inline]
    fn offset(&self, pixel: Pixel) -> usize {
        (pixel.y * self.bounds.width + pixel.x) * 4
    }

    pub fn get(&self, pixel: Pixel) -> Option<Rgba> {
        if !self.bounds.contains(pixel) {
            return None;
        }
        let offset = self.offset(pixel);
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.data[offset..offset + 4]);
        Some(Rgba(rgba))
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Canvas for RgbaCanvas {
    #[inline]
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Pixels outside the canvas are ignored.
    fn set(&mut self, pixel: Pixel, color: Rgba) {
        if self.bounds.contains(pixel) {
            let offset = self.offset(pixel);
            self.data[offset..offset + 4].copy_from_slice(&color.0);
        }
    }
}

#[cfg(feature = "render_png")]
mod render_png {
    use std::{
        fs::File,
        io::{BufWriter, Write},
        path::Path,
    };

    use tracing::info;

    use super::RgbaCanvas;
    use crate::error::CanvasErr;

    impl RgbaCanvas {
        /// Encodes the canvas as an 8-bit RGBA PNG.
        pub fn write_png<W: Write>(&self, target: W) -> Result<(), CanvasErr> {
            let mut encoder = png::Encoder::new(
                BufWriter::new(target),
                self.bounds.width as u32,
                self.bounds.height as u32,
            );
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.data)?;
            writer.finish()?;
            Ok(())
        }

        pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), CanvasErr> {
            let path = path.as_ref();
            self.write_png(File::create(path)?)?;
            info!("wrote {}", path.display());
            Ok(())
        }
    }
}
