use std::error::Error;

use star_paint::{render, RgbaCanvas, StarConfig};

const OUTPUT: &str = "painted_star.png";

pub fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::INFO)
        // sets this to be the default, global collector for this application.
        .init();

    let config = StarConfig::default();
    let plan = render(&config)?;

    let mut canvas = RgbaCanvas::new(config.width, config.height);
    plan.paint(&mut canvas)?;
    canvas.save_png(OUTPUT)?;
    Ok(())
}
