use svgdoc::figures::{Snowman, Star, Triangle};
use svgdoc::{Document, Drawable, Point, draw_picture};
use tracing_subscriber::EnvFilter;

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let picture: Vec<Box<dyn Drawable>> = vec![
        Box::new(Triangle::new(
            Point::new(100.0, 20.0),
            Point::new(120.0, 50.0),
            Point::new(80.0, 40.0),
        )),
        // 5 rays, centered on {50, 20}, ray length 10, inner radius 4
        Box::new(Star::new(Point::new(50.0, 20.0), 10.0, 4.0, 5)),
        // head of radius 10 centered on {30, 20}
        Box::new(Snowman::new(Point::new(30.0, 20.0), 10.0)),
    ];

    let mut doc = Document::new();
    draw_picture(&picture, &mut doc);

    doc.render(&mut std::io::stdout().lock())?;
    Ok(())
}
