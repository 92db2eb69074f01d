//! The demo scenario: generate, contain, duplicate, reorient, report.

use std::io::Write;

use anyhow::{Context, ensure};

use shapeforge_shapes::{
    FilledRectangleFactory, RandomDimensions, RectangleFactory, ShapeContainer, ShapeGenerator,
    write_report,
};

use crate::config::DemoConfig;

/// Run the demo, writing every report to `out`.
///
/// 1. a plain and a filled generator fill one container;
/// 2. a shallow copy is checked to alias every shape;
/// 3. a deep clone is turned landscape while the original stays untouched;
/// 4. a deep clone of the landscape container is turned portrait.
pub fn run<W: Write>(config: &DemoConfig, out: &mut W) -> anyhow::Result<()> {
    let mut plain = ShapeGenerator::new(
        config.bounds,
        Box::new(RectangleFactory::new()),
        source(config, 0),
    );
    let mut filled = ShapeGenerator::new(
        config.bounds,
        Box::new(FilledRectangleFactory::new(config.fill)),
        source(config, 1),
    );

    let mut shapes = Vec::with_capacity(2 * (config.count + config.squares));
    for generator in [&mut plain, &mut filled] {
        shapes.extend(
            generator
                .generate_shapes(config.count)
                .context("generating rectangles")?,
        );
        shapes.extend(
            generator
                .generate_squares(config.squares)
                .context("generating squares")?,
        );
    }
    let original = ShapeContainer::new(shapes);
    tracing::info!(shapes = original.len(), "container ready");

    section(out, "Original:", &original, config)?;

    let shallow = original.shallow_copy();
    ensure!(
        shallow.iter().zip(original.iter()).all(|(a, b)| a.same_shape(b)),
        "shallow copy must alias every shape"
    );

    let landscape = original.deep_clone();
    ensure!(
        !landscape.shares_shapes_with(&original),
        "deep clone must not share shapes"
    );
    landscape.to_landscape();
    section(out, "Landscape:", &landscape, config)?;
    section(out, "Original:", &original, config)?;

    let portrait = landscape.deep_clone();
    portrait.to_portrait();
    section(out, "Portrait:", &portrait, config)?;

    Ok(())
}

fn source(config: &DemoConfig, offset: u64) -> RandomDimensions {
    match config.seed {
        Some(seed) => RandomDimensions::seeded(seed.wrapping_add(offset)),
        None => RandomDimensions::from_entropy(),
    }
}

fn section<W: Write>(
    out: &mut W,
    title: &str,
    container: &ShapeContainer,
    config: &DemoConfig,
) -> anyhow::Result<()> {
    writeln!(out, "{title}")?;
    write_report(out, container, config.report).with_context(|| format!("writing {title}"))?;
    Ok(())
}
