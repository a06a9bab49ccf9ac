use std::path::Path;

use tracing::{debug, info};

use crate::{
    color::Tint,
    error::Result,
    filter::{Filter, TintFilter},
    grid,
};

/// Decodes `input_path`, multiplies it by `tint` and writes `output_path`.
///
/// Any existing file at `output_path` is replaced. Nothing is written when a
/// step fails.
pub fn tint<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    tint: Tint,
) -> Result<()> {
    let input_path = input_path.as_ref();
    let output_path = output_path.as_ref();

    info!(
        "Tinting {} -> {} with {:?}",
        input_path.display(),
        output_path.display(),
        tint.channels()
    );

    let mut grid = grid::decode(input_path)?;
    let (height, width, channels) = grid.dim();
    debug!("Pixel grid {width}x{height}x{channels}");

    TintFilter::new(tint).transform_grid(&mut grid)?;
    debug!("Applied tint");

    grid::encode(&grid, output_path)?;

    info!("Wrote {width}x{height} image to {}", output_path.display());
    Ok(())
}
