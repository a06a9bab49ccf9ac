mod tint;

pub use tint::TintFilter;

use crate::{error::Result, grid::PixelGrid};

pub trait Filter {
    fn transform_grid(&self, grid: &mut PixelGrid) -> Result<()>;
}
