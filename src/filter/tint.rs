use ndarray::{Array1, Axis};

use super::Filter;
use crate::{
    color::Tint,
    error::{Result, TintError},
    grid::PixelGrid,
};

/// Multiplies every pixel's channels by a shared tint vector.
pub struct TintFilter {
    factors: Array1<f32>,
}

impl TintFilter {
    pub fn new(tint: Tint) -> Self {
        Self {
            factors: tint.factors(),
        }
    }
}

impl Filter for TintFilter {
    fn transform_grid(&self, grid: &mut PixelGrid) -> Result<()> {
        let found = grid.len_of(Axis(2));
        if found != self.factors.len() {
            return Err(TintError::ShapeMismatch {
                expected: self.factors.len(),
                found,
            });
        }

        // broadcasts along the channel axis
        *grid *= &self.factors;

        Ok(())
    }
}
