use rand::Rng;

use crate::grid::{Cell, Grid};

/// Draws a food cell uniformly over the whole grid.
///
/// The snake's body is not excluded, so food can land underneath it.
pub fn generate<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Cell {
    Cell {
        x: rng.gen_range(0..grid.width),
        y: rng.gen_range(0..grid.height),
    }
}
