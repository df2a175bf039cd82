mod cell;
mod grid;
mod size;
mod patterns;

pub use cell::Cell;
pub use grid::Grid;
pub use size::GridSize;
pub use patterns::{Pattern, presets};
