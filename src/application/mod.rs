mod controller;
mod timer;
pub mod settings;

pub use controller::{Controller, SimulationState, CELL_PIXEL_SIZE};
pub use settings::Settings;
pub use timer::TickTimer;
