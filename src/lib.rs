// Domain layer - board, rule, presets
pub mod domain;

// Application layer - controller, timer, settings
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub use domain::{Cell, Grid, GridSize, Pattern, presets};
pub use application::{Controller, Settings, SimulationState, TickTimer};
pub use ui::{Button, ControlAction};
