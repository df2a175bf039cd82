mod button;
mod number_field;
mod slider;

pub use button::Button;
pub use number_field::NumberField;
pub use slider::Slider;

use macroquad::prelude::screen_width;

use crate::application::settings::{MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS};
use crate::domain::GridSize;

pub const PANEL_WIDTH: f32 = 200.0;
pub const BUTTON_HEIGHT: f32 = 36.0;
pub const SPEED_STEP_MS: u32 = 10;
/// Tallest panel content (status labels end near 760)
pub const PANEL_MIN_HEIGHT: f32 = 780.0;

/// Operations reachable from the panel buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlAction {
    Start,
    Pause,
    Step,
    Reset,
    ApplySize,
    Randomize,
}

impl ControlAction {
    pub fn all() -> [ControlAction; 6] {
        [
            ControlAction::Start,
            ControlAction::Pause,
            ControlAction::Step,
            ControlAction::Reset,
            ControlAction::ApplySize,
            ControlAction::Randomize,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ControlAction::Start => "Start",
            ControlAction::Pause => "Pause",
            ControlAction::Step => "Step",
            ControlAction::Reset => "Reset",
            ControlAction::ApplySize => "Apply Size",
            ControlAction::Randomize => "Random",
        }
    }
}

/// X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Window size that shows a board `extent` pixels wide next to the panel
pub fn window_size_for(extent: f32) -> (f32, f32) {
    (extent + PANEL_WIDTH, extent.max(PANEL_MIN_HEIGHT))
}

/// Panel buttons stacked from the top
pub fn create_buttons() -> Vec<Button> {
    let px = panel_x() + 10.0;
    let width = PANEL_WIDTH - 20.0;
    ControlAction::all()
        .into_iter()
        .enumerate()
        .map(|(i, action)| {
            Button::new(px, 20.0 + i as f32 * (BUTTON_HEIGHT + 8.0), width, BUTTON_HEIGHT, action)
        })
        .collect()
}

pub const SLIDER_Y: f32 = 320.0;
pub const SIZE_FIELD_Y: f32 = 370.0;

pub fn create_speed_slider(initial_ms: u32) -> Slider {
    let mut slider = Slider::new(
        panel_x() + 18.0,
        SLIDER_Y,
        PANEL_WIDTH - 36.0,
        "Delay",
        MIN_TICK_INTERVAL_MS,
        MAX_TICK_INTERVAL_MS,
        SPEED_STEP_MS,
    );
    slider.set_value(initial_ms);
    slider
}

pub fn create_size_field(initial: GridSize) -> NumberField {
    let label = format!("Grid size ({}-{})", GridSize::MIN, GridSize::MAX);
    NumberField::new(panel_x() + 10.0, SIZE_FIELD_Y, PANEL_WIDTH - 20.0, label, initial.get(), 3)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_fits_every_board_size() {
        for side in [GridSize::MIN, 20, 40, 41, GridSize::MAX] {
            let extent = (side * 20) as f32;
            let (w, h) = window_size_for(extent);
            assert_eq!(w - PANEL_WIDTH, extent, "side = {side}");
            assert!(h >= extent && h >= PANEL_MIN_HEIGHT, "side = {side}");
        }
        assert_eq!(window_size_for(2000.0), (2200.0, 2000.0));
        assert_eq!(window_size_for(100.0), (300.0, PANEL_MIN_HEIGHT));
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = ControlAction::all().iter().map(|a| a.label()).collect();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), ControlAction::all().len());
    }
}
