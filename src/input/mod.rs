use macroquad::prelude::*;

use crate::application::Controller;
use crate::ui::{Button, ControlAction, NumberField, Slider, panel_x, window_size_for};

/// Run one panel action against the controller
pub fn apply_action(controller: &mut Controller, action: ControlAction, size_field: &mut NumberField) {
    match action {
        ControlAction::Start => controller.start(),
        ControlAction::Pause => controller.pause(),
        ControlAction::Step => controller.step(),
        ControlAction::Reset => controller.reset(),
        ControlAction::ApplySize => {
            if controller.apply_size_input(size_field.text()) {
                size_field.set_focused(false);
            }
        }
        ControlAction::Randomize => controller.randomize(),
    }
}

/// Dispatch clicks on panel buttons
pub fn process_button_clicks(
    controller: &mut Controller,
    buttons: &[Button],
    size_field: &mut NumberField,
    mouse_pos: (f32, f32),
) {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .for_each(|btn| apply_action(controller, btn.action(), size_field));
}

/// Speed slider drag; a changed value goes straight to the controller
pub fn handle_speed_slider(controller: &mut Controller, slider: &mut Slider, mouse_pos: (f32, f32)) {
    if let Some(ms) = slider.update(mouse_pos) {
        controller.set_speed(ms);
    }
}

/// Typing into the size field; Enter acts like Apply Size
pub fn handle_size_field(controller: &mut Controller, size_field: &mut NumberField, mouse_pos: (f32, f32)) {
    if size_field.update(mouse_pos) {
        apply_action(controller, ControlAction::ApplySize, size_field);
    }
}

/// Left click on the board flips the cell under the pointer
pub fn handle_canvas_click(controller: &mut Controller, origin: Vec2, mouse_pos: (f32, f32)) {
    if mouse_pos.0 >= panel_x() || !is_mouse_button_pressed(MouseButton::Left) {
        return;
    }
    controller.toggle_at_pixel(mouse_pos.0 - origin.x, mouse_pos.1 - origin.y);
}

/// Grow or shrink the window so the whole board and the panel are visible
pub fn fit_window_to_board(controller: &Controller) {
    let (width, height) = window_size_for(controller.canvas_extent());
    log::debug!("resizing window to {width}x{height}");
    request_new_screen_size(width, height);
}

/// Keyboard shortcuts. Skipped while the size field has focus.
pub fn process_keyboard_input(controller: &mut Controller, slider: &mut Slider, size_field: &NumberField) {
    if size_field.is_focused() {
        return;
    }

    type KeyAction = (KeyCode, fn(&mut Controller));

    let actions: [KeyAction; 6] = [
        (KeyCode::Space, Controller::toggle_running),
        (KeyCode::N, Controller::step),
        (KeyCode::C, Controller::reset),
        (KeyCode::R, Controller::randomize),
        (KeyCode::Up, |c| c.adjust_speed(crate::ui::SPEED_STEP_MS as i32)),
        (KeyCode::Down, |c| c.adjust_speed(-(crate::ui::SPEED_STEP_MS as i32))),
    ];

    actions
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|(_, action)| action(controller));

    // Keep the slider handle in sync with keyboard speed changes
    slider.set_value(controller.state().tick_interval_ms);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GridSize;

    fn field(text: &str) -> NumberField {
        let mut f = NumberField::new(0.0, 0.0, 80.0, "Size", 20, 3);
        f.set_text(text);
        f
    }

    #[test]
    fn test_apply_size_action_uses_field_text() {
        let mut c = Controller::default();
        let mut f = field("10");
        f.set_focused(true);
        apply_action(&mut c, ControlAction::ApplySize, &mut f);
        assert_eq!(c.size(), GridSize::new(10).unwrap());
        assert_eq!(c.grid().size(), 10);
        assert!(!f.is_focused());
    }

    #[test]
    fn test_apply_size_action_ignores_out_of_range() {
        let mut c = Controller::default();
        c.toggle_at_pixel(5.0, 5.0);
        for text in ["4", "101", ""] {
            let mut f = field(text);
            apply_action(&mut c, ControlAction::ApplySize, &mut f);
        }
        assert_eq!(c.size().get(), 20);
        assert_eq!(c.grid().live_count(), 1);
    }

    #[test]
    fn test_every_cell_reachable_at_largest_size() {
        let mut c = Controller::default();
        let mut f = field("100");
        apply_action(&mut c, ControlAction::ApplySize, &mut f);

        let (width, height) = window_size_for(c.canvas_extent());
        let board_width = width - crate::ui::PANEL_WIDTH;
        for (x, y) in [(50, 10), (10, 50), (99, 99)] {
            let (px, py) = (x as f32 * 20.0 + 5.0, y as f32 * 20.0 + 5.0);
            assert!(px < board_width && py < height, "({x}, {y}) off screen");
            assert!(c.toggle_at_pixel(px, py));
            assert!(c.grid().is_alive(x, y));
        }
        assert_eq!(c.grid().live_count(), 3);
    }

    #[test]
    fn test_start_pause_step_reset_actions() {
        let mut c = Controller::default();
        let mut f = field("20");
        apply_action(&mut c, ControlAction::Start, &mut f);
        assert!(c.is_running());
        apply_action(&mut c, ControlAction::Pause, &mut f);
        assert!(!c.is_running());
        apply_action(&mut c, ControlAction::Step, &mut f);
        assert_eq!(c.generation(), 2);
        apply_action(&mut c, ControlAction::Reset, &mut f);
        assert_eq!(c.generation(), 0);
    }
}
