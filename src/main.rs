use macroquad::prelude::*;
use life_canvas::{
    Controller, Settings,
    rendering::{self, ScreenCanvas},
    ui::{self, SIZE_FIELD_Y, SLIDER_Y},
    input,
};

/// Top-left corner of the board on screen
const CANVAS_ORIGIN: Vec2 = Vec2::ZERO;

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let settings = Settings::load_or_default(&Settings::default_path());
    let mut controller = Controller::from_settings(&settings);

    let mut speed_slider = ui::create_speed_slider(controller.state().tick_interval_ms);
    let mut size_field = ui::create_size_field(controller.size());
    let mut canvas = ScreenCanvas::new(CANVAS_ORIGIN);
    let mut fitted_size = controller.size();
    input::fit_window_to_board(&controller);

    log::info!(
        "board {} at {} ms per tick",
        controller.size(),
        controller.state().tick_interval_ms
    );

    loop {
        let mouse_pos = mouse_position();

        // Keep the panel glued to the right edge
        let px = ui::panel_x();
        speed_slider.set_position(px + 18.0, SLIDER_Y);
        size_field.set_position(px + 10.0, SIZE_FIELD_Y);
        let buttons = ui::create_buttons();

        input::process_button_clicks(&mut controller, &buttons, &mut size_field, mouse_pos);
        input::handle_speed_slider(&mut controller, &mut speed_slider, mouse_pos);
        input::handle_size_field(&mut controller, &mut size_field, mouse_pos);
        input::handle_canvas_click(&mut controller, CANVAS_ORIGIN, mouse_pos);
        input::process_keyboard_input(&mut controller, &mut speed_slider, &size_field);

        if controller.size() != fitted_size {
            fitted_size = controller.size();
            input::fit_window_to_board(&controller);
        }

        controller.advance(get_frame_time());

        clear_background(Color::from_rgba(240, 240, 240, 255));
        let pitch = controller.state().cell_pixel_size as f32;
        rendering::render_grid(controller.grid(), pitch, &mut canvas);
        rendering::draw_controls(&controller, &buttons, &speed_slider, &size_field, mouse_pos);

        next_frame().await;
    }
}
