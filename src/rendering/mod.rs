mod canvas;

use macroquad::prelude::*;

pub use canvas::{Canvas, DrawCommand, RecordingCanvas, ScreenCanvas};

use crate::application::Controller;
use crate::domain::Grid;
use crate::ui::{Button, NumberField, Slider, panel_x, PANEL_WIDTH};

pub const GRID_LINE_COLOR: Color = Color::new(0.867, 0.867, 0.867, 1.0); // #ddd
pub const ALIVE_COLOR: Color = Color::new(0.298, 0.686, 0.314, 1.0); // #4CAF50

/// Draw the board: clear, grid lines at `pitch`, then live cells inset by
/// one pixel on every side.
pub fn render_grid(grid: &Grid, pitch: f32, canvas: &mut impl Canvas) {
    let n = grid.size();
    let extent = n as f32 * pitch;

    canvas.clear_rect(0.0, 0.0, extent, extent);

    for i in 0..=n {
        let offset = i as f32 * pitch;
        canvas.stroke_line(offset, 0.0, offset, extent, GRID_LINE_COLOR);
        canvas.stroke_line(0.0, offset, extent, offset, GRID_LINE_COLOR);
    }

    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(x, y, _)| {
            canvas.fill_rect(
                x as f32 * pitch + 1.0,
                y as f32 * pitch + 1.0,
                pitch - 2.0,
                pitch - 2.0,
                ALIVE_COLOR,
            );
        });
}

fn draw_panel_background() {
    draw_rectangle(
        panel_x(),
        0.0,
        PANEL_WIDTH,
        screen_height(),
        Color::from_rgba(30, 30, 30, 255),
    );
}

/// Draw the control panel: widgets, then status labels
pub fn draw_controls(
    controller: &Controller,
    buttons: &[Button],
    speed: &Slider,
    size_field: &NumberField,
    mouse_pos: (f32, f32),
) {
    draw_panel_background();

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));
    speed.draw();
    size_field.draw();

    let px = panel_x() + 10.0;
    let state = controller.state();
    let grid = controller.grid();

    let status = if state.running { "Running" } else { "Paused" };
    let status_color = if state.running {
        Color::from_rgba(0, 255, 0, 255)
    } else {
        Color::from_rgba(255, 165, 0, 255)
    };
    let generation = controller.generation().to_string();
    let grid_info = format!("{}  ({} live)", controller.size(), grid.live_count());

    let labels: [(&str, f32, f32, f32, Color); 10] = [
        ("Status:", px, 560.0, 16.0, WHITE),
        (status, px, 580.0, 16.0, status_color),
        ("Generation:", px, 610.0, 16.0, WHITE),
        (&generation, px, 630.0, 20.0, ALIVE_COLOR),
        ("Grid:", px, 660.0, 16.0, WHITE),
        (&grid_info, px, 680.0, 14.0, Color::from_rgba(180, 180, 180, 255)),
        ("Keys:", px, 715.0, 14.0, WHITE),
        ("Space: start/pause  N: step", px, 732.0, 12.0, GRAY),
        ("C: reset  R: random", px, 746.0, 12.0, GRAY),
        ("Up/Down: delay", px, 760.0, 12.0, GRAY),
    ];

    labels.iter().for_each(|(text, x, y, size, color)| {
        draw_text(text, *x, *y, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Cell, GridSize};

    fn grid(side: usize, live: &[(usize, usize)]) -> Grid {
        let mut g = Grid::new(GridSize::new(side).unwrap());
        for &(x, y) in live {
            g.set(x, y, Cell::Alive);
        }
        g
    }

    #[test]
    fn test_clears_whole_surface_first() {
        let mut canvas = RecordingCanvas::default();
        render_grid(&grid(10, &[]), 20.0, &mut canvas);
        assert_eq!(
            canvas.commands.first(),
            Some(&DrawCommand::Clear { x: 0.0, y: 0.0, w: 200.0, h: 200.0 })
        );
    }

    #[test]
    fn test_draws_size_plus_one_lines_each_way() {
        let mut canvas = RecordingCanvas::default();
        render_grid(&grid(5, &[]), 20.0, &mut canvas);

        let lines: Vec<_> = canvas
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Line { x1, y1, x2, y2, .. } => Some((*x1, *y1, *x2, *y2)),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 12);
        assert!(lines.contains(&(100.0, 0.0, 100.0, 100.0)));
        assert!(lines.contains(&(0.0, 40.0, 100.0, 40.0)));
        assert!(!canvas.commands.iter().any(|c| matches!(c, DrawCommand::Fill { .. })));
    }

    #[test]
    fn test_live_cells_are_inset() {
        let mut canvas = RecordingCanvas::default();
        render_grid(&grid(5, &[(2, 3), (0, 0)]), 20.0, &mut canvas);

        let fills: Vec<_> = canvas
            .commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Fill { x, y, w, h, color } => Some((*x, *y, *w, *h, *color)),
                _ => None,
            })
            .collect();
        assert_eq!(
            fills,
            vec![
                (1.0, 1.0, 18.0, 18.0, ALIVE_COLOR),
                (41.0, 61.0, 18.0, 18.0, ALIVE_COLOR),
            ]
        );
    }

    #[test]
    fn test_cells_drawn_after_lines() {
        let mut canvas = RecordingCanvas::default();
        render_grid(&grid(5, &[(4, 4)]), 20.0, &mut canvas);
        assert!(matches!(canvas.commands.last(), Some(DrawCommand::Fill { .. })));
    }
}
