use rand::Rng;

use super::settings::{MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS, Settings};
use super::TickTimer;
use crate::domain::{Grid, GridSize, presets};

/// Side of one cell on the canvas, in pixels
pub const CELL_PIXEL_SIZE: u32 = 20;

/// Timing and display parameters owned by the controller
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationState {
    pub running: bool,
    pub tick_interval_ms: u32,
    pub cell_pixel_size: u32,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self {
            running: false,
            tick_interval_ms: super::settings::DEFAULT_TICK_INTERVAL_MS,
            cell_pixel_size: CELL_PIXEL_SIZE,
        }
    }
}

/// Controller drives the simulation: it owns the board, the run state and
/// the tick timer, and every UI event ends up as one of its operations.
pub struct Controller {
    grid: Grid,
    size: GridSize,
    state: SimulationState,
    timer: TickTimer,
    generation: u64,
}

impl Controller {
    /// Stopped controller with an empty board
    pub fn new(size: GridSize) -> Self {
        Self {
            grid: Grid::new(size),
            size,
            state: SimulationState::default(),
            timer: TickTimer::new(),
            generation: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut controller = Self::new(settings.grid_size());
        controller.state.tick_interval_ms = settings.tick_interval_ms();

        if let Some(name) = settings.initial_pattern.as_deref() {
            match presets::by_name(name) {
                Some(pattern) => {
                    pattern.place_centered(&mut controller.grid);
                    log::info!("seeded with {} ({})", pattern.name, pattern.description);
                }
                None => log::warn!("unknown initial_pattern {name:?}, starting empty"),
            }
        }
        controller
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Side of the drawing surface in pixels
    pub fn canvas_extent(&self) -> f32 {
        (self.size.get() as u32 * self.state.cell_pixel_size) as f32
    }

    /// Begin ticking. The first generation is computed right away and the
    /// next one is scheduled after the configured delay.
    pub fn start(&mut self) {
        if self.state.running {
            return;
        }
        self.state.running = true;
        log::info!("started, {} ms per tick", self.state.tick_interval_ms);
        self.tick();
    }

    /// Stop ticking and drop the pending tick
    pub fn pause(&mut self) {
        if self.state.running {
            log::info!("paused at generation {}", self.generation);
        }
        self.state.running = false;
        self.timer.cancel();
    }

    /// Toggle between running and paused
    pub fn toggle_running(&mut self) {
        if self.state.running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Advance exactly one generation without touching the run state
    pub fn step(&mut self) {
        self.evolve();
        log::debug!("stepped to generation {}", self.generation);
    }

    /// Stop and replace the board with an empty one at the configured size
    pub fn reset(&mut self) {
        self.pause();
        self.grid = Grid::new(self.size);
        self.generation = 0;
        log::info!("reset to empty {} grid", self.size);
    }

    /// Switch to a new board size. Values outside the accepted range are
    /// ignored and leave everything as it was.
    pub fn apply_size(&mut self, requested: usize) -> bool {
        match GridSize::new(requested) {
            Some(size) => {
                self.size = size;
                self.reset();
                true
            }
            None => {
                log::debug!("ignoring grid size {requested}");
                false
            }
        }
    }

    /// Same as `apply_size` for raw text from the size input
    pub fn apply_size_input(&mut self, text: &str) -> bool {
        match GridSize::parse(text) {
            Some(size) => self.apply_size(size.get()),
            None => {
                log::debug!("ignoring grid size input {text:?}");
                false
            }
        }
    }

    /// Change the delay between ticks. A running loop restarts so the new
    /// delay applies from now.
    pub fn set_speed(&mut self, tick_interval_ms: u32) {
        self.state.tick_interval_ms = tick_interval_ms;
        if self.state.running {
            self.pause();
            self.start();
        }
    }

    /// Nudge the delay by `delta_ms`, keeping it within slider range
    pub fn adjust_speed(&mut self, delta_ms: i32) {
        let next = (self.state.tick_interval_ms as i64 + delta_ms as i64)
            .clamp(MIN_TICK_INTERVAL_MS as i64, MAX_TICK_INTERVAL_MS as i64);
        self.set_speed(next as u32);
    }

    /// Flip the cell under a click at canvas pixel (px, py). Clicks outside
    /// the board are ignored. Returns true when a cell changed.
    pub fn toggle_at_pixel(&mut self, px: f32, py: f32) -> bool {
        let Some((x, y)) = self.pixel_to_cell(px, py) else {
            return false;
        };
        let toggled = self.grid.toggle(x, y);
        log::debug!("toggled ({x}, {y}) to {toggled:?}");
        toggled.is_some()
    }

    /// Canvas pixel to grid coordinate by integer division by the cell pitch
    pub fn pixel_to_cell(&self, px: f32, py: f32) -> Option<(usize, usize)> {
        if px < 0.0 || py < 0.0 {
            return None;
        }
        let pitch = self.state.cell_pixel_size as f32;
        let (x, y) = ((px / pitch) as usize, (py / pitch) as usize);
        let n = self.size.get();
        (x < n && y < n).then_some((x, y))
    }

    /// Stop and fill the board with random cells
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pause();
        self.grid.randomize_with(rng);
        self.generation = 0;
        log::info!("randomized, {} live cells", self.grid.live_count());
    }

    /// Feed frame time into the tick loop
    pub fn advance(&mut self, elapsed_secs: f32) {
        if self.state.running && self.timer.advance(elapsed_secs * 1000.0) {
            self.tick();
        }
    }

    /// One scheduled tick: evolve, then arm the timer for the next one
    fn tick(&mut self) {
        self.evolve();
        self.timer.schedule(self.state.tick_interval_ms);
    }

    fn evolve(&mut self) {
        self.grid = self.grid.evolve();
        self.generation += 1;
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn tick_pending(&self) -> bool {
        self.timer.is_pending()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(GridSize::DEFAULT)
    }
}
