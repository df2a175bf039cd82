use super::{Cell, Grid};

/// A named arrangement of live cells that can be stamped onto a grid
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: usize,
    pub height: usize,
    pub cells: Vec<(usize, usize)>, // Relative coordinates of live cells
}

impl Pattern {
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, description, width, height, cells }
    }

    /// Stamp live cells with the pattern's top-left corner at (x, y).
    /// Cells past an edge wrap around like the board does.
    pub fn place_on(&self, grid: &mut Grid, x: usize, y: usize) {
        let n = grid.size();
        for (dx, dy) in &self.cells {
            grid.set((x + dx) % n, (y + dy) % n, Cell::Alive);
        }
    }

    /// Stamp the pattern in the middle of the grid
    pub fn place_centered(&self, grid: &mut Grid) {
        let n = grid.size();
        let x = n.saturating_sub(self.width) / 2;
        let y = n.saturating_sub(self.height) / 2;
        self.place_on(grid, x, y);
    }
}

/// Small library of classic starting shapes
pub mod presets {
    use super::*;

    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (1, 0), (0, 1), (1, 1)])
    }

    pub fn blinker() -> Pattern {
        Pattern::new("Blinker", "Oscillator (period 2)", vec![(0, 1), (1, 1), (2, 1)])
    }

    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
        )
    }

    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
        )
    }

    /// Glider - moves one cell diagonally every 4 generations
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Spaceship (period 4)",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
        )
    }

    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "R-pentomino",
            "Methuselah",
            vec![
                (1, 0), (2, 0),
                (0, 1), (1, 1),
                (1, 2),
            ],
        )
    }

    pub fn all_patterns() -> Vec<Pattern> {
        vec![block(), blinker(), toad(), beacon(), glider(), r_pentomino()]
    }

    /// Look up a preset by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GridSize;

    fn grid(side: usize) -> Grid {
        Grid::new(GridSize::new(side).unwrap())
    }

    #[test]
    fn test_dimensions_from_cells() {
        let p = presets::beacon();
        assert_eq!((p.width, p.height), (4, 4));
    }

    #[test]
    fn test_by_name_ignores_case() {
        assert_eq!(presets::by_name("GLIDER").map(|p| p.name), Some("Glider"));
        assert_eq!(presets::by_name(" r-pentomino ").map(|p| p.name), Some("R-pentomino"));
        assert!(presets::by_name("gosper").is_none());
    }

    #[test]
    fn test_every_preset_is_described() {
        for p in presets::all_patterns() {
            assert!(!p.description.is_empty(), "{}", p.name);
        }
    }

    #[test]
    fn test_place_wraps_around_edges() {
        let mut g = grid(5);
        presets::block().place_on(&mut g, 4, 4);
        assert!(g.is_alive(4, 4) && g.is_alive(0, 4) && g.is_alive(4, 0) && g.is_alive(0, 0));
        assert_eq!(g.live_count(), 4);
    }

    #[test]
    fn test_still_life_and_oscillators() {
        let mut block = grid(10);
        presets::block().place_centered(&mut block);
        assert_eq!(block.evolve(), block);

        for pattern in [presets::blinker(), presets::toad(), presets::beacon()] {
            let mut g = grid(12);
            pattern.place_centered(&mut g);
            assert_eq!(g.evolve().evolve(), g, "{}", pattern.name);
        }
    }

    #[test]
    fn test_glider_returns_after_full_lap() {
        // Period 4 with a one-cell diagonal shift: a 10-wide torus takes 40 generations
        let mut start = grid(10);
        presets::glider().place_on(&mut start, 0, 0);
        let after = (0..40).fold(start.clone(), |g, _| g.evolve());
        assert_eq!(after, start);
    }
}
