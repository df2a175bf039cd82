use rand::Rng;

use super::{Cell, GridSize};

/// Fraction of cells brought to life by `randomize_with`
const RANDOM_DENSITY: f64 = 0.3;

/// Square board with toroidal topology: the left edge touches the right,
/// the top edge touches the bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead
    pub fn new(size: GridSize) -> Self {
        let size = size.get();
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Side length in cells
    pub const fn size(&self) -> usize {
        self.size
    }

    const fn index(&self, x: usize, y: usize) -> usize {
        y * self.size + x
    }

    /// Get cell at column `x`, row `y` (`None` when out of bounds)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.size && y < self.size).then(|| self.cells[self.index(x, y)])
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set cell at position; out-of-bounds writes are dropped
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.size && y < self.size {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Flip one cell and return its new state
    pub fn toggle(&mut self, x: usize, y: usize) -> Option<Cell> {
        let current = self.get(x, y)?;
        let flipped = current.toggle();
        self.set(x, y, flipped);
        Some(flipped)
    }

    /// Live neighbors among the 8 surrounding cells, wrapping at every edge
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let n = self.size;

        (0..3)
            .flat_map(|dy| (0..3).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 1 || dy != 1)
            .map(|(dx, dy)| ((x + n + dx - 1) % n, (y + n + dy - 1) % n))
            .filter(|&(nx, ny)| self.cells[self.index(nx, ny)].is_alive())
            .count() as u8
    }

    /// Next generation. The receiver is left untouched.
    pub fn evolve(&self) -> Self {
        let cells = (0..self.size)
            .flat_map(|y| (0..self.size).map(move |x| (x, y)))
            .map(|(x, y)| {
                let current = self.cells[self.index(x, y)];
                current.evolve(self.count_live_neighbors(x, y))
            })
            .collect();

        Self {
            size: self.size,
            cells,
        }
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Fill the board at `RANDOM_DENSITY`
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = Cell::from(rng.random_bool(RANDOM_DENSITY)));
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions, row by row
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.size, idx / self.size, cell))
    }
}
