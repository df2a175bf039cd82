//! Validated board dimension.

/// Side length of a square board, always within `MIN..=MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridSize(usize);

impl GridSize {
    pub const MIN: usize = 5;
    pub const MAX: usize = 100;
    pub const DEFAULT: GridSize = GridSize(20);

    /// Returns `None` when `side` is outside the accepted range
    pub fn new(side: usize) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&side).then_some(Self(side))
    }

    /// Parse user text such as the size input field.
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<usize>().ok().and_then(Self::new)
    }

    pub const fn get(self) -> usize {
        self.0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}×{}", self.0, self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_inclusive() {
        assert_eq!(GridSize::new(5).map(GridSize::get), Some(5));
        assert_eq!(GridSize::new(100).map(GridSize::get), Some(100));
        assert!(GridSize::new(4).is_none());
        assert!(GridSize::new(101).is_none());
        assert!(GridSize::new(0).is_none());
    }

    #[test]
    fn test_parse() {
        assert_eq!(GridSize::parse(" 42 ").map(GridSize::get), Some(42));
        assert!(GridSize::parse("").is_none());
        assert!(GridSize::parse("abc").is_none());
        assert!(GridSize::parse("-10").is_none());
        assert!(GridSize::parse("1000").is_none());
    }

    #[test]
    fn test_default_is_twenty() {
        assert_eq!(GridSize::default().get(), 20);
        assert_eq!(GridSize::default().to_string(), "20×20");
    }
}
