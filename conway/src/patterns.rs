// patterns.rs - Named seed patterns and initial layouts

/// A named set of live cells, as `(row, col)` offsets from the pattern's
/// top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

impl Pattern {
    /// Bounding box as `(rows, cols)`.
    pub fn extent(&self) -> (i64, i64) {
        let rows = self.cells.iter().map(|&(r, _)| r).max().unwrap_or(0) + 1;
        let cols = self.cells.iter().map(|&(_, c)| c).max().unwrap_or(0) + 1;
        (rows, cols)
    }
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

#[rustfmt::skip]
pub const PATTERNS: &[Pattern] = &[
    GLIDER,
    BLINKER,
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Upper half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Lower half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 24),
            (1, 22), (1, 24),
            (2, 12), (2, 13), (2, 20), (2, 21), (2, 34), (2, 35),
            (3, 11), (3, 15), (3, 20), (3, 21), (3, 34), (3, 35),
            (4, 0), (4, 1), (4, 10), (4, 16), (4, 20), (4, 21),
            (5, 0), (5, 1), (5, 10), (5, 14), (5, 16), (5, 17), (5, 22), (5, 24),
            (6, 10), (6, 16), (6, 24),
            (7, 11), (7, 15),
            (8, 12), (8, 13),
        ],
    },
];

/// Case-insensitive lookup in [`PATTERNS`].
pub fn find_pattern(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

/// How a freshly built universe is seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitialLayout {
    /// Cell `i` is alive iff `i % 2 == 0 || i % 7 == 0`.
    Interesting,
    /// Each cell alive with probability one half.
    Random,
    /// All dead.
    Empty,
    /// A named pattern centered on the grid.
    Pattern(&'static Pattern),
}

impl InitialLayout {
    /// Parses `interesting`, `random`, `empty`, or a pattern name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "interesting" => Some(Self::Interesting),
            "random" => Some(Self::Random),
            "empty" => Some(Self::Empty),
            _ => find_pattern(name).map(Self::Pattern),
        }
    }

    /// Whether linear cell `idx` starts alive under the `Interesting` layout.
    pub fn interesting_cell(idx: usize) -> bool {
        idx % 2 == 0 || idx % 7 == 0
    }
}
