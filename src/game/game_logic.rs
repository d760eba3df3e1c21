use bevy::prelude::Component;
use rand::Rng;

#[derive(Component, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Mark {
    X,
    O,
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    // Signed cell value used by the evaluator's line sums
    pub fn value(&self) -> i8 {
        match self {
            Mark::X => -1,
            Mark::O => 1,
        }
    }

    pub fn random() -> Mark {
        if rand::rng().random_bool(0.5) {
            Mark::X
        } else {
            Mark::O
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Outcome {
    #[default]
    InProgress,
    Draw,
    Won(Mark),
}

// Board is inside its own module so private fields cannot be accessed / mutated directly
pub mod board {
    use super::super::grid::{Cell, LINE_SCAN_ORDER};
    use super::{Mark, Outcome};

    // All of Board's fields are private so that the outcome is recalculated
    // whenever a new mark lands on the board and can never go stale
    #[derive(Default)]
    pub struct Board {
        cells: [Option<Mark>; 9],
        placed: u8,
        outcome: Outcome,
    }

    impl Board {
        // behind a getter so the caller cannot mutate a cell directly
        pub fn cell(&self, cell: Cell) -> Option<Mark> {
            self.cells[cell.index()]
        }

        // behind a getter so the caller cannot mutate this field directly
        pub fn placed(&self) -> u8 {
            self.placed
        }

        // behind a getter so the caller cannot mutate this field directly
        pub fn outcome(&self) -> Outcome {
            self.outcome
        }

        // The only validation here is that the cell is free; turn legality
        // belongs to the caller. Returns false (and changes nothing) on an
        // occupied cell.
        pub fn place(&mut self, cell: Cell, mark: Mark) -> bool {
            if self.cells[cell.index()].is_some() {
                return false;
            }
            self.cells[cell.index()] = Some(mark);
            self.placed += 1;
            self.outcome = self.evaluate();
            true
        }

        fn evaluate(&self) -> Outcome {
            for line in LINE_SCAN_ORDER {
                let sum: i8 = line
                    .cells()
                    .iter()
                    .map(|cell| self.cells[cell.index()].map_or(0, |mark| mark.value()))
                    .sum();
                if sum.abs() == 3 {
                    let winner = if sum < 0 { Mark::X } else { Mark::O };
                    return Outcome::Won(winner);
                }
            }

            if self.placed as usize >= self.cells.len() {
                Outcome::Draw
            } else {
                Outcome::InProgress
            }
        }
    }
}
