//! A minimax outcome oracle for tic-tac-toe and a generator of labeled
//! training data for outcome-prediction networks.
//!
//! The oracle scores a position under optimal play by both sides. The
//! generator plays random legal partial games, asks the oracle how each one
//! ends, and emits `(board, label)` pairs in the encoding a small
//! feed-forward network consumes: cells as `0` = O, `1` = X, `3` = empty and
//! labels as one-hot `[O_win, X_win, Tie]` vectors.
//!
//! # Example
//!
//! ```rust
//! use ttt_oracle::board::Board;
//! use ttt_oracle::generator::DatasetGenerator;
//! use ttt_oracle::oracle;
//! use ttt_oracle::random::SeededRandomGenerator;
//! use ttt_oracle::Outcome;
//!
//! // Tic-tac-toe is a draw with perfect play
//! let mut board = Board::new();
//! assert_eq!(oracle::evaluate(&mut board, true), 0);
//!
//! // Generate a reproducible batch of labeled positions
//! let mut generator = DatasetGenerator::builder()
//!     .with_random_generator(SeededRandomGenerator::new(7))
//!     .build();
//! let samples = generator.generate(16);
//!
//! for sample in &samples {
//!     let board = Board::from_external(&sample.input).unwrap();
//!     assert_eq!(Outcome::from_label(&sample.label), Some(oracle::solve(&board)));
//! }
//! ```

/// Board model, cell encodings and line detection.
pub mod board;
/// Configuration for dataset generation runs.
pub mod config;
/// Numeric batches of samples and the JSON hand-off file.
pub mod dataset;
/// Error types shared by the whole crate.
pub mod error;
/// Random partial-game sampling and labeling.
pub mod generator;
/// The exhaustive minimax outcome oracle.
pub mod oracle;
/// Contains traits and implementations for random number generation.
pub mod random;

pub use error::{Error, Result};

/// The forced result of a position under optimal play.
///
/// The discriminant is the position of the class in a label vector, which is
/// always ordered `[O_win, X_win, Tie]`.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Outcome {
    /// O forces a win.
    OWin = 0,
    /// X forces a win.
    XWin = 1,
    /// Neither side can force a win.
    Tie = 2,
}

impl Outcome {
    /// Maps an oracle score to an outcome. Only the sign matters.
    pub fn from_score(score: i32) -> Self {
        match score.signum() {
            1 => Outcome::XWin,
            -1 => Outcome::OWin,
            _ => Outcome::Tie,
        }
    }

    /// The one-hot `[O_win, X_win, Tie]` label of this outcome.
    pub fn one_hot(self) -> [u8; 3] {
        let mut label = [0; 3];
        label[self as usize] = 1;
        label
    }

    /// Reads a one-hot label back. Returns `None` unless exactly one entry is
    /// `1` and the others are `0`.
    pub fn from_label(label: &[u8; 3]) -> Option<Self> {
        match label {
            [1, 0, 0] => Some(Outcome::OWin),
            [0, 1, 0] => Some(Outcome::XWin),
            [0, 0, 1] => Some(Outcome::Tie),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Outcome;

    #[test]
    fn score_sign_selects_outcome() {
        assert_eq!(Outcome::from_score(7), Outcome::XWin);
        assert_eq!(Outcome::from_score(-1), Outcome::OWin);
        assert_eq!(Outcome::from_score(0), Outcome::Tie);
    }

    #[test]
    fn labels_are_ordered_o_x_tie() {
        assert_eq!(Outcome::OWin.one_hot(), [1, 0, 0]);
        assert_eq!(Outcome::XWin.one_hot(), [0, 1, 0]);
        assert_eq!(Outcome::Tie.one_hot(), [0, 0, 1]);
    }

    #[test]
    fn from_label_rejects_soft_labels() {
        assert_eq!(Outcome::from_label(&[0, 0, 1]), Some(Outcome::Tie));
        assert_eq!(Outcome::from_label(&[1, 1, 0]), None);
        assert_eq!(Outcome::from_label(&[0, 0, 0]), None);
        assert_eq!(Outcome::from_label(&[0, 2, 0]), None);
    }
}
