use crate::Outcome;
use crate::board::{BOARD_SIZE, Board, Player};
use crate::oracle;
use crate::random::{RandomGenerator, StandardRandomGenerator};
use log::{debug, info};

/// One labeled position.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct TrainingSample {
    /// The board in external encoding: `0` = O, `1` = X, `3` = empty.
    pub input: [u8; BOARD_SIZE],
    /// One-hot `[O_win, X_win, Tie]`.
    pub label: [u8; 3],
}

impl TrainingSample {
    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::from_label(&self.label)
    }
}

/// Samples random legal partial games and labels them with the oracle.
///
/// Each sample pre-plays `k` random moves, `k` uniform in `[0, 9)`, starting
/// with X. Pre-play stops early when the board fills up or a move completes a
/// line, so decided and short games are over-represented compared to a
/// uniform draw over reachable positions. Every iteration yields exactly one
/// sample.
pub struct DatasetGenerator<K: RandomGenerator> {
    random: K,
}

impl<K: RandomGenerator> Default for DatasetGenerator<K> {
    fn default() -> Self {
        DatasetGeneratorBuilder::new().build()
    }
}

/// A builder for creating instances of `DatasetGenerator`.
pub struct DatasetGeneratorBuilder<K: RandomGenerator> {
    random_generator: K,
}

impl<K: RandomGenerator> DatasetGeneratorBuilder<K> {
    pub fn new() -> Self {
        Self {
            random_generator: K::default(),
        }
    }

    /// Sets the random number generator used for pre-play.
    pub fn with_random_generator(mut self, rg: K) -> Self {
        self.random_generator = rg;
        self
    }

    pub fn build(self) -> DatasetGenerator<K> {
        DatasetGenerator {
            random: self.random_generator,
        }
    }
}

impl<K: RandomGenerator> Default for DatasetGeneratorBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: RandomGenerator> DatasetGenerator<K> {
    pub fn builder() -> DatasetGeneratorBuilder<K> {
        DatasetGeneratorBuilder::new()
    }

    /// Generates `sample_count` independent samples in insertion order.
    pub fn generate(&mut self, sample_count: usize) -> Vec<TrainingSample> {
        info!("Generating {sample_count} samples...");
        let samples: Vec<TrainingSample> = (0..sample_count)
            .map(|index| {
                let sample = self.generate_sample();
                debug!(
                    "sample {index}: input={:?} label={:?}",
                    sample.input, sample.label
                );
                sample
            })
            .collect();
        info!("Generated {} samples", samples.len());
        samples
    }

    /// Plays one random partial game and labels the resulting position.
    pub fn generate_sample(&mut self) -> TrainingSample {
        label_position(self.random_position())
    }

    /// Pre-plays up to `k` uniformly random moves from the empty board.
    pub fn random_position(&mut self) -> Board {
        let mut board = Board::new();
        let mut mover = Player::X;
        let moves = self.random.next_range(0, BOARD_SIZE);

        for _ in 0..moves {
            let available = board.empty_cells();
            let Some(&index) = self.random.choose(&available) else {
                break;
            };
            board.place(index, mover);
            if board.winner().is_some() {
                break;
            }
            mover = mover.other();
        }
        board
    }
}

/// Labels `board` with the oracle, inferring the side to move from the
/// piece counts.
pub fn label_position(mut board: Board) -> TrainingSample {
    let x_to_move = board.next_player().is_maximizer();
    let score = oracle::evaluate(&mut board, x_to_move);

    TrainingSample {
        input: board.to_external(),
        label: Outcome::from_score(score).one_hot(),
    }
}

/// Generates `sample_count` samples using the thread-local random generator.
pub fn generate(sample_count: usize) -> Vec<TrainingSample> {
    DatasetGenerator::<StandardRandomGenerator>::default().generate(sample_count)
}
