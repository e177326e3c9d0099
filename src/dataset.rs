use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::Outcome;
use crate::board::{BOARD_SIZE, Board};
use crate::error::{Error, Result};
use crate::generator::TrainingSample;

/// Samples materialized as numeric rows, ready to be fed to a network.
///
/// Row `i` of `inputs` and row `i` of `labels` belong to the same sample.
/// Inputs use the external encoding and labels are ordered
/// `[O_win, X_win, Tie]`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub inputs: Vec<[f32; BOARD_SIZE]>,
    pub labels: Vec<[f32; 3]>,
}

/// How many rows carry each label.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClassCounts {
    pub o_win: usize,
    pub x_win: usize,
    pub tie: usize,
}

impl ClassCounts {
    pub fn total(&self) -> usize {
        self.o_win + self.x_win + self.tie
    }
}

impl Dataset {
    pub fn from_samples(samples: &[TrainingSample]) -> Self {
        Self {
            inputs: samples
                .iter()
                .map(|sample| sample.input.map(f32::from))
                .collect(),
            labels: samples
                .iter()
                .map(|sample| sample.label.map(f32::from))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    pub fn class_counts(&self) -> ClassCounts {
        let mut counts = ClassCounts::default();
        for label in &self.labels {
            match label_outcome(label) {
                Some(Outcome::OWin) => counts.o_win += 1,
                Some(Outcome::XWin) => counts.x_win += 1,
                Some(Outcome::Tie) => counts.tie += 1,
                None => {}
            }
        }
        counts
    }

    /// Splits off the last `round(len * validation_fraction)` rows as a
    /// validation set. Returns `(training, validation)`.
    pub fn split(&self, validation_fraction: f64) -> Result<(Dataset, Dataset)> {
        if !(0.0..1.0).contains(&validation_fraction) {
            return Err(Error::InvalidConfiguration {
                message: format!("validation fraction {validation_fraction} must be in [0, 1)"),
            });
        }

        let validation_len = (self.len() as f64 * validation_fraction).round() as usize;
        let cut = self.len() - validation_len;
        let training = Dataset {
            inputs: self.inputs[..cut].to_vec(),
            labels: self.labels[..cut].to_vec(),
        };
        let validation = Dataset {
            inputs: self.inputs[cut..].to_vec(),
            labels: self.labels[cut..].to_vec(),
        };
        Ok((training, validation))
    }

    /// Checks that rows line up, every input is a board in external
    /// encoding and every label is one-hot.
    pub fn validate(&self) -> Result<()> {
        if self.inputs.len() != self.labels.len() {
            return Err(Error::MismatchedRows {
                inputs: self.inputs.len(),
                labels: self.labels.len(),
            });
        }
        for (row, (input, label)) in self.inputs.iter().zip(&self.labels).enumerate() {
            let mut cells = [0u8; BOARD_SIZE];
            for (position, &value) in input.iter().enumerate() {
                cells[position] = as_small_int(value).ok_or(Error::InvalidCellValue {
                    value: value as i32,
                    position,
                    encoding: crate::error::Encoding::External,
                })?;
            }
            Board::from_external(&cells)?;
            if label_outcome(label).is_none() {
                return Err(Error::InvalidLabel { row });
            }
        }
        Ok(())
    }

    /// Writes the dataset as JSON with `inputs` and `labels` arrays.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|source| Error::Io {
            operation: "create",
            path: path.to_path_buf(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush().map_err(|source| Error::Io {
            operation: "write",
            path: path.to_path_buf(),
            source,
        })?;
        info!("Saved {} samples to {}", self.len(), path.display());
        Ok(())
    }

    /// Reads a dataset written by [`Dataset::save_json`] and validates it.
    pub fn load_json(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|source| Error::Io {
            operation: "open",
            path: path.to_path_buf(),
            source,
        })?;
        let dataset: Dataset = serde_json::from_reader(BufReader::new(file))?;
        dataset.validate()?;
        Ok(dataset)
    }
}

fn as_small_int(value: f32) -> Option<u8> {
    if value.fract() == 0.0 && (0.0..=255.0).contains(&value) {
        Some(value as u8)
    } else {
        None
    }
}

fn label_outcome(label: &[f32; 3]) -> Option<Outcome> {
    let mut ints = [0u8; 3];
    for (slot, &value) in ints.iter_mut().zip(label) {
        *slot = as_small_int(value)?;
    }
    Outcome::from_label(&ints)
}
