use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use ttt_oracle::config::GeneratorConfig;
use ttt_oracle::dataset::Dataset;
use ttt_oracle::generator::DatasetGenerator;
use ttt_oracle::random::{RandomGenerator, SeededRandomGenerator, StandardRandomGenerator};

/// Generate a minimax-labeled tic-tac-toe outcome dataset.
#[derive(Parser)]
#[command(name = "generate-dataset", about = "Generate labeled tic-tac-toe positions")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "generator.toml")]
    config: PathBuf,

    /// Override number of samples
    #[arg(long)]
    samples: Option<usize>,

    /// Seed for a reproducible dataset
    #[arg(long)]
    seed: Option<u64>,

    /// Override validation split fraction
    #[arg(long)]
    validation_split: Option<f64>,

    /// Override output file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mut config = GeneratorConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(samples) = cli.samples {
        config.samples = samples;
    }
    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(split) = cli.validation_split {
        config.validation_split = split;
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    config.validate().context("invalid configuration")?;

    match config.seed {
        Some(seed) => {
            info!("Using seed {seed}");
            let generator = DatasetGenerator::builder()
                .with_random_generator(SeededRandomGenerator::new(seed))
                .build();
            run(generator, &config)
        }
        None => run(
            DatasetGenerator::<StandardRandomGenerator>::default(),
            &config,
        ),
    }
}

fn run<K: RandomGenerator>(
    mut generator: DatasetGenerator<K>,
    config: &GeneratorConfig,
) -> Result<()> {
    let samples = generator.generate(config.samples);
    let dataset = Dataset::from_samples(&samples);

    let counts = dataset.class_counts();
    info!(
        "Labels: O win = {}, X win = {}, tie = {}",
        counts.o_win, counts.x_win, counts.tie
    );

    let (training, validation) = dataset.split(config.validation_split)?;
    info!(
        "Split: {} training / {} validation rows",
        training.len(),
        validation.len()
    );

    dataset
        .save_json(&config.output)
        .with_context(|| format!("writing dataset to {}", config.output.display()))?;
    Ok(())
}
