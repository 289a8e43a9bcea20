use std::fs;
use std::io::Write;

use anyhow::{Context, Result};
use sdtex_core::Counts;
use sdtex_experiment::SetupConfig;

use crate::cli::{Command, GenerateArgs, MetricsArgs};

pub struct App {
    command: Command,
}

impl App {
    pub fn new(command: Command) -> Self {
        Self { command }
    }

    /// Runs the command and writes its JSON result to `out`.
    pub fn run<W: Write>(self, out: &mut W) -> Result<()> {
        let value = match &self.command {
            Command::Generate(args) => Self::generate(args)?,
            Command::Metrics(args) => Self::metrics(args)?,
        };
        serde_json::to_writer_pretty(&mut *out, &value)?;
        writeln!(out)?;
        Ok(())
    }

    fn generate(args: &GenerateArgs) -> Result<serde_json::Value> {
        let config = match &args.config {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading setup file {}", path.display()))?;
                SetupConfig::from_json(&text)
                    .with_context(|| format!("parsing setup file {}", path.display()))?
            }
            None => SetupConfig {
                n_trials: args.n_trials.unwrap_or_default(),
                conds: args.conds,
                seed: args.seed,
            },
        };

        let sequence = config.generate().with_context(|| {
            format!(
                "generating {} trials over {} conditions",
                config.n_trials, config.conds
            )
        })?;
        tracing::info!(
            n_trials = sequence.len(),
            balanced = sequence.is_balanced(),
            "trial list ready"
        );
        Ok(serde_json::to_value(&sequence)?)
    }

    fn metrics(args: &MetricsArgs) -> Result<serde_json::Value> {
        let counts = Counts::new(args.hits, args.misses, args.fas, args.crs);
        let result = if args.nan {
            args.correction.compute_or_nan(&counts)
        } else {
            args.correction
                .compute(&counts)
                .with_context(|| format!("computing {} metrics for {counts:?}", args.correction))?
        };
        Ok(serde_json::to_value(result)?)
    }
}
