//! Sample runner
//!
//! Pushes the configured sample inputs through the formatter and the
//! configured people through [`attach_profession`]. Every input is handled
//! on its own: a rejected input is recorded with its error and has no
//! formatted output, the rest still run.

use crate::config::Config;
use crate::error::Result;
use crate::formatter::ValueFormatter;
use crate::logging::get_logger;
use crate::record::{Professional, attach_profession};
use crate::value::{Value, ValueKind};

/// Outcome of formatting one sample input
#[derive(Debug)]
pub struct FormattedSample {
    /// Position in `samples.inputs`
    pub index: usize,

    /// Raw input as configured
    pub input: serde_yaml::Value,

    /// Formatted string, or the reason the input was rejected
    pub result: Result<String>,
}

impl FormattedSample {
    /// Runtime kind of the formatted result; `None` for rejected inputs
    pub fn output_kind(&self) -> Option<ValueKind> {
        self.result
            .as_deref()
            .ok()
            .map(|output| Value::from(output).kind())
    }
}

/// Everything produced by one run
#[derive(Debug, Default)]
pub struct SampleReport {
    pub formatted: Vec<FormattedSample>,
    pub merged: Vec<Professional>,
}

impl SampleReport {
    /// Samples that failed to format
    pub fn rejected(&self) -> impl Iterator<Item = &FormattedSample> {
        self.formatted.iter().filter(|s| s.result.is_err())
    }
}

/// Run all configured samples
pub fn run_samples(config: &Config) -> SampleReport {
    let logger = get_logger("samples");
    let formatter = ValueFormatter::new(&config.formatting);

    let formatted = config
        .samples
        .inputs
        .iter()
        .enumerate()
        .map(|(index, input)| {
            let sample_logger = logger.for_sample(index);
            let result = formatter.format_dynamic(input);
            match &result {
                Ok(output) => sample_logger.debug(&format!("Formatted {:?} as {:?}", input, output)),
                Err(e) => sample_logger.error(&format!("Rejected input {:?}: {}", input, e)),
            }
            FormattedSample {
                index,
                input: input.clone(),
                result,
            }
        })
        .collect::<Vec<_>>();

    let merged = config
        .samples
        .people
        .iter()
        .map(attach_profession)
        .collect::<Vec<_>>();

    logger.info(&format!(
        "Processed {} inputs ({} rejected) and {} records",
        formatted.len(),
        formatted.iter().filter(|s| s.result.is_err()).count(),
        merged.len()
    ));

    SampleReport { formatted, merged }
}
