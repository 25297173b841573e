use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Serialize;

use crate::audio::verify_float_wav;
use crate::error::ConvertError;
use crate::normalize::normalize;
use crate::rate::{effective_rate, infer_rate};
use crate::samples::read_samples;
use crate::wav_writer::{output_path, write_float_wav};

pub const DEFAULT_DELIMITER: &str = ",";
pub const MIN_SAMPLES: usize = 2;

/// Settings for a single conversion run.
#[derive(Clone, Debug)]
pub struct Config {
    /// Delimited text table to convert.
    pub input_path: PathBuf,
    /// Directory receiving `<input stem>.wav`; empty means the working directory.
    pub output_dir: PathBuf,
    /// Column separator, may be longer than one character.
    pub delimiter: String,
    /// Sample rate override in Hz.
    pub rate: Option<u32>,
    /// Report rows that were discarded because they were not numeric.
    pub verbose: bool,
    /// Decode the written file and compare it against the encoded values.
    pub verify: bool,
}

impl Config {
    /// Start building a [`Config`] for `input_path` with default settings.
    pub fn builder<P: AsRef<Path>>(input_path: P) -> ConfigBuilder {
        ConfigBuilder {
            input_path: input_path.as_ref().to_path_buf(),
            output_dir: PathBuf::new(),
            delimiter: DEFAULT_DELIMITER.to_owned(),
            rate: None,
            verbose: false,
            verify: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ConfigBuilder {
    input_path: PathBuf,
    output_dir: PathBuf,
    delimiter: String,
    rate: Option<u32>,
    verbose: bool,
    verify: bool,
}

impl ConfigBuilder {
    pub fn output_dir<P: AsRef<Path>>(mut self, output_dir: P) -> Self {
        self.output_dir = output_dir.as_ref().to_path_buf();
        self
    }

    pub fn delimiter<S: Into<String>>(mut self, delimiter: S) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn rate(mut self, rate: Option<u32>) -> Self {
        self.rate = rate;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn build(self) -> Result<Config, ConvertError> {
        if self.delimiter.is_empty() {
            return Err(ConvertError::EmptyDelimiter);
        }
        if self.rate == Some(0) {
            return Err(ConvertError::InvalidRate);
        }

        Ok(Config {
            input_path: self.input_path,
            output_dir: self.output_dir,
            delimiter: self.delimiter,
            rate: self.rate,
            verbose: self.verbose,
            verify: self.verify,
        })
    }
}

/// Milestones reported while a conversion runs.
#[derive(Clone, Debug, PartialEq)]
pub enum ConvertEvent {
    /// A row was dropped because its leading fields were not numeric.
    /// Only emitted in verbose mode.
    Discarded { line: String },
    /// Rate inferred from the first two timestamps.
    NativeRate(u32),
    /// Rate the output is encoded at.
    ExportRate(u32),
    /// Values were divided by `scale`, the original maximum.
    Normalized { scale: f64 },
    Written { path: PathBuf },
    /// The written file decoded back to the encoded values.
    Verified { samples: usize },
}

/// Summary of a finished conversion.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Conversion {
    pub input: PathBuf,
    pub output: PathBuf,
    pub native_rate: u32,
    pub export_rate: u32,
    pub samples: usize,
    pub discarded: usize,
    pub scale: Option<f64>,
}

/// Convert the table named by `config` into a float WAV file.
pub fn convert(config: &Config) -> Result<Conversion, ConvertError> {
    convert_with_progress(config, |_| {})
}

/// Same as [`convert`], reporting each step through `progress`.
pub fn convert_with_progress<F>(config: &Config, mut progress: F) -> Result<Conversion, ConvertError>
where
    F: FnMut(ConvertEvent),
{
    info!("converting '{}'", config.input_path.display());

    let table = read_samples(&config.input_path, &config.delimiter)?;
    if config.verbose {
        for line in &table.rejected {
            progress(ConvertEvent::Discarded { line: line.clone() });
        }
    }

    if table.samples.len() < MIN_SAMPLES {
        return Err(ConvertError::InsufficientSamples {
            found: table.samples.len(),
        });
    }

    let native_rate = infer_rate(&table.samples)?;
    progress(ConvertEvent::NativeRate(native_rate));
    let export_rate = effective_rate(native_rate, config.rate);
    progress(ConvertEvent::ExportRate(export_rate));

    let output = output_path(&config.input_path, &config.output_dir)?;

    let mut values = table.values();
    let scale = normalize(&mut values);
    if let Some(scale) = scale {
        debug!("normalized by {scale}");
        progress(ConvertEvent::Normalized { scale });
    }

    write_float_wav(&output, export_rate, &values)?;
    progress(ConvertEvent::Written {
        path: output.clone(),
    });
    if config.verify {
        verify_float_wav(&output, export_rate, &values)?;
        progress(ConvertEvent::Verified {
            samples: values.len(),
        });
    }
    info!(
        "wrote {} sample(s) at {} Hz to '{}'",
        values.len(),
        export_rate,
        output.display()
    );

    Ok(Conversion {
        input: config.input_path.clone(),
        output,
        native_rate,
        export_rate,
        samples: values.len(),
        discarded: table.rejected.len(),
        scale,
    })
}
