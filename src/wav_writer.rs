use std::path::{Path, PathBuf};

use hound::{SampleFormat, WavSpec, WavWriter};
use log::debug;

use crate::error::ConvertError;

pub const OUTPUT_EXTENSION: &str = "wav";
const CHANNELS: u16 = 1;
const BITS_PER_SAMPLE: u16 = 32;

pub fn float_spec(sample_rate: u32) -> WavSpec {
    WavSpec {
        channels: CHANNELS,
        sample_rate,
        bits_per_sample: BITS_PER_SAMPLE,
        sample_format: SampleFormat::Float,
    }
}

/// `<output_dir>/<input stem>.wav`, or just the file name for an empty `output_dir`.
pub fn output_path(input: &Path, output_dir: &Path) -> Result<PathBuf, ConvertError> {
    let stem = input.file_stem().ok_or(ConvertError::InvalidInputName)?;
    let mut name = stem.to_os_string();
    name.push(".");
    name.push(OUTPUT_EXTENSION);
    Ok(output_dir.join(name))
}

/// Write `values` as a single-channel float WAV file.
///
/// The writer is finalized before returning; on error it is dropped, which
/// also closes the file.
pub fn write_float_wav(path: &Path, sample_rate: u32, values: &[f64]) -> Result<(), ConvertError> {
    let mut writer = WavWriter::create(path, float_spec(sample_rate))?;

    for &value in values {
        writer.write_sample(value as f32)?;
    }

    writer.finalize()?;
    debug!(
        "wrote {} sample(s) at {} Hz to '{}'",
        values.len(),
        sample_rate,
        path.display()
    );
    Ok(())
}
