use std::path::Path;

use hound::{SampleFormat, WavReader};
use log::debug;

use crate::error::ConvertError;
use crate::wav_writer::float_spec;

/// Read a WAV file produced by [`crate::wav_writer::write_float_wav`].
///
/// Anything other than 32-bit float samples is rejected.
pub fn read_float_wav(path: &Path) -> Result<(u32, Vec<f32>), ConvertError> {
    let mut reader = WavReader::open(path)?;
    let spec = reader.spec();

    if spec.sample_format != SampleFormat::Float || spec.bits_per_sample != 32 {
        return Err(ConvertError::VerificationFailed(format!(
            "expected 32-bit float samples, found {}-bit {:?}",
            spec.bits_per_sample, spec.sample_format
        )));
    }

    let samples = reader.samples::<f32>().collect::<Result<Vec<_>, _>>()?;
    Ok((spec.sample_rate, samples))
}

/// Decode `path` and check it holds exactly `values` as mono float at `sample_rate`.
pub fn verify_float_wav(path: &Path, sample_rate: u32, values: &[f64]) -> Result<(), ConvertError> {
    let spec = WavReader::open(path)?.spec();
    if spec != float_spec(sample_rate) {
        return Err(ConvertError::VerificationFailed(format!(
            "expected mono float at {} Hz, found {} channel(s) at {} Hz",
            sample_rate, spec.channels, spec.sample_rate
        )));
    }

    let (_, decoded) = read_float_wav(path)?;
    if decoded.len() != values.len() {
        return Err(ConvertError::VerificationFailed(format!(
            "expected {} sample(s), found {}",
            values.len(),
            decoded.len()
        )));
    }

    let mismatch = decoded
        .iter()
        .zip(values)
        .position(|(read, &written)| read.to_bits() != (written as f32).to_bits());
    if let Some(index) = mismatch {
        return Err(ConvertError::VerificationFailed(format!(
            "sample {index} decoded as {}, expected {}",
            decoded[index], values[index] as f32
        )));
    }

    debug!("verified {} sample(s) in '{}'", decoded.len(), path.display());
    Ok(())
}
