use crate::error::ConvertError;
use crate::samples::Sample;

/// Infer the sample rate from the spacing of the first two samples.
///
/// Only the leading interval is examined; later irregular spacing is not
/// detected. Halfway rates round to the even neighbour.
pub fn infer_rate(samples: &[Sample]) -> Result<u32, ConvertError> {
    let (first, second) = match samples {
        [first, second, ..] => (first, second),
        _ => {
            return Err(ConvertError::InsufficientSamples {
                found: samples.len(),
            })
        }
    };

    let delta = second.timestamp - first.timestamp;
    let rate = (1.0 / delta).round_ties_even();
    if !delta.is_finite() || !rate.is_finite() || rate < 1.0 || rate > u32::MAX as f64 {
        return Err(ConvertError::DegenerateInterval { delta });
    }

    Ok(rate as u32)
}

pub fn effective_rate(inferred: u32, requested: Option<u32>) -> u32 {
    requested.unwrap_or(inferred)
}
