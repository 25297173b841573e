/// Scale `values` in place so that their maximum does not exceed 1.0.
///
/// Only the maximum is inspected, not the absolute maximum: a sequence whose
/// largest value is at most 1.0 is left untouched even when it dips below
/// -1.0. NaN entries are skipped when searching for the maximum.
///
/// Returns the original maximum when scaling was applied.
pub fn normalize(values: &mut [f64]) -> Option<f64> {
    let scale = peak(values)?;
    if scale <= 1.0 {
        return None;
    }

    for value in values.iter_mut() {
        *value /= scale;
    }
    Some(scale)
}

/// Largest non-NaN value, if any.
pub fn peak(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |max, v| match max {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}
