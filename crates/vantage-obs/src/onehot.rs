//! Generic one-hot expansion of an index array.

use vantage_core::EncodeError;

/// Expand integer indices into indicator vectors along a new trailing
/// axis of size `depth`.
///
/// The output has length `indices.len() * depth`, row-major: row `i` is
/// all zeros except a one at `indices[i]`. The output value type is
/// generic so callers can pick their numeric representation; `f32` is
/// the usual choice.
///
/// An index outside `[0, depth)` is rejected with
/// [`EncodeError::IndexOutOfRange`] rather than silently wrapped.
///
/// # Examples
///
/// ```
/// use vantage_obs::one_hot;
///
/// let rows: Vec<f32> = one_hot(&[2, 0], 3).unwrap();
/// assert_eq!(rows, vec![0.0, 0.0, 1.0, 1.0, 0.0, 0.0]);
/// ```
pub fn one_hot<T>(indices: &[u32], depth: u32) -> Result<Vec<T>, EncodeError>
where
    T: Copy + From<bool>,
{
    let mut out = vec![T::from(false); indices.len() * depth as usize];
    for (row, &index) in indices.iter().enumerate() {
        if index >= depth {
            return Err(EncodeError::IndexOutOfRange { index, depth });
        }
        out[row * depth as usize + index as usize] = T::from(true);
    }
    Ok(out)
}
