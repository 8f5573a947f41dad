//! Availability-mask construction over the action vocabulary.

use vantage_core::{EncodeError, FunctionId};

/// Build the legal-action mask for one tick.
///
/// Returns a `vocabulary_len`-element vector with 1.0 at each listed
/// function's position and 0.0 elsewhere. Duplicate IDs are idempotent.
/// An ID at or beyond `vocabulary_len` is rejected with
/// [`EncodeError::IndexOutOfRange`].
///
/// # Examples
///
/// ```
/// use vantage_core::FunctionId;
/// use vantage_obs::availability_mask;
///
/// let mask = availability_mask(&[FunctionId(0), FunctionId(3)], 5).unwrap();
/// assert_eq!(mask, vec![1.0, 0.0, 0.0, 1.0, 0.0]);
/// ```
pub fn availability_mask(
    available: &[FunctionId],
    vocabulary_len: usize,
) -> Result<Vec<f32>, EncodeError> {
    let mut mask = vec![0.0f32; vocabulary_len];
    for &id in available {
        let slot = mask
            .get_mut(id.0 as usize)
            .ok_or(EncodeError::IndexOutOfRange {
                index: id.0,
                depth: vocabulary_len as u32,
            })?;
        *slot = 1.0;
    }
    Ok(mask)
}
