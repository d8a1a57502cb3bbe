//! Validation seam shared by all entity kinds.

use crate::error::FieldErrors;

/// Field and uniqueness checks against the rest of the stored population.
///
/// `population` is the full same-kind population as read by the caller's
/// storage layer. Implementations exclude the candidate's own id before
/// comparing, so the slice may contain the record being updated.
pub trait Validate: Sized {
    fn validate(&self, population: &[Self]) -> Result<(), FieldErrors>;
}
