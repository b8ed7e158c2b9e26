//! Quantity trait and related types.
//!
//! A [`Quantity`] represents scalar data associated with a mesh, such as a
//! value per cell or per face.

/// Named data attached to a mesh.
pub trait Quantity: Send + Sync {
    /// Returns the name of this quantity.
    fn name(&self) -> &str;

    /// Returns the number of data elements.
    fn data_size(&self) -> usize;

    /// Returns the (min, max) of the finite values, or `None` if there are none.
    fn data_range(&self) -> Option<(f64, f64)>;
}

/// Computes the range of the finite values in a slice.
pub fn compute_range(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_range_skips_non_finite() {
        let range = compute_range(&[2.0, f64::NAN, -1.0, f64::INFINITY, 5.0]);
        assert_eq!(range, Some((-1.0, 5.0)));
    }

    #[test]
    fn test_compute_range_empty() {
        assert_eq!(compute_range(&[]), None);
        assert_eq!(compute_range(&[f64::NAN]), None);
    }
}
