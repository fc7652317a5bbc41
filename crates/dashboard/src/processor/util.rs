use std::cmp::Ordering;

/// Ratio with a defined zero fallback: a zero denominator yields 0 rather
/// than NaN or infinity. A NaN numerator or denominator still propagates.
pub fn guarded_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Copy of `values` sorted in descending order.
pub fn sorted_desc(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guarded_ratio() {
        assert_eq!(guarded_ratio(3.0, 4.0), 0.75);
        assert_eq!(guarded_ratio(0.0, 0.0), 0.0);
        assert_eq!(guarded_ratio(5.0, 0.0), 0.0);
    }

    #[test]
    fn test_guarded_ratio_never_infinite() {
        let ratio = guarded_ratio(1.0, 0.0);
        assert!(ratio.is_finite());
    }

    #[test]
    fn test_sorted_desc() {
        assert_eq!(
            sorted_desc(&[1.0, 5.0, 3.0, 2.0]),
            vec![5.0, 3.0, 2.0, 1.0]
        );
        assert!(sorted_desc(&[]).is_empty());
    }
}
