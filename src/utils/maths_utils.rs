use argminmax::ArgMinMax;

/// Smallest and largest value of a slice, `None` when empty.
#[inline]
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }
    let (min_index, max_index) = values.argminmax();
    Some((values[min_index], values[max_index]))
}

/// p-quantile of an ascending slice, interpolating between closest ranks (h = (n - 1) * p).
/// Returns None for an empty slice.
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let p = p.clamp(0.0, 1.0);
    if n == 1 || p <= 0.0 {
        return Some(sorted[0]);
    }
    if p >= 1.0 {
        return Some(sorted[n - 1]);
    }

    let h = (n - 1) as f64 * p;
    let lower = h.floor() as usize;
    let upper = (lower + 1).min(n - 1);
    let frac = h - lower as f64;
    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

#[inline]
pub fn mean_and_stddev(data: &[f64]) -> (f64, f64) {
    let count = data.len();
    if count == 0 {
        return (0.0, 0.0);
    }

    let sum: f64 = data.iter().sum();
    let mean = sum / count as f64;

    let variance: f64 = data
        .iter()
        .map(|value| {
            let diff = mean - *value;
            diff * diff
        })
        .sum::<f64>()
        / count as f64;

    (mean, variance.sqrt())
}

/// Linearly maps a value from one range to another while preserving its relative proportion.
/// A collapsed input range maps to the middle of the output range.
pub fn remap(val: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    let span = in_max - in_min;
    if span == 0.0 {
        return (out_min + out_max) / 2.0;
    }
    let t = (val - in_min) / span;
    out_min + t * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates_between_ranks() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.5), Some(2.5));
        assert_eq!(quantile_sorted(&sorted, 0.75), Some(3.25));
        assert_eq!(quantile_sorted(&sorted, 1.0), Some(4.0));
        assert_eq!(quantile_sorted(&[], 0.5), None);
    }

    #[test]
    fn extent_finds_both_ends() {
        assert_eq!(extent(&[3.0, -1.0, 7.5, 2.0]), Some((-1.0, 7.5)));
        assert_eq!(extent(&[]), None);
    }

    #[test]
    fn remap_handles_collapsed_domain() {
        assert_eq!(remap(5.0, 0.0, 10.0, 0.0, 100.0), 50.0);
        assert_eq!(remap(5.0, 5.0, 5.0, 3.0, 12.0), 7.5);
    }

    #[test]
    fn population_stddev() {
        let (mean, std) = mean_and_stddev(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]);
        assert_eq!(mean, 5.0);
        assert_eq!(std, 2.0);
    }
}
