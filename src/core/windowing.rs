//! Window-start lookup for x-monotonic sample sequences.
//!
//! A drag gesture issues one query per frame with a slowly moving target, so
//! the search is an interpolation search seeded by the previous answer rather
//! than a bisection from scratch.

/// Two x values closer than this end the interpolation loop early.
///
/// Each search further caps it at half the mean sample spacing of its slice.
pub const WINDOW_MATCH_PRECISION: f64 = 0.01;

/// Returns the index of the greatest `x_of(item) <= target_x`.
///
/// NaN x values are tolerated anywhere in `items`: they are skipped while
/// searching and never become the answer unless every sample is NaN. Returns
/// `0` for empty or all-NaN input, for a NaN target, and when every x is
/// greater than `target_x`.
///
/// `initial_guess` is only a hint; any value yields the same answer.
#[must_use]
pub fn find_window_start<T, F>(items: &[T], x_of: F, target_x: f64, initial_guess: usize) -> usize
where
    F: Fn(&T) -> f64,
{
    if items.is_empty() || target_x.is_nan() {
        return 0;
    }

    let mut nominal_end = items.len() - 1;
    while nominal_end > 0 && x_of(&items[nominal_end]).is_nan() {
        nominal_end -= 1;
    }

    // First non-NaN x at or after `index`, else the tail x (NaN when every
    // sample is NaN).
    let defined_x_from = |mut index: usize| -> f64 {
        while index <= nominal_end {
            let x = x_of(&items[index]);
            if !x.is_nan() {
                return x;
            }
            index += 1;
        }
        x_of(&items[nominal_end])
    };

    let span = x_of(&items[nominal_end]) - defined_x_from(0);
    let precision = if nominal_end > 0 && span.is_finite() && span > 0.0 {
        WINDOW_MATCH_PRECISION.min(span / nominal_end as f64 / 2.0)
    } else {
        WINDOW_MATCH_PRECISION
    };

    let mut start: isize = 0;
    let mut end = nominal_end as isize;
    let mut guess = initial_guess.min(nominal_end) as isize;

    while start < end {
        let guess_x = defined_x_from(guess as usize);
        if (guess_x - target_x).abs() <= precision {
            start = guess;
            break;
        } else if guess_x > target_x {
            end = guess - 1;
        } else {
            start = guess;
        }

        if start >= end {
            break;
        }

        let start_x = defined_x_from(start as usize);
        let end_x = defined_x_from(end as usize);
        let index_per_x = (end - start + 1) as f64 / (end_x - start_x);
        let offset = ((target_x - start_x) * index_per_x) as isize;
        guess = start.saturating_add(offset).clamp(start + 1, end);
    }

    let mut start = start.max(0) as usize;

    // The match tolerance can stop on either side of the target, possibly on
    // a gap.
    while start > 0 && {
        let x = x_of(&items[start]);
        x.is_nan() || x > target_x
    } {
        start -= 1;
    }
    while let Some((next, next_x)) = next_defined(items, &x_of, start + 1, nominal_end) {
        if next_x > target_x {
            break;
        }
        start = next;
    }

    start
}

fn next_defined<T, F>(items: &[T], x_of: &F, from: usize, last: usize) -> Option<(usize, f64)>
where
    F: Fn(&T) -> f64,
{
    (from..=last).find_map(|index| {
        let x = x_of(&items[index]);
        (!x.is_nan()).then_some((index, x))
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::find_window_start;

    fn xs(values: &[f64]) -> Vec<f64> {
        values.to_vec()
    }

    #[test]
    fn empty_and_all_nan_inputs_return_zero() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(find_window_start(&empty, |x| *x, 3.0, 5), 0);

        let nan = xs(&[f64::NAN, f64::NAN, f64::NAN]);
        assert_eq!(find_window_start(&nan, |x| *x, 3.0, 2), 0);
    }

    #[test]
    fn trailing_nan_tail_is_ignored() {
        let values = xs(&[0.0, 1.0, 2.0, f64::NAN, f64::NAN]);
        assert_eq!(find_window_start(&values, |x| *x, 10.0, 4), 2);
    }

    #[test]
    fn target_before_first_sample_returns_zero() {
        let values = xs(&[5.0, 6.0, 7.0]);
        assert_eq!(find_window_start(&values, |x| *x, 1.0, 2), 0);
    }

    #[test]
    fn interior_gap_is_skipped() {
        let values = xs(&[0.0, 1.0, f64::NAN, f64::NAN, 4.0, 5.0]);
        assert_eq!(find_window_start(&values, |x| *x, 4.5, 0), 4);
        assert_eq!(find_window_start(&values, |x| *x, 3.0, 5), 1);
        assert_eq!(find_window_start(&values, |x| *x, 3.995, 2), 1);
    }

    #[test]
    fn nan_target_returns_zero() {
        let values = xs(&[0.0, 1.0, 2.0]);
        assert_eq!(find_window_start(&values, |x| *x, f64::NAN, 1), 0);
    }

    #[test]
    fn dense_samples_stay_logarithmic_near_the_hint() {
        let values: Vec<f64> = (0..100_000).map(|i| i as f64 * 1e-5).collect();
        let reads = Cell::new(0usize);
        let x_of = |x: &f64| {
            reads.set(reads.get() + 1);
            *x
        };

        for (target, hint) in [(0.5, 49_500), (0.5, 50_900), (0.25, 0), (0.912_345_67, 99_999)] {
            reads.set(0);
            let expected = values.partition_point(|x| *x <= target) - 1;
            assert_eq!(find_window_start(&values, &x_of, target, hint), expected);
            assert!(reads.get() < 64, "{} reads for target {target}", reads.get());
        }
    }
}
