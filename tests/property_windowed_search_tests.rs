use chart_tracker::core::find_window_start;
use proptest::prelude::*;

fn sorted_xs(mut steps: Vec<f64>, origin: f64) -> Vec<f64> {
    let mut x = origin;
    for step in &mut steps {
        x += *step;
        *step = x;
    }
    steps
}

fn expected_start(xs: &[f64], target: f64) -> usize {
    xs.iter()
        .enumerate()
        .filter(|(_, x)| !x.is_nan() && **x <= target)
        .map(|(index, _)| index)
        .next_back()
        .unwrap_or(0)
}

proptest! {
    #[test]
    fn window_start_brackets_target_for_any_guess(
        steps in proptest::collection::vec(0.0f64..5.0, 1..256),
        origin in -1_000.0f64..1_000.0,
        target_offset in -50.0f64..1_300.0,
    ) {
        let xs = sorted_xs(steps, origin);
        let target = origin + target_offset;
        let expected = expected_start(&xs, target);

        for guess in [0, xs.len() / 2, xs.len() - 1, xs.len() + 10] {
            let start = find_window_start(&xs, |x| *x, target, guess);
            prop_assert!(start < xs.len());
            if xs[0] <= target {
                prop_assert!(xs[start] <= target);
                if start + 1 < xs.len() {
                    prop_assert!(xs[start + 1] > target);
                }
            } else {
                prop_assert_eq!(start, 0);
            }
            prop_assert_eq!(start, expected);
        }
    }

    #[test]
    fn window_start_skips_gaps(
        steps in proptest::collection::vec(0.01f64..5.0, 2..128),
        gaps in proptest::collection::vec(any::<bool>(), 2..128),
        target_offset in 0.0f64..700.0,
        guess in 0usize..200,
    ) {
        let mut xs = sorted_xs(steps, 0.0);
        for (x, gap) in xs.iter_mut().zip(gaps) {
            if gap {
                *x = f64::NAN;
            }
        }
        prop_assume!(xs.iter().any(|x| !x.is_nan()));

        let start = find_window_start(&xs, |x| *x, target_offset, guess);
        let expected = expected_start(&xs, target_offset);
        let first_defined = xs.iter().position(|x| !x.is_nan()).unwrap_or(0);
        if xs[first_defined] <= target_offset {
            prop_assert_eq!(start, expected);
        } else {
            prop_assert!(start <= first_defined);
        }
    }
}
