//! "Nice" tick value selection over a numeric interval.
//!
//! Steps are restricted to 1, 2, 5 and 10 times a power of ten, picked so
//! that roughly `count` values cover the interval.

const E10: f64 = 7.071067811865476; // sqrt(50)
const E5: f64 = 3.1622776601683795; // sqrt(10)
const E2: f64 = 1.4142135623730951; // sqrt(2)

/// Generate approximately `count` round values covering `[start, stop]`.
///
/// A descending interval yields a descending list.
pub fn ticks(start: f64, stop: f64, count: f64) -> Vec<f64> {
    if !(count > 0.0) {
        return vec![];
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (i1, i2, inc) = if reverse {
        tick_spec(stop, start, count)
    } else {
        tick_spec(start, stop, count)
    };
    if i2 < i1 {
        return vec![];
    }

    let n = (i2 - i1 + 1.0) as usize;
    let mut values = Vec::with_capacity(n);
    for i in 0..n {
        let step = if reverse { i2 - i as f64 } else { i1 + i as f64 };
        values.push(if inc < 0.0 { step / -inc } else { step * inc });
    }
    values
}

fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        // Sub-unit steps are kept as an inverse increment so the final
        // division happens once, on round integers.
        let inv = 10f64.powf(-power) / factor;
        i1 = (start * inv).round();
        i2 = (stop * inv).round();
        if i1 / inv < start {
            i1 += 1.0;
        }
        if i2 / inv > stop {
            i2 -= 1.0;
        }
        inc = -inv;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && 0.5 <= count && count < 2.0 {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// The step size `ticks` would use for the given interval and count.
pub fn tick_increment(start: f64, stop: f64, count: f64) -> f64 {
    if !(count > 0.0) {
        return f64::NAN;
    }
    if start == stop {
        return f64::NEG_INFINITY;
    }
    let step = (stop - start) / count.max(0.0);
    if step == 0.0 {
        return f64::NAN;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    // Negative values are inverse increments: a result of -50 means a
    // step of 1/50.
    if power < 0.0 {
        -(10f64.powf(-power)) / factor
    } else {
        10f64.powf(power) * factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_unit_interval() {
        let values = ticks(0.0, 1.0, 10.0);
        assert_eq!(values.len(), 11);
        assert_approx_eq!(f64, values[0], 0.0);
        assert_approx_eq!(f64, values[1], 0.1);
        assert_approx_eq!(f64, values[10], 1.0);
    }

    #[test]
    fn test_descending_interval() {
        let values = ticks(10.0, 0.0, 5.0);
        assert_eq!(values, vec![10.0, 8.0, 6.0, 4.0, 2.0, 0.0]);
    }

    #[test]
    fn test_negative_span() {
        let values = ticks(-25.0, 25.0, 10.0);
        assert_eq!(values.first().copied(), Some(-25.0));
        assert_eq!(values.last().copied(), Some(25.0));
    }

    #[test]
    fn test_degenerate_inputs() {
        assert_eq!(ticks(3.0, 3.0, 10.0), vec![3.0]);
        assert!(ticks(0.0, 1.0, 0.0).is_empty());
        assert!(ticks(0.0, 1.0, f64::NAN).is_empty());
    }

    #[test]
    fn test_increment_steps() {
        assert_approx_eq!(f64, tick_increment(0.0, 1.0, 10.0), -10.0);
        assert_approx_eq!(f64, tick_increment(0.0, 10.0, 10.0), 1.0);
        assert_approx_eq!(f64, tick_increment(0.0, 100.0, 10.0), 10.0);
        assert_approx_eq!(f64, tick_increment(0.0, 10.0, 5.0), 2.0);
    }
}
