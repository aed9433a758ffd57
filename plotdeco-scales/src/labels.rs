//! Default tick label generation and the small format language used by
//! the min/mean/max annotation regions.

use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::array;
use crate::error::PlotdecoScaleError;

/// Ordered world-coordinate value to label string mapping.
pub type TickLabelMap = IndexMap<OrderedFloat<f64>, String>;

/// Round values covering `[start, stop]`, descending when the interval is.
pub fn nice_scale(start: f64, stop: f64) -> Vec<f64> {
    array::ticks(start, stop, 10.0)
}

/// Default labels for a list of tick values.
pub fn nice_labels(values: &[f64]) -> TickLabelMap {
    let mut labels = TickLabelMap::with_capacity(values.len());
    for &value in values {
        labels.insert(OrderedFloat(value), format_g(value));
    }
    labels
}

/// `%g`-style rendering: six significant digits, trailing zeros trimmed,
/// exponent notation outside `[1e-4, 1e6)`.
pub fn format_g(value: f64) -> String {
    format_sig(value, 6)
}

fn format_sig(value: f64, sig: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return format!("{}", value);
    }
    let sig = sig.max(1);
    let magnitude = value.abs().log10().floor() as i32;
    if magnitude < -4 || magnitude >= sig as i32 {
        let formatted = format!("{:.*e}", sig - 1, value);
        match formatted.find('e') {
            Some(pos) => {
                let (mantissa, exponent) = formatted.split_at(pos);
                let mantissa = mantissa.trim_end_matches('0').trim_end_matches('.');
                format!("{}{}", mantissa, exponent)
            }
            None => formatted,
        }
    } else {
        let decimals = (sig as i32 - 1 - magnitude).max(0) as usize;
        let mut formatted = format!("{:.*}", decimals, value);
        if formatted.contains('.') {
            while formatted.ends_with('0') {
                formatted.pop();
            }
            if formatted.ends_with('.') {
                formatted.pop();
            }
        }
        formatted
    }
}

/// Apply a format spec of the form `[:][.N]{g|f|e}` to a value.
///
/// `g` renders N significant digits (default 6), `f` a fixed number of
/// decimals, `e` exponent notation.
pub fn apply_format(value: f64, spec: &str) -> Result<String, PlotdecoScaleError> {
    let body = spec.strip_prefix(':').unwrap_or(spec);
    let (precision, kind) = parse_spec(body).ok_or_else(|| {
        PlotdecoScaleError::InvalidFormat(spec.to_string())
    })?;
    Ok(match kind {
        'g' => format_sig(value, precision.unwrap_or(6)),
        'f' => format!("{:.*}", precision.unwrap_or(6), value),
        'e' => format!("{:.*e}", precision.unwrap_or(6), value),
        _ => unreachable!(),
    })
}

fn parse_spec(body: &str) -> Option<(Option<usize>, char)> {
    let kind = body.chars().last()?;
    if !matches!(kind, 'g' | 'f' | 'e') {
        return None;
    }
    let head = &body[..body.len() - 1];
    if head.is_empty() {
        return Some((None, kind));
    }
    let digits = head.strip_prefix('.')?;
    let precision = digits.parse::<usize>().ok()?;
    Some((Some(precision), kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_g() {
        assert_eq!(format_g(0.0), "0");
        assert_eq!(format_g(1.0), "1");
        assert_eq!(format_g(0.25), "0.25");
        assert_eq!(format_g(-12.5), "-12.5");
        assert_eq!(format_g(1e20), "1e20");
        assert_eq!(format_g(1.5e-7), "1.5e-7");
    }

    #[test]
    fn test_nice_labels_cover_all_values() {
        let values = nice_scale(0.0, 10.0);
        let labels = nice_labels(&values);
        assert_eq!(labels.len(), values.len());
        assert_eq!(labels[&OrderedFloat(0.0)], "0");
        assert_eq!(labels[&OrderedFloat(5.0)], "5");
    }

    #[test]
    fn test_nice_scale_descending() {
        let values = nice_scale(10.0, 0.0);
        assert_eq!(values.first().copied(), Some(10.0));
        assert_eq!(values.last().copied(), Some(0.0));
    }

    #[test]
    fn test_apply_format() {
        assert_eq!(apply_format(3.45, ":g").unwrap(), "3.45");
        assert_eq!(apply_format(3.14159, ":.3g").unwrap(), "3.14");
        assert_eq!(apply_format(2.5, ":.2f").unwrap(), "2.50");
        assert_eq!(apply_format(12345.0, ":.1e").unwrap(), "1.2e4");
        assert!(apply_format(1.0, "nope").is_err());
    }
}
