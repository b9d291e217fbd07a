use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

/// Round tick step for roughly `count` ticks over `[start, end]`.
///
/// Steps are always 1, 2 or 5 times a power of ten.
#[must_use]
pub fn tick_step(start: f64, end: f64, count: usize) -> Option<f64> {
    let (low, high) = ordered(start, end);
    let span = high - low;
    if !span.is_finite() || span <= 0.0 || count == 0 {
        return None;
    }

    let target = span / count as f64;
    let mut step = 10_f64.powf(target.log10().floor());
    let error = count as f64 / span * step;
    if error <= 0.15 {
        step *= 10.0;
    } else if error <= 0.35 {
        step *= 5.0;
    } else if error <= 0.75 {
        step *= 2.0;
    }
    Some(step)
}

/// Tick values inside `[start, end]` aligned to `tick_step`.
#[must_use]
pub fn linear_ticks(start: f64, end: f64, count: usize) -> Vec<f64> {
    let Some(step) = tick_step(start, end, count) else {
        return Vec::new();
    };
    let (low, high) = ordered(start, end);

    let first = (low / step).ceil() as i64;
    let last = (high / step).floor() as i64;
    if last < first {
        return Vec::new();
    }
    (first..=last).map(|index| index as f64 * step).collect()
}

/// Number of fractional digits needed to print ticks spaced by `step`.
#[must_use]
pub fn tick_precision(step: f64) -> u32 {
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let digits = -(step.log10() + 0.01).floor();
    if digits > 0.0 { digits as u32 } else { 0 }
}

/// Formats a tick value with exactly the precision its step needs.
///
/// Going through `Decimal` drops binary noise such as `0.30000000000000004`.
#[must_use]
pub fn format_tick(value: f64, precision: u32) -> String {
    match Decimal::from_f64(value) {
        Some(decimal) => {
            let rounded = decimal.round_dp(precision);
            let text = format!("{:.*}", precision as usize, rounded);
            if text.starts_with('-') && rounded.is_zero() {
                text[1..].to_owned()
            } else {
                text
            }
        }
        None => format!("{value}"),
    }
}

fn ordered(start: f64, end: f64) -> (f64, f64) {
    if start <= end { (start, end) } else { (end, start) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_cover_zero_to_hundred_in_twenties() {
        assert_eq!(
            linear_ticks(0.0, 100.0, 5),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
    }

    #[test]
    fn ticks_skip_values_outside_domain() {
        assert_eq!(linear_ticks(6.0, 94.0, 5), vec![20.0, 40.0, 60.0, 80.0]);
    }

    #[test]
    fn reversed_domain_yields_same_ticks() {
        assert_eq!(linear_ticks(10.0, 0.0, 5), linear_ticks(0.0, 10.0, 5));
    }

    #[test]
    fn precision_follows_step() {
        assert_eq!(tick_precision(10.0), 0);
        assert_eq!(tick_precision(1.0), 0);
        assert_eq!(tick_precision(0.5), 1);
        assert_eq!(tick_precision(0.02), 2);
    }

    #[test]
    fn format_tick_rounds_binary_noise() {
        assert_eq!(format_tick(0.1 + 0.2, 1), "0.3");
        assert_eq!(format_tick(40.0, 0), "40");
        assert_eq!(format_tick(-0.0, 0), "0");
    }
}
