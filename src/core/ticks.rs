/// Tick count requested for linear axes when nothing else is configured.
pub const DEFAULT_TICK_COUNT: usize = 10;

/// Largest tick count a chart configuration may request.
pub const MAX_TICK_COUNT: usize = 1000;

const STEP_BREAK_10: f64 = 7.071_067_811_865_476; // sqrt(50)
const STEP_BREAK_5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const STEP_BREAK_2: f64 = std::f64::consts::SQRT_2;

/// Integer tick indices plus the increment that scales them back to values.
///
/// A negative increment means "divide by `-increment`", which keeps
/// fractional steps exact (`3 / 10` instead of `3 * 0.1`).
#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: i64,
    last: i64,
    increment: f64,
}

fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= STEP_BREAK_10 {
        10.0
    } else if error >= STEP_BREAK_5 {
        5.0
    } else if error >= STEP_BREAK_2 {
        2.0
    } else {
        1.0
    };

    let (mut first, mut last, increment);
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        first = round_half_up(start * inc);
        last = round_half_up(stop * inc);
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        increment = -inc;
    } else {
        let inc = 10f64.powf(power) * factor;
        first = round_half_up(start / inc);
        last = round_half_up(stop / inc);
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        increment = inc;
    }

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    TickSpec {
        first: first as i64,
        last: last as i64,
        increment,
    }
}

/// Round tick values inside `[start, stop]`, roughly `count` of them, spaced
/// by 1, 2 or 5 times a power of ten.
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (low, high) = if reverse { (stop, start) } else { (start, stop) };
    let spec = tick_spec(low, high, count as f64);
    if spec.last < spec.first {
        return Vec::new();
    }

    let mut ticks: Vec<f64> = (spec.first..=spec.last)
        .map(|index| {
            if spec.increment < 0.0 {
                index as f64 / -spec.increment
            } else {
                index as f64 * spec.increment
            }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Spacing between consecutive [`nice_ticks`] for the same arguments.
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }

    let (low, high) = if stop < start { (stop, start) } else { (start, stop) };
    let increment = tick_spec(low, high, count as f64).increment;
    let step = if increment < 0.0 {
        1.0 / -increment
    } else {
        increment
    };
    if stop < start { -step } else { step }
}

/// Formats a tick with just enough decimals to distinguish ticks `step` apart.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let step = step.abs();
    let precision = if step > 0.0 && step.is_finite() {
        (-step.log10().floor()).max(0.0) as usize
    } else {
        0
    };

    let formatted = format!("{value:.precision$}");
    // `-0.0` and small negative residues print as "-0"
    if formatted.trim_start_matches('-').chars().all(|c| c == '0' || c == '.') {
        return formatted.trim_start_matches('-').to_owned();
    }
    formatted
}
