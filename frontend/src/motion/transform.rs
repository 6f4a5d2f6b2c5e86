/// Linear map from `input` onto `output`. `value` is clamped to the input
/// range first, so the result never leaves the output range.
pub fn interpolate(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;

    let in_span = in_end - in_start;
    if in_span == 0.0 || !in_span.is_finite() || value.is_nan() {
        return out_start;
    }

    let (low, high) = if in_start <= in_end {
        (in_start, in_end)
    } else {
        (in_end, in_start)
    };
    let t = (value.clamp(low, high) - in_start) / in_span;

    out_start + t * (out_end - out_start)
}

/// Vertical displacement of a parallax layer: `speed` is the total travel in
/// pixels across the whole progress range.
pub fn parallax_offset(progress: f64, speed: f64) -> f64 {
    interpolate(progress, (0.0, 1.0), (0.0, speed))
}

pub fn translate_y_style(offset: f64) -> String {
    format!(
        "transform: translate3d(0px, {:.2}px, 0px); will-change: transform;",
        offset
    )
}
