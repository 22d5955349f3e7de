//! Piecewise-linear mapping through control points.

/// Maps `x` through `(input, output)` control points with linear
/// interpolation between neighbors.
///
/// Inputs are expected in ascending order. Outside the control range the
/// result clamps to the first or last output. Degenerate point lists do
/// the least surprising thing: an empty list passes `x` through and a
/// single point always yields its output.
pub fn interpolate(x: f64, points: &[(f64, f64)]) -> f64 {
    let (first, rest) = match points {
        [] => return x,
        [only] => return only.1,
        [first, rest @ ..] => (first, rest),
    };

    if x <= first.0 {
        return first.1;
    }

    let mut lo = *first;
    for hi in rest {
        if x <= hi.0 {
            // x > lo.0 held on every earlier point, so the span is nonzero.
            let t = (x - lo.0) / (hi.0 - lo.0);
            return lo.1 + (hi.1 - lo.1) * t;
        }
        lo = *hi;
    }
    lo.1
}
