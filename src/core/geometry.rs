use crate::core::ScreenPoint;

/// Squared segment lengths below this are treated as coincident endpoints.
pub const DEGENERATE_SEGMENT_EPSILON: f64 = 1e-6;

/// Nearest point on a segment together with its clamped parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentProjection {
    pub point: ScreenPoint,
    /// Position along `p1 → p2`, always within `[0, 1]`.
    pub u: f64,
}

/// Unclamped parameter of the orthogonal projection of `p` on the line
/// through `p1` and `p2`. `None` when the endpoints coincide.
#[must_use]
pub fn position_on_line(p: ScreenPoint, p1: ScreenPoint, p2: ScreenPoint) -> Option<f64> {
    let direction = p2 - p1;
    let length_squared = direction.length_squared();
    if length_squared.is_nan() || length_squared < DEGENERATE_SEGMENT_EPSILON {
        return None;
    }
    Some((p - p1).dot(direction) / length_squared)
}

/// Projects `p` onto the segment `p1 → p2`.
///
/// See <http://paulbourke.net/geometry/pointlineplane/>.
#[must_use]
pub fn project_onto_segment(
    p: ScreenPoint,
    p1: ScreenPoint,
    p2: ScreenPoint,
) -> Option<SegmentProjection> {
    let u = position_on_line(p, p1, p2)?;
    let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
    Some(SegmentProjection {
        point: p1 + (p2 - p1) * u,
        u,
    })
}
