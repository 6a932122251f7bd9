//! Control points and piecewise-linear curves.

use crate::{OpsError, OpsResult};

/// A single knot of a remap curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlPoint {
    /// Input level (x).
    pub input: u8,
    /// Output level (y).
    pub output: u8,
}

impl ControlPoint {
    /// Create a new control point.
    #[inline]
    pub const fn new(input: u8, output: u8) -> Self {
        Self { input, output }
    }
}

impl From<(u8, u8)> for ControlPoint {
    #[inline]
    fn from((input, output): (u8, u8)) -> Self {
        Self::new(input, output)
    }
}

/// A validated piecewise-linear curve over the 8-bit domain.
///
/// Invariants (checked on construction):
/// - at least two control points
/// - input levels are non-decreasing (equal neighbours form a vertical jump)
///
/// The curve does not need to start at 0 or end at 255. Outside its own
/// endpoints it extrapolates flat.
///
/// # Example
///
/// ```rust
/// use lumen_ops::remap::{ControlPoint, Curve};
///
/// let curve = Curve::new(vec![
///     ControlPoint::new(50, 80),
///     ControlPoint::new(200, 180),
/// ]).unwrap();
///
/// assert_eq!(curve.evaluate(10), 80);
/// assert_eq!(curve.evaluate(125), 130);
/// assert_eq!(curve.evaluate(250), 180);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Curve {
    points: Vec<ControlPoint>,
}

impl Curve {
    /// Create a curve from control points.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidCurve`] with fewer than two points or when an input
    /// level is lower than the one before it.
    pub fn new(points: Vec<ControlPoint>) -> OpsResult<Self> {
        if points.len() < 2 {
            return Err(OpsError::InvalidCurve(format!(
                "need at least 2 control points, got {}",
                points.len()
            )));
        }
        if let Some(i) = points.windows(2).position(|w| w[1].input < w[0].input) {
            return Err(OpsError::InvalidCurve(format!(
                "input levels must be non-decreasing: point {} ({}) follows {}",
                i + 1,
                points[i + 1].input,
                points[i].input
            )));
        }
        Ok(Self { points })
    }

    /// Create a curve from parallel input/output level lists.
    ///
    /// Levels are paired by position. Every level must lie in `[0, 255]`;
    /// out-of-range values are rejected rather than wrapped.
    ///
    /// ```rust
    /// use lumen_ops::remap::Curve;
    ///
    /// let curve = Curve::from_levels(&[0, 70, 150, 255], &[0, 50, 200, 255]).unwrap();
    /// assert_eq!(curve.evaluate(110), 125);
    ///
    /// assert!(Curve::from_levels(&[0, 256], &[0, 255]).is_err());
    /// assert!(Curve::from_levels(&[0, 255], &[0]).is_err());
    /// ```
    pub fn from_levels(r_vals: &[i64], s_vals: &[i64]) -> OpsResult<Self> {
        if r_vals.len() != s_vals.len() {
            return Err(OpsError::InvalidCurve(format!(
                "r_vals has {} levels but s_vals has {}",
                r_vals.len(),
                s_vals.len()
            )));
        }
        let points = r_vals
            .iter()
            .zip(s_vals)
            .enumerate()
            .map(|(i, (&r, &s))| {
                Ok(ControlPoint::new(
                    level("r_vals", i, r)?,
                    level("s_vals", i, s)?,
                ))
            })
            .collect::<OpsResult<Vec<_>>>()?;
        Self::new(points)
    }

    /// The identity curve `(0,0)-(255,255)`.
    pub fn identity() -> Self {
        Self {
            points: vec![ControlPoint::new(0, 0), ControlPoint::new(255, 255)],
        }
    }

    /// The inverting curve `(0,255)-(255,0)`.
    pub fn negative() -> Self {
        Self {
            points: vec![ControlPoint::new(0, 255), ControlPoint::new(255, 0)],
        }
    }

    /// Control points, in order.
    #[inline]
    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    /// Map one sample through the curve.
    ///
    /// Uses the last knot whose input level is `<= x` as the lower end of the
    /// bracket. A sample sitting on a duplicated input level therefore takes
    /// the later knot's output, and every interpolated bracket has non-zero
    /// width.
    pub fn evaluate(&self, x: u8) -> u8 {
        let pts = &self.points;
        let idx = pts.partition_point(|p| p.input <= x);

        if idx == 0 {
            return pts[0].output;
        }
        if idx == pts.len() {
            return pts[idx - 1].output;
        }

        let lo = pts[idx - 1];
        let hi = pts[idx];
        let dx = f64::from(hi.input - lo.input);
        let dy = f64::from(hi.output) - f64::from(lo.output);
        let y = f64::from(lo.output) + f64::from(x - lo.input) * dy / dx;
        y.round().clamp(0.0, 255.0) as u8
    }

    /// Returns true if the curve maps every level to itself.
    pub fn is_identity(&self) -> bool {
        (0..=u8::MAX).all(|x| self.evaluate(x) == x)
    }

    /// Returns true if output levels never decrease along the curve.
    ///
    /// Monotonic curves preserve sample order.
    pub fn is_monotonic(&self) -> bool {
        self.points.windows(2).all(|w| w[1].output >= w[0].output)
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::identity()
    }
}

fn level(name: &str, index: usize, value: i64) -> OpsResult<u8> {
    u8::try_from(value).map_err(|_| {
        OpsError::InvalidCurve(format!("{name}[{index}] = {value} is outside [0, 255]"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(points: &[(u8, u8)]) -> Curve {
        Curve::new(points.iter().copied().map(ControlPoint::from).collect()).unwrap()
    }

    #[test]
    fn test_too_few_points() {
        assert!(matches!(Curve::new(vec![]), Err(OpsError::InvalidCurve(_))));
        let one = vec![ControlPoint::new(0, 0)];
        assert!(matches!(Curve::new(one), Err(OpsError::InvalidCurve(_))));
    }

    #[test]
    fn test_decreasing_inputs_rejected() {
        let pts = vec![
            ControlPoint::new(0, 0),
            ControlPoint::new(150, 100),
            ControlPoint::new(70, 200),
        ];
        let err = Curve::new(pts).unwrap_err();
        assert!(err.to_string().contains("non-decreasing"));
    }

    #[test]
    fn test_negative_levels_rejected() {
        let err = Curve::from_levels(&[-1, 255], &[0, 255]).unwrap_err();
        assert!(err.to_string().contains("r_vals[0]"));
        let err = Curve::from_levels(&[0, 255], &[0, 300]).unwrap_err();
        assert!(err.to_string().contains("s_vals[1]"));
    }

    #[test]
    fn test_reference_curve() {
        let c = Curve::from_levels(&[0, 70, 150, 255], &[0, 50, 200, 255]).unwrap();
        assert_eq!(c.evaluate(0), 0);
        assert_eq!(c.evaluate(70), 50);
        assert_eq!(c.evaluate(110), 125);
        assert_eq!(c.evaluate(150), 200);
        assert_eq!(c.evaluate(255), 255);
        // 35 * 50 / 70 = 25
        assert_eq!(c.evaluate(35), 25);
    }

    #[test]
    fn test_flat_extrapolation() {
        let c = curve(&[(50, 80), (200, 180)]);
        assert_eq!(c.evaluate(0), 80);
        assert_eq!(c.evaluate(10), 80);
        assert_eq!(c.evaluate(50), 80);
        assert_eq!(c.evaluate(200), 180);
        assert_eq!(c.evaluate(250), 180);
        assert_eq!(c.evaluate(255), 180);
    }

    #[test]
    fn test_rounds_to_nearest() {
        // 1 * 255 / 2 = 127.5 -> 128
        let c = curve(&[(0, 0), (2, 255)]);
        assert_eq!(c.evaluate(1), 128);
        // 1 * 1 / 3 = 0.33 -> 0, 2 * 1 / 3 = 0.67 -> 1
        let c = curve(&[(0, 0), (3, 1)]);
        assert_eq!(c.evaluate(1), 0);
        assert_eq!(c.evaluate(2), 1);
    }

    #[test]
    fn test_vertical_segment_takes_later_point() {
        let c = curve(&[(0, 0), (100, 50), (100, 200), (255, 255)]);
        assert_eq!(c.evaluate(99), 50);
        assert_eq!(c.evaluate(100), 200);
        assert_eq!(c.evaluate(101), 200);
        assert_eq!(c.evaluate(255), 255);
    }

    #[test]
    fn test_all_points_on_one_level() {
        let c = curve(&[(128, 10), (128, 20), (128, 30)]);
        assert_eq!(c.evaluate(0), 10);
        assert_eq!(c.evaluate(128), 30);
        assert_eq!(c.evaluate(255), 30);
    }

    #[test]
    fn test_decreasing_outputs() {
        let c = curve(&[(0, 200), (255, 100)]);
        assert!(!c.is_monotonic());
        assert_eq!(c.evaluate(0), 200);
        assert_eq!(c.evaluate(255), 100);
        // 200 - 51 * 100 / 255 = 180
        assert_eq!(c.evaluate(51), 180);
    }

    #[test]
    fn test_identity_and_negative() {
        assert!(Curve::identity().is_identity());
        assert!(Curve::default().is_identity());
        assert!(!Curve::negative().is_identity());
        for x in 0..=255u8 {
            assert_eq!(Curve::negative().evaluate(x), 255 - x);
        }
    }
}
