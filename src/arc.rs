//! The filled arc of a progress circle.

use core::f64::consts::TAU;

use alloc::string::String;

use crate::{ArcTo, Path, PathEl, Point, Vec2};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// Completion is measured against this value.
const MAX_PERCENTAGE: f64 = 100.0;

/// Offset subtracted from a full turn so the arc keeps distinct endpoints.
///
/// A full circle cannot be expressed as a single arc command: when the start
/// and end points coincide, the command is degenerate and renderers draw
/// nothing.
const FULL_TURN_EPSILON: f64 = 0.001;

/// The filled portion of a progress circle.
///
/// The geometry lives on a circle of the given radius centered at
/// `(radius, radius)`, with progress starting at the top of the circle and
/// sweeping clockwise. All operations are total: inputs are not validated,
/// and out-of-range values produce geometrically off but well-formed output
/// (see the field docs).
///
/// ```
/// use progress_circle::ProgressArc;
///
/// let arc = ProgressArc::new(25.0, 60.0);
/// assert!((arc.sweep_angle() - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// assert!(!arc.large_arc());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressArc {
    /// Completion in percent, nominally in `0..=100`.
    ///
    /// Values of 100 and above are treated as a hair under 100 so the arc
    /// remains expressible as a single command; values below 0 pass through
    /// unvalidated.
    pub percentage: f64,
    /// Outer radius of the progress circle.
    ///
    /// Expected positive; a non-positive radius yields a degenerate but
    /// non-crashing path.
    pub radius: f64,
}

impl ProgressArc {
    /// Create a new arc for the given completion percentage and radius.
    #[inline]
    pub const fn new(percentage: f64, radius: f64) -> Self {
        ProgressArc { percentage, radius }
    }

    /// The percentage actually used for the geometry.
    ///
    /// Anything at or past a full circle maps to the same almost-full sweep,
    /// so completion at 100 and beyond produces identical output.
    #[inline]
    pub fn clamped_percentage(&self) -> f64 {
        if self.percentage >= MAX_PERCENTAGE {
            MAX_PERCENTAGE - FULL_TURN_EPSILON
        } else {
            self.percentage
        }
    }

    /// The swept angle in radians, measured from the top of the circle,
    /// increasing clockwise.
    #[inline]
    pub fn sweep_angle(&self) -> f64 {
        TAU * self.clamped_percentage() / MAX_PERCENTAGE
    }

    /// The point where the arc ends.
    ///
    /// At 0% this is the top of the circle, `(radius, 0)`; at almost-100% it
    /// approaches the same point from the other side.
    #[inline]
    pub fn endpoint(&self) -> Point {
        let (sin, cos) = self.sweep_angle().sin_cos();
        Point::new(self.radius * (1.0 + sin), self.radius * (1.0 - cos))
    }

    /// Whether the major arc is selected.
    ///
    /// A chord between two points on a circle is traced by two candidate
    /// arcs; past the halfway mark the longer one is meant.
    #[inline]
    pub fn large_arc(&self) -> bool {
        self.clamped_percentage() > MAX_PERCENTAGE / 2.0
    }

    /// The single arc command tracing the filled portion.
    #[inline]
    pub fn arc_to(&self) -> ArcTo {
        ArcTo {
            to: self.endpoint(),
            radii: Vec2::splat(self.radius),
            x_rotation: 0.0,
            large_arc: self.large_arc(),
            // The drawing direction is fixed clockwise.
            sweep: true,
        }
    }

    /// The arc command as an SVG path-data fragment, e.g. `A60 60 0 0 1 60 0`.
    ///
    /// This is only the `A` command; callers composing a filled wedge prefix
    /// a move to the center and a line to the top of the circle, and close
    /// the path afterwards, which is what [`wedge`](Self::wedge) does.
    pub fn arc_svg(&self) -> String {
        [PathEl::ArcTo(self.arc_to())]
            .into_iter()
            .collect::<Path>()
            .to_svg()
    }

    /// The complete filled wedge: center, up to the top of the circle,
    /// around the arc, and back.
    pub fn wedge(&self) -> Path {
        let center = Point::new(self.radius, self.radius);
        let top = Point::new(self.radius, 0.0);
        [
            PathEl::MoveTo(center),
            PathEl::LineTo(top),
            PathEl::ArcTo(self.arc_to()),
            PathEl::ClosePath,
        ]
        .into_iter()
        .collect()
    }

    /// Is this arc finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.percentage.is_finite() && self.radius.is_finite()
    }

    /// Is this arc NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.percentage.is_nan() || self.radius.is_nan()
    }
}
