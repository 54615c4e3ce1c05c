//! Composition of the complete progress-circle widget.

use alloc::string::String;

use crate::{Circle, Color, Element, Point, ProgressArc, Scene, Size};

/// Default radius of the enclosed inner disc.
const DEFAULT_INNER_RADIUS: f64 = 50.0;

/// Default outer radius.
const DEFAULT_RADIUS: f64 = 60.0;

/// A circular progress indicator.
///
/// This is an explicit configuration value with documented defaults; the
/// widget itself has no further state. Rendering composes three concentric
/// shapes in fixed order (the blank track disc, the filled wedge, the inner
/// disc) and overlays the optional content centered over the drawing area,
/// recomputing everything from the fields on every call.
///
/// ```
/// use progress_circle::ProgressCircle;
///
/// let svg = ProgressCircle::new()
///     .with_percentage(50.0)
///     .with_inner_radius(60.0)
///     .with_radius(70.0)
///     .with_content("<text text-anchor=\"middle\">50%</text>")
///     .to_svg();
/// assert!(svg.contains("<path d=\"M70 70L70 0A70 70 0 0 1 "));
/// assert!(svg.contains("<g transform=\"translate(70 70)\">"));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressCircle {
    /// Completion in percent, nominally `0..=100`. Default `0`.
    pub percentage: f64,
    /// Color of the not-yet-completed remainder of the ring. Default
    /// [`Color::Silver`].
    pub blank_color: Color,
    /// Color of the disc enclosed by the ring. Default [`Color::White`].
    pub inner_color: Color,
    /// Color of the completed portion of the ring. Default [`Color::Blue`].
    pub fill_color: Color,
    /// Radius of the enclosed disc. The visible ring is
    /// `radius - inner_radius` wide. Default `50`.
    pub inner_radius: f64,
    /// Outer radius of the whole widget. Default `60`.
    pub radius: f64,
    /// Optional SVG markup overlaid centered on the widget, for example a
    /// label with the percentage. Default `None`.
    pub content: Option<String>,
}

impl Default for ProgressCircle {
    fn default() -> Self {
        ProgressCircle {
            percentage: 0.0,
            blank_color: Color::Silver,
            inner_color: Color::White,
            fill_color: Color::Blue,
            inner_radius: DEFAULT_INNER_RADIUS,
            radius: DEFAULT_RADIUS,
            content: None,
        }
    }
}

impl ProgressCircle {
    /// Create a widget with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style method for setting the completion percentage.
    #[must_use]
    #[inline]
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = percentage;
        self
    }

    /// Builder-style method for setting the track color.
    #[must_use]
    #[inline]
    pub fn with_blank_color(mut self, color: Color) -> Self {
        self.blank_color = color;
        self
    }

    /// Builder-style method for setting the inner-disc color.
    #[must_use]
    #[inline]
    pub fn with_inner_color(mut self, color: Color) -> Self {
        self.inner_color = color;
        self
    }

    /// Builder-style method for setting the progress color.
    #[must_use]
    #[inline]
    pub fn with_fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Builder-style method for setting the inner radius.
    #[must_use]
    #[inline]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    /// Builder-style method for setting the outer radius.
    #[must_use]
    #[inline]
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Builder-style method for setting the centered overlay content.
    #[must_use]
    #[inline]
    pub fn with_content(mut self, markup: impl Into<String>) -> Self {
        self.content = Some(markup.into());
        self
    }

    /// The side length of the square drawing area.
    ///
    /// Always `2 × radius`, independent of the inner radius, the
    /// percentage, and the content.
    #[inline]
    pub fn canvas_size(&self) -> Size {
        Size::square(2.0 * self.radius)
    }

    /// The width of the visible progress ring.
    #[inline]
    pub fn ring_width(&self) -> f64 {
        self.radius - self.inner_radius
    }

    /// The arc geometry for the current percentage and radius.
    #[inline]
    pub fn arc(&self) -> ProgressArc {
        ProgressArc::new(self.percentage, self.radius)
    }

    /// Build the scene: track disc, filled wedge, inner disc, then the
    /// overlay when content is set.
    pub fn scene(&self) -> Scene {
        let center = Point::new(self.radius, self.radius);
        let mut scene = Scene::new(self.canvas_size());
        scene.push(Element::Disc {
            circle: Circle::new(center, self.radius),
            fill: self.blank_color,
        });
        scene.push(Element::Wedge {
            path: self.arc().wedge(),
            fill: self.fill_color,
        });
        scene.push(Element::Disc {
            circle: Circle::new(center, self.inner_radius),
            fill: self.inner_color,
        });
        if let Some(markup) = &self.content {
            scene.push(Element::Overlay {
                markup: markup.clone(),
            });
        }
        scene
    }

    /// Render the widget as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        self.scene().to_svg()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn documented_defaults() {
        let widget = ProgressCircle::new();
        assert_eq!(widget.percentage, 0.0);
        assert_eq!(widget.blank_color, Color::Silver);
        assert_eq!(widget.inner_color, Color::White);
        assert_eq!(widget.fill_color, Color::Blue);
        assert_eq!(widget.inner_radius, 50.0);
        assert_eq!(widget.radius, 60.0);
        assert_eq!(widget.content, None);
        assert_eq!(widget.ring_width(), 10.0);
    }

    #[test]
    fn canvas_size_depends_only_on_radius() {
        let widget = ProgressCircle::new().with_radius(70.0);
        assert_eq!(widget.canvas_size(), Size::square(140.0));
        assert_eq!(
            widget
                .clone()
                .with_percentage(80.0)
                .with_inner_radius(10.0)
                .with_content("<text>x</text>")
                .canvas_size(),
            Size::square(140.0)
        );
    }

    #[test]
    fn scene_orders_shapes_back_to_front() {
        let scene = ProgressCircle::new().scene();
        match scene.elements() {
            [Element::Disc { circle: track, fill: track_fill }, Element::Wedge { fill: wedge_fill, .. }, Element::Disc { circle: inner, fill: inner_fill }] =>
            {
                assert_eq!(track.radius, 60.0);
                assert_eq!(*track_fill, Color::Silver);
                assert_eq!(*wedge_fill, Color::Blue);
                assert_eq!(inner.radius, 50.0);
                assert_eq!(*inner_fill, Color::White);
                assert_eq!(track.center, inner.center);
            }
            other => panic!("unexpected scene layout: {other:?}"),
        }
    }

    #[test]
    fn content_appends_a_centered_overlay() {
        let scene = ProgressCircle::new().with_content("<text>0%</text>").scene();
        assert_eq!(scene.elements().len(), 4);
        assert!(matches!(
            scene.elements().last(),
            Some(Element::Overlay { .. })
        ));
    }

    #[test]
    fn full_document() {
        let svg = ProgressCircle::new().to_svg();
        assert_eq!(
            svg,
            "<svg width=\"120\" height=\"120\" xmlns=\"http://www.w3.org/2000/svg\">\
             <circle cx=\"60\" cy=\"60\" r=\"60\" fill=\"silver\"/>\
             <path d=\"M60 60L60 0A60 60 0 0 1 60 0Z\" fill=\"blue\"/>\
             <circle cx=\"60\" cy=\"60\" r=\"50\" fill=\"white\"/></svg>"
        );
    }
}
