//! The drawing-surface tree a progress circle renders to.

use core::fmt;
use core::fmt::Write;

use alloc::string::String;

use arrayvec::ArrayVec;

use crate::{Circle, Color, Path, Size};

/// The scene holds at most the three shapes plus one overlay region.
const MAX_ELEMENTS: usize = 4;

/// A single drawable in a [`Scene`].
///
/// The element set is closed: a progress circle is composed of discs and a
/// wedge, plus one optional region of caller-supplied content. There is no
/// shape trait to implement; renderers match on the enum.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// A filled disc.
    Disc {
        /// The disc geometry.
        circle: Circle,
        /// The fill color.
        fill: Color,
    },
    /// A filled wedge, described by a vector path.
    Wedge {
        /// The path tracing the wedge outline.
        path: Path,
        /// The fill color.
        fill: Color,
    },
    /// Caller-supplied SVG markup, centered over the whole drawing area.
    ///
    /// The markup's coordinate origin is translated to the canvas center, so
    /// content laid out around `(0, 0)` appears centered in the widget.
    Overlay {
        /// The markup fragment, emitted verbatim.
        markup: String,
    },
}

/// A paint-ordered list of drawables with a canvas size.
///
/// Scenes are plain data: building one performs no drawing, and serializing
/// one is a pure function of its contents.
///
/// ```
/// use progress_circle::{Circle, Color, Element, Scene, Size};
///
/// let mut scene = Scene::new(Size::square(10.0));
/// scene.push(Element::Disc {
///     circle: Circle::new((5.0, 5.0), 5.0),
///     fill: Color::Black,
/// });
/// assert_eq!(
///     scene.to_svg(),
///     "<svg width=\"10\" height=\"10\" xmlns=\"http://www.w3.org/2000/svg\">\
///      <circle cx=\"5\" cy=\"5\" r=\"5\" fill=\"black\"/></svg>"
/// );
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    size: Size,
    elements: ArrayVec<Element, MAX_ELEMENTS>,
}

impl Scene {
    /// Create an empty scene with the given canvas size.
    pub fn new(size: Size) -> Scene {
        Scene {
            size,
            elements: ArrayVec::new(),
        }
    }

    /// The canvas size.
    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The elements in paint order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Append an element, painting over everything already present.
    ///
    /// # Panics
    ///
    /// Panics if the scene already holds its maximum of four elements.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Serialize the scene as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut buffer = String::new();
        self.write_svg(&mut buffer)
            .expect("writing to a string is infallible");
        buffer
    }

    /// Write the SVG document to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer does.
    pub fn write_svg(&self, mut writer: impl Write) -> fmt::Result {
        write!(
            writer,
            "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">",
            self.size.width, self.size.height
        )?;
        for element in &self.elements {
            match element {
                Element::Disc { circle, fill } => write!(
                    writer,
                    "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
                    circle.center.x, circle.center.y, circle.radius, fill
                )?,
                Element::Wedge { path, fill } => {
                    write!(writer, "<path d=\"")?;
                    path.write_svg(&mut writer)?;
                    write!(writer, "\" fill=\"{fill}\"/>")?;
                }
                Element::Overlay { markup } => write!(
                    writer,
                    "<g transform=\"translate({} {})\">{}</g>",
                    0.5 * self.size.width,
                    0.5 * self.size.height,
                    markup
                )?,
            }
        }
        write!(writer, "</svg>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProgressArc;

    #[test]
    fn paint_order_is_preserved() {
        let mut scene = Scene::new(Size::square(120.));
        scene.push(Element::Disc {
            circle: Circle::new((60., 60.), 60.),
            fill: Color::Silver,
        });
        scene.push(Element::Wedge {
            path: ProgressArc::new(0., 60.).wedge(),
            fill: Color::Blue,
        });
        scene.push(Element::Disc {
            circle: Circle::new((60., 60.), 50.),
            fill: Color::White,
        });
        assert_eq!(
            scene.to_svg(),
            "<svg width=\"120\" height=\"120\" xmlns=\"http://www.w3.org/2000/svg\">\
             <circle cx=\"60\" cy=\"60\" r=\"60\" fill=\"silver\"/>\
             <path d=\"M60 60L60 0A60 60 0 0 1 60 0Z\" fill=\"blue\"/>\
             <circle cx=\"60\" cy=\"60\" r=\"50\" fill=\"white\"/></svg>"
        );
    }

    #[test]
    fn overlay_is_translated_to_center() {
        let mut scene = Scene::new(Size::square(140.));
        scene.push(Element::Overlay {
            markup: String::from("<text>70%</text>"),
        });
        assert_eq!(
            scene.to_svg(),
            "<svg width=\"140\" height=\"140\" xmlns=\"http://www.w3.org/2000/svg\">\
             <g transform=\"translate(70 70)\"><text>70%</text></g></svg>"
        );
    }

    #[test]
    fn empty_scene_is_just_the_canvas() {
        let scene = Scene::new(Size::new(10., 20.));
        assert_eq!(
            scene.to_svg(),
            "<svg width=\"10\" height=\"20\" xmlns=\"http://www.w3.org/2000/svg\"></svg>"
        );
    }
}
