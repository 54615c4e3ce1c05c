//! Vector path commands and their SVG string representation.

use core::fmt;
use core::fmt::Write;

use alloc::string::String;

use smallvec::SmallVec;

use crate::{Point, Vec2};

/// A single `A` (elliptical arc) path command.
///
/// The fields follow the SVG arc parameterization: an endpoint pair plus the
/// two flags that disambiguate which of the four candidate arcs connects the
/// current point to `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcTo {
    /// The arc's end point.
    pub to: Point,
    /// The arc's radii, where the vector's x-component is the radius in the
    /// positive x direction after applying `x_rotation`.
    pub radii: Vec2,
    /// How much the arc is rotated, in degrees (as it appears verbatim in
    /// the path string).
    pub x_rotation: f64,
    /// Does this arc sweep through more than half a turn?
    pub large_arc: bool,
    /// Does the arc proceed in the direction of increasing angle? In the
    /// y-down SVG coordinate system this is the clockwise direction.
    pub sweep: bool,
}

/// An element of a vector path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// `M`: start a new subpath at the given point.
    MoveTo(Point),
    /// `L`: draw a line from the current point to the given point.
    LineTo(Point),
    /// `A`: draw an elliptical arc from the current point.
    ArcTo(ArcTo),
    /// `Z`: close the current subpath.
    ClosePath,
}

/// A vector path, as an ordered list of [`PathEl`]s.
///
/// Progress-circle wedges are always exactly four elements (move, line,
/// arc, close), so the backing storage is inline in the common case.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path(SmallVec<[PathEl; 4]>);

impl Path {
    /// Create a new, empty path.
    pub fn new() -> Path {
        Path::default()
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns an iterator over the path's elements.
    pub fn iter(&self) -> impl Iterator<Item = PathEl> + '_ {
        self.0.iter().copied()
    }

    /// The number of elements in the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the path contains no elements.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert the path to an SVG path string representation.
    ///
    /// The current implementation doesn't take any special care to produce a
    /// short string (reducing precision, using relative movement).
    pub fn to_svg(&self) -> String {
        let mut buffer = String::new();
        self.write_svg(&mut buffer)
            .expect("writing to a string is infallible");
        buffer
    }

    /// Write the SVG path string representation to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer does.
    pub fn write_svg(&self, mut writer: impl Write) -> fmt::Result {
        for el in self.elements() {
            match *el {
                PathEl::MoveTo(p) => write!(writer, "M{} {}", p.x, p.y)?,
                PathEl::LineTo(p) => write!(writer, "L{} {}", p.x, p.y)?,
                PathEl::ArcTo(arc) => write!(
                    writer,
                    "A{} {} {} {} {} {} {}",
                    arc.radii.x,
                    arc.radii.y,
                    arc.x_rotation,
                    arc.large_arc as u8,
                    arc.sweep as u8,
                    arc.to.x,
                    arc.to.y
                )?,
                PathEl::ClosePath => write!(writer, "Z")?,
            }
        }
        Ok(())
    }
}

impl FromIterator<PathEl> for Path {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Self {
        Path(iter.into_iter().collect())
    }
}

impl Extend<PathEl> for Path {
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathEl;
    type IntoIter = core::slice::Iter<'a, PathEl>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements().iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_serialization() {
        let path: Path = [
            PathEl::MoveTo(Point::new(60., 60.)),
            PathEl::LineTo(Point::new(60., 0.)),
            PathEl::ArcTo(ArcTo {
                to: Point::new(120., 60.),
                radii: Vec2::splat(60.),
                x_rotation: 0.,
                large_arc: false,
                sweep: true,
            }),
            PathEl::ClosePath,
        ]
        .into_iter()
        .collect();
        assert_eq!(path.len(), 4);
        assert_eq!(path.to_svg(), "M60 60L60 0A60 60 0 0 1 120 60Z");
    }

    #[test]
    fn flags_serialize_as_bits() {
        let mut path = Path::new();
        path.push(PathEl::MoveTo(Point::ZERO));
        path.push(PathEl::ArcTo(ArcTo {
            to: Point::new(1., 1.),
            radii: Vec2::new(2., 3.),
            x_rotation: 0.,
            large_arc: true,
            sweep: false,
        }));
        assert_eq!(path.to_svg(), "M0 0A2 3 0 1 0 1 1");
    }

    #[test]
    fn empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert_eq!(path.to_svg(), "");
    }
}
