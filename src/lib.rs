// Copyright 2026 the progress-circle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector geometry for circular progress indicators.
//!
//! This crate turns a completion percentage into the vector geometry of a
//! progress ring: the arc of the filled portion, the wedge path that fills
//! it, and a small scene of concentric shapes ready to be serialized as an
//! SVG document. It is aimed at UI code that wants to draw a progress circle
//! on any vector-drawing surface without dragging in a rendering stack.
//!
//! # Examples
//!
//! The arc math on its own:
//! ```
//! use progress_circle::{Point, ProgressArc};
//!
//! let arc = ProgressArc::new(0.0, 60.0);
//! // Nothing swept yet: the endpoint is still the top of the circle.
//! assert_eq!(arc.endpoint(), Point::new(60.0, 0.0));
//! assert_eq!(arc.arc_svg(), "A60 60 0 0 1 60 0");
//! // Past the halfway mark the major arc is selected.
//! assert!(ProgressArc::new(75.0, 60.0).large_arc());
//! ```
//!
//! A complete widget, rendered to an SVG document with a centered label:
//! ```
//! use progress_circle::ProgressCircle;
//!
//! let svg = ProgressCircle::new()
//!     .with_percentage(50.0)
//!     .with_radius(70.0)
//!     .with_inner_radius(60.0)
//!     .with_content(r#"<text text-anchor="middle">50%</text>"#)
//!     .to_svg();
//! assert!(svg.starts_with(r#"<svg width="140" height="140""#));
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. However, note that the `libm` crate is not as
//! efficient as the standard library, and that this crate still uses the
//! `alloc` crate regardless.
//!
//! [`libm`]: https://docs.rs/libm

#![forbid(unsafe_code)]
#![deny(missing_docs, clippy::trivially_copy_pass_by_ref)]
#![warn(clippy::doc_markdown, rustdoc::broken_intra_doc_links)]
#![warn(clippy::semicolon_if_nothing_returned)]
#![warn(unused_qualifications)]
#![allow(clippy::unreadable_literal, clippy::excessive_precision)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("progress-circle requires either the `std` or `libm` feature");

extern crate alloc;

mod arc;
mod circle;
mod color;
mod common;
mod path;
mod point;
mod progress;
mod scene;
mod size;
mod vec2;

pub use crate::arc::*;
pub use crate::circle::*;
pub use crate::color::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::progress::*;
pub use crate::scene::*;
pub use crate::size::*;
pub use crate::vec2::*;
