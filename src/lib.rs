// Copyright 2026 the cubic_lookup Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value lookup on piecewise cubic Bézier curves.
//!
//! A cubic Bézier is a function of its parameter t, not of x, so finding the
//! y a curve takes at a given x needs a search. This crate does that search
//! by repeatedly halving the segment with de Casteljau subdivision and
//! keeping the half that brackets the target x. It is meant for timing and
//! easing curves, where x is time and is monotonic along each segment.
//!
//! # Examples
//!
//! Looking up a value on a flat list of control points, read four at a time:
//! ```
//! use cubic_lookup::{lookup_curve_value, Point};
//!
//! let curve = [(0.0, 0.0), (0.42, 0.0), (0.58, 1.0), (1.0, 1.0)].map(Point::from);
//! let y = lookup_curve_value(0.5, &curve);
//! assert!((y - 0.5).abs() < 0.01);
//!
//! // Outside the curve, values clamp to the ends.
//! assert_eq!(lookup_curve_value(-1.0, &curve), 0.0);
//! assert_eq!(lookup_curve_value(2.0, &curve), 1.0);
//! ```
//!
//! Building a curve from handles and tuning the search:
//! ```
//! use cubic_lookup::{Handle, HandlePath, InvertParams};
//!
//! let mut path = HandlePath::with_params(InvertParams::default().with_accuracy(1e-6));
//! path.push(Handle::new((0.0, 0.0), (0.0, 0.0), (0.5, 0.0)));
//! path.push(Handle::new((1.0, 1.0), (-0.5, 0.0), (0.0, 0.0)));
//! assert!((path.value_at(0.5) - 0.5).abs() < 1e-6);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The `alloc` crate is used regardless.
//!
//! Diagnostics go through the [`log`] facade; no logger is installed.
//!
//! [`libm`]: https://docs.rs/libm
//! [`log`]: https://docs.rs/log

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::many_single_char_names,
    clippy::too_many_arguments,
    clippy::float_cmp
)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::missing_assert_message,
    clippy::exhaustive_enums,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("cubic_lookup requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

pub mod common;
mod cubicbez;
mod curve;
mod error;
mod handle;
mod invert;
mod param_curve;
mod point;
mod vec2;

pub use crate::cubicbez::*;
pub use crate::curve::*;
pub use crate::error::*;
pub use crate::handle::*;
pub use crate::invert::*;
pub use crate::param_curve::*;
pub use crate::point::*;
pub use crate::vec2::*;
