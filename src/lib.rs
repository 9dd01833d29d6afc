/*!
gjk3d
========

**gjk3d** is a 3-dimensional implementation of the Gilbert-Johnson-Keerthi
(GJK) algorithm written with the rust programming language.

Given two convex shapes described only by their support functions, the crate
answers whether they intersect and, when they do not, which pair of points on
the two shapes is closest. Shapes never expose their vertex or face topology:
the only capability the algorithm consumes is the [`shape::SupportMap`] trait.

Both shapes must be expressed in one shared reference frame; applying
transforms to bring them there is the caller's responsibility.

The entry points live in the [`query`] module: [`query::query`] for the full
result (status, closest points, diagnostics), and the
[`query::intersection_test`] and [`query::distance`] shorthands.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
