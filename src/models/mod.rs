//! Domain model types for the symmetric TSP.
//!
//! Provides cities with planar coordinates and the tour representation
//! that every local search operator mutates in place.
//!
//! [`random_cities`] and [`City::distance_squared_to`] are public for
//! callers generating benchmark instances or comparing distances without a
//! square root; the crate itself only uses them through tests and
//! [`City::distance_to`].

mod city;
mod tour;

pub use city::{random_cities, City};
pub use tour::Tour;
