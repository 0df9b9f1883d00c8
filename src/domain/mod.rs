//! Domain modules (vertical slices): types, wire types, transforms, state.

pub mod chart;
pub mod indices;
pub mod pcr;
pub mod portfolio;
pub mod scrip;
pub mod watchlist;
