//! Output writers for fetched headline lists.
//!
//! The display layer prints to the terminal; this module covers the
//! optional persistence path, currently a single dated JSON file per
//! fetch cycle (see [`json`]).

pub mod json;
