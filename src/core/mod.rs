//! Core building blocks shared by every system:
//! - grid/   - dense cell storage and its mutation primitives
//! - random  - injected random source (gameplay rolls and tie-breaking)
//! - error   - crate-wide error type

pub mod error;
pub mod grid;
pub mod random;
