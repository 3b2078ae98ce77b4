//! nanopore/mod.rs
//! Parity + repetition coded 3-bit -> 3-symbol codec with constraint repair.
//!
//! Encode: byte -> 8 bits + even parity -> (x3 repetition) -> zero-pad to a
//! multiple of 3 -> codewords -> padding repair if constraints fail -> markers.
//! Decode runs the inverse, voting over repetitions and dropping parity
//! failures unless the codec is strict.

pub mod types;
pub mod table;
pub mod ecc;
pub mod constraints;
pub mod encode;
pub mod decode;

pub use types::*;
pub use table::*;
pub use ecc::*;
pub use constraints::*;
pub use encode::*;
pub use decode::*;
