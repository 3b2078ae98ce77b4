//! basic/mod.rs
//! Direct 2-bit -> 1-symbol codec.
//!
//! Design notes:
//! - Stateless bijection 00=A, 01=T, 10=C, 11=G, most significant pair first.
//! - Lenient decode drops anything outside {A,T,C,G} and any partial byte.
//! - Strict decode reports those instead (see `DecodeMode`).

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
