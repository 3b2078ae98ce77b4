//! framing/mod.rs
//! Literal framing shared by the nanopore and secure tiers.
//!
//! Layout of a framed sequence:
//!
//! ```text
//! START_MARKER | [padding TACGTA] payload [TACGTA padding] | STOP_MARKER
//! ```
//!
//! Markers and delimiters are plain substrings; nothing escapes them. A
//! payload or padding block that happens to contain the delimiter literal
//! will be mis-framed on decode (see `PayloadView::delimited` and
//! `is_framing_intact`).

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
