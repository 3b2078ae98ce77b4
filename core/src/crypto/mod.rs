//! crypto/mod.rs
//! Primitives behind the secure tiers: key derivation, CBC cipher, the
//! length-prefixed envelope and password policy. Nothing here knows about
//! symbol sequences.

pub mod types;
pub mod kdf;
pub mod cipher;
pub mod envelope;
pub mod password;
pub mod info;

pub use types::*;
pub use kdf::*;
pub use cipher::*;
pub use envelope::*;
pub use password::*;
pub use info::*;
