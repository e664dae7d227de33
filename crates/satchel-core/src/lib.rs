//! satchel-core: shared types for the satchel client
//!
//! Size constants, the error taxonomy, the binary/text codec used on the
//! wire, and the encrypted-file envelope schema.

pub mod codec;
pub mod envelope;
pub mod error;

pub use envelope::{FileEnvelope, WireEnvelope};
pub use error::{SatchelError, SatchelResult};

/// Size of a per-file key-derivation salt in bytes
pub const SALT_SIZE: usize = 16;

/// Size of an AES-GCM nonce (96-bit)
pub const IV_SIZE: usize = 12;

/// Size of a derived per-file key (128-bit)
pub const KEY_SIZE: usize = 16;

/// Size of a GCM authentication tag
pub const TAG_SIZE: usize = 16;
