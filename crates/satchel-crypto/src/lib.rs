//! satchel-crypto: client-side envelope encryption for satchel uploads
//!
//! Key hierarchy:
//! ```text
//! Session seed (WebAuthn prf output, or server-issued trust seed)
//!   └── Root key (HKDF ikm, derivation-only, never encrypts)
//!         └── Per-file key: HKDF-SHA256(salt=16 random bytes, info="user-file") → AES-128-GCM
//!               ├── file name: AES-GCM, nonce = filename_iv (12 random bytes)
//!               └── contents:  AES-GCM, nonce = data_iv (12 random bytes)
//! ```
//!
//! The server stores only salt, nonces, mode flag, and ciphertext. The
//! per-file key is re-derived on demand from `(root, salt)` and never
//! persisted anywhere.

// Secret-dumping diagnostics must not be buildable into a release.
#[cfg(all(feature = "insecure-log-secrets", not(debug_assertions)))]
compile_error!("the insecure-log-secrets feature is only allowed in debug builds");

pub mod cipher;
pub mod kdf;
pub mod params;

pub use cipher::{decrypt, encrypt_contents, encrypt_filename};
pub use kdf::{derive_file_key, FileKey, RootKey, RootKind};
pub use params::{generate_for_upload, FileCryptoParams};
