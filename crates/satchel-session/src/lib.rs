//! satchel-session: session secrets, root key resolution, and the
//! upload/download encryption flows
//!
//! The [`session::Session`] context holds the two per-login seeds,
//! [`roots::RootKeySet`] turns them into derivation-only root keys and picks
//! the root for each operation, and [`transfer`] runs the actual
//! encrypt/decrypt pipelines against `satchel-crypto`.

pub mod roots;
pub mod session;
pub mod transfer;

pub use roots::RootKeySet;
pub use session::{SecretStore, Session};
pub use transfer::{
    decrypt_contents, decrypt_filename, encrypt_file, encrypt_file_with, filename_for_listing,
    EntryStatus,
};
