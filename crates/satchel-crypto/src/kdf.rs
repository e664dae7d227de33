//! Root keys and the per-file HKDF-SHA256 derivation

use hkdf::Hkdf;
use sha2::Sha256;
use zeroize::{Zeroize, Zeroizing};

use satchel_core::error::{SatchelError, SatchelResult};
use satchel_core::{KEY_SIZE, SALT_SIZE};

/// Domain separation tag for per-file keys. Versioned: any change to the
/// derivation scheme needs a new info string, or old envelopes stop opening.
const FILE_KEY_INFO: &[u8] = b"user-file";

/// Which session secret a root key was imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    /// WebAuthn prf output, hardware-bound; never seen by the server.
    E2ee,
    /// Server-issued per-user seed; the server could re-derive these keys.
    ServerTrust,
}

/// A derivation-only root key.
///
/// It cannot encrypt; only [`derive_file_key`] consumes it. The imported
/// seed is not readable back out and is zeroized on drop.
pub struct RootKey {
    kind: RootKind,
    ikm: Zeroizing<Vec<u8>>,
}

impl RootKey {
    /// Import raw seed material as a root key.
    pub fn import(kind: RootKind, seed: &[u8]) -> Self {
        Self {
            kind,
            ikm: Zeroizing::new(seed.to_vec()),
        }
    }

    pub fn kind(&self) -> RootKind {
        self.kind
    }
}

impl std::fmt::Debug for RootKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RootKey")
            .field("kind", &self.kind)
            .field("ikm", &"[REDACTED]")
            .finish()
    }
}

/// A derived per-file AES-128 key. Zeroized on drop; no sub-keys are ever
/// derived from it.
#[derive(Clone)]
pub struct FileKey {
    bytes: [u8; KEY_SIZE],
}

impl FileKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self { bytes }
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl Drop for FileKey {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

impl std::fmt::Debug for FileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

/// Derive the per-file key from `(root, salt)` via HKDF-SHA256.
///
/// Deterministic: the server stores only the salt, so the same pair must
/// always reproduce the same key, across sessions and devices.
pub fn derive_file_key(root: &RootKey, salt: &[u8; SALT_SIZE]) -> SatchelResult<FileKey> {
    let hkdf = Hkdf::<Sha256>::new(Some(salt), &root.ikm);
    let mut okm = [0u8; KEY_SIZE];
    hkdf.expand(FILE_KEY_INFO, &mut okm)
        .map_err(|e| SatchelError::Kdf(e.to_string()))?;
    let key = FileKey::from_bytes(okm);
    okm.zeroize();

    #[cfg(feature = "insecure-log-secrets")]
    trace_derived_key(salt, &key);

    Ok(key)
}

/// Compiled out unless `insecure-log-secrets` is enabled; see lib.rs for the
/// release-build guard.
#[cfg(feature = "insecure-log-secrets")]
fn trace_derived_key(salt: &[u8; SALT_SIZE], key: &FileKey) {
    tracing::debug!(
        salt = %satchel_core::codec::encode(salt),
        key = %satchel_core::codec::encode(key.as_bytes()),
        "derived per-file key"
    );
}
