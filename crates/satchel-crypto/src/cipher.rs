//! AES-128-GCM encryption of file name and file contents
//!
//! Output format is plain `[ciphertext][16-byte tag]`; the nonce is not
//! prepended because it already travels in the envelope as its own field.
//! No associated data.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes128Gcm, Nonce};

use satchel_core::error::{SatchelError, SatchelResult};
use satchel_core::IV_SIZE;

use crate::kdf::FileKey;
use crate::params::FileCryptoParams;

/// Encrypt the file name (UTF-8 bytes) under the filename nonce.
pub fn encrypt_filename(params: &FileCryptoParams, name: &str) -> SatchelResult<Vec<u8>> {
    seal(&params.key, &params.filename_iv, name.as_bytes())
}

/// Encrypt the file contents under the data nonce.
pub fn encrypt_contents(params: &FileCryptoParams, data: &[u8]) -> SatchelResult<Vec<u8>> {
    seal(&params.key, &params.data_iv, data)
}

/// Authenticated decrypt.
///
/// Fails closed: a bad tag is [`SatchelError::AuthenticationFailed`], never
/// empty plaintext. Works for both filename and contents since each carries
/// its own nonce.
pub fn decrypt(key: &FileKey, iv: &[u8; IV_SIZE], ciphertext: &[u8]) -> SatchelResult<Vec<u8>> {
    let cipher = Aes128Gcm::new(key.as_bytes().into());
    cipher
        .decrypt(Nonce::from_slice(iv), ciphertext)
        .map_err(|_| SatchelError::AuthenticationFailed)
}

fn seal(key: &FileKey, iv: &[u8; IV_SIZE], plaintext: &[u8]) -> SatchelResult<Vec<u8>> {
    let cipher = Aes128Gcm::new(key.as_bytes().into());
    cipher
        .encrypt(Nonce::from_slice(iv), plaintext)
        .map_err(|e| SatchelError::Cipher(e.to_string()))
}
