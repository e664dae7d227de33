//! Upload and download encryption flows
//!
//! Pure transforms: nothing here performs I/O. The network layer uploads
//! the finished envelope and fetches ciphertext back; abandoning an
//! in-flight call leaves nothing to roll back.

use satchel_core::envelope::FileEnvelope;
use satchel_core::error::{SatchelError, SatchelResult};
use satchel_crypto::{
    decrypt, derive_file_key, encrypt_contents, encrypt_filename, generate_for_upload,
};

use crate::roots::RootKeySet;
use crate::session::SecretStore;

/// Encrypt one file for upload, resolving roots from the session store.
pub async fn encrypt_file(
    store: &impl SecretStore,
    name: &str,
    data: &[u8],
) -> SatchelResult<FileEnvelope> {
    let roots = RootKeySet::resolve(store).await?;
    encrypt_file_with(&roots, name, data)
}

/// Encrypt one file under already-resolved roots.
///
/// Batch uploads resolve once and seal each file through this, concurrently
/// if they like; every call draws its own salt and nonces, so there is no
/// shared state to serialize on.
pub fn encrypt_file_with(
    roots: &RootKeySet,
    name: &str,
    data: &[u8],
) -> SatchelResult<FileEnvelope> {
    let (root, is_e2ee) = roots.for_upload();
    let params = generate_for_upload(root)?;
    let encrypted_filename = encrypt_filename(&params, name)?;
    let encrypted_data = encrypt_contents(&params, data)?;
    tracing::debug!(is_e2ee, size = data.len(), "sealed file envelope");

    Ok(FileEnvelope {
        is_e2ee,
        salt: params.salt,
        filename_iv: params.filename_iv,
        data_iv: params.data_iv,
        encrypted_filename,
        encrypted_data,
    })
}

/// Recover the plaintext file name from a stored envelope.
pub fn decrypt_filename(roots: &RootKeySet, envelope: &FileEnvelope) -> SatchelResult<String> {
    let root = roots.for_download(envelope.is_e2ee)?;
    let key = derive_file_key(root, &envelope.salt)?;
    let name = decrypt(&key, &envelope.filename_iv, &envelope.encrypted_filename)?;
    String::from_utf8(name).map_err(|_| SatchelError::InvalidFilename)
}

/// Recover the plaintext file contents from a stored envelope.
pub fn decrypt_contents(roots: &RootKeySet, envelope: &FileEnvelope) -> SatchelResult<Vec<u8>> {
    let root = roots.for_download(envelope.is_e2ee)?;
    let key = derive_file_key(root, &envelope.salt)?;
    decrypt(&key, &envelope.data_iv, &envelope.encrypted_data)
}

/// How one stored file should appear in a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    /// Name decrypted; the file is downloadable in this session.
    Ready(String),
    /// E2EE file whose prf seed is not present here.
    RequiresDifferentPasskey,
    /// Ciphertext failed authentication or the name is garbage.
    Unreadable,
}

/// Classify one envelope for the file listing.
///
/// A broken entry marks itself unusable instead of failing the whole
/// listing.
pub fn filename_for_listing(roots: &RootKeySet, envelope: &FileEnvelope) -> EntryStatus {
    match decrypt_filename(roots, envelope) {
        Ok(name) => EntryStatus::Ready(name),
        Err(SatchelError::KeyUnavailable) => EntryStatus::RequiresDifferentPasskey,
        Err(_) => EntryStatus::Unreadable,
    }
}
