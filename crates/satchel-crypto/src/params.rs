//! Fresh per-file crypto parameters

use rand::RngCore;

use satchel_core::error::SatchelResult;
use satchel_core::{IV_SIZE, SALT_SIZE};

use crate::kdf::{derive_file_key, FileKey, RootKey};

/// Everything needed to encrypt one new file.
///
/// The key is never stored; salt and nonces travel with the envelope in the
/// clear. The two nonces are drawn independently and must each encrypt
/// exactly one plaintext under this key.
pub struct FileCryptoParams {
    pub salt: [u8; SALT_SIZE],
    pub key: FileKey,
    pub filename_iv: [u8; IV_SIZE],
    pub data_iv: [u8; IV_SIZE],
}

/// Draw a fresh salt and two independent nonces, then derive the file key.
///
/// Called exactly once per new upload. Downloads re-derive the key from the
/// stored salt and never call this.
pub fn generate_for_upload(root: &RootKey) -> SatchelResult<FileCryptoParams> {
    let mut rng = rand::thread_rng();

    let mut salt = [0u8; SALT_SIZE];
    rng.fill_bytes(&mut salt);
    let key = derive_file_key(root, &salt)?;

    let mut filename_iv = [0u8; IV_SIZE];
    rng.fill_bytes(&mut filename_iv);
    let mut data_iv = [0u8; IV_SIZE];
    rng.fill_bytes(&mut data_iv);

    Ok(FileCryptoParams {
        salt,
        key,
        filename_iv,
        data_iv,
    })
}
