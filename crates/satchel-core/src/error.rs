use thiserror::Error;

pub type SatchelResult<T> = Result<T, SatchelError>;

#[derive(Debug, Error)]
pub enum SatchelError {
    /// No server trust seed in the session store. Fatal for every crypto
    /// operation; the caller must re-authenticate, not retry.
    #[error("no active session")]
    SessionMissing,

    #[error("malformed base64 field: {0}")]
    Decode(String),

    /// GCM tag did not verify: wrong key, corrupted ciphertext, or tampering.
    #[error("ciphertext authentication failed")]
    AuthenticationFailed,

    /// The envelope was sealed under an E2EE root this session cannot
    /// re-derive. The file needs a different passkey, not a retry.
    #[error("file requires a passkey not present in this session")]
    KeyUnavailable,

    #[error("key derivation failed: {0}")]
    Kdf(String),

    #[error("encryption failed: {0}")]
    Cipher(String),

    #[error("decrypted filename is not valid UTF-8")]
    InvalidFilename,
}
