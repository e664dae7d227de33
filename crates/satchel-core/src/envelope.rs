//! The encrypted file envelope: everything the server stores for one file
//!
//! All fields except the two ciphertexts are non-secret: the salt and nonces
//! only matter for re-derivation and travel in the clear. The wire form
//! base64-encodes every binary field because uploads and listings go over a
//! text form/JSON transport.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::error::{SatchelError, SatchelResult};
use crate::{IV_SIZE, SALT_SIZE};

/// Decoded envelope, as produced by the upload path and consumed by the
/// download path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEnvelope {
    /// Which root derived the file key: true = hardware-bound E2EE root,
    /// false = server-issued trust root. Recorded once at upload, never
    /// re-decided.
    pub is_e2ee: bool,
    pub salt: [u8; SALT_SIZE],
    pub filename_iv: [u8; IV_SIZE],
    pub data_iv: [u8; IV_SIZE],
    pub encrypted_filename: Vec<u8>,
    pub encrypted_data: Vec<u8>,
}

/// Text-transport form of [`FileEnvelope`]. Field names match the server's
/// upload form and list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireEnvelope {
    pub is_e2ee: bool,
    pub salt: String,
    pub filename_iv: String,
    pub data_iv: String,
    pub encrypted_filename: String,
    pub encrypted_data: String,
}

impl From<&FileEnvelope> for WireEnvelope {
    fn from(envelope: &FileEnvelope) -> Self {
        Self {
            is_e2ee: envelope.is_e2ee,
            salt: codec::encode(&envelope.salt),
            filename_iv: codec::encode(&envelope.filename_iv),
            data_iv: codec::encode(&envelope.data_iv),
            encrypted_filename: codec::encode(&envelope.encrypted_filename),
            encrypted_data: codec::encode(&envelope.encrypted_data),
        }
    }
}

impl TryFrom<&WireEnvelope> for FileEnvelope {
    type Error = SatchelError;

    fn try_from(wire: &WireEnvelope) -> SatchelResult<Self> {
        Ok(Self {
            is_e2ee: wire.is_e2ee,
            salt: fixed("salt", codec::decode(&wire.salt)?)?,
            filename_iv: fixed("filename_iv", codec::decode(&wire.filename_iv)?)?,
            data_iv: fixed("data_iv", codec::decode(&wire.data_iv)?)?,
            encrypted_filename: codec::decode(&wire.encrypted_filename)?,
            encrypted_data: codec::decode(&wire.encrypted_data)?,
        })
    }
}

fn fixed<const N: usize>(field: &str, bytes: Vec<u8>) -> SatchelResult<[u8; N]> {
    <[u8; N]>::try_from(bytes)
        .map_err(|v| SatchelError::Decode(format!("{field}: expected {N} bytes, got {}", v.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FileEnvelope {
        FileEnvelope {
            is_e2ee: true,
            salt: [0x11; SALT_SIZE],
            filename_iv: [0x22; IV_SIZE],
            data_iv: [0x33; IV_SIZE],
            encrypted_filename: vec![1, 2, 3, 4],
            encrypted_data: vec![0xDE, 0xAD, 0xBE, 0xEF],
        }
    }

    #[test]
    fn test_wire_roundtrip() {
        let envelope = sample();
        let wire = WireEnvelope::from(&envelope);
        assert_eq!(FileEnvelope::try_from(&wire).unwrap(), envelope);
    }

    #[test]
    fn test_wire_json_roundtrip() {
        let wire = WireEnvelope::from(&sample());
        let json = serde_json::to_string(&wire).unwrap();
        let parsed: WireEnvelope = serde_json::from_str(&json).unwrap();
        assert_eq!(FileEnvelope::try_from(&parsed).unwrap(), sample());
    }

    #[test]
    fn test_wrong_salt_length_rejected() {
        let mut wire = WireEnvelope::from(&sample());
        wire.salt = codec::encode(&[0u8; 8]);
        let err = FileEnvelope::try_from(&wire).unwrap_err();
        assert!(matches!(err, SatchelError::Decode(_)));
    }

    #[test]
    fn test_malformed_base64_rejected() {
        let mut wire = WireEnvelope::from(&sample());
        wire.encrypted_data = "!!not base64!!".into();
        assert!(matches!(
            FileEnvelope::try_from(&wire),
            Err(SatchelError::Decode(_))
        ));
    }

    #[test]
    fn test_urlsafe_fields_accepted() {
        let envelope = sample();
        let mut wire = WireEnvelope::from(&envelope);
        // Older clients send url-safe unpadded fields
        wire.salt = wire.salt.replace('+', "-").replace('/', "_").replace('=', "");
        assert_eq!(FileEnvelope::try_from(&wire).unwrap(), envelope);
    }
}
