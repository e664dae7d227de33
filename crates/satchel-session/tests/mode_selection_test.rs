//! Mode selection and failure taxonomy across sessions with different
//! capabilities.

use std::future::Future;

use satchel_core::error::{SatchelError, SatchelResult};
use satchel_session::{
    decrypt_contents, decrypt_filename, encrypt_file, filename_for_listing, EntryStatus,
    RootKeySet, SecretStore, Session,
};
use zeroize::Zeroizing;

const TRUST_SEED: &[u8] = b"server issued trust seed";
const PRF_SEED: &[u8] = b"authenticator prf output";

/// A store with no live session at all.
struct LoggedOut;

impl SecretStore for LoggedOut {
    fn e2ee_seed(&self) -> impl Future<Output = Option<Zeroizing<Vec<u8>>>> + Send {
        async { None }
    }

    fn server_trust_seed(&self) -> impl Future<Output = SatchelResult<Zeroizing<Vec<u8>>>> + Send {
        async { Err(SatchelError::SessionMissing) }
    }
}

#[tokio::test]
async fn no_session_is_fatal() {
    let result = encrypt_file(&LoggedOut, "f.txt", b"data").await;
    assert!(matches!(result, Err(SatchelError::SessionMissing)));

    let result = RootKeySet::resolve(&LoggedOut).await;
    assert!(matches!(result, Err(SatchelError::SessionMissing)));
}

#[tokio::test]
async fn fallback_records_server_trust_mode() {
    let session = Session::new(TRUST_SEED.to_vec(), None);
    let envelope = encrypt_file(&session, "f.txt", b"data").await.unwrap();
    assert!(!envelope.is_e2ee);
}

#[tokio::test]
async fn e2ee_file_on_wrong_device_requires_different_passkey() {
    let laptop = Session::new(TRUST_SEED.to_vec(), Some(PRF_SEED.to_vec()));
    let envelope = encrypt_file(&laptop, "secret.pdf", b"very private")
        .await
        .unwrap();
    assert!(envelope.is_e2ee);

    // Same account, different authenticator: no prf seed available
    let phone = Session::new(TRUST_SEED.to_vec(), None);
    let roots = RootKeySet::resolve(&phone).await.unwrap();

    assert!(matches!(
        decrypt_filename(&roots, &envelope),
        Err(SatchelError::KeyUnavailable)
    ));
    assert!(matches!(
        decrypt_contents(&roots, &envelope),
        Err(SatchelError::KeyUnavailable)
    ));
    assert_eq!(
        filename_for_listing(&roots, &envelope),
        EntryStatus::RequiresDifferentPasskey
    );
}

#[tokio::test]
async fn different_prf_seed_fails_authentication_not_garbage() {
    let original = Session::new(TRUST_SEED.to_vec(), Some(PRF_SEED.to_vec()));
    let envelope = encrypt_file(&original, "secret.pdf", b"very private")
        .await
        .unwrap();

    // A different passkey resolves an E2EE root, but the wrong one
    let other = Session::new(TRUST_SEED.to_vec(), Some(b"some other prf output".to_vec()));
    let roots = RootKeySet::resolve(&other).await.unwrap();

    assert!(matches!(
        decrypt_contents(&roots, &envelope),
        Err(SatchelError::AuthenticationFailed)
    ));
    assert_eq!(filename_for_listing(&roots, &envelope), EntryStatus::Unreadable);
}

#[tokio::test]
async fn tampered_envelope_is_unreadable_not_empty() {
    let session = Session::new(TRUST_SEED.to_vec(), None);
    let mut envelope = encrypt_file(&session, "f.txt", b"data").await.unwrap();
    envelope.encrypted_data[0] ^= 0x80;

    let roots = RootKeySet::resolve(&session).await.unwrap();
    assert!(matches!(
        decrypt_contents(&roots, &envelope),
        Err(SatchelError::AuthenticationFailed)
    ));
    // The name field is untouched and still lists fine
    assert_eq!(
        filename_for_listing(&roots, &envelope),
        EntryStatus::Ready("f.txt".into())
    );
}
