//! The per-login session context
//!
//! Secrets live for exactly one login session. A `Session` is built by the
//! login flow from the server response plus the WebAuthn prf extension
//! output, and dropped on logout; nothing here touches durable storage, and
//! the seeds are wiped from memory on drop.

use std::future::Future;

use secrecy::{ExposeSecret, SecretSlice};
use zeroize::Zeroizing;

use satchel_core::error::SatchelResult;

/// Source of the two session seeds.
///
/// Implemented by [`Session`]; tests and alternative stores provide their
/// own. Async because a store may sit behind a platform keystore or an
/// out-of-process secret service.
pub trait SecretStore {
    /// The prf output captured at login, if the authenticator exposed one.
    /// `None` means E2EE is unavailable this session; that is a capability
    /// gap, not an error.
    fn e2ee_seed(&self) -> impl Future<Output = Option<Zeroizing<Vec<u8>>>> + Send;

    /// The server-issued trust seed. Fails with
    /// [`SatchelError::SessionMissing`](satchel_core::SatchelError::SessionMissing)
    /// when there is no live session at all.
    fn server_trust_seed(&self) -> impl Future<Output = SatchelResult<Zeroizing<Vec<u8>>>> + Send;
}

/// One login session's secret material.
#[derive(Debug)]
pub struct Session {
    e2ee_seed: Option<SecretSlice<u8>>,
    server_trust_seed: SecretSlice<u8>,
}

impl Session {
    /// Build a session from the login response. `e2ee_seed` is the prf
    /// extension output when the authenticator provided one.
    pub fn new(server_trust_seed: Vec<u8>, e2ee_seed: Option<Vec<u8>>) -> Self {
        Self {
            e2ee_seed: e2ee_seed.map(SecretSlice::from),
            server_trust_seed: SecretSlice::from(server_trust_seed),
        }
    }

    /// Whether uploads from this session can be end-to-end encrypted.
    /// Drives the E2EE warning banner in the UI.
    pub fn supports_e2ee(&self) -> bool {
        self.e2ee_seed.is_some()
    }
}

impl SecretStore for Session {
    fn e2ee_seed(&self) -> impl Future<Output = Option<Zeroizing<Vec<u8>>>> + Send {
        async move {
            self.e2ee_seed
                .as_ref()
                .map(|seed| Zeroizing::new(seed.expose_secret().to_vec()))
        }
    }

    fn server_trust_seed(&self) -> impl Future<Output = SatchelResult<Zeroizing<Vec<u8>>>> + Send {
        async move { Ok(Zeroizing::new(self.server_trust_seed.expose_secret().to_vec())) }
    }
}
