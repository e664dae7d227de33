//! Root key resolution and per-file mode selection
//!
//! Upload prefers the E2EE root when the session has one; download follows
//! the envelope's recorded flag and never re-decides.

use satchel_core::error::{SatchelError, SatchelResult};
use satchel_crypto::{RootKey, RootKind};

use crate::session::SecretStore;

/// The root keys resolvable in the current session, as a tagged set so
/// every call site matches exhaustively instead of null-checking.
#[derive(Debug)]
pub enum RootKeySet {
    E2eeOnly(RootKey),
    ServerTrustOnly(RootKey),
    Both { e2ee: RootKey, server_trust: RootKey },
}

impl RootKeySet {
    /// Import whatever seeds the session store holds.
    ///
    /// A missing E2EE seed degrades to [`RootKeySet::ServerTrustOnly`]; a
    /// missing trust seed means there is no session, which is fatal.
    pub async fn resolve(store: &impl SecretStore) -> SatchelResult<Self> {
        let trust_seed = store.server_trust_seed().await?;
        let server_trust = RootKey::import(RootKind::ServerTrust, &trust_seed);

        let resolved = match store.e2ee_seed().await {
            Some(seed) => Self::Both {
                e2ee: RootKey::import(RootKind::E2ee, &seed),
                server_trust,
            },
            None => Self::ServerTrustOnly(server_trust),
        };
        tracing::debug!(supports_e2ee = resolved.supports_e2ee(), "resolved root keys");
        Ok(resolved)
    }

    /// Pick the root for a new upload, plus the `is_e2ee` flag to record in
    /// its envelope. A one-time, per-file decision.
    pub fn for_upload(&self) -> (&RootKey, bool) {
        match self {
            Self::E2eeOnly(root) => (root, true),
            Self::Both { e2ee, .. } => (e2ee, true),
            Self::ServerTrustOnly(root) => (root, false),
        }
    }

    /// Pick the root an existing envelope was sealed under.
    ///
    /// An E2EE file on a session without the matching prf seed is
    /// [`SatchelError::KeyUnavailable`]: it needs a different passkey, and
    /// trying the trust root instead would only fail authentication with a
    /// worse diagnostic.
    pub fn for_download(&self, is_e2ee: bool) -> SatchelResult<&RootKey> {
        match (self, is_e2ee) {
            (Self::E2eeOnly(root) | Self::Both { e2ee: root, .. }, true) => Ok(root),
            (Self::ServerTrustOnly(root) | Self::Both { server_trust: root, .. }, false) => {
                Ok(root)
            }
            (Self::ServerTrustOnly(_), true) => Err(SatchelError::KeyUnavailable),
            (Self::E2eeOnly(_), false) => Err(SatchelError::SessionMissing),
        }
    }

    pub fn supports_e2ee(&self) -> bool {
        matches!(self, Self::E2eeOnly(_) | Self::Both { .. })
    }
}
