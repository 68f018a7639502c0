//! Credential-keyed transport session cache.
//!
//! Holds at most one live transport at a time. A session is reused while the
//! (base URL, credential) pair is unchanged; a mismatch drops the previous
//! transport before a replacement is constructed. All slot access goes through
//! an async mutex, so overlapping acquire/invalidate calls cannot corrupt the
//! slot or leak a transport.

use crate::SharedTransport;
use replik_core::GenerationResult;
use tokio::sync::Mutex;
use tracing::debug;

/// Constructs a transport for a (base URL, credential) pair.
pub type TransportFactory =
    Box<dyn Fn(&str, &str) -> GenerationResult<SharedTransport> + Send + Sync>;

struct CachedSession {
    key: String,
    transport: SharedTransport,
}

/// Single-slot session cache over an injected transport factory.
pub struct SessionCache {
    factory: TransportFactory,
    slot: Mutex<Option<CachedSession>>,
}

impl SessionCache {
    pub fn new(factory: TransportFactory) -> Self {
        Self {
            factory,
            slot: Mutex::new(None),
        }
    }

    /// Return the cached transport when the key matches, otherwise replace it.
    ///
    /// The superseded transport is dropped while the lock is held, before the
    /// factory runs, so two transports for different credentials never
    /// coexist.
    pub async fn acquire(
        &self,
        base_url: &str,
        api_key: &str,
    ) -> GenerationResult<SharedTransport> {
        let key = session_key(base_url, api_key);
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.key == key {
                return Ok(cached.transport.clone());
            }
            debug!("session key changed, disposing previous transport");
        }

        *slot = None;
        let transport = (self.factory)(base_url, api_key)?;
        *slot = Some(CachedSession {
            key,
            transport: transport.clone(),
        });
        Ok(transport)
    }

    /// Dispose the cached session, if any. Called when settings are saved
    /// with a different URL or credential.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        if slot.take().is_some() {
            debug!("session cache invalidated");
        }
    }

    /// Cache that always hands out the given transport, mainly for tests.
    pub fn with_fixed(transport: SharedTransport) -> Self {
        Self::new(Box::new(move |_, _| Ok(transport.clone())))
    }
}

impl std::fmt::Debug for SessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCache").finish_non_exhaustive()
    }
}

fn session_key(base_url: &str, api_key: &str) -> String {
    format!("{}::{}", base_url, api_key)
}

// ============================================================================
// UNIT TESTS
// ============================================================================
