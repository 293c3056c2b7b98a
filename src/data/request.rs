//! Request orchestration for the morning quotation API
//!
//! `QuotationRequest` owns the endpoint, the cache location and the worker the
//! callback-style operations run on. It reads a payload either from the cache
//! or from the API, persists successful remote fetches, and decodes payloads
//! into a [`Response`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::{DataSource, Endpoint, ReqwestTransport, Response, Transport};
use crate::cache::CacheManager;
use crate::error::QuoteError;
use crate::example::EXAMPLE_PAYLOAD;

/// Default minimum interval between remote requests
pub const DEFAULT_EXPIRATION: Duration = Duration::from_secs(5 * 60);

/// Outcome of a `perform` call, handed to the completion callback
#[derive(Debug)]
pub struct Completion {
    /// The data source that was actually used
    pub source: DataSource,
    /// The decoded response, or the first error encountered
    pub result: Result<Response, QuoteError>,
}

/// Caller-owned request context
///
/// Built once per session and reused across calls. Clones share the
/// transport and the cache write lock.
#[derive(Clone)]
pub struct QuotationRequest {
    /// Endpoint remote fetches are sent to
    pub endpoint: Endpoint,
    /// Where the last successful response is cached
    cache: CacheManager,
    /// Minimum interval between remote requests
    expiration: Duration,
    /// Performs the HTTP GET
    transport: Arc<dyn Transport>,
    /// Runtime the callback-style operations are spawned on
    worker: Option<Handle>,
}

impl fmt::Debug for QuotationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuotationRequest")
            .field("endpoint", &self.endpoint)
            .field("cache", &self.cache)
            .field("expiration", &self.expiration)
            .finish_non_exhaustive()
    }
}

impl QuotationRequest {
    /// Creates a request context for `token`
    ///
    /// Uses the platform cache directory, falling back to a directory under
    /// the system temp dir when none can be resolved.
    pub fn new(token: Option<String>) -> Self {
        let cache = CacheManager::new().unwrap_or_else(|| {
            CacheManager::with_dir(std::env::temp_dir().join("morningquote"))
        });

        Self {
            endpoint: Endpoint::new(token),
            cache,
            expiration: DEFAULT_EXPIRATION,
            transport: Arc::new(ReqwestTransport::new()),
            worker: None,
        }
    }

    /// Use a custom cache location
    pub fn with_cache(mut self, cache: CacheManager) -> Self {
        self.cache = cache;
        self
    }

    /// Use a custom expiration interval
    pub fn with_expiration(mut self, expiration: Duration) -> Self {
        self.expiration = expiration;
        self
    }

    /// Use a custom transport for remote fetches
    pub fn with_transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Arc::new(transport);
        self
    }

    /// Run `perform` calls on the given runtime instead of the current one
    pub fn with_worker(mut self, worker: Handle) -> Self {
        self.worker = Some(worker);
        self
    }

    /// Replace the endpoint
    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = endpoint;
        self
    }

    pub fn cache(&self) -> &CacheManager {
        &self.cache
    }

    pub fn expiration(&self) -> Duration {
        self.expiration
    }

    /// Whether the cached payload exists and is younger than the expiration
    ///
    /// Only a query: none of the fetch or perform operations consult it.
    pub async fn cache_is_fresh(&self) -> bool {
        self.cache.is_fresh(self.expiration).await
    }

    /// Fetches raw payload bytes from `source`
    ///
    /// # Behavior
    /// - `Remote` fails with `TokenMissing` before any I/O when no token is set
    /// - A successful remote fetch is written to the cache; a failed write is
    ///   logged and does not fail the fetch
    /// - `Local` reads the cache unconditionally, ignoring the expiration
    pub async fn fetch(&self, source: DataSource) -> Result<Vec<u8>, QuoteError> {
        debug!(%source, "fetching morning quotation");
        match source {
            DataSource::Local => self.cache.read().await.map_err(QuoteError::CacheUnavailable),
            DataSource::Remote => self.fetch_remote().await,
        }
    }

    async fn fetch_remote(&self) -> Result<Vec<u8>, QuoteError> {
        if self.endpoint.token().is_none() {
            return Err(QuoteError::TokenMissing);
        }

        let bytes = self.transport.get(&self.endpoint.url()).await?;

        if let Err(e) = self.cache.write(&bytes).await {
            warn!(
                path = %self.cache.cache_path().display(),
                error = %e,
                "failed to cache morning quotation"
            );
        }

        Ok(bytes)
    }

    /// Bytes of the bundled example response, for use without network or token
    pub fn fetch_example(&self) -> Vec<u8> {
        EXAMPLE_PAYLOAD.to_vec()
    }

    /// Decodes raw bytes into a `Response`
    ///
    /// Every failure, from malformed JSON to a missing key, is reported as
    /// `InvalidResponse("unexpected result")`.
    pub fn decode(bytes: &[u8]) -> Result<Response, QuoteError> {
        serde_json::from_slice(bytes).map_err(|e| {
            debug!(error = %e, "payload does not match the response shape");
            QuoteError::unexpected_result()
        })
    }

    /// Fetches from `source` and decodes the payload
    ///
    /// Decode is skipped when the fetch fails.
    pub async fn load(&self, source: DataSource) -> Completion {
        let result = match self.fetch(source).await {
            Ok(bytes) => Self::decode(&bytes),
            Err(e) => Err(e),
        };
        Completion { source, result }
    }

    /// Fetches from the API and decodes, reporting to `completion`
    ///
    /// Always goes to `Remote`; the cache is never consulted here, whatever
    /// its age. Read the cache with [`perform_from`](Self::perform_from) and
    /// `DataSource::Local`.
    ///
    /// # Panics
    /// Panics if no worker was configured and this is called outside a Tokio runtime.
    pub fn perform<F>(&self, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        self.perform_from(DataSource::Remote, completion)
    }

    /// Fetches from `source` and decodes on the worker, reporting to `completion`
    ///
    /// The completion runs exactly once, on the worker.
    ///
    /// # Panics
    /// Panics if no worker was configured and this is called outside a Tokio runtime.
    pub fn perform_from<F>(&self, source: DataSource, completion: F) -> JoinHandle<()>
    where
        F: FnOnce(Completion) + Send + 'static,
    {
        let worker = self.worker.clone().unwrap_or_else(Handle::current);
        let request = self.clone();

        worker.spawn(async move {
            let outcome = request.load(source).await;
            completion(outcome);
        })
    }
}
