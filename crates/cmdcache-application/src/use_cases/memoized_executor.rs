//! Memoized Executor Use Case
//!
//! Runs read-only commands through a short-lived shared cache. Repeated
//! invocations of the same command inside the TTL window are answered from
//! the cache instead of spawning the command again.
//!
//! Only commands that are idempotent and free of side effects belong here.
//! The executor cannot tell the difference, so that constraint is on callers.
//!
//! ## Failure model
//!
//! Cache trouble never reaches the caller. A lookup that errors, times out
//! or returns an undecodable blob behaves like a miss; a store that fails is
//! logged and skipped. Only command failures (disallowed exit code, spawn
//! failure, timeout) come back as errors, and none of them are cached.

use cmdcache_domain::constants::{
    CACHE_KEY_PREFIX, DEFAULT_INHERITED_ENV, DEFAULT_RESULT_TTL_SECS,
};
use cmdcache_domain::error::{Error, ExecutionError, Result};
use cmdcache_domain::ports::{CacheEntryConfig, CacheProvider, ProcessRunner, ProcessSpec};
use cmdcache_domain::value_objects::{
    Command, ExecutionResult, ExitCodePolicy, Fingerprint, FingerprintScheme, ResultEncoding,
};
use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Executor behavior knobs
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Lifetime of stored results
    pub ttl: Duration,
    /// Exit codes that are cached instead of reported as failures
    pub exit_policy: ExitCodePolicy,
    /// Namespace tag prepended to fingerprints
    pub key_prefix: String,
    /// How tokens are framed before hashing
    pub fingerprint_scheme: FingerprintScheme,
    /// Blob format in the cache
    pub encoding: ResultEncoding,
    /// Variables copied from the caller's environment into the child
    pub inherited_env: Vec<String>,
    /// Kill commands that run longer than this
    pub command_timeout: Option<Duration>,
    /// Give up on a cache round trip after this long
    pub cache_timeout: Option<Duration>,
    /// Serialize concurrent misses on the same fingerprint
    pub single_flight: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(DEFAULT_RESULT_TTL_SECS),
            exit_policy: ExitCodePolicy::default(),
            key_prefix: CACHE_KEY_PREFIX.to_string(),
            fingerprint_scheme: FingerprintScheme::default(),
            encoding: ResultEncoding::default(),
            inherited_env: DEFAULT_INHERITED_ENV.iter().map(ToString::to_string).collect(),
            command_timeout: None,
            cache_timeout: None,
            single_flight: false,
        }
    }
}

impl ExecutorConfig {
    /// Set the TTL of stored results
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Set the exit code allow-list
    pub fn with_exit_policy(mut self, exit_policy: ExitCodePolicy) -> Self {
        self.exit_policy = exit_policy;
        self
    }

    /// Set the fingerprint prefix
    pub fn with_key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.key_prefix = prefix.into();
        self
    }

    /// Set the fingerprint scheme
    pub fn with_fingerprint_scheme(mut self, scheme: FingerprintScheme) -> Self {
        self.fingerprint_scheme = scheme;
        self
    }

    /// Set the blob encoding
    pub fn with_encoding(mut self, encoding: ResultEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Replace the list of inherited environment variables
    pub fn with_inherited_env<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.inherited_env = names.into_iter().map(Into::into).collect();
        self
    }

    /// Set the command timeout
    pub fn with_command_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.command_timeout = timeout;
        self
    }

    /// Set the cache round-trip timeout
    pub fn with_cache_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.cache_timeout = timeout;
        self
    }

    /// Enable or disable single-flight execution
    pub fn with_single_flight(mut self, enabled: bool) -> Self {
        self.single_flight = enabled;
        self
    }
}

/// Counters describing what the executor has done so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutorStats {
    /// Results served from the cache
    pub hits: u64,
    /// Lookups that led to an execution
    pub misses: u64,
    /// Commands actually spawned and completed
    pub executions: u64,
    /// Executions rejected by the exit code policy
    pub rejected: u64,
    /// Cache lookups, stores or decodes that failed
    pub cache_errors: u64,
}

#[derive(Debug, Default)]
struct Counters {
    hits: AtomicU64,
    misses: AtomicU64,
    executions: AtomicU64,
    rejected: AtomicU64,
    cache_errors: AtomicU64,
}

impl Counters {
    fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    fn snapshot(&self) -> ExecutorStats {
        ExecutorStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            executions: self.executions.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
            cache_errors: self.cache_errors.load(Ordering::Relaxed),
        }
    }
}

/// Executes commands, memoizing allowed outcomes in a shared cache
///
/// # Example
///
/// ```ignore
/// let executor = MemoizedExecutor::new(cache, runner, ExecutorConfig::default());
/// let result = executor.execute(["storcli", "/c0", "show"]).await?;
/// println!("{}", result.stdout);
/// ```
#[derive(Debug)]
pub struct MemoizedExecutor {
    cache: Arc<dyn CacheProvider>,
    runner: Arc<dyn ProcessRunner>,
    config: ExecutorConfig,
    in_flight: DashMap<String, Arc<Mutex<()>>>,
    counters: Counters,
}

impl MemoizedExecutor {
    /// Create new executor with injected dependencies
    pub fn new(
        cache: Arc<dyn CacheProvider>,
        runner: Arc<dyn ProcessRunner>,
        config: ExecutorConfig,
    ) -> Self {
        Self {
            cache,
            runner,
            config,
            in_flight: DashMap::new(),
            counters: Counters::default(),
        }
    }

    /// Run a command given as tokens, or return its memoized result
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] for an empty token list
    /// - [`Error::Execution`] when the exit code is not allowed
    /// - [`Error::Spawn`] / [`Error::Timeout`] from the process runner
    pub async fn execute<I, S>(&self, tokens: I) -> Result<ExecutionResult>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command = Command::new(tokens)?;
        self.execute_command(&command).await
    }

    /// Run a prepared [`Command`], or return its memoized result
    pub async fn execute_command(&self, command: &Command) -> Result<ExecutionResult> {
        let key = self.fingerprint(command);

        if let Some(hit) = self.lookup(&key).await {
            return Ok(hit);
        }

        if !self.config.single_flight {
            return self.run_and_store(command, &key).await;
        }

        let gate = self
            .in_flight
            .entry(key.as_str().to_owned())
            .or_default()
            .clone();
        let outcome = {
            let _guard = gate.lock().await;
            // Whoever held the gate before us may have filled the cache
            match self.lookup(&key).await {
                Some(hit) => Ok(hit),
                None => self.run_and_store(command, &key).await,
            }
        };
        // Two references left means nobody else is waiting on this key
        self.in_flight
            .remove_if(key.as_str(), |_, gate| Arc::strong_count(gate) <= 2);
        outcome
    }

    /// Cache key used for `command` under this executor's configuration
    pub fn fingerprint(&self, command: &Command) -> Fingerprint {
        Fingerprint::compute(
            command,
            self.config.fingerprint_scheme,
            &self.config.key_prefix,
        )
    }

    /// Current configuration
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Snapshot of the executor counters
    pub fn stats(&self) -> ExecutorStats {
        self.counters.snapshot()
    }

    /// Name of the cache backend in use
    pub fn cache_provider_name(&self) -> &str {
        self.cache.provider_name()
    }

    async fn lookup(&self, key: &Fingerprint) -> Option<ExecutionResult> {
        let blob = match self.within_cache_budget(self.cache.get_json(key.as_str())).await {
            Ok(Some(blob)) => blob,
            Ok(None) => return None,
            Err(e) => {
                Counters::bump(&self.counters.cache_errors);
                warn!(key = %key, error = %e, "Cache lookup failed, continuing without cache");
                return None;
            }
        };

        match self.config.encoding.decode(&blob) {
            Ok(result) => {
                Counters::bump(&self.counters.hits);
                debug!(key = %key, exit_code = result.exit_code, "Cache hit");
                Some(result)
            }
            Err(e) => {
                Counters::bump(&self.counters.cache_errors);
                warn!(key = %key, error = %e, "Ignoring undecodable cache entry");
                None
            }
        }
    }

    async fn run_and_store(&self, command: &Command, key: &Fingerprint) -> Result<ExecutionResult> {
        Counters::bump(&self.counters.misses);
        info!(command = %command, key = %key, "Cache miss, executing command");

        let spec = ProcessSpec::new(command.clone())
            .inherit_env(&self.config.inherited_env)
            .with_timeout(self.config.command_timeout);
        let result = self.runner.run(&spec).await?;
        Counters::bump(&self.counters.executions);

        if !self.config.exit_policy.allows(result.exit_code) {
            Counters::bump(&self.counters.rejected);
            debug!(
                command = %command,
                exit_code = result.exit_code,
                "Exit code not allowed, result not cached"
            );
            return Err(ExecutionError {
                joined_command: command.joined(),
                exit_code: result.exit_code,
                stdout: result.stdout,
                stderr: result.stderr,
            }
            .into());
        }

        self.store(key, &result).await;
        Ok(result)
    }

    async fn store(&self, key: &Fingerprint, result: &ExecutionResult) {
        let blob = match self.config.encoding.encode(result) {
            Ok(blob) => blob,
            Err(e) => {
                Counters::bump(&self.counters.cache_errors);
                warn!(key = %key, error = %e, "Failed to encode result, not caching");
                return;
            }
        };

        let entry = CacheEntryConfig::new().with_ttl(self.config.ttl);
        match self
            .within_cache_budget(self.cache.set_json(key.as_str(), &blob, entry))
            .await
        {
            Ok(()) => debug!(key = %key, ttl_secs = self.config.ttl.as_secs(), "Result cached"),
            Err(e) => {
                Counters::bump(&self.counters.cache_errors);
                warn!(key = %key, error = %e, "Cache store failed, result returned uncached");
            }
        }
    }

    async fn within_cache_budget<T, F>(&self, operation: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match self.config.cache_timeout {
            Some(limit) => match tokio::time::timeout(limit, operation).await {
                Ok(outcome) => outcome,
                Err(_) => Err(Error::cache(format!("Cache operation exceeded {limit:?}"))),
            },
            None => operation.await,
        }
    }
}
