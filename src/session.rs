//! Session establishment and the process-lifetime database handle.

use std::sync::Arc;

use bson::{Document, doc};
use mongodb::{Client, Collection, Database};
use tracing::info;

use crate::config::DialConfig;
use crate::error::{BerthError, BerthResult};

/// A verified session against a MongoDB deployment.
///
/// The driver handles pooling and topology monitoring internally; this
/// wraps its `Client` together with the target database and a snapshot of
/// the configuration that dialed it. Constructed once during application
/// bootstrap and threaded through explicitly from there — there is no
/// ambient global handle and no re-initialization.
#[derive(Clone)]
pub struct Session {
    client: Client,
    database: Database,
    config: Arc<DialConfig>,
}

impl Session {
    /// Dial the deployment described by `config` and verify it responds.
    ///
    /// The configuration is consumed: it is built once, used for this one
    /// dial, and retained only as a read-only snapshot. An empty database
    /// name is rejected before any I/O. The dial is verified with a `ping`
    /// so an unreachable deployment fails the bootstrap here instead of at
    /// the first query.
    pub async fn connect(config: DialConfig) -> BerthResult<Self> {
        if config.database.is_empty() {
            return Err(BerthError::config("database name is required"));
        }

        let options = config.to_client_options()?;
        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        database.run_command(doc! { "ping": 1 }, None).await?;

        info!(
            addresses = ?config.addresses,
            database = %config.database,
            tls = config.use_tls,
            "MongoDB session established"
        );

        Ok(Self {
            client,
            database,
            config: Arc::new(config),
        })
    }

    /// Resolve configuration from the environment and connect.
    ///
    /// The bootstrap entry point: any resolution or dial error returns to
    /// the caller, which is expected to treat it as fatal to startup.
    pub async fn from_env() -> BerthResult<Self> {
        let config = DialConfig::from_env()?;
        Self::connect(config).await
    }

    /// Get a typed collection from the target database.
    pub fn collection<T>(&self, name: &str) -> Collection<T>
    where
        T: Send + Sync,
    {
        self.database.collection(name)
    }

    /// Get a collection of raw BSON documents.
    pub fn collection_doc(&self, name: &str) -> Collection<Document> {
        self.database.collection(name)
    }

    /// Get the target database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    /// Get the target database name.
    pub fn db_name(&self) -> &str {
        self.database.name()
    }

    /// Get the underlying driver client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Get the configuration this session was dialed with.
    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    /// Check that the deployment still responds to a `ping`.
    pub async fn is_healthy(&self) -> bool {
        self.database
            .run_command(doc! { "ping": 1 }, None)
            .await
            .is_ok()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Credentials stay out of debug output.
        f.debug_struct("Session")
            .field("addresses", &self.config.addresses)
            .field("database", &self.config.database)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_empty_database() {
        let config = DialConfig::builder().address("localhost:27017").build();
        let err = Session::connect(config).await.unwrap_err();
        assert!(matches!(err, BerthError::Config(_)));
        assert_eq!(
            err.to_string(),
            "configuration error: database name is required"
        );
    }

    #[tokio::test]
    async fn test_connect_rejects_bad_address_before_dial() {
        let config = DialConfig::builder()
            .address("localhost:notaport")
            .database("mydb")
            .build();
        let err = Session::connect(config).await.unwrap_err();
        assert!(matches!(err, BerthError::Config(_)));
    }

    #[tokio::test]
    async fn test_connect_rejects_unknown_mechanism_before_dial() {
        let config = DialConfig::builder()
            .address("localhost:27017")
            .database("mydb")
            .username("user")
            .auth_mechanism("GSSAPI")
            .build();
        let err = Session::connect(config).await.unwrap_err();
        assert!(matches!(err, BerthError::Config(_)));
    }
}
