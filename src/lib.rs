//! # berth
//!
//! Resolve MongoDB connection settings from the environment or a connection
//! URL and establish a verified session.
//!
//! Configuration comes from two sources, with a fixed precedence:
//! - `MONGO` — a full connection URL; when set and non-empty it wins and
//!   every other variable is ignored. URL options are validated strictly:
//!   a misspelled option fails resolution instead of silently falling back
//!   to a default.
//! - Discrete `MONGO_*` variables (`MONGO_SERVERS`, `MONGO_USER`,
//!   `MONGO_PASSWORD`, `MONGO_DATABASE`, `MONGO_REPLICA_SET`,
//!   `MONGO_AUTH_SOURCE`, `MONGO_SSL`) — each maps one-to-one to a field,
//!   no free-form key space, so no strict mode.
//!
//! Resolution is a pure transform producing a [`DialConfig`]; the dial
//! itself is delegated to the official driver. Any failure returns to the
//! caller, which is expected to treat it as fatal to startup.
//!
//! ## Example
//!
//! ```rust,ignore
//! use berth::Session;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), berth::BerthError> {
//!     // Reads MONGO / MONGO_* and dials the deployment.
//!     let session = Session::from_env().await?;
//!
//!     let users = session.collection_doc("users");
//!     // ... thread `session` through the application explicitly
//!     Ok(())
//! }
//! ```
//!
//! Configurations can also be built programmatically:
//!
//! ```rust,ignore
//! use berth::{DialConfig, Session};
//!
//! let config = DialConfig::builder()
//!     .address("db1.example.net:27017")
//!     .address("db2.example.net:2500")
//!     .database("mydb")
//!     .replica_set("rs0")
//!     .build();
//! let session = Session::connect(config).await?;
//! ```

pub mod config;
pub mod error;
pub mod session;

pub use config::{DialConfig, DialConfigBuilder};
pub use error::{BerthError, BerthResult};
pub use session::Session;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{DialConfig, DialConfigBuilder};
    pub use crate::error::{BerthError, BerthResult};
    pub use crate::session::Session;
}
