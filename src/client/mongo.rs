//! MongoDB replica set client.
//!
//! # Responsibilities
//! - Authenticate with the configured user/password
//! - Run `replSetGetStatus` against `admin` and read `myState`
//!
//! Server selection timeouts become `ConnectionTimeout`; auth and command
//! failures become `ServiceOperation`.

use async_trait::async_trait;
use mongodb::bson::{self, doc};
use mongodb::error::{Error as MongoError, ErrorKind};
use mongodb::options::{ClientOptions, Credential};
use mongodb::Client;
use serde::Deserialize;

use crate::client::ReplicaStateSource;
use crate::config::ReplicaProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::health::ReplicationState;

/// The part of the `replSetGetStatus` reply the probe reads.
#[derive(Debug, Deserialize)]
struct ReplSetStatus {
    #[serde(rename = "myState")]
    my_state: i32,
}

/// Replica state source backed by the official driver.
pub struct MongoReplicaClient {
    client: Client,
    uri: String,
}

impl MongoReplicaClient {
    /// Build an authenticated client. The driver connects lazily, so
    /// unreachable servers surface on the first query.
    pub async fn connect(config: &ReplicaProbeConfig) -> ProbeResult<Self> {
        let mut options = ClientOptions::parse(&config.uri)
            .await
            .map_err(map_mongo_error)?;

        apply_credentials(&mut options, config);
        options.server_selection_timeout = Some(config.connect_timeout());
        options.app_name = Some("check-mongodb".to_string());

        let client = Client::with_options(options).map_err(map_mongo_error)?;

        tracing::debug!(uri = %config.uri, user = %config.user, "MongoDB client created");

        Ok(Self {
            client,
            uri: config.uri.clone(),
        })
    }
}

#[async_trait]
impl ReplicaStateSource for MongoReplicaClient {
    async fn replication_state(&self) -> ProbeResult<ReplicationState> {
        let reply = self
            .client
            .database("admin")
            .run_command(doc! { "replSetGetStatus": 1 })
            .await
            .map_err(map_mongo_error)?;

        let status: ReplSetStatus = bson::from_document(reply).map_err(|e| {
            ProbeError::ServiceOperation(format!("unexpected replSetGetStatus reply: {}", e))
        })?;

        tracing::debug!(uri = %self.uri, my_state = status.my_state, "Replica state read");

        Ok(ReplicationState::from_code(status.my_state))
    }
}

/// Set user and password, keeping any `authSource`/`authMechanism` from the URI.
fn apply_credentials(options: &mut ClientOptions, config: &ReplicaProbeConfig) {
    let credential = options.credential.get_or_insert_with(Credential::default);
    credential.username = Some(config.user.clone());
    credential.password = Some(config.password.clone());
}

fn map_mongo_error(err: MongoError) -> ProbeError {
    match err.kind.as_ref() {
        ErrorKind::ServerSelection { .. } => ProbeError::ConnectionTimeout(err.to_string()),
        _ => ProbeError::ServiceOperation(err.to_string()),
    }
}
