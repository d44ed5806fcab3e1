//! Redis/KeyDB stats client.
//!
//! Reads memory counters with `INFO memory` over a multiplexed tokio
//! connection. Connecting is bounded by the configured timeout.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::{FromRedisValue, InfoDict, RedisError};
use tokio::time::timeout;

use crate::client::StatsSource;
use crate::config::CacheProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::health::ServiceStats;

/// Stats source backed by the `redis` crate.
#[derive(Clone)]
pub struct RedisStatsClient {
    connection: MultiplexedConnection,
    uri: String,
}

impl RedisStatsClient {
    pub async fn connect(config: &CacheProbeConfig) -> ProbeResult<Self> {
        let client = redis::Client::open(config.uri.as_str()).map_err(map_redis_error)?;
        let connect_timeout = config.connect_timeout();

        let connection = timeout(connect_timeout, client.get_multiplexed_async_connection())
            .await
            .map_err(|_| {
                ProbeError::ConnectionTimeout(format!(
                    "redis connect timeout after {:?} ({})",
                    connect_timeout, config.uri
                ))
            })?
            .map_err(map_redis_error)?;

        tracing::debug!(uri = %config.uri, "Redis connection established");

        Ok(Self {
            connection,
            uri: config.uri.clone(),
        })
    }
}

#[async_trait]
impl StatsSource for RedisStatsClient {
    async fn server_stats(&self) -> ProbeResult<ServiceStats> {
        let mut conn = self.connection.clone();
        let info: InfoDict = redis::cmd("INFO")
            .arg("memory")
            .query_async(&mut conn)
            .await
            .map_err(map_redis_error)?;

        let stats = stats_from_info(&info)?;
        tracing::debug!(
            uri = %self.uri,
            used_memory = stats.used_memory_bytes,
            maxmemory = stats.max_memory_bytes,
            "Memory stats read"
        );
        Ok(stats)
    }
}

/// Extract the memory counters from an `INFO` reply.
pub fn stats_from_info(info: &InfoDict) -> ProbeResult<ServiceStats> {
    Ok(ServiceStats {
        used_memory_bytes: field(info, "used_memory")?,
        used_memory_human: field(info, "used_memory_human")?,
        max_memory_bytes: field(info, "maxmemory")?,
        max_memory_human: field(info, "maxmemory_human")?,
    })
}

fn field<T: FromRedisValue>(info: &InfoDict, key: &str) -> ProbeResult<T> {
    info.get(key).ok_or_else(|| {
        ProbeError::ServiceOperation(format!("INFO reply is missing or has invalid '{}'", key))
    })
}

fn map_redis_error(err: RedisError) -> ProbeError {
    if err.is_timeout() || err.is_connection_refusal() || err.is_connection_dropped() {
        ProbeError::ConnectionTimeout(err.to_string())
    } else {
        ProbeError::ServiceOperation(err.to_string())
    }
}
