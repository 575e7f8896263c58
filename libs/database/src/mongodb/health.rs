use mongodb::Client;
use mongodb::bson::doc;
use std::time::Instant;

/// Result of a detailed health check
#[derive(Debug, Clone)]
pub enum HealthStatus {
    /// Server answered the ping
    Healthy {
        /// Round-trip latency of the ping command
        latency_ms: u64,
    },
    /// Server did not answer the ping
    Unhealthy { reason: String },
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy { .. })
    }
}

/// Check MongoDB health with a ping command
///
/// # Example
/// ```ignore
/// use database::mongodb::{connect, check_health};
///
/// let client = connect("mongodb://localhost:27017").await?;
/// assert!(check_health(&client).await);
/// ```
pub async fn check_health(client: &Client) -> bool {
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .is_ok()
}

/// Check MongoDB health and report latency
///
/// # Example
/// ```ignore
/// use database::mongodb::{connect, check_health_detailed};
///
/// let client = connect("mongodb://localhost:27017").await?;
/// let status = check_health_detailed(&client).await;
/// assert!(status.is_healthy());
/// ```
pub async fn check_health_detailed(client: &Client) -> HealthStatus {
    let start = Instant::now();

    match client.database("admin").run_command(doc! { "ping": 1 }).await {
        Ok(_) => HealthStatus::Healthy {
            latency_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => HealthStatus::Unhealthy {
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        assert!(check_health(&client).await);
    }

    #[tokio::test]
    #[ignore] // Requires actual MongoDB
    async fn test_check_health_detailed() {
        let client = Client::with_uri_str("mongodb://localhost:27017")
            .await
            .unwrap();
        let status = check_health_detailed(&client).await;
        assert!(status.is_healthy());
    }
}
