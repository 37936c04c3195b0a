//! Server state and configuration.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::raster::Raster;

/// Idle time after which an uploaded image is dropped (30 minutes).
pub const SESSION_EXPIRATION_SECS: u64 = 30 * 60;

/// How often the background task sweeps expired sessions.
pub const SESSION_SWEEP_SECS: u64 = 60;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on (e.g., "127.0.0.1:8080")
    pub listen_addr: String,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
    /// Idle time before a stored image is discarded
    pub session_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".to_string(),
            max_upload_bytes: 50 * 1024 * 1024,
            session_ttl: Duration::from_secs(SESSION_EXPIRATION_SECS),
        }
    }
}

/// A decoded upload kept around for re-rendering.
#[derive(Debug, Clone)]
pub struct ImageSession {
    pub image: Arc<Raster>,
    pub last_accessed: Instant,
}

impl ImageSession {
    pub fn new(image: Raster) -> Self {
        Self {
            image: Arc::new(image),
            last_accessed: Instant::now(),
        }
    }

    /// Mark the session as used so it survives the next sweep.
    pub fn touch(&mut self) {
        self.last_accessed = Instant::now();
    }

    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.last_accessed) >= ttl
    }
}

/// Application state shared across handlers.
pub struct AppState {
    pub config: ServerConfig,
    pub sessions: RwLock<HashMap<Uuid, ImageSession>>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Store a decoded image and return its session id.
    pub async fn insert_image(&self, image: Raster) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions
            .write()
            .await
            .insert(id, ImageSession::new(image));
        id
    }

    /// Look up a stored image, refreshing its session.
    pub async fn image(&self, id: &Uuid) -> Option<Arc<Raster>> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(id)?;
        session.touch();
        Some(Arc::clone(&session.image))
    }

    /// Drop expired sessions. Returns how many were removed.
    pub async fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let ttl = self.config.session_ttl;
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(now, ttl));
        before - sessions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_ttl(ttl: Duration) -> AppState {
        AppState::new(ServerConfig {
            session_ttl: ttl,
            ..ServerConfig::default()
        })
    }

    #[tokio::test]
    async fn test_insert_and_fetch() {
        let state = state_with_ttl(Duration::from_secs(60));
        let id = state.insert_image(Raster::white(3, 2)).await;
        let image = state.image(&id).await.unwrap();
        assert_eq!(image.dimensions(), (3, 2));
        assert!(state.image(&Uuid::new_v4()).await.is_none());
    }

    #[tokio::test]
    async fn test_sweep_drops_expired() {
        let state = state_with_ttl(Duration::ZERO);
        state.insert_image(Raster::white(1, 1)).await;
        state.insert_image(Raster::white(1, 1)).await;
        assert_eq!(state.sweep_expired().await, 2);
        assert!(state.sessions.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_sweep_keeps_fresh() {
        let state = state_with_ttl(Duration::from_secs(3600));
        let id = state.insert_image(Raster::white(1, 1)).await;
        assert_eq!(state.sweep_expired().await, 0);
        assert!(state.image(&id).await.is_some());
    }

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.max_upload_bytes, 50 * 1024 * 1024);
        assert_eq!(config.session_ttl, Duration::from_secs(1800));
    }
}
