//! One-shot position lookup seam
//!
//! The platform's location service sits behind [`PositionSource`]: a single
//! request per session, no polling. A lookup that never resolves is guarded
//! by a timeout and collapses to `SyncError::LocationUnavailable`, which the
//! caller treats as "sorting stays pending", not as a hard error.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;
use waypoint_api::{Coordinate, Result, SyncError};

pub const DEFAULT_POSITION_TIMEOUT: Duration = Duration::from_secs(10);

#[async_trait]
pub trait PositionSource: Send + Sync {
    /// Resolve the device's current position once.
    ///
    /// May pend forever when permission is withheld; callers must bound it
    /// with [`resolve_position`].
    async fn current_position(&self) -> Result<Coordinate>;
}

/// A source that always reports the same position. Serves tests and demos.
pub struct FixedPosition(pub Coordinate);

#[async_trait]
impl PositionSource for FixedPosition {
    async fn current_position(&self) -> Result<Coordinate> {
        Ok(self.0)
    }
}

/// Run the one-shot lookup under a timeout.
///
/// Denial, failure and expiry all collapse to `LocationUnavailable`.
pub async fn resolve_position(
    source: &dyn PositionSource,
    timeout: Duration,
) -> Result<Coordinate> {
    match tokio::time::timeout(timeout, source.current_position()).await {
        Ok(Ok(coordinate)) => Ok(coordinate),
        Ok(Err(err)) => {
            warn!(error = %err, "position lookup failed");
            Err(SyncError::LocationUnavailable)
        }
        Err(_) => {
            warn!(timeout_secs = timeout.as_secs(), "position lookup timed out");
            Err(SyncError::LocationUnavailable)
        }
    }
}
