//! Player backend trait.

use crate::error::Result;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Trait for backends that drive a [`Player`](crate::Player).
///
/// A backend owns the actual media pipeline, or a simulation of one. It
/// should:
///
/// - Claim the player's command stream and act on widget requests
/// - Call the player's `set_*` mutators as playback progresses
/// - Support graceful shutdown via cancellation token
///
/// # Example
///
/// ```ignore
/// // In your app:
/// let backend = SimPlayer::new(&config, player, Some(cancel_token));
/// backend.run().await?;
/// ```
#[async_trait]
pub trait PlayerBackend: Send + Sync {
    /// Returns a human-readable name for this backend.
    fn name(&self) -> &'static str;

    /// Drive the player, running until cancelled or an unrecoverable error
    /// occurs.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails to start or encounters an
    /// unrecoverable error during operation.
    async fn run(&self) -> Result<()>;

    /// Get the cancellation token for this backend.
    ///
    /// Used to signal graceful shutdown.
    fn cancel_token(&self) -> CancellationToken;

    /// Signal the backend to stop.
    fn stop(&self) {
        self.cancel_token().cancel();
    }
}
