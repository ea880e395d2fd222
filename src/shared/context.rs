/// Cancellation and deadline carried by every repository and handler call.
///
/// Clones share the same token, so cancelling any clone cancels the
/// operation everywhere, including inside blocking database work.
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone)]
pub struct OperationContext {
    cancellation_token: CancellationToken,
    deadline: Option<Instant>,
}

impl Default for OperationContext {
    fn default() -> Self {
        Self::background()
    }
}

impl OperationContext {
    /// Context that is never cancelled unless `cancel` is called.
    pub fn background() -> Self {
        Self {
            cancellation_token: CancellationToken::new(),
            deadline: None,
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            cancellation_token: CancellationToken::new(),
            deadline: Some(Instant::now() + timeout),
        }
    }

    pub fn from_token(cancellation_token: CancellationToken) -> Self {
        Self {
            cancellation_token,
            deadline: None,
        }
    }

    /// Derived context: cancelled with its parent, and bounded by the
    /// earlier of the parent's deadline and `timeout`.
    pub fn child_with_timeout(&self, timeout: Duration) -> Self {
        let candidate = Instant::now() + timeout;
        let deadline = match self.deadline {
            Some(parent) if parent < candidate => parent,
            _ => candidate,
        };
        Self {
            cancellation_token: self.cancellation_token.child_token(),
            deadline: Some(deadline),
        }
    }

    pub fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancellation_token.is_cancelled()
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|d| d.saturating_duration_since(Instant::now()))
    }

    pub fn token(&self) -> &CancellationToken {
        &self.cancellation_token
    }

    /// Fails with `AppError::Cancelled` once the context is cancelled or past
    /// its deadline. Called between stages of long operations.
    pub fn check(&self) -> AppResult<()> {
        if self.is_cancelled() {
            return Err(AppError::Cancelled("context cancelled".to_string()));
        }
        if self.is_expired() {
            return Err(AppError::Cancelled("deadline exceeded".to_string()));
        }
        Ok(())
    }
}
