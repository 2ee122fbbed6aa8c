//! Cart badge events
//!
//! The navigation badge needs a live count of cart lines. Instead of having
//! every client re-read the persisted cart on a timer, each cart mutation
//! publishes the new count here and interested clients subscribe (exposed
//! over SSE by the cart API). Missed messages are fine: only the latest
//! count matters, and the subscriber can always read the cart once on
//! connect.

use serde::Serialize;
use tokio::sync::broadcast;

/// Badge update for one cart owner
#[derive(Debug, Clone, Serialize)]
pub struct CartBadge {
    /// Customer email the cart belongs to
    pub owner: String,
    /// Number of cart lines (not summed quantities)
    pub count: usize,
}

#[derive(Debug, Clone)]
pub struct CartEvents {
    tx: broadcast::Sender<CartBadge>,
}

impl CartEvents {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    /// Publish the new line count for an owner. Nobody listening is not an
    /// error.
    pub fn publish(&self, owner: &str, count: usize) {
        let _ = self.tx.send(CartBadge {
            owner: owner.to_string(),
            count,
        });
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CartBadge> {
        self.tx.subscribe()
    }
}

impl Default for CartEvents {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn subscribers_see_published_counts() {
        let events = CartEvents::new();
        let mut rx = events.subscribe();

        events.publish("client@example.tn", 3);
        let badge = rx.recv().await.unwrap();
        assert_eq!(badge.owner, "client@example.tn");
        assert_eq!(badge.count, 3);
    }

    #[tokio::test]
    async fn publishing_without_subscribers_is_fine() {
        let events = CartEvents::new();
        events.publish("nobody@example.tn", 1);

        // A subscriber joining afterwards only sees later updates
        let mut rx = events.subscribe();
        events.publish("nobody@example.tn", 2);
        assert_eq!(rx.recv().await.unwrap().count, 2);
    }
}
