use crate::event::AppEvent;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Posts a single `Reveal` once `delay` has passed. Aborting the handle
/// before then cancels it.
pub fn spawn_reveal(delay: Duration, tx: mpsc::UnboundedSender<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(AppEvent::Reveal);
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test(start_paused = true)]
    async fn fires_once_after_configured_delay() {
        let config = Config {
            reveal_delay_ms: 250,
            ..Config::default()
        };
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_reveal(Duration::from_millis(config.reveal_delay_ms), tx);

        tokio::time::sleep(Duration::from_millis(249)).await;
        assert!(rx.try_recv().is_err());

        tokio::time::sleep(Duration::from_millis(2)).await;
        handle.await.unwrap();
        assert!(matches!(rx.try_recv(), Ok(AppEvent::Reveal)));
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn abort_before_deadline_sends_nothing() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = spawn_reveal(Duration::from_millis(100), tx);

        handle.abort();
        let _ = handle.await;
        assert!(rx.recv().await.is_none());
    }
}
