use std::future::Future;
use std::time::Duration;
use tokio::time;
use tracing::info;

/// Runs `cycle` every `period`, starting immediately, until `shutdown`
/// resolves. Returns the number of completed cycles.
///
/// `shutdown` is polled as one future for the whole run, so a signal that
/// arrives while `cycle` is executing still stops the loop before the next
/// tick.
pub async fn run_until<S, F>(period: Duration, shutdown: S, mut cycle: F) -> usize
where
    S: Future,
    F: FnMut(),
{
    tokio::pin!(shutdown);
    let mut interval = time::interval(period);
    let mut cycles = 0;

    loop {
        tokio::select! {
            biased;
            _ = &mut shutdown => {
                info!(cycles, "shutdown requested, stopping");
                break;
            }
            _ = interval.tick() => {
                cycle();
                cycles += 1;
            }
        }
    }

    cycles
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_shutdown_during_cycle_stops_loop() {
        let (tx, rx) = oneshot::channel::<()>();
        let mut tx = Some(tx);

        // The signal fires while the first cycle is still running.
        let cycles = run_until(Duration::from_millis(10), rx, || {
            if let Some(tx) = tx.take() {
                let _ = tx.send(());
            }
        })
        .await;

        assert_eq!(cycles, 1);
    }

    #[tokio::test]
    async fn test_runs_until_shutdown() {
        let mut seen = 0;
        let cycles = run_until(
            Duration::from_millis(5),
            time::sleep(Duration::from_millis(60)),
            || seen += 1,
        )
        .await;

        assert!(cycles >= 2);
        assert_eq!(cycles, seen);
    }

    #[tokio::test]
    async fn test_shutdown_already_pending() {
        let cycles = run_until(Duration::from_millis(5), std::future::ready(()), || {}).await;
        assert_eq!(cycles, 0);
    }
}
