use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures_util::FutureExt;
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, error, warn};

use crate::args::PositiveUsize;
use crate::probe::Probe;
use crate::target::Target;

use super::BatchSummary;

type SharedQueue = Arc<Mutex<mpsc::Receiver<Target>>>;

/// Probes every target exactly once using `pool_size` concurrent workers.
///
/// Targets are queued in order; the order they are probed in is not defined.
/// Returns only after every worker has seen the closed, drained queue and
/// exited. A probe that fails or panics affects only its own target.
///
/// At most one worker per target is spawned, so an oversized pool costs
/// nothing beyond the batch length.
pub async fn run_batch<P>(
    targets: Vec<Target>,
    pool_size: PositiveUsize,
    probe: Arc<P>,
) -> BatchSummary
where
    P: Probe + ?Sized + 'static,
{
    let started = Instant::now();
    let count = targets.len();
    let workers = pool_size.get().min(count).max(1);

    let (queue_tx, queue_rx) = mpsc::channel::<Target>(workers);
    let queue: SharedQueue = Arc::new(Mutex::new(queue_rx));

    let mut worker_handles = Vec::new();
    for worker_id in 0..workers {
        let queue = Arc::clone(&queue);
        let probe = Arc::clone(&probe);
        worker_handles.push(tokio::spawn(worker_loop(worker_id, queue, probe)));
    }
    drop(queue);

    for target in targets {
        if queue_tx.send(target).await.is_err() {
            error!("All workers exited before the target queue was drained.");
            break;
        }
    }
    drop(queue_tx);

    let mut probed: usize = 0;
    for handle in worker_handles {
        match handle.await {
            Ok(handled) => probed = probed.saturating_add(handled),
            Err(err) => error!("Worker task failed: {}", err),
        }
    }
    if probed != count {
        warn!("Probed {} of {} queued targets.", probed, count);
    }

    BatchSummary {
        count,
        pool_size,
        elapsed: started.elapsed(),
    }
}

/// Takes targets until the queue is closed and empty; returns how many it took.
async fn worker_loop<P>(worker_id: usize, queue: SharedQueue, probe: Arc<P>) -> usize
where
    P: Probe + ?Sized,
{
    let mut handled: usize = 0;
    loop {
        let next = queue.lock().await.recv().await;
        let Some(target) = next else {
            break;
        };
        handled = handled.saturating_add(1);

        match AssertUnwindSafe(probe.probe(&target)).catch_unwind().await {
            Ok(outcome) => debug!("Worker {} probed {}: {}", worker_id, target, outcome.kind()),
            Err(panic) => warn!(
                "Probe for {} panicked on worker {}: {}",
                target,
                worker_id,
                panic_message(panic.as_ref())
            ),
        }
    }
    debug!("Worker {} exiting after {} targets", worker_id, handled);
    handled
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        return message;
    }
    if let Some(message) = panic.downcast_ref::<String>() {
        return message;
    }
    "non-string panic payload"
}
