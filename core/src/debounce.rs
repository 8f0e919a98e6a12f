// Trailing-edge debouncing of callbacks on a Tokio runtime.
//
// Every trigger call cancels the pending invocation (if any) and schedules a
// new one `wait` later, so a burst of calls collapses into a single call of
// the destination carrying the last argument.
use parking_lot::Mutex;
use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::settings::DebounceSettings;
use crate::error::{KompKitError, Result};

pub const DEFAULT_WAIT: Duration = Duration::from_millis(250);

/// Converts a millisecond count coming from configuration into a wait duration.
///
/// Negative values are rejected rather than clamped to zero.
pub fn wait_from_millis(wait_ms: i64) -> Result<Duration> {
    u64::try_from(wait_ms)
        .map(Duration::from_millis)
        .map_err(|_| KompKitError::InvalidArgument(format!("wait_ms must not be negative (got {})", wait_ms)))
}

// A scheduled, not yet fired, call of the destination.
pub(crate) struct PendingInvocation {
    generation: u64,
    task: JoinHandle<()>,
}

impl PendingInvocation {
    // Safe to call any number of times, also after the task has completed.
    pub(crate) fn cancel(&self) {
        self.task.abort();
    }
}

#[derive(Default)]
struct Slot {
    // Bumped on every cancellation; a delayed task only fires if its
    // generation is still current when it takes the lock.
    generation: u64,
    pending: Option<PendingInvocation>,
    disposed: bool,
}

impl Slot {
    fn cancel_pending(&mut self) -> Option<u64> {
        self.generation = self.generation.wrapping_add(1);
        self.pending.take().map(|pending| {
            pending.cancel();
            pending.generation
        })
    }
}

struct Shared<T> {
    wait: Duration,
    scheduler: Handle,
    destination: Box<dyn Fn(T) + Send + Sync>,
    slot: Mutex<Slot>,
}

impl<T> Drop for Shared<T> {
    fn drop(&mut self) {
        if let Some(generation) = self.slot.get_mut().cancel_pending() {
            tracing::debug!(generation, "Debouncer dropped, cancelled pending invocation");
        }
    }
}

/// Collapses rapid successive calls into one deferred call of a destination.
///
/// Clones share the same pending slot, so triggering any clone reschedules the
/// same invocation. Dropping the last clone cancels pending work.
///
/// ```no_run
/// use kompkit_core::Debouncer;
/// use std::time::Duration;
///
/// # async fn run() -> kompkit_core::Result<()> {
/// let search = Debouncer::on_current_runtime(Duration::from_millis(300), |query: String| {
///     println!("Searching: {}", query);
/// })?;
/// search.call("hello".to_string()); // runs after 300ms if no other call arrives
/// # Ok(())
/// # }
/// ```
pub struct Debouncer<T> {
    shared: Arc<Shared<T>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(wait: Duration, scheduler: Handle, destination: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            shared: Arc::new(Shared {
                wait,
                scheduler,
                destination: Box::new(destination),
                slot: Mutex::new(Slot::default()),
            }),
        }
    }

    /// Like [`Debouncer::new`] but takes the wait as a signed millisecond count,
    /// failing with [`KompKitError::InvalidArgument`] when it is negative.
    pub fn with_wait_ms<F>(wait_ms: i64, scheduler: Handle, destination: F) -> Result<Self>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let wait = wait_from_millis(wait_ms)?;
        Ok(Self::new(wait, scheduler, destination))
    }

    // Schedules on the runtime the caller is currently running in
    pub fn on_current_runtime<F>(wait: Duration, destination: F) -> Result<Self>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        let scheduler = Handle::try_current()?;
        Ok(Self::new(wait, scheduler, destination))
    }

    pub fn from_settings<F>(settings: &DebounceSettings, scheduler: Handle, destination: F) -> Result<Self>
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self::with_wait_ms(settings.wait_ms, scheduler, destination)
    }

    /// Trigger: cancels the pending invocation and schedules `destination(param)`
    /// to run once `wait` has elapsed without another call. Never blocks and
    /// never invokes the destination on the caller's stack, even for a zero wait.
    pub fn call(&self, param: T) {
        let mut slot = self.shared.slot.lock();
        if slot.disposed {
            tracing::warn!("Trigger on a disposed debouncer ignored");
            return;
        }
        if let Some(cancelled) = slot.cancel_pending() {
            tracing::debug!(generation = cancelled, "Cancelled pending invocation");
        }

        let generation = slot.generation;
        let wait = self.shared.wait;
        let shared = Arc::downgrade(&self.shared);
        let task = self.shared.scheduler.spawn(async move {
            tokio::time::sleep(wait).await;
            fire(&shared, generation, param);
        });
        slot.pending = Some(PendingInvocation { generation, task });
        tracing::debug!(generation, wait_ms = wait.as_millis() as u64, "Scheduled invocation");
    }

    // Returns whether anything was pending
    pub fn cancel(&self) -> bool {
        let cancelled = self.shared.slot.lock().cancel_pending();
        if let Some(generation) = cancelled {
            tracing::debug!(generation, "Cancelled pending invocation on request");
        }
        cancelled.is_some()
    }

    // Later triggers become no-ops
    pub fn dispose(&self) {
        let mut slot = self.shared.slot.lock();
        slot.disposed = true;
        if let Some(generation) = slot.cancel_pending() {
            tracing::debug!(generation, "Debouncer disposed, cancelled pending invocation");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.shared.slot.lock().pending.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.shared.slot.lock().disposed
    }

    pub fn wait(&self) -> Duration {
        self.shared.wait
    }
}

fn fire<T>(shared: &Weak<Shared<T>>, generation: u64, param: T) {
    // Debouncer already gone
    let Some(shared) = shared.upgrade() else {
        return;
    };
    {
        let mut slot = shared.slot.lock();
        if slot.disposed || slot.generation != generation {
            return;
        }
        slot.pending = None;
    }
    tracing::debug!(generation, "Invoking debounced destination");
    // Lock released: the destination may trigger this debouncer again.
    (shared.destination)(param);
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.shared.slot.lock();
        f.debug_struct("Debouncer")
            .field("wait", &self.shared.wait)
            .field("generation", &slot.generation)
            .field("pending", &slot.pending.is_some())
            .field("disposed", &slot.disposed)
            .finish()
    }
}

/// Wraps `destination` and returns its debounced trigger.
///
/// Dropping every copy of the returned closure cancels a call that has not
/// fired yet.
pub fn debounce<T, F>(wait: Duration, scheduler: Handle, destination: F) -> impl Fn(T) + Clone + Send + Sync + 'static
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    let debouncer = Debouncer::new(wait, scheduler, destination);
    move |param| debouncer.call(param)
}
