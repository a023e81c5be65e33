//! Clock capability for deferred and repeating work
//!
//! Provides `after()` and `every()` scheduling behind a trait so the
//! enhancer never reads ambient time or spawns timers itself. Hosts hand
//! in [`TokioClock`] in production; tests drive [`ManualClock`], which
//! only moves when told to and fires due callbacks deterministically.

use chrono::{DateTime, Local, TimeDelta};
use parking_lot::Mutex;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

/// One-shot callback, invoked with the wall time at which it fired
pub type DeferredCallback = Box<dyn FnOnce(DateTime<Local>) + Send + 'static>;

/// Repeating callback, invoked with the wall time of each firing
pub type RepeatingCallback = Box<dyn FnMut(DateTime<Local>) + Send + 'static>;

/// Scheduling and current-time capability handed to the enhancer
///
/// Callbacks receive their fire time as an argument, so scheduled work
/// needs no reference back to the clock that scheduled it.
pub trait Clock: Send + Sync {
    /// The current wall-clock time
    fn now_local(&self) -> DateTime<Local>;

    /// Run `callback` once after `delay`
    fn after(&self, delay: Duration, callback: DeferredCallback);

    /// Run `callback` forever, every `interval`, first firing one
    /// interval from now
    fn every(&self, interval: Duration, callback: RepeatingCallback);
}

/// Production clock backed by the Tokio runtime
///
/// `after` and `every` spawn timer tasks, so this clock must be used
/// from within a Tokio runtime. Spawned tasks run until the runtime
/// shuts down; there is no cancellation handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct TokioClock;

impl TokioClock {
    pub fn new() -> Self {
        TokioClock
    }
}

impl Clock for TokioClock {
    fn now_local(&self) -> DateTime<Local> {
        Local::now()
    }

    fn after(&self, delay: Duration, callback: DeferredCallback) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(Local::now());
        });
    }

    fn every(&self, interval: Duration, mut callback: RepeatingCallback) {
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                callback(Local::now());
            }
        });
    }
}

enum TimerJob {
    Once(DeferredCallback),
    Repeating {
        interval_ms: u64,
        callback: RepeatingCallback,
    },
}

/// A scheduled task on the manual clock's queue
struct ScheduledTask {
    /// Virtual due time, milliseconds from clock start
    due_at_ms: u64,
    /// Scheduling sequence number, unique per task
    seq: u64,
    job: TimerJob,
}

impl PartialEq for ScheduledTask {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for ScheduledTask {}

impl PartialOrd for ScheduledTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ScheduledTask {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior (earliest first);
        // seq breaks due-time ties in scheduling order
        other
            .due_at_ms
            .cmp(&self.due_at_ms)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

struct ManualState {
    now_ms: u64,
    next_seq: u64,
    tasks: BinaryHeap<ScheduledTask>,
}

/// A pending entry on a [`ManualClock`] queue
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingTimer {
    /// Time left until the timer fires
    pub due_in: Duration,
    /// Whether the timer re-queues itself after firing
    pub repeating: bool,
}

/// Deterministic clock for tests
///
/// Virtual time starts at zero and only moves via [`advance`]. Timers
/// have millisecond resolution. Wall times reported to callbacks and
/// from [`now_local`] are the fixed start time plus the virtual elapsed
/// time, so simulated schedules produce reproducible timestamps.
///
/// Repeating timers re-queue at `due + interval` rather than relative
/// to when the callback ran, so long advances never drift the schedule.
///
/// [`advance`]: ManualClock::advance
/// [`now_local`]: Clock::now_local
pub struct ManualClock {
    started_at: DateTime<Local>,
    state: Mutex<ManualState>,
}

impl ManualClock {
    /// Manual clock whose wall time starts at the current moment
    pub fn new() -> Self {
        Self::starting_at(Local::now())
    }

    /// Manual clock whose wall time starts at `started_at`
    pub fn starting_at(started_at: DateTime<Local>) -> Self {
        ManualClock {
            started_at,
            state: Mutex::new(ManualState {
                now_ms: 0,
                next_seq: 0,
                tasks: BinaryHeap::new(),
            }),
        }
    }

    fn wall_time_at(&self, at_ms: u64) -> DateTime<Local> {
        self.started_at + TimeDelta::milliseconds(at_ms as i64)
    }

    fn push_task(&self, delay: Duration, job: TimerJob) {
        let delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        let mut state = self.state.lock();
        let seq = state.next_seq;
        state.next_seq += 1;
        let due_at_ms = state.now_ms.saturating_add(delay_ms);
        state.tasks.push(ScheduledTask {
            due_at_ms,
            seq,
            job,
        });
    }

    /// Move virtual time forward by `delta`, firing every timer that
    /// comes due along the way, in due-time order
    ///
    /// Callbacks run with the queue unlocked, so they may schedule new
    /// timers; a new timer due inside the remaining window fires during
    /// the same advance. `advance(Duration::ZERO)` fires timers that are
    /// due right now.
    pub fn advance(&self, delta: Duration) {
        let delta_ms = u64::try_from(delta.as_millis()).unwrap_or(u64::MAX);
        let target_ms = {
            let state = self.state.lock();
            state.now_ms.saturating_add(delta_ms)
        };

        loop {
            let mut state = self.state.lock();
            let due_next = state.tasks.peek().map(|task| task.due_at_ms);
            match due_next {
                Some(due_at_ms) if due_at_ms <= target_ms => {
                    let Some(task) = state.tasks.pop() else { break };
                    state.now_ms = state.now_ms.max(task.due_at_ms);
                    let fired_at = self.wall_time_at(task.due_at_ms);
                    drop(state);

                    match task.job {
                        TimerJob::Once(callback) => callback(fired_at),
                        TimerJob::Repeating {
                            interval_ms,
                            mut callback,
                        } => {
                            callback(fired_at);
                            // Re-queue keeps the original seq so timers
                            // sharing a due time keep their round order
                            let mut state = self.state.lock();
                            state.tasks.push(ScheduledTask {
                                due_at_ms: task.due_at_ms.saturating_add(interval_ms),
                                seq: task.seq,
                                job: TimerJob::Repeating {
                                    interval_ms,
                                    callback,
                                },
                            });
                        }
                    }
                }
                _ => {
                    state.now_ms = target_ms;
                    break;
                }
            }
        }
    }

    /// Virtual time elapsed since the clock started
    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.state.lock().now_ms)
    }

    /// Snapshot of the pending queue, soonest first
    pub fn pending_timers(&self) -> Vec<PendingTimer> {
        let state = self.state.lock();
        let mut entries: Vec<(u64, u64, bool)> = state
            .tasks
            .iter()
            .map(|task| {
                (
                    task.due_at_ms,
                    task.seq,
                    matches!(task.job, TimerJob::Repeating { .. }),
                )
            })
            .collect();
        entries.sort();

        entries
            .into_iter()
            .map(|(due_at_ms, _, repeating)| PendingTimer {
                due_in: Duration::from_millis(due_at_ms.saturating_sub(state.now_ms)),
                repeating,
            })
            .collect()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now_local(&self) -> DateTime<Local> {
        self.wall_time_at(self.state.lock().now_ms)
    }

    fn after(&self, delay: Duration, callback: DeferredCallback) {
        self.push_task(delay, TimerJob::Once(callback));
    }

    fn every(&self, interval: Duration, callback: RepeatingCallback) {
        // A zero interval would never make progress when advancing
        let interval_ms = u64::try_from(interval.as_millis())
            .unwrap_or(u64::MAX)
            .max(1);
        self.push_task(
            interval,
            TimerJob::Repeating {
                interval_ms,
                callback,
            },
        );
    }
}
