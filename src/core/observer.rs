use super::{
    event::TraceEvent,
    queue::ProcessQueue,
    state::{ProcessId, QueueLevel, Ticks},
};
use rustc_hash::{FxHashMap, FxHashSet};

/// Checks the scheduler's invariants after every tick and keeps per-process
/// execution totals.
#[derive(Debug, Default)]
pub struct Observer {
    step: u64,
    bursts: FxHashMap<ProcessId, Ticks>,
    executed: FxHashMap<ProcessId, Ticks>,
}

impl Observer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn admitted(&mut self, process: ProcessId, burst_time: Ticks) {
        let previous = self.bursts.insert(process, burst_time);
        debug_assert!(previous.is_none(), "P{process} admitted twice");
    }

    pub fn observe(
        &mut self,
        now: Ticks,
        queue1: &ProcessQueue,
        queue2: &ProcessQueue,
        events: &[TraceEvent],
    ) {
        self.step += 1;

        let mut q2_dispatched = false;
        for event in events {
            match *event {
                TraceEvent::Executing {
                    process,
                    queue,
                    duration,
                } => {
                    debug_assert!(duration > 0, "P{process} executed for zero ticks");
                    debug_assert!(
                        !(q2_dispatched && queue == QueueLevel::Q1),
                        "Queue 1 ran P{process} after Queue 2 was served at t={now}"
                    );
                    debug_assert!(
                        !(q2_dispatched && queue == QueueLevel::Q2),
                        "Queue 2 dispatched twice at t={now}"
                    );
                    q2_dispatched |= queue == QueueLevel::Q2;

                    *self.executed.entry(process).or_default() += duration;
                }
                TraceEvent::Completed { process } => {
                    debug_assert_eq!(
                        self.executed.get(&process),
                        self.bursts.get(&process),
                        "P{process} completed without receiving exactly its burst time"
                    );
                }
            }
        }

        if q2_dispatched {
            debug_assert!(
                !queue1.head_arrived(now),
                "Queue 2 served at t={now} while Queue 1 had runnable work"
            );
        }

        let mut seen = FxHashSet::default();
        for (level, queue) in [(QueueLevel::Q1, queue1), (QueueLevel::Q2, queue2)] {
            for process in queue.iter() {
                debug_assert!(
                    !process.is_completed(),
                    "Completed P{} still present in {level}",
                    process.id
                );
                debug_assert_eq!(
                    process.priority.queue(),
                    level,
                    "P{} sits in the wrong queue",
                    process.id
                );
                debug_assert!(
                    process.remaining_time <= process.burst_time,
                    "P{} owes more than its burst",
                    process.id
                );
                let fresh = seen.insert(process.id);
                debug_assert!(fresh, "P{} queued twice", process.id);
            }
        }
    }

    pub fn steps(&self) -> u64 {
        self.step
    }

    pub fn executed(&self, process: ProcessId) -> Ticks {
        self.executed.get(&process).copied().unwrap_or(0)
    }
}
