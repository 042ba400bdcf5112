pub mod fcfs;
pub mod rr;

use crate::core::{Process, ProcessQueue, QueueLevel, Ticks, TraceEvent};
use log::debug;

pub use fcfs::Fcfs;
pub use rr::{RoundRobin, RrScheduler};

/// Per-queue service policy.
pub trait Discipline {
    /// CPU time granted to `process` when it is dispatched from the head of
    /// its queue. Never more than its remaining time.
    fn slice(&self, process: &Process) -> Ticks;
}

/// Dequeue the head of `queue`, run it for the slice `discipline` grants and
/// put it back at the tail if it still owes time. Returns the ticks executed.
///
/// # Panics
/// If `queue` is empty.
pub fn dispatch_head<D: Discipline + ?Sized>(
    discipline: &D,
    queue: &mut ProcessQueue,
    level: QueueLevel,
    events: &mut Vec<TraceEvent>,
) -> Ticks {
    let mut process = queue.dequeue();
    let run = discipline.slice(&process);

    debug!(
        "P{} runs {run} of {} remaining ticks from {level}",
        process.id, process.remaining_time
    );
    events.push(TraceEvent::Executing {
        process: process.id,
        queue: level,
        duration: run,
    });
    process.execute(run);

    if process.is_completed() {
        debug!("P{} completed", process.id);
        events.push(TraceEvent::Completed {
            process: process.id,
        });
    } else {
        queue
            .enqueue(process)
            .expect("Re-enqueue must fit in the slot its own dequeue freed");
    }

    run
}
