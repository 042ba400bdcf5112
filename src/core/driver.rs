use super::{
    event::TraceEvent,
    observer::Observer,
    queue::{ProcessQueue, QueueError},
    state::{Process, QueueLevel, Ticks},
};
use crate::scheduler::{Fcfs, RoundRobin, dispatch_head};
use log::trace;

/// Two-level scheduler state: Queue 1 (round-robin) always preempts
/// Queue 2 (FCFS) whenever its head has arrived.
///
/// `now` is the tick counter and advances by exactly one per [`tick`](Self::tick),
/// however much work ran in it. `time_elapsed` is the sum of execution
/// durations.
#[derive(Debug)]
pub struct MlqCore {
    queue1: ProcessQueue,
    queue2: ProcessQueue,
    rr: RoundRobin,
    fcfs: Fcfs,
    now: Ticks,
    time_elapsed: Ticks,
    observer: Observer,
}

impl MlqCore {
    pub fn new(quantum: Ticks) -> Self {
        Self::with_queues(quantum, ProcessQueue::unbounded(), ProcessQueue::unbounded())
    }

    // Both queues bounded to `capacity`
    pub fn bounded(quantum: Ticks, capacity: usize) -> Self {
        Self::with_queues(
            quantum,
            ProcessQueue::with_capacity(capacity),
            ProcessQueue::with_capacity(capacity),
        )
    }

    fn with_queues(quantum: Ticks, queue1: ProcessQueue, queue2: ProcessQueue) -> Self {
        Self {
            queue1,
            queue2,
            rr: RoundRobin::new(quantum),
            fcfs: Fcfs,
            now: 0,
            time_elapsed: 0,
            observer: Observer::new(),
        }
    }

    /// Route `process` to the queue of its priority class.
    pub fn admit(&mut self, process: Process) -> Result<(), QueueError> {
        let queue = match process.priority.queue() {
            QueueLevel::Q1 => &mut self.queue1,
            QueueLevel::Q2 => &mut self.queue2,
        };

        let id = process.id;
        let burst_time = process.burst_time;
        queue.enqueue(process)?;
        self.observer.admitted(id, burst_time);

        Ok(())
    }

    pub fn is_drained(&self) -> bool {
        self.queue1.is_empty() && self.queue2.is_empty()
    }

    /// One outer iteration: drain every runnable Queue 1 slice, then give
    /// Queue 2 at most one run-to-completion dispatch if Queue 1 has nothing
    /// runnable, then advance the clock.
    pub fn tick(&mut self) -> Vec<TraceEvent> {
        let mut events = Vec::new();

        while self.queue1.head_arrived(self.now) {
            self.time_elapsed +=
                dispatch_head(&self.rr, &mut self.queue1, QueueLevel::Q1, &mut events);
        }

        // Queue 1 is now empty or its head arrives later
        if self.queue2.head_arrived(self.now) {
            self.time_elapsed +=
                dispatch_head(&self.fcfs, &mut self.queue2, QueueLevel::Q2, &mut events);
        }

        if events.is_empty() {
            trace!("t={} nothing runnable", self.now);
        }

        self.observer
            .observe(self.now, &self.queue1, &self.queue2, &events);
        self.now += 1;

        events
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn time_elapsed(&self) -> Ticks {
        self.time_elapsed
    }

    pub fn quantum(&self) -> Ticks {
        self.rr.quantum()
    }

    pub fn queue(&self, level: QueueLevel) -> &ProcessQueue {
        match level {
            QueueLevel::Q1 => &self.queue1,
            QueueLevel::Q2 => &self.queue2,
        }
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }
}
