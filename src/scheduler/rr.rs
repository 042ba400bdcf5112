use super::{Discipline, dispatch_head};
use crate::core::{Process, ProcessQueue, QueueLevel, Ticks, Trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    pub fn new(quantum: Ticks) -> Self {
        assert!(quantum > 0, "Round-robin time quantum must be positive");
        Self { quantum }
    }

    pub fn quantum(&self) -> Ticks {
        self.quantum
    }
}

impl Discipline for RoundRobin {
    fn slice(&self, process: &Process) -> Ticks {
        process.remaining_time.min(self.quantum)
    }
}

/// Drains a single queue with round-robin time-slicing.
///
/// Arrival times are not consulted: everything in the queue is treated as
/// runnable. Events are attributed to Queue 1.
#[derive(Debug)]
pub struct RrScheduler {
    policy: RoundRobin,
    queue: ProcessQueue,
}

impl RrScheduler {
    pub fn new(quantum: Ticks, queue: ProcessQueue) -> Self {
        Self {
            policy: RoundRobin::new(quantum),
            queue,
        }
    }

    pub fn run(mut self) -> Trace {
        let mut trace = Trace::default();
        while !self.queue.is_empty() {
            trace.total_time_elapsed +=
                dispatch_head(&self.policy, &mut self.queue, QueueLevel::Q1, &mut trace.events);
        }
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PriorityClass, TraceEvent};

    fn queue_of(bursts: &[Ticks]) -> ProcessQueue {
        let mut queue = ProcessQueue::unbounded();
        for (i, &burst) in bursts.iter().enumerate() {
            queue
                .enqueue(Process::new(i as u32 + 1, PriorityClass::High, burst, 0))
                .unwrap();
        }
        queue
    }

    fn exec(process: u32, duration: Ticks) -> TraceEvent {
        TraceEvent::Executing {
            process,
            queue: QueueLevel::Q1,
            duration,
        }
    }

    #[test]
    fn slice_is_capped_by_remaining_time() {
        let rr = RoundRobin::new(4);
        let mut p = Process::new(1, PriorityClass::High, 10, 0);
        assert_eq!(rr.slice(&p), 4);
        p.execute(8);
        assert_eq!(rr.slice(&p), 2);
    }

    #[test]
    #[should_panic]
    fn zero_quantum_fails_fast() {
        RoundRobin::new(0);
    }

    #[test]
    fn single_process_is_sliced_by_quantum() {
        let trace = RrScheduler::new(2, queue_of(&[5])).run();
        assert_eq!(
            trace.events,
            vec![
                exec(1, 2),
                exec(1, 2),
                exec(1, 1),
                TraceEvent::Completed { process: 1 }
            ]
        );
        assert_eq!(trace.total_time_elapsed, 5);
    }

    #[test]
    fn preempted_process_goes_behind_waiting_ones() {
        let trace = RrScheduler::new(2, queue_of(&[5, 3, 1])).run();
        assert_eq!(
            trace.events,
            vec![
                exec(1, 2),
                exec(2, 2),
                exec(3, 1),
                TraceEvent::Completed { process: 3 },
                exec(1, 2),
                exec(2, 1),
                TraceEvent::Completed { process: 2 },
                exec(1, 1),
                TraceEvent::Completed { process: 1 },
            ]
        );
        assert_eq!(trace.completion_order(), vec![3, 2, 1]);
        assert_eq!(trace.total_time_elapsed, 9);
    }

    #[test]
    fn arrival_time_is_ignored() {
        let mut queue = ProcessQueue::unbounded();
        queue
            .enqueue(Process::new(1, PriorityClass::High, 1, 50))
            .unwrap();
        let trace = RrScheduler::new(3, queue).run();
        assert_eq!(trace.completion_order(), vec![1]);
    }

    #[test]
    fn empty_queue_yields_empty_trace() {
        let trace = RrScheduler::new(3, ProcessQueue::unbounded()).run();
        assert_eq!(trace, Trace::default());
    }

    #[test]
    fn bounded_queue_never_overflows_on_reenqueue() {
        let mut queue = ProcessQueue::with_capacity(2);
        queue
            .enqueue(Process::new(1, PriorityClass::High, 7, 0))
            .unwrap();
        queue
            .enqueue(Process::new(2, PriorityClass::High, 7, 0))
            .unwrap();
        let trace = RrScheduler::new(1, queue).run();
        assert_eq!(trace.executed_time(1), 7);
        assert_eq!(trace.executed_time(2), 7);
    }
}
