use crate::core::{ProcessId, QueueLevel, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    Executing {
        process: ProcessId,
        queue: QueueLevel,
        duration: Ticks,
    },
    // Always directly follows the process's last Executing event
    Completed {
        process: ProcessId,
    },
}

impl TraceEvent {
    pub fn process(&self) -> ProcessId {
        match *self {
            Self::Executing { process, .. } | Self::Completed { process } => process,
        }
    }
}

/// Events in execution order plus the sum of all execution durations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pub events: Vec<TraceEvent>,
    pub total_time_elapsed: Ticks,
}

impl Trace {
    /// CPU time granted to `process` across the whole trace.
    pub fn executed_time(&self, process: ProcessId) -> Ticks {
        self.events
            .iter()
            .filter_map(|event| match *event {
                TraceEvent::Executing {
                    process: p,
                    duration,
                    ..
                } if p == process => Some(duration),
                _ => None,
            })
            .sum()
    }

    pub fn completion_order(&self) -> Vec<ProcessId> {
        self.events
            .iter()
            .filter_map(|event| match *event {
                TraceEvent::Completed { process } => Some(process),
                _ => None,
            })
            .collect()
    }
}
