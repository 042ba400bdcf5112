use serde::{Deserialize, Serialize};
use std::fmt;

// Assigned in input order starting at 1
pub type ProcessId = u32;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriorityClass {
    #[serde(alias = "HIGH")]
    High,
    #[serde(alias = "LOW")]
    Low,
}

impl PriorityClass {
    /// The queue a process of this class is admitted to. Classes never change,
    /// so neither does the queue.
    pub fn queue(self) -> QueueLevel {
        match self {
            Self::High => QueueLevel::Q1,
            Self::Low => QueueLevel::Q2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueLevel {
    // Round-robin, always served first
    Q1,
    // FCFS, served only when Q1 has nothing runnable
    Q2,
}

impl QueueLevel {
    pub fn number(self) -> u8 {
        match self {
            Self::Q1 => 1,
            Self::Q2 => 2,
        }
    }
}

impl fmt::Display for QueueLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Queue {}", self.number())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    pub priority: PriorityClass,
    pub burst_time: Ticks,
    pub remaining_time: Ticks,
    pub arrival_time: Ticks,
}

impl Process {
    pub fn new(
        id: ProcessId,
        priority: PriorityClass,
        burst_time: Ticks,
        arrival_time: Ticks,
    ) -> Self {
        assert!(id > 0, "Process ids start at 1");
        assert!(burst_time > 0, "P{id} must require some CPU time");

        Self {
            id,
            priority,
            burst_time,
            remaining_time: burst_time,
            arrival_time,
        }
    }

    pub fn has_arrived(&self, now: Ticks) -> bool {
        self.arrival_time <= now
    }

    pub fn is_completed(&self) -> bool {
        self.remaining_time == 0
    }

    // Charge `run` ticks of CPU time to this process
    pub fn execute(&mut self, run: Ticks) {
        debug_assert!(
            run <= self.remaining_time,
            "P{} charged {run} ticks with only {} remaining",
            self.id,
            self.remaining_time
        );
        self.remaining_time = self.remaining_time.saturating_sub(run);
    }
}
