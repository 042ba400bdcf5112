pub mod core;
pub mod scheduler;
pub mod sim;

pub use crate::core::{MlqCore, PriorityClass, ProcessQueue, QueueLevel, TraceEvent};
pub use scheduler::{Discipline, RrScheduler};
pub use sim::{ProcessSpec, Sim, SimReport, Workload};
