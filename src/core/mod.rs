pub mod driver;
pub mod event;
pub mod observer;
pub mod queue;
pub mod state;

pub use driver::MlqCore;
pub use event::{Trace, TraceEvent};
pub use observer::Observer;
pub use queue::{ProcessQueue, QueueError};
pub use state::{PriorityClass, Process, ProcessId, QueueLevel, Ticks};
