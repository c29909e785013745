pub mod controller;
pub mod message;
pub mod options;
pub mod result;
pub mod session;
pub mod store;

pub use controller::{spawn, SolveSnapshot, SolverError, SolverEvent, SolverHandle};
pub use message::SolveMessage;
pub use options::SolverOptions;
pub use result::{Evaluation, SolveResult};
pub use session::SolveSession;
pub use store::{JsonFileStore, MemoryStore, SolverStore, StoreError};
