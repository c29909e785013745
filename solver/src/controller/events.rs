use crate::result::SolveResult;

/// Events broadcast from the controller actor to all subscribers.
///
/// Mirrors what lands in the store: the solving flag on every transition,
/// the result payload on every processed engine line.
#[derive(Debug, Clone)]
pub enum SolverEvent {
    SolvingChanged(bool),
    Result(SolveResult),
}
