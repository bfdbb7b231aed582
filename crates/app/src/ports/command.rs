//! Command port — an executable, parameter-free operation.

use std::future::Future;

use domo_domain::error::HomeError;

/// An operation captured with everything it needs to run.
///
/// Commands carry their own target and parameters at construction time;
/// `execute` takes nothing and yields the operation's outcome.
pub trait Command {
    /// The outcome produced by a successful execution.
    type Outcome;

    /// Run the operation.
    fn execute(&self) -> impl Future<Output = Result<Self::Outcome, HomeError>> + Send;
}
