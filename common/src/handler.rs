//! [`Handler`] abstractions.

/// Executable handler.
///
/// Execution is synchronous: every handler in this workspace is a pure
/// computation or an in-memory lookup.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Errors if the execution fails, as defined by the implementor.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
