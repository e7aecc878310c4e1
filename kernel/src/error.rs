use std::fmt::Display;

use error_stack::Context;

/// Failure reported by a storage collaborator.
#[derive(Debug)]
pub enum KernelError {
    /// No connection or transaction could be obtained from the database.
    Connection,
    /// The repository failed to execute a read or a write.
    Repository,
    Timeout,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::Connection => write!(f, "Failed to open a database connection"),
            KernelError::Repository => write!(f, "Repository operation failed"),
            KernelError::Timeout => write!(f, "Process timed out"),
        }
    }
}

impl Context for KernelError {}
