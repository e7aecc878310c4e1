use std::fmt::Display;

use error_stack::Context;
use kernel::prelude::entity::OrderId;

/// Failure surfaced by the order services.
///
/// Storage failures keep the original [`kernel::KernelError`] report underneath.
#[derive(Debug)]
pub enum ServiceError {
    Read,
    Write,
    NotFound(OrderId),
    InvalidPeriod,
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::Read => write!(
                f,
                "Failed to get an order list from the repository by the criteria"
            ),
            ServiceError::Write => write!(f, "Failed to write an order"),
            ServiceError::NotFound(id) => {
                write!(f, "There is no rent order having id = {}", id.as_ref())
            }
            ServiceError::InvalidPeriod => write!(f, "The rent period ends before it starts"),
        }
    }
}

impl Context for ServiceError {}
