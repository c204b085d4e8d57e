use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A mathematical precondition does not hold for the given input.
    DomainError {
        operation: &'static str,
        reason: &'static str,
        value: f64,
    },
    /// A simulation parameter is out of its admissible range.
    InvalidParameter { name: &'static str, value: f64 },
}

impl SimulationError {
    pub(crate) fn domain(operation: &'static str, reason: &'static str, value: f64) -> Self {
        SimulationError::DomainError {
            operation,
            reason,
            value,
        }
    }

    pub fn is_domain_error(&self) -> bool {
        matches!(self, SimulationError::DomainError { .. })
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, SimulationError::InvalidParameter { .. })
    }
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::DomainError {
                operation,
                reason,
                value,
            } => write!(f, "Domain error in {}: {} (got {})", operation, reason, value),
            SimulationError::InvalidParameter { name, value } => {
                write!(f, "Invalid parameter {}: must be finite and > 0 (got {})", name, value)
            }
        }
    }
}

impl Error for SimulationError {}
