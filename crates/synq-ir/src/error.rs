//! Error types for the IR crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur in IR operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Operation rejected at construction time.
    #[error("Invalid operation{}: {reason}", format_gate_context(.gate))]
    InvalidOperation {
        /// Gate name, when one was supplied.
        gate: Option<String>,
        /// Why the operation was rejected.
        reason: String,
    },

    /// No adjoint rule is registered for the gate and the table is strict.
    #[error("No adjoint known for gate '{gate}'")]
    UnknownGateAdjoint {
        /// The gate that could not be inverted.
        gate: String,
    },

    /// A renderer failed to produce output.
    #[error("Render error: {0}")]
    Render(String),

    /// Engine configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl IrError {
    pub(crate) fn invalid_operation(gate: &str, reason: impl Into<String>) -> Self {
        IrError::InvalidOperation {
            gate: (!gate.is_empty()).then(|| gate.to_string()),
            reason: reason.into(),
        }
    }
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate: &Option<String>) -> String {
    match gate {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
