//! Circuit operations: a gate applied to an ordered list of targets.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::adjoint::AdjointTable;
use crate::error::{IrError, IrResult};

/// A single gate application.
///
/// Operations are immutable once built. The gate name is case-sensitive and
/// the target order is meaningful (for `CNOT` the control comes first).
/// Duplicate targets are accepted; rejecting them is left to higher layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawOperation")]
pub struct Operation {
    gate: String,
    targets: Vec<u32>,
    parameter: Option<f64>,
}

/// Unchecked wire shape, validated on the way into [`Operation`].
#[derive(Deserialize)]
struct RawOperation {
    gate: String,
    targets: Vec<u32>,
    #[serde(default)]
    parameter: Option<f64>,
}

impl TryFrom<RawOperation> for Operation {
    type Error = IrError;

    fn try_from(raw: RawOperation) -> IrResult<Self> {
        Operation::new(raw.gate, raw.targets, raw.parameter)
    }
}

impl Operation {
    /// Create a new operation.
    ///
    /// Fails with [`IrError::InvalidOperation`] when the gate name or the
    /// target list is empty, or the parameter is NaN or infinite. The
    /// parameter is not checked against the gate.
    pub fn new(
        gate: impl Into<String>,
        targets: impl IntoIterator<Item = u32>,
        parameter: Option<f64>,
    ) -> IrResult<Self> {
        let gate = gate.into();
        if gate.is_empty() {
            return Err(IrError::invalid_operation(
                &gate,
                "gate name must not be empty",
            ));
        }

        let targets: Vec<u32> = targets.into_iter().collect();
        if targets.is_empty() {
            return Err(IrError::invalid_operation(
                &gate,
                "targets must not be empty",
            ));
        }

        if parameter.is_some_and(|v| !v.is_finite()) {
            return Err(IrError::invalid_operation(
                &gate,
                "parameter must be a finite number",
            ));
        }

        Ok(Self {
            gate,
            targets,
            parameter,
        })
    }

    /// Create an unparameterized operation.
    pub fn gate(gate: impl Into<String>, targets: impl IntoIterator<Item = u32>) -> IrResult<Self> {
        Self::new(gate, targets, None)
    }

    /// Create a parameterized operation, e.g. a rotation by `value` radians.
    pub fn parameterized(
        gate: impl Into<String>,
        targets: impl IntoIterator<Item = u32>,
        value: f64,
    ) -> IrResult<Self> {
        Self::new(gate, targets, Some(value))
    }

    /// Get the gate name.
    #[inline]
    pub fn gate_name(&self) -> &str {
        &self.gate
    }

    /// Get the targets in application order.
    #[inline]
    pub fn targets(&self) -> &[u32] {
        &self.targets
    }

    /// Get the numeric parameter, if any.
    #[inline]
    pub fn parameter(&self) -> Option<f64> {
        self.parameter
    }

    /// Check if this operation carries a parameter.
    pub fn is_parameterized(&self) -> bool {
        self.parameter.is_some()
    }

    /// Get the number of targets.
    pub fn num_targets(&self) -> usize {
        self.targets.len()
    }

    /// Compute the adjoint of this operation using `table`.
    ///
    /// The adjoint acts on the same targets in the same order.
    pub fn adjoint(&self, table: &AdjointTable) -> IrResult<Operation> {
        table.adjoint(self)
    }

    /// Copy of this operation under a different, non-empty gate name.
    pub(crate) fn renamed(&self, gate: String) -> Self {
        debug_assert!(!gate.is_empty());
        Self {
            gate,
            targets: self.targets.clone(),
            parameter: self.parameter,
        }
    }

    /// Copy of this operation with a replaced parameter.
    pub(crate) fn with_parameter(&self, parameter: Option<f64>) -> Self {
        Self {
            gate: self.gate.clone(),
            targets: self.targets.clone(),
            parameter,
        }
    }

    /// Write the canonical `GATE(t0,t1,...)` form.
    pub(crate) fn write_canonical(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "{}(", self.gate)?;
        for (i, target) in self.targets.iter().enumerate() {
            if i > 0 {
                f.write_char(',')?;
            }
            write!(f, "{target}")?;
        }
        f.write_char(')')
    }

    /// Write the extended `GATE(t0,t1,...)[parameter]` form.
    pub(crate) fn write_extended(&self, f: &mut impl fmt::Write) -> fmt::Result {
        self.write_canonical(f)?;
        if let Some(value) = self.parameter {
            write!(f, "[{value}]")?;
        }
        Ok(())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_canonical(f)
    }
}
