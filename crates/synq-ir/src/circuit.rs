//! Circuit container and its transformations.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, instrument};

use crate::adjoint::AdjointTable;
use crate::error::IrResult;
use crate::operation::Operation;

/// Separator between operations in the rendered text forms.
pub const LINE_SEPARATOR: char = '\n';

/// An ordered sequence of operations.
///
/// Insertion order is application order. Nothing in this type reorders
/// operations except [`Circuit::invert`] and [`Circuit::reverse`], which do so
/// by definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Circuit {
    ops: Vec<Operation>,
}

impl Circuit {
    /// Create a new empty circuit.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Create an empty circuit with room for `capacity` operations.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ops: Vec::with_capacity(capacity),
        }
    }

    // =========================================================================
    // Building
    // =========================================================================

    /// Append an operation.
    pub fn add(&mut self, op: Operation) -> &mut Self {
        self.ops.push(op);
        self
    }

    /// Build an operation and append it.
    ///
    /// Nothing is appended when the operation is rejected.
    pub fn add_gate(
        &mut self,
        gate: impl Into<String>,
        targets: impl IntoIterator<Item = u32>,
        parameter: Option<f64>,
    ) -> IrResult<&mut Self> {
        let op = Operation::new(gate, targets, parameter)?;
        Ok(self.add(op))
    }

    /// Append copies of every operation in `other`, in order.
    ///
    /// `other` is left untouched. Merging is associative but not
    /// commutative: `a.merge(&b)` runs `a` first, then `b`.
    #[instrument(skip_all, fields(left = self.ops.len(), right = other.ops.len()))]
    pub fn merge(&mut self, other: &Circuit) -> &mut Self {
        self.ops.extend_from_slice(&other.ops);
        debug!("Merged circuit, ops: {}", self.ops.len());
        self
    }

    /// Remove and return the operation at `index`.
    ///
    /// Out-of-range indices leave the circuit unchanged.
    pub fn remove(&mut self, index: usize) -> Option<Operation> {
        (index < self.ops.len()).then(|| self.ops.remove(index))
    }

    /// Insert an operation at `index`, clamped to the end of the circuit.
    pub fn insert(&mut self, index: usize, op: Operation) {
        let index = index.min(self.ops.len());
        self.ops.insert(index, op);
    }

    /// Replace the operation at `index`, returning the old one.
    pub fn replace(&mut self, index: usize, op: Operation) -> Option<Operation> {
        self.ops
            .get_mut(index)
            .map(|slot| std::mem::replace(slot, op))
    }

    /// Remove every operation.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    // =========================================================================
    // Inversion
    // =========================================================================

    /// Turn this circuit into its adjoint, in place.
    ///
    /// The operation order is reversed and each gate is replaced by its
    /// adjoint according to `table`. With a strict table an unknown gate
    /// fails the whole call and the circuit is left as it was.
    #[instrument(skip_all, fields(ops = self.ops.len()))]
    pub fn invert(&mut self, table: &AdjointTable) -> IrResult<()> {
        let inverted = self
            .ops
            .iter()
            .rev()
            .map(|op| table.adjoint(op))
            .collect::<IrResult<Vec<_>>>()?;
        self.ops = inverted;
        debug!("Inverted circuit, ops: {}", self.ops.len());
        Ok(())
    }

    /// Return the adjoint of this circuit, leaving `self` unchanged.
    pub fn inverted(&self, table: &AdjointTable) -> IrResult<Circuit> {
        let mut circuit = self.clone();
        circuit.invert(table)?;
        Ok(circuit)
    }

    /// Reverse the operation order without touching the gates.
    ///
    /// This is only the adjoint when every gate is self-inverse; prefer
    /// [`Circuit::invert`].
    pub fn reverse(&mut self) {
        self.ops.reverse();
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the canonical text form.
    ///
    /// One `GATE(t0,t1,...)` line per operation, in circuit order, with no
    /// trailing separator. Parameters are not part of this form.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Render the extended text form, `GATE(t0,t1,...)[parameter]`.
    ///
    /// The `[parameter]` suffix only appears on parameterized operations.
    pub fn render_extended(&self) -> String {
        Extended(self).to_string()
    }

    fn write_lines<W: fmt::Write>(
        &self,
        out: &mut W,
        write_op: impl Fn(&Operation, &mut W) -> fmt::Result,
    ) -> fmt::Result {
        for (i, op) in self.ops.iter().enumerate() {
            if i > 0 {
                out.write_char(LINE_SEPARATOR)?;
            }
            write_op(op, out)?;
        }
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the operations in application order.
    pub fn ops(&self) -> &[Operation] {
        &self.ops
    }

    /// Get the operation at `index`.
    pub fn get(&self, index: usize) -> Option<&Operation> {
        self.ops.get(index)
    }

    /// Iterate over the operations in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, Operation> {
        self.ops.iter()
    }

    /// Get the gate names in application order.
    pub fn gate_names(&self) -> Vec<&str> {
        self.ops.iter().map(Operation::gate_name).collect()
    }

    /// Get the number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Check if the circuit has no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Get the number of target wires spanned: the highest target index
    /// plus one, or zero for an empty circuit. Saturates at `usize::MAX`.
    pub fn width(&self) -> usize {
        self.ops
            .iter()
            .flat_map(|op| op.targets().iter().copied())
            .max()
            .map_or(0, |max| {
                usize::try_from(max).map_or(usize::MAX, |max| max.saturating_add(1))
            })
    }

    /// Consume the circuit and return its operations.
    pub fn into_ops(self) -> Vec<Operation> {
        self.ops
    }
}

impl fmt::Display for Circuit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_lines(f, |op, f| op.write_canonical(f))
    }
}

/// Display adapter for the extended text form.
struct Extended<'a>(&'a Circuit);

impl fmt::Display for Extended<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.write_lines(f, |op, f| op.write_extended(f))
    }
}

impl From<Vec<Operation>> for Circuit {
    fn from(ops: Vec<Operation>) -> Self {
        Self { ops }
    }
}

impl FromIterator<Operation> for Circuit {
    fn from_iter<I: IntoIterator<Item = Operation>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl Extend<Operation> for Circuit {
    fn extend<I: IntoIterator<Item = Operation>>(&mut self, iter: I) {
        self.ops.extend(iter);
    }
}

impl IntoIterator for Circuit {
    type Item = Operation;
    type IntoIter = std::vec::IntoIter<Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a Circuit {
    type Item = &'a Operation;
    type IntoIter = std::slice::Iter<'a, Operation>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}
