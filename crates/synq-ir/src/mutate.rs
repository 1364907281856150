//! Random structural mutation of circuits.
//!
//! Used by search-based optimizers that explore neighbouring circuits. The
//! random source is always supplied by the caller, so a seeded RNG gives a
//! reproducible sequence of mutations.

use rand::Rng;
use tracing::debug;

use crate::adjoint::DAGGER_MARK;
use crate::circuit::Circuit;
use crate::operation::Operation;

/// Gate inserted by [`Mutation::Insert`].
pub const INSERTED_GATE: &str = "X";

/// A single mutation that was applied to a circuit.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// An `X` on target 0 was inserted at `index`.
    Insert {
        /// Position of the new operation.
        index: usize,
    },
    /// The operation at `index` was removed.
    Remove {
        /// Former position of the removed operation.
        index: usize,
        /// The removed operation.
        removed: Operation,
    },
    /// The gate at `index` was marked as its own dagger (`G` became `G'`).
    Dagger {
        /// Position of the marked operation.
        index: usize,
    },
}

impl Mutation {
    /// Position in the circuit that the mutation touched.
    pub fn index(&self) -> usize {
        match self {
            Mutation::Insert { index }
            | Mutation::Remove { index, .. }
            | Mutation::Dagger { index } => *index,
        }
    }
}

/// Apply one random mutation to `circuit`.
///
/// Picks uniformly between inserting, removing and dagger-marking an
/// operation at a uniformly chosen index. Empty circuits are left alone and
/// yield `None`.
pub fn mutate<R: Rng + ?Sized>(circuit: &mut Circuit, rng: &mut R) -> Option<Mutation> {
    if circuit.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..circuit.len());
    let mutation = match rng.gen_range(0..3u8) {
        0 => {
            let op = Operation::gate(INSERTED_GATE, [0]).ok()?;
            circuit.insert(index, op);
            Mutation::Insert { index }
        }
        1 => {
            let removed = circuit.remove(index)?;
            Mutation::Remove { index, removed }
        }
        _ => {
            let op = circuit.get(index)?;
            let marked = op.renamed(format!("{}{DAGGER_MARK}", op.gate_name()));
            circuit.replace(index, marked);
            Mutation::Dagger { index }
        }
    };

    debug!(?mutation, ops = circuit.len(), "Mutated circuit");
    Some(mutation)
}
