//! Property-based tests for circuit transformations.
//!
//! Checks the algebraic guarantees of merge, invert and render over random
//! circuits built from a mix of self-inverse, paired, rotation and unknown
//! gates, with and without the dagger mark.

use proptest::prelude::*;
use synq_ir::{AdjointTable, Circuit, Operation};

/// Gates used by the generator, with the adjoint name the standard table
/// must produce for each.
const GATES: &[(&str, &str)] = &[
    ("H", "H"),
    ("X", "X"),
    ("CNOT", "CNOT"),
    ("S", "SDG"),
    ("SDG", "S"),
    ("T", "TDG"),
    ("RX", "RX"),
    ("RZ", "RZ"),
    ("CRZ", "CRZ"),
    ("ORACLE", "ORACLE"),
    ("H'", "H'"),
    ("S'", "SDG'"),
    ("RZ'", "RZ'"),
    ("ORACLE'", "ORACLE'"),
];

/// Gates whose adjoint negates the parameter.
const ROTATIONS: &[&str] = &["RX", "RZ", "CRZ", "RZ'"];

fn expected_adjoint_name(gate: &str) -> &'static str {
    GATES
        .iter()
        .find(|(name, _)| *name == gate)
        .map(|(_, adjoint)| *adjoint)
        .expect("generator only emits known gates")
}

/// Generate a random operation.
///
/// Rotations always carry a parameter; other gates never do.
fn arb_operation() -> impl Strategy<Value = Operation> {
    (
        0..GATES.len(),
        prop::collection::vec(0_u32..6, 1..=3),
        -10.0_f64..10.0,
    )
        .prop_map(|(gate_idx, targets, angle)| {
            let gate = GATES[gate_idx].0;
            let parameter = ROTATIONS.contains(&gate).then_some(angle);
            Operation::new(gate, targets, parameter).expect("generated operation is valid")
        })
}

/// Generate a random circuit with 0-20 operations.
fn arb_circuit() -> impl Strategy<Value = Circuit> {
    prop::collection::vec(arb_operation(), 0..=20).prop_map(Circuit::from)
}

proptest! {
    /// Rendering the same circuit twice yields identical text.
    #[test]
    fn test_render_is_deterministic(circuit in arb_circuit()) {
        let copy = circuit.clone();
        prop_assert_eq!(circuit.render(), circuit.render());
        prop_assert_eq!(circuit.render(), copy.render());
    }

    /// One line per operation, each in `GATE(t0,...)` form.
    #[test]
    fn test_render_one_line_per_operation(circuit in arb_circuit()) {
        let rendered = circuit.render();
        if circuit.is_empty() {
            prop_assert!(rendered.is_empty());
        } else {
            let lines: Vec<&str> = rendered.split('\n').collect();
            prop_assert_eq!(lines.len(), circuit.len());
            for (line, op) in lines.iter().zip(circuit.iter()) {
                let targets: Vec<String> = op.targets().iter().map(u32::to_string).collect();
                prop_assert_eq!(*line, format!("{}({})", op.gate_name(), targets.join(",")));
            }
        }
        prop_assert!(!rendered.ends_with('\n'));
    }

    /// Merge appends every operation of the source and leaves it unchanged.
    #[test]
    fn test_merge_lengths(a in arb_circuit(), b in arb_circuit()) {
        let b_before = b.clone();
        let mut merged = a.clone();
        merged.merge(&b);

        prop_assert_eq!(merged.len(), a.len() + b.len());
        prop_assert_eq!(&b, &b_before);
        prop_assert_eq!(&merged.ops()[..a.len()], a.ops());
        prop_assert_eq!(&merged.ops()[a.len()..], b.ops());
    }

    /// (a + b) + c == a + (b + c).
    #[test]
    fn test_merge_is_associative(a in arb_circuit(), b in arb_circuit(), c in arb_circuit()) {
        let mut left = a.clone();
        left.merge(&b).merge(&c);

        let mut bc = b.clone();
        bc.merge(&c);
        let mut right = a.clone();
        right.merge(&bc);

        prop_assert_eq!(left, right);
    }

    /// Inversion reverses the order and maps every gate to its adjoint.
    #[test]
    fn test_invert_maps_adjoints(circuit in arb_circuit()) {
        let table = AdjointTable::standard();
        let mut inverted = circuit.clone();
        inverted.invert(&table).expect("lenient inversion never fails");

        prop_assert_eq!(inverted.len(), circuit.len());
        for (inv, orig) in inverted.iter().zip(circuit.iter().rev()) {
            prop_assert_eq!(inv.gate_name(), expected_adjoint_name(orig.gate_name()));
            prop_assert_eq!(inv.targets(), orig.targets());
            prop_assert_eq!(inv.parameter(), orig.parameter().map(|v| -v));
        }
    }

    /// Inverting twice restores the original circuit.
    #[test]
    fn test_double_inversion_is_identity(circuit in arb_circuit()) {
        let table = AdjointTable::standard();
        let mut twice = circuit.clone();
        twice.invert(&table).expect("first inversion");
        twice.invert(&table).expect("second inversion");
        prop_assert_eq!(twice, circuit);
    }

    /// The adjoint of a concatenation is the reversed concatenation of adjoints.
    #[test]
    fn test_invert_distributes_over_merge(a in arb_circuit(), b in arb_circuit()) {
        let table = AdjointTable::standard();

        let mut ab = a.clone();
        ab.merge(&b);
        ab.invert(&table).expect("invert a+b");

        let mut expected = b.inverted(&table).expect("invert b");
        expected.merge(&a.inverted(&table).expect("invert a"));

        prop_assert_eq!(ab, expected);
    }
}
