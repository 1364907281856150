//! Gate adjoint lookup.
//!
//! Inverting a circuit needs two things: reversing the operation order and
//! replacing every gate with its adjoint. The second half is driven by an
//! [`AdjointTable`], an owned registry mapping gate names to [`AdjointRule`]s.
//! Tables are plain values: build one, tweak it, and pass it by reference to
//! [`Circuit::invert`](crate::Circuit::invert). Independent tables never
//! interfere with each other.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{IrError, IrResult};
use crate::operation::Operation;

/// Suffix marking a gate as the adjoint of the gate it decorates (`H'`).
pub const DAGGER_MARK: char = '\'';

/// Gates that are their own inverse (Hermitian unitaries).
const SELF_INVERSE: &[&str] = &[
    "I", "ID", "H", "X", "Y", "Z", "CNOT", "CX", "CY", "CZ", "CH", "SWAP", "CCX", "TOFFOLI",
    "CSWAP", "FREDKIN",
];

/// Gates whose adjoint is a different named gate. Registered in both directions.
const NAMED_PAIRS: &[(&str, &str)] = &[("S", "SDG"), ("T", "TDG"), ("SX", "SXDG")];

/// Rotation-style gates: the adjoint is the same gate with the angle negated.
const NEGATE_PARAMETER: &[&str] = &[
    "RX", "RY", "RZ", "P", "PHASE", "U1", "CRX", "CRY", "CRZ", "CP", "RXX", "RYY", "RZZ",
];

/// How to compute the adjoint of a single gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdjointRule {
    /// G† = G.
    SelfInverse,
    /// G† is the named gate, e.g. S† = SDG.
    Named(String),
    /// G(θ)† = G(-θ). A gate without a parameter maps to itself.
    NegateParameter,
}

/// What to do with a gate that has no registered rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdjointPolicy {
    /// Assume the gate is self-inverse and log a warning.
    #[default]
    Lenient,
    /// Fail with [`IrError::UnknownGateAdjoint`].
    Strict,
}

/// Registry of gate adjoint rules.
///
/// Lookups are case-sensitive; the built-in rules use upper-case names.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjointTable {
    rules: FxHashMap<String, AdjointRule>,
    policy: AdjointPolicy,
}

impl AdjointTable {
    /// Create an empty table with the lenient policy.
    ///
    /// Every gate is then inverted as self-inverse (with a warning), which
    /// reduces `invert` to plain order reversal.
    pub fn new() -> Self {
        Self {
            rules: FxHashMap::default(),
            policy: AdjointPolicy::Lenient,
        }
    }

    /// Create a table pre-populated with the standard gate set.
    ///
    /// - H, X, Y, Z, CNOT, SWAP, CCX, ... are self-inverse
    /// - S† = SDG, T† = TDG, SX† = SXDG (and back)
    /// - RX(θ)† = RX(-θ), likewise for the other rotation and phase gates
    pub fn standard() -> Self {
        let mut table = Self::new();
        for gate in SELF_INVERSE {
            table
                .rules
                .insert((*gate).to_string(), AdjointRule::SelfInverse);
        }
        for (a, b) in NAMED_PAIRS {
            table
                .rules
                .insert((*a).to_string(), AdjointRule::Named((*b).to_string()));
            table
                .rules
                .insert((*b).to_string(), AdjointRule::Named((*a).to_string()));
        }
        for gate in NEGATE_PARAMETER {
            table
                .rules
                .insert((*gate).to_string(), AdjointRule::NegateParameter);
        }
        table
    }

    /// Set the policy for unknown gates.
    #[must_use]
    pub fn with_policy(mut self, policy: AdjointPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Shorthand for `with_policy(AdjointPolicy::Strict)`.
    #[must_use]
    pub fn strict(self) -> Self {
        self.with_policy(AdjointPolicy::Strict)
    }

    /// Get the policy for unknown gates.
    pub fn policy(&self) -> AdjointPolicy {
        self.policy
    }

    /// Change the policy for unknown gates.
    pub fn set_policy(&mut self, policy: AdjointPolicy) {
        self.policy = policy;
    }

    /// Register or replace the rule for `gate`, returning the previous rule.
    pub fn insert(
        &mut self,
        gate: impl Into<String>,
        rule: AdjointRule,
    ) -> IrResult<Option<AdjointRule>> {
        let gate = gate.into();
        if gate.is_empty() {
            return Err(IrError::invalid_operation(
                &gate,
                "adjoint rule registered for an empty gate name",
            ));
        }
        if let AdjointRule::Named(target) = &rule {
            if target.is_empty() {
                return Err(IrError::invalid_operation(
                    &gate,
                    "adjoint rule names an empty gate",
                ));
            }
        }
        Ok(self.rules.insert(gate, rule))
    }

    /// Register `a† = b` and `b† = a`.
    pub fn insert_pair(&mut self, a: impl Into<String>, b: impl Into<String>) -> IrResult<()> {
        let a = a.into();
        let b = b.into();
        self.insert(a.clone(), AdjointRule::Named(b.clone()))?;
        self.insert(b, AdjointRule::Named(a))?;
        Ok(())
    }

    /// Remove the rule for `gate`.
    pub fn remove(&mut self, gate: &str) -> Option<AdjointRule> {
        self.rules.remove(gate)
    }

    /// Get the rule registered for `gate`.
    pub fn rule(&self, gate: &str) -> Option<&AdjointRule> {
        self.rules.get(gate)
    }

    /// Check if a rule is registered for `gate`.
    pub fn contains(&self, gate: &str) -> bool {
        self.rules.contains_key(gate)
    }

    /// Check if `gate` is registered as self-inverse.
    pub fn is_self_inverse(&self, gate: &str) -> bool {
        matches!(self.rules.get(gate), Some(AdjointRule::SelfInverse))
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Find the rule for `gate`, stripping trailing dagger marks until one
    /// matches. Returns the rule and the stripped marks.
    fn lookup<'a>(&self, gate: &'a str) -> Option<(&AdjointRule, &'a str)> {
        let mut name = gate;
        loop {
            if let Some(rule) = self.rules.get(name) {
                return Some((rule, &gate[name.len()..]));
            }
            match name.strip_suffix(DAGGER_MARK) {
                Some(base) if !base.is_empty() => name = base,
                _ => return None,
            }
        }
    }

    /// Compute the adjoint of `op`.
    ///
    /// A dagger-marked gate (`G'`) with no rule of its own follows the rule
    /// of `G` and keeps its mark: `S'` becomes `SDG'` and `RZ'(θ)` becomes
    /// `RZ'(-θ)`. Adjoints are therefore involutions whenever the named
    /// pairs are symmetric. Gates with no rule at all follow the table's
    /// [`AdjointPolicy`].
    pub fn adjoint(&self, op: &Operation) -> IrResult<Operation> {
        let gate = op.gate_name();
        match self.lookup(gate) {
            Some((AdjointRule::SelfInverse, _)) => Ok(op.clone()),
            Some((AdjointRule::Named(name), marks)) => Ok(op.renamed(format!("{name}{marks}"))),
            Some((AdjointRule::NegateParameter, _)) => {
                Ok(op.with_parameter(op.parameter().map(|v| -v)))
            }
            None => match self.policy {
                AdjointPolicy::Strict => Err(IrError::UnknownGateAdjoint {
                    gate: gate.to_string(),
                }),
                AdjointPolicy::Lenient => {
                    warn!(gate = %gate, "no adjoint rule registered, assuming self-inverse");
                    Ok(op.clone())
                }
            },
        }
    }
}

impl Default for AdjointTable {
    fn default() -> Self {
        Self::standard()
    }
}
