//! SynQ Circuit Intermediate Representation
//!
//! This crate provides the circuit data model shared by the SynQ optimizer
//! passes, exporters and visualizers, together with the transformations that
//! operate on it.
//!
//! # Overview
//!
//! A [`Circuit`] is an ordered list of [`Operation`]s. Order is application
//! order and is never changed behind the caller's back. The engine offers:
//!
//! - **add**: append an operation ([`Circuit::add`], [`Circuit::add_gate`])
//! - **merge**: append copies of another circuit's operations ([`Circuit::merge`])
//! - **invert**: turn a circuit into its adjoint ([`Circuit::invert`])
//! - **render**: canonical `GATE(t0,t1,...)` text ([`Circuit::render`])
//!
//! # Example: Building and Inverting
//!
//! ```rust
//! use synq_ir::{AdjointTable, Circuit};
//!
//! let mut circuit = Circuit::new();
//! circuit
//!     .add_gate("H", [0], None)?
//!     .add_gate("CNOT", [0, 1], None)?
//!     .add_gate("RZ", [1], Some(0.5))?;
//!
//! assert_eq!(circuit.render(), "H(0)\nCNOT(0,1)\nRZ(1)");
//!
//! circuit.invert(&AdjointTable::standard())?;
//! assert_eq!(circuit.render_extended(), "RZ(1)[-0.5]\nCNOT(0,1)\nH(0)");
//! # Ok::<(), synq_ir::IrError>(())
//! ```
//!
//! # Adjoint Rules
//!
//! | Rule | Gates |
//! |------|-------|
//! | Self-inverse | `I`, `H`, `X`, `Y`, `Z`, `CNOT`/`CX`, `CY`, `CZ`, `CH`, `SWAP`, `CCX`, `CSWAP` |
//! | Named pair | `S`/`SDG`, `T`/`TDG`, `SX`/`SXDG` |
//! | Negate parameter | `RX`, `RY`, `RZ`, `P`, `U1`, `CRX`, `CRY`, `CRZ`, `CP`, `RXX`, `RYY`, `RZZ` |
//!
//! Unknown gates are treated as self-inverse with a warning, unless the
//! table is strict. See [`adjoint`] for details and [`config`] for loading
//! rules from YAML.

pub mod adjoint;
pub mod circuit;
pub mod config;
pub mod error;
pub mod mutate;
pub mod operation;
pub mod render;

pub use adjoint::{AdjointPolicy, AdjointRule, AdjointTable};
pub use circuit::Circuit;
pub use config::{ConfigError, EngineConfig};
pub use error::{IrError, IrResult};
pub use mutate::{Mutation, mutate};
pub use operation::Operation;
pub use render::{CanonicalRenderer, ExtendedRenderer, JsonRenderer, Renderer};
