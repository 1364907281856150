//! Renderers: the consumer-side view of a circuit.
//!
//! Exporters and visualizers depend on the [`Renderer`] trait rather than on
//! any concrete output format.

use crate::circuit::Circuit;
use crate::error::{IrError, IrResult};

/// Something that turns a circuit into text.
pub trait Renderer: Send + Sync {
    /// Get the name of this renderer.
    fn name(&self) -> &str;

    /// Render the circuit. Must not depend on anything but the circuit.
    fn render(&self, circuit: &Circuit) -> IrResult<String>;
}

/// The canonical `GATE(t0,t1,...)` line form, parameters omitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanonicalRenderer;

impl Renderer for CanonicalRenderer {
    fn name(&self) -> &str {
        "canonical"
    }

    fn render(&self, circuit: &Circuit) -> IrResult<String> {
        Ok(circuit.render())
    }
}

/// The extended `GATE(t0,t1,...)[parameter]` line form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtendedRenderer;

impl Renderer for ExtendedRenderer {
    fn name(&self) -> &str {
        "extended"
    }

    fn render(&self, circuit: &Circuit) -> IrResult<String> {
        Ok(circuit.render_extended())
    }
}

/// JSON array of `{"gate", "targets", "parameter"}` objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer {
    pretty: bool,
}

impl JsonRenderer {
    /// Create a compact JSON renderer.
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create an indented JSON renderer.
    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl Renderer for JsonRenderer {
    fn name(&self) -> &str {
        "json"
    }

    fn render(&self, circuit: &Circuit) -> IrResult<String> {
        let result = if self.pretty {
            serde_json::to_string_pretty(circuit)
        } else {
            serde_json::to_string(circuit)
        };
        result.map_err(|e| IrError::Render(e.to_string()))
    }
}
