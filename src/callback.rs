//! Callback registry binding component inputs to an output.
//!
//! DESIGN
//! ======
//! Callbacks are registered once at startup with an explicit `subscribe`
//! call naming the output endpoint and the input endpoints it depends on.
//! Handlers are plain functions of a shared context and the input values,
//! delivered in declaration order, so each one stays a pure function of its
//! declared inputs. The registry is read-only after startup.
//!
//! An endpoint is written `component_id.property`, e.g. `sales-graph.figure`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::filter::FilterError;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CallbackError {
    #[error("no callback registered for output {0}")]
    UnknownOutput(String),
    #[error("output {0} already has a callback")]
    DuplicateOutput(String),
    #[error("missing input {0}")]
    MissingInput(String),
    #[error("malformed endpoint {0:?}: expected component_id.property")]
    MalformedEndpoint(String),
    #[error(transparent)]
    Filter(#[from] FilterError),
    #[error("failed to encode callback output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    pub id: String,
    pub property: String,
}

impl Endpoint {
    #[must_use]
    pub fn new(id: &str, property: &str) -> Self {
        Self { id: id.to_owned(), property: property.to_owned() }
    }

    /// Parse `component_id.property`. The property is the part after the last dot.
    ///
    /// # Errors
    ///
    /// Returns `MalformedEndpoint` if either side of the dot is empty or there is no dot.
    pub fn parse(raw: &str) -> Result<Self, CallbackError> {
        match raw.rsplit_once('.') {
            Some((id, property)) if !id.is_empty() && !property.is_empty() => Ok(Self::new(id, property)),
            _ => Err(CallbackError::MalformedEndpoint(raw.to_owned())),
        }
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.id, self.property)
    }
}

/// Registered (output, inputs) pair, served so the page can discover it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    pub output: Endpoint,
    pub inputs: Vec<Endpoint>,
}

/// Current value of one input endpoint, as sent by the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct InputValue {
    pub id: String,
    pub property: String,
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateRequest {
    pub output: String,
    #[serde(default)]
    pub inputs: Vec<InputValue>,
}

pub type Handler<C> = fn(&C, &[Value]) -> Result<Value, CallbackError>;

struct Callback<C> {
    dependency: Dependency,
    handler: Handler<C>,
}

// =============================================================================
// REGISTRY
// =============================================================================

pub struct CallbackRegistry<C> {
    callbacks: Vec<Callback<C>>,
}

impl<C> CallbackRegistry<C> {
    #[must_use]
    pub fn new() -> Self {
        Self { callbacks: Vec::new() }
    }

    /// Register `handler` to recompute `output` whenever any of `inputs` changes.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateOutput` if `output` already has a callback.
    pub fn subscribe(&mut self, output: Endpoint, inputs: Vec<Endpoint>, handler: Handler<C>) -> Result<(), CallbackError> {
        if self.callbacks.iter().any(|cb| cb.dependency.output == output) {
            return Err(CallbackError::DuplicateOutput(output.to_string()));
        }
        tracing::debug!(%output, inputs = inputs.len(), "callback registered");
        self.callbacks.push(Callback { dependency: Dependency { output, inputs }, handler });
        Ok(())
    }

    #[must_use]
    pub fn dependencies(&self) -> Vec<&Dependency> {
        self.callbacks.iter().map(|cb| &cb.dependency).collect()
    }

    /// Run the callback for `request.output` with the supplied input values.
    /// Inputs the callback did not declare are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the output is malformed or unknown, if a declared
    /// input is missing from the request, or if the handler fails.
    pub fn dispatch(&self, ctx: &C, request: &UpdateRequest) -> Result<Value, CallbackError> {
        let output = Endpoint::parse(&request.output)?;
        let callback = self
            .callbacks
            .iter()
            .find(|cb| cb.dependency.output == output)
            .ok_or_else(|| CallbackError::UnknownOutput(request.output.clone()))?;

        let values = callback
            .dependency
            .inputs
            .iter()
            .map(|input| {
                request
                    .inputs
                    .iter()
                    .find(|v| v.id == input.id && v.property == input.property)
                    .map(|v| v.value.clone())
                    .ok_or_else(|| CallbackError::MissingInput(input.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        (callback.handler)(ctx, &values)
    }
}

impl<C> Default for CallbackRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "callback_test.rs"]
mod tests;
