//! Named operations an assistant can discover and invoke.
//!
//! Each tool has a description, a typed parameter list and a handler that
//! takes a JSON object of arguments and returns text. The registry is a
//! plain ordered map; `dispatch` looks a tool up by name.

pub mod shopping;

pub use shopping::{shopping_registry, StoreSet};

use crate::utils::error::ToolError;
use log::debug;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Kind of value a tool parameter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    Text,
    /// JSON array of listings, inline or as a JSON-encoded string
    Listings,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolParam {
    pub name: &'static str,
    pub kind: ParamKind,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ToolParam>,
}

type Handler = Box<dyn Fn(&ToolArgs<'_>) -> Result<String, ToolError>>;

struct Tool {
    spec: ToolSpec,
    handler: Handler,
}

/// Arguments of one call, tagged with the tool name for error messages
pub struct ToolArgs<'a> {
    tool: &'a str,
    values: &'a Map<String, Value>,
}

impl<'a> ToolArgs<'a> {
    pub fn tool(&self) -> &str {
        self.tool
    }

    pub fn get(&self, name: &str) -> Result<&'a Value, ToolError> {
        self.values
            .get(name)
            .ok_or_else(|| ToolError::MissingArgument {
                tool: self.tool.to_string(),
                argument: name.to_string(),
            })
    }

    /// Non-blank string argument
    pub fn text(&self, name: &str) -> Result<&'a str, ToolError> {
        match self.get(name)? {
            Value::String(s) if !s.trim().is_empty() => Ok(s.trim()),
            Value::String(_) => Err(self.invalid(format!("'{}' cannot be empty", name))),
            _ => Err(self.invalid(format!("'{}' must be a string", name))),
        }
    }

    pub fn invalid(&self, reason: impl Into<String>) -> ToolError {
        ToolError::InvalidArguments {
            tool: self.tool.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Default)]
pub struct ToolRegistry {
    tools: BTreeMap<&'static str, Tool>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tool, replacing any tool registered under the same name
    pub fn register<F>(&mut self, spec: ToolSpec, handler: F)
    where
        F: Fn(&ToolArgs<'_>) -> Result<String, ToolError> + 'static,
    {
        self.tools.insert(
            spec.name,
            Tool {
                spec,
                handler: Box::new(handler),
            },
        );
    }

    /// Specs of all tools, ordered by name
    pub fn specs(&self) -> Vec<&ToolSpec> {
        self.tools.values().map(|tool| &tool.spec).collect()
    }

    pub fn get(&self, name: &str) -> Option<&ToolSpec> {
        self.tools.get(name).map(|tool| &tool.spec)
    }

    /// Invoke a tool with a JSON object of arguments
    ///
    /// # Errors
    /// * `ToolError::UnknownTool` - no tool has this name
    /// * `ToolError::InvalidArguments` - `args` is not a JSON object, or the
    ///   handler rejected a value
    /// * `ToolError::MissingArgument` - a parameter is absent
    pub fn dispatch(&self, name: &str, args: &Value) -> Result<String, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::UnknownTool(name.to_string()))?;

        let values = args.as_object().ok_or_else(|| ToolError::InvalidArguments {
            tool: name.to_string(),
            reason: "arguments must be a JSON object".to_string(),
        })?;

        debug!("Dispatching tool {}", name);
        (tool.handler)(&ToolArgs { tool: name, values })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn echo_registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        registry.register(
            ToolSpec {
                name: "echo",
                description: "Echo the text argument",
                parameters: vec![ToolParam {
                    name: "text",
                    kind: ParamKind::Text,
                    description: "Text to echo",
                }],
            },
            |args| Ok(args.text("text")?.to_string()),
        );
        registry
    }

    #[test]
    fn test_dispatch_echo() {
        let registry = echo_registry();
        assert_eq!(registry.dispatch("echo", &json!({"text": " hi "})).unwrap(), "hi");
    }

    #[test]
    fn test_dispatch_unknown_tool() {
        let registry = echo_registry();
        assert!(matches!(
            registry.dispatch("nope", &json!({})),
            Err(ToolError::UnknownTool(_))
        ));
    }

    #[test]
    fn test_dispatch_missing_argument() {
        let registry = echo_registry();
        assert!(matches!(
            registry.dispatch("echo", &json!({})),
            Err(ToolError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_dispatch_rejects_non_object() {
        let registry = echo_registry();
        assert!(matches!(
            registry.dispatch("echo", &json!(["hi"])),
            Err(ToolError::InvalidArguments { .. })
        ));
    }
}
