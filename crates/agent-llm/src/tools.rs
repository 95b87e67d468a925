//! Tool definition types for LLM tool use

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Tool definition sent to the provider
///
/// Describes a callable tool by name, purpose and JSON Schema input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Tool name (must match the tool in the registry)
    pub name: String,

    /// Description of what the tool does
    pub description: String,

    /// JSON schema for the tool's input parameters
    pub input_schema: Value,
}

impl ToolDefinition {
    /// Create a new tool definition
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        input_schema: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            input_schema,
        }
    }
}

/// Helpers to build JSON schemas for tools
pub mod schema {
    use serde_json::{Value, json};

    /// Create a JSON schema for an object with properties
    ///
    /// # Example
    ///
    /// ```
    /// use agent_llm::tools::schema;
    /// use serde_json::json;
    ///
    /// let schema = schema::object(
    ///     json!({ "book_id": schema::string("Book identifier") }),
    ///     vec!["book_id"],
    /// );
    /// assert_eq!(schema["required"][0], "book_id");
    /// ```
    pub fn object(properties: Value, required: Vec<&str>) -> Value {
        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Schema for a tool that takes no arguments
    pub fn empty_object() -> Value {
        json!({
            "type": "object",
            "properties": {},
            "additionalProperties": false,
        })
    }

    /// String property schema
    pub fn string(description: &str) -> Value {
        json!({ "type": "string", "description": description })
    }

    /// Integer property schema
    pub fn integer(description: &str) -> Value {
        json!({ "type": "integer", "description": description })
    }

    /// Boolean property schema
    pub fn boolean(description: &str) -> Value {
        json!({ "type": "boolean", "description": description })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_definition_creation() {
        let schema = schema::object(
            json!({ "student_id": schema::string("Student identifier") }),
            vec!["student_id"],
        );

        let tool = ToolDefinition::new("lookup", "Look up a student", schema.clone());
        assert_eq!(tool.name, "lookup");
        assert_eq!(tool.description, "Look up a student");
        assert_eq!(tool.input_schema, schema);
    }

    #[test]
    fn test_schema_builders() {
        assert_eq!(schema::string("s")["type"], "string");
        assert_eq!(schema::integer("n")["type"], "integer");
        assert_eq!(schema::boolean("b")["type"], "boolean");

        let empty = schema::empty_object();
        assert_eq!(empty["type"], "object");
        assert!(empty["properties"].as_object().unwrap().is_empty());
    }
}
