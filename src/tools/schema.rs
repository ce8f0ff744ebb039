use super::Operation;
use crate::error::{Result, YokatlasError};
use jsonschema::error::ValidationErrorKind;
use jsonschema::{JSONSchema, ValidationError};
use serde_json::Value;
use std::collections::HashMap;

/// Compiled input schemas, one per operation. Built once at startup and only
/// read afterwards.
pub struct SchemaRegistry {
    compiled: HashMap<Operation, JSONSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Result<Self> {
        let mut compiled = HashMap::new();
        for operation in Operation::ALL {
            let schema = operation.input_schema();
            let validator = JSONSchema::compile(&schema).map_err(|e| {
                YokatlasError::internal(format!(
                    "invalid input schema for {}: {}",
                    operation, e
                ))
            })?;
            compiled.insert(operation, validator);
        }
        Ok(Self { compiled })
    }

    /// Checks `arguments` against the operation's schema and reports the
    /// first offending field.
    pub fn validate(&self, operation: Operation, arguments: &Value) -> Result<()> {
        let validator = self.compiled.get(&operation).ok_or_else(|| {
            YokatlasError::internal(format!("no schema compiled for {}", operation))
        })?;

        if let Err(mut errors) = validator.validate(arguments) {
            if let Some(error) = errors.next() {
                return Err(YokatlasError::validation(offending_field(&error), error.to_string()));
            }
        }
        Ok(())
    }
}

fn offending_field(error: &ValidationError<'_>) -> String {
    match &error.kind {
        ValidationErrorKind::Required { property } => match property {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        },
        ValidationErrorKind::AdditionalProperties { unexpected } => unexpected.join(", "),
        _ => {
            let path = error.instance_path.to_string();
            match path.trim_start_matches('/').split('/').next() {
                Some(field) if !field.is_empty() => field.to_string(),
                _ => "arguments".to_string(),
            }
        }
    }
}
