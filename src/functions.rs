//! Registry of declared functions.
//!
//! PyC functions are flat: no nesting, no closures.  The registry is one
//! global namespace, separate from the variable namespace in the symbol
//! table, and a name registers exactly once per run.

use std::collections::HashMap;

use log::{debug, info};
use thiserror::Error;

use crate::ast::Stmt;
use crate::value::TypeTag;

#[derive(Debug, Error, PartialEq)]
pub enum FunctionError {
    #[error("Function '{0}' is already declared")]
    DuplicateFunction(String),

    #[error("Undefined function '{0}'")]
    UndefinedFunction(String),
}

/// A declared function: its name, typed parameter list, and body statements
/// (cloned out of the declaration's block at registration time).
#[derive(Debug, Clone)]
pub struct Function<'a> {
    pub name: String,
    pub parameters: Vec<(String, TypeTag)>,
    pub body: Vec<Stmt<'a>>,
}

#[derive(Debug, Default)]
pub struct FunctionRegistry<'a> {
    functions: HashMap<String, Function<'a>>,
}

impl<'a> FunctionRegistry<'a> {
    pub fn new() -> Self {
        info!("FunctionRegistry created");

        Self {
            functions: HashMap::new(),
        }
    }

    /// Registers a function under its declared name.
    pub fn register(
        &mut self,
        name: &str,
        parameters: Vec<(String, TypeTag)>,
        body: Vec<Stmt<'a>>,
    ) -> Result<(), FunctionError> {
        debug!(
            "Registering function '{}' with {} parameters",
            name,
            parameters.len()
        );

        if self.functions.contains_key(name) {
            return Err(FunctionError::DuplicateFunction(name.to_string()));
        }

        self.functions.insert(
            name.to_string(),
            Function {
                name: name.to_string(),
                parameters,
                body,
            },
        );

        Ok(())
    }

    /// Looks up a declared function by name.
    pub fn resolve(&self, name: &str) -> Result<&Function<'a>, FunctionError> {
        self.functions
            .get(name)
            .ok_or_else(|| FunctionError::UndefinedFunction(name.to_string()))
    }

    /// Is `name` a declared function?
    pub fn is_declared(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }
}
