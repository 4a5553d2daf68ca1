//! Scoped name-to-symbol store backing the evaluator.
//!
//! The table is a never-empty stack of scopes: index 0 is the global scope
//! and cannot be popped.  Lookup and assignment search from the innermost
//! scope outward; declaration always targets the innermost scope, so an
//! inner declaration shadows an outer one without disturbing it.

use serde::Serialize;
use thiserror::Error;

use log::debug;

use crate::value::{TypeTag, Value};

/// Failure modes of the symbol table, one variant per caller-visible case.
#[derive(Debug, Error, PartialEq)]
pub enum SymbolError {
    #[error("Variable '{0}' is already declared in this scope")]
    DuplicateSymbol(String),

    #[error("Undefined variable '{0}'")]
    UndefinedSymbol(String),

    #[error("Cannot pop the global scope")]
    PopGlobalScope,
}

/// A declared variable: its name, declared type keyword, and current value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Symbol {
    pub name: String,
    pub declared_type: TypeTag,
    pub value: Value,
}

/// One level of name visibility.  Symbols keep their insertion order, which
/// only matters when the scope is printed or snapshotted.
#[derive(Debug, Clone, Default)]
struct Scope {
    symbols: Vec<Symbol>,
}

impl Scope {
    fn find(&self, name: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    fn find_mut(&mut self, name: &str) -> Option<&mut Symbol> {
        self.symbols.iter_mut().find(|s| s.name == name)
    }
}

/// Stack of scopes with a protected global frame at the bottom.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    scopes: Vec<Scope>,
}

impl SymbolTable {
    /// Creates a table holding only the global scope.
    pub fn new() -> Self {
        SymbolTable {
            scopes: vec![Scope::default()],
        }
    }

    /// Declares `name` in the current (innermost) scope.  Shadowing an outer
    /// scope's symbol is permitted; redeclaring within the same scope is not.
    pub fn declare(
        &mut self,
        name: &str,
        declared_type: TypeTag,
        value: Value,
    ) -> Result<(), SymbolError> {
        debug!("Declaring '{}' as {} = {}", name, declared_type, value);

        let scope: &mut Scope = self
            .scopes
            .last_mut()
            .expect("scope stack is never empty");

        if scope.find(name).is_some() {
            return Err(SymbolError::DuplicateSymbol(name.to_string()));
        }

        scope.symbols.push(Symbol {
            name: name.to_string(),
            declared_type,
            value,
        });

        Ok(())
    }

    /// Overwrites the value of the innermost symbol named `name`.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), SymbolError> {
        debug!("Assigning '{}' = {}", name, value);

        for scope in self.scopes.iter_mut().rev() {
            if let Some(symbol) = scope.find_mut(name) {
                symbol.value = value;
                return Ok(());
            }
        }

        Err(SymbolError::UndefinedSymbol(name.to_string()))
    }

    /// Read-only lookup, innermost scope first.
    pub fn lookup(&self, name: &str) -> Result<&Symbol, SymbolError> {
        for scope in self.scopes.iter().rev() {
            if let Some(symbol) = scope.find(name) {
                return Ok(symbol);
            }
        }

        Err(SymbolError::UndefinedSymbol(name.to_string()))
    }

    /// Opens a fresh innermost scope.
    pub fn push_scope(&mut self) {
        debug!("Pushing scope (depth {})", self.scopes.len() + 1);

        self.scopes.push(Scope::default());
    }

    /// Discards the innermost scope and every symbol declared in it.
    /// The global scope at the bottom of the stack is never removed.
    pub fn pop_scope(&mut self) -> Result<(), SymbolError> {
        if self.scopes.len() == 1 {
            return Err(SymbolError::PopGlobalScope);
        }

        debug!("Popping scope (depth {})", self.scopes.len());

        self.scopes.pop();
        Ok(())
    }

    /// Current nesting depth, counting the global scope.
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Snapshot of every live symbol, outermost scope first, insertion order
    /// preserved within each scope.  After a completed run only the global
    /// scope remains.
    pub fn snapshot(&self) -> Vec<Symbol> {
        self.scopes
            .iter()
            .flat_map(|scope| scope.symbols.iter().cloned())
            .collect()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}
