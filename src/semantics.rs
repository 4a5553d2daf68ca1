//! Advisory semantic analysis.
//!
//! The analyzer compares declared types against runtime value variants and
//! records a diagnostic on every mismatch.  It never raises and never blocks
//! evaluation: a mismatched declaration still stores its value, and the walk
//! continues.  It also owns the run-wide diagnostics sequence, so the
//! evaluator routes every other non-fatal finding (duplicate symbol,
//! duplicate function, unknown pointer) through [`SemanticAnalyzer::report`].

use log::{debug, info};

use crate::symbol_table::SymbolTable;
use crate::value::{TypeTag, Value};

/// Accumulates ordered, non-fatal findings for one evaluator run.
#[derive(Debug, Default)]
pub struct SemanticAnalyzer {
    diagnostics: Vec<String>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        info!("SemanticAnalyzer created");

        Self {
            diagnostics: Vec::new(),
        }
    }

    /// Checks a declaration's initializer (if any) against the declared type.
    pub fn check_declaration(&mut self, name: &str, declared: TypeTag, initializer: Option<&Value>) {
        debug!("Checking declaration of '{}' as {}", name, declared);

        if let Some(value) = initializer {
            if !compatible(declared, value) {
                self.report(format!(
                    "Type mismatch: '{}' declared as {} but initialized with {} value",
                    name,
                    declared,
                    value.type_name()
                ));
            }
        }
    }

    /// Checks an assignment's new value against the target's declared type.
    /// An undefined target is not this component's finding; the evaluator
    /// already treats it as fatal.
    pub fn check_assignment(&mut self, table: &SymbolTable, name: &str, value: &Value) {
        debug!("Checking assignment to '{}'", name);

        if let Ok(symbol) = table.lookup(name) {
            if !compatible(symbol.declared_type, value) {
                self.report(format!(
                    "Type mismatch: '{}' declared as {} but assigned {} value",
                    name,
                    symbol.declared_type,
                    value.type_name()
                ));
            }
        }
    }

    /// Records a non-fatal finding from any component.
    pub fn report(&mut self, diagnostic: String) {
        info!("Diagnostic: {}", diagnostic);

        self.diagnostics.push(diagnostic);
    }

    /// Hands the accumulated findings to the caller, in recording order.
    pub fn into_diagnostics(self) -> Vec<String> {
        self.diagnostics
    }

    /// Findings recorded so far.
    pub fn diagnostics(&self) -> &[String] {
        &self.diagnostics
    }
}

/// Declared-type vs runtime-variant compatibility.
///
/// `dict` matches no variant: the evaluator produces no structured mapping
/// value yet, so every `dict` initializer is reported until one exists.
pub fn compatible(declared: TypeTag, value: &Value) -> bool {
    match declared {
        TypeTag::Int => matches!(value, Value::Integer(_)),
        TypeTag::Str => matches!(value, Value::Text(_)),
        TypeTag::Array | TypeTag::List => matches!(value, Value::Array(_)),
        TypeTag::Dict => false,
    }
}
