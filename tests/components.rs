//! Component-level laws: the scoped symbol table, the memory ledger, the
//! semantic analyzer, and the function registry, each through the public API.

#[cfg(test)]
mod symbol_table_tests {
    use pyc_interpreter as pyc;

    use pyc::symbol_table::{SymbolError, SymbolTable};
    use pyc::value::{TypeTag, Value};

    #[test]
    fn test_declare_then_lookup() {
        let mut table = SymbolTable::new();

        table
            .declare("x", TypeTag::Int, Value::Integer(10))
            .expect("fresh name should declare");

        let symbol = table.lookup("x").expect("x should resolve");
        assert_eq!(symbol.declared_type, TypeTag::Int);
        assert_eq!(symbol.value, Value::Integer(10));
    }

    #[test]
    fn test_duplicate_in_same_scope_is_rejected() {
        let mut table = SymbolTable::new();

        table
            .declare("x", TypeTag::Int, Value::Integer(1))
            .expect("fresh name should declare");

        assert_eq!(
            table.declare("x", TypeTag::Int, Value::Integer(2)),
            Err(SymbolError::DuplicateSymbol("x".to_string()))
        );

        // the first declaration is untouched
        assert_eq!(table.lookup("x").unwrap().value, Value::Integer(1));
    }

    #[test]
    fn test_shadow_and_restore() {
        let mut table = SymbolTable::new();

        table
            .declare("x", TypeTag::Int, Value::Integer(1))
            .unwrap();

        table.push_scope();
        table
            .declare("x", TypeTag::Str, Value::Text("inner".to_string()))
            .expect("shadowing an outer scope is permitted");

        assert_eq!(
            table.lookup("x").unwrap().value,
            Value::Text("inner".to_string())
        );

        table.pop_scope().expect("inner scope should pop");

        // popping restores the outer symbol with its pre-block value
        let symbol = table.lookup("x").unwrap();
        assert_eq!(symbol.declared_type, TypeTag::Int);
        assert_eq!(symbol.value, Value::Integer(1));
    }

    #[test]
    fn test_assign_reaches_outer_scope() {
        let mut table = SymbolTable::new();

        table
            .declare("x", TypeTag::Int, Value::Integer(1))
            .unwrap();

        table.push_scope();
        table
            .assign("x", Value::Integer(5))
            .expect("assignment should find the outer x");
        table.pop_scope().unwrap();

        assert_eq!(table.lookup("x").unwrap().value, Value::Integer(5));
    }

    #[test]
    fn test_assign_undefined_fails() {
        let mut table = SymbolTable::new();

        assert_eq!(
            table.assign("ghost", Value::Integer(1)),
            Err(SymbolError::UndefinedSymbol("ghost".to_string()))
        );
    }

    #[test]
    fn test_global_scope_is_never_popped() {
        let mut table = SymbolTable::new();

        // any number of attempts, same refusal
        for _ in 0..3 {
            assert_eq!(table.pop_scope(), Err(SymbolError::PopGlobalScope));
        }

        assert_eq!(table.depth(), 1);
    }

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let mut table = SymbolTable::new();

        table.declare("b", TypeTag::Int, Value::Integer(2)).unwrap();
        table.declare("a", TypeTag::Int, Value::Integer(1)).unwrap();

        let names: Vec<_> = table.snapshot().into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["b".to_string(), "a".to_string()]);
    }
}

#[cfg(test)]
mod memory_tests {
    use pyc_interpreter as pyc;

    use pyc::memory::{MemoryError, MemorySimulator};

    #[test]
    fn test_ids_are_monotonic_and_never_reused() {
        let mut memory = MemorySimulator::new();

        let first = memory.allocate(16).unwrap();
        let second = memory.allocate(32).unwrap();
        assert_eq!(first, "ptr0");
        assert_eq!(second, "ptr1");

        memory.free(&first).unwrap();

        // freeing never returns an id to the pool
        let third = memory.allocate(8).unwrap();
        assert_eq!(third, "ptr2");

        assert!(!memory.is_live("ptr0"));
        assert!(memory.is_live("ptr1"));
        assert!(memory.is_live("ptr2"));
        assert_eq!(memory.live_count(), 2);
    }

    #[test]
    fn test_double_free_is_rejected() {
        let mut memory = MemorySimulator::new();

        let id = memory.allocate(4).unwrap();
        memory.free(&id).unwrap();

        assert_eq!(
            memory.free(&id),
            Err(MemoryError::UnknownPointer(id.clone()))
        );
    }

    #[test]
    fn test_free_of_unknown_pointer_is_rejected() {
        let mut memory = MemorySimulator::new();

        assert_eq!(
            memory.free("ptr7"),
            Err(MemoryError::UnknownPointer("ptr7".to_string()))
        );
    }

    #[test]
    fn test_negative_size_is_rejected() {
        let mut memory = MemorySimulator::new();

        assert_eq!(
            memory.allocate(-1),
            Err(MemoryError::InvalidAllocationSize(-1))
        );

        // a failed allocation mints nothing
        assert_eq!(memory.allocate(0).unwrap(), "ptr0");
    }
}

#[cfg(test)]
mod semantics_tests {
    use pyc_interpreter as pyc;

    use pyc::semantics::{compatible, SemanticAnalyzer};
    use pyc::symbol_table::SymbolTable;
    use pyc::value::{TypeTag, Value};

    #[test]
    fn test_compatibility_matrix() {
        assert!(compatible(TypeTag::Int, &Value::Integer(1)));
        assert!(compatible(TypeTag::Str, &Value::Text("x".to_string())));
        assert!(compatible(TypeTag::Array, &Value::Array(vec![])));
        assert!(compatible(TypeTag::List, &Value::Array(vec![])));

        assert!(!compatible(TypeTag::Int, &Value::Text("x".to_string())));
        assert!(!compatible(TypeTag::Str, &Value::Integer(1)));

        // no mapping variant exists yet, so dict accepts nothing
        assert!(!compatible(TypeTag::Dict, &Value::Integer(1)));
        assert!(!compatible(TypeTag::Dict, &Value::Array(vec![])));
    }

    #[test]
    fn test_mismatched_declaration_is_a_diagnostic_only() {
        let mut analyzer = SemanticAnalyzer::new();

        analyzer.check_declaration("x", TypeTag::Int, Some(&Value::Text("oops".to_string())));

        assert_eq!(analyzer.diagnostics().len(), 1);
        assert!(analyzer.diagnostics()[0].contains("Type mismatch"));
        assert!(analyzer.diagnostics()[0].contains("x"));
    }

    #[test]
    fn test_matching_declaration_records_nothing() {
        let mut analyzer = SemanticAnalyzer::new();

        analyzer.check_declaration("x", TypeTag::Int, Some(&Value::Integer(1)));
        analyzer.check_declaration("y", TypeTag::Str, None);

        assert!(analyzer.diagnostics().is_empty());
    }

    #[test]
    fn test_assignment_checked_against_declared_type() {
        let mut table = SymbolTable::new();
        table.declare("x", TypeTag::Int, Value::Integer(1)).unwrap();

        let mut analyzer = SemanticAnalyzer::new();

        analyzer.check_assignment(&table, "x", &Value::Integer(2));
        assert!(analyzer.diagnostics().is_empty());

        analyzer.check_assignment(&table, "x", &Value::Text("no".to_string()));
        assert_eq!(analyzer.diagnostics().len(), 1);
    }

    #[test]
    fn test_diagnostics_keep_recording_order() {
        let mut analyzer = SemanticAnalyzer::new();

        analyzer.report("first".to_string());
        analyzer.report("second".to_string());

        assert_eq!(
            analyzer.into_diagnostics(),
            vec!["first".to_string(), "second".to_string()]
        );
    }
}

#[cfg(test)]
mod function_registry_tests {
    use pyc_interpreter as pyc;

    use pyc::functions::{FunctionError, FunctionRegistry};
    use pyc::value::TypeTag;

    #[test]
    fn test_register_then_resolve() {
        let mut registry = FunctionRegistry::new();

        registry
            .register("add", vec![("a".to_string(), TypeTag::Int)], Vec::new())
            .expect("fresh name should register");

        let function = registry.resolve("add").expect("add should resolve");
        assert_eq!(function.name, "add");
        assert_eq!(function.parameters.len(), 1);
        assert!(registry.is_declared("add"));
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = FunctionRegistry::new();

        registry.register("f", Vec::new(), Vec::new()).unwrap();

        assert_eq!(
            registry.register("f", Vec::new(), Vec::new()),
            Err(FunctionError::DuplicateFunction("f".to_string()))
        );
    }

    #[test]
    fn test_unknown_function_does_not_resolve() {
        let registry = FunctionRegistry::new();

        assert!(matches!(
            registry.resolve("ghost"),
            Err(FunctionError::UndefinedFunction(name)) if name == "ghost"
        ));
    }
}
