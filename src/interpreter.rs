//! The tree-walking evaluator.
//!
//! `Evaluator::run` drives one depth-first walk over a parsed program.  All
//! run state (symbol table, memory ledger, function registry, diagnostics,
//! run log) lives in the evaluator instance, which `run` consumes: every run
//! starts from fresh components and nothing is shared across runs.
//!
//! Each statement execution produces a [`Completion`]: either normal
//! fall-through or an in-flight return value.  `Returning` threads upward
//! through enclosing blocks, short-circuiting their remaining statements,
//! until the nearest function-call boundary (or the top level of `run`)
//! absorbs it.
//!
//! Failures split into two tiers.  Non-fatal findings (type mismatches,
//! duplicate declarations, unknown pointers on `free`) are recorded as
//! diagnostics and the walk continues with best-effort values.  Runtime
//! failures ([`RuntimeError`]) abort the walk and surface as the run's
//! single terminal error.

use log::{debug, info};
use serde::Serialize;
use thiserror::Error;

use crate::ast::{Expr, Stmt};
use crate::error::PycError;
use crate::functions::FunctionRegistry;
use crate::memory::{MemoryError, MemorySimulator};
use crate::semantics::SemanticAnalyzer;
use crate::symbol_table::{Symbol, SymbolTable};
use crate::token::{Token, TokenType};
use crate::value::{TypeTag, Value};

/// Conditions that make continued evaluation meaningless.  Each variant
/// carries the operation context (name, index, line) needed to reproduce it.
#[derive(Error, Debug, PartialEq)]
pub enum RuntimeError {
    #[error("Undefined variable '{name}' [line {line}]")]
    UndefinedSymbol { name: String, line: usize },

    #[error("Undefined function '{name}' [line {line}]")]
    UndefinedFunction { name: String, line: usize },

    #[error("Index {index} out of bounds for array '{name}' of length {len} [line {line}]")]
    IndexOutOfBounds {
        name: String,
        index: i64,
        len: usize,
        line: usize,
    },

    #[error("Division by zero [line {line}]")]
    DivisionByZero { line: usize },

    #[error("Invalid size {size} for array '{name}' [line {line}]")]
    InvalidArraySize {
        name: String,
        size: i64,
        line: usize,
    },

    #[error("Invalid allocation size {size} [line {line}]")]
    InvalidAllocationSize { size: i64, line: usize },

    #[error("{message} [line {line}]")]
    TypeMismatch { message: String, line: usize },

    /// The front end handed over a tree the contract forbids (e.g. a
    /// non-type token in a declaration's type position).  Nothing was
    /// evaluated.
    #[error("Malformed parse tree: {message} [line {line}]")]
    MalformedTree { message: String, line: usize },
}

impl From<RuntimeError> for PycError {
    fn from(err: RuntimeError) -> Self {
        PycError::Runtime(err.to_string())
    }
}

/// Convenient alias for interpreter results.
pub type IResult<T> = Result<T, RuntimeError>;

/// Outcome of executing one statement or block.
#[derive(Debug, Clone, PartialEq)]
pub enum Completion {
    /// Fall through to the next statement.
    Normal,

    /// A `return` is in flight; enclosing blocks stop executing.
    Returning(Value),
}

/// Everything a completed run hands back to the presentation layer.
#[derive(Debug, Serialize)]
pub struct RunResult {
    /// Ordered, user-facing trace of what the program did.
    pub log: Vec<String>,

    /// Ordered non-fatal findings accumulated during the walk.
    pub diagnostics: Vec<String>,

    /// Snapshot of the symbol table at run end (global scope only, since
    /// every block scope has been popped by then).
    pub final_state: Vec<Symbol>,
}

pub struct Evaluator<'a> {
    symbols: SymbolTable,
    semantics: SemanticAnalyzer,
    memory: MemorySimulator,
    functions: FunctionRegistry<'a>,
    log: Vec<String>,
}

impl<'a> Evaluator<'a> {
    /// Creates an evaluator with fresh component instances.
    pub fn new() -> Self {
        info!("Initializing Evaluator");

        Self {
            symbols: SymbolTable::new(),
            semantics: SemanticAnalyzer::new(),
            memory: MemorySimulator::new(),
            functions: FunctionRegistry::new(),
            log: Vec::new(),
        }
    }

    /// Interprets a program (a list of top-level statements).
    ///
    /// Consumes the evaluator: one instance, one run.  A top-level
    /// `Returning` completion is absorbed here and simply stops the walk.
    pub fn run(mut self, statements: &[Stmt<'a>]) -> IResult<RunResult> {
        debug!("Interpreting {} statements", statements.len());

        for stmt in statements {
            debug!("Executing statement: {:?}", stmt);

            if let Completion::Returning(value) = self.execute(stmt)? {
                debug!("Top-level return with value {}; stopping walk", value);
                break;
            }
        }

        info!("Interpretation completed successfully");

        Ok(RunResult {
            log: self.log,
            diagnostics: self.semantics.into_diagnostics(),
            final_state: self.symbols.snapshot(),
        })
    }

    /// Executes a single statement.
    pub fn execute(&mut self, stmt: &Stmt<'a>) -> IResult<Completion> {
        match stmt {
            Stmt::Declaration {
                ty,
                name,
                initializer,
            } => {
                debug!("Declaring variable '{}'", name.lexeme);

                let tag: TypeTag = self.type_tag(ty)?;

                let value: Value = match initializer {
                    Some(expr) => {
                        let val = self.evaluate(expr)?;
                        debug!("Initializer evaluated to: {}", val);
                        val
                    }
                    None => default_value(tag),
                };

                self.semantics
                    .check_declaration(name.lexeme, tag, initializer.as_ref().map(|_| &value));

                match self.symbols.declare(name.lexeme, tag, value.clone()) {
                    Ok(()) => {
                        self.log
                            .push(format!("Declaration: {} {} = {}", ty.lexeme, name.lexeme, value));

                        info!("Variable '{}' declared with value: {}", name.lexeme, value);
                    }

                    // first declaration wins; the redeclared value is dropped
                    Err(e) => self.semantics.report(e.to_string()),
                }

                Ok(Completion::Normal)
            }

            Stmt::Assignment {
                name,
                operator,
                value,
            } => {
                debug!("Assigning to variable '{}'", name.lexeme);

                let rhs: Value = self.evaluate(value)?;

                let new_value: Value = match base_operator(&operator.token_type) {
                    // compound form: current OP rhs, in that order
                    Some(op) => {
                        let current: Value = self.lookup_value(name)?;
                        self.apply_binary(&op, operator.line, current, rhs)?
                    }
                    None => rhs,
                };

                self.semantics
                    .check_assignment(&self.symbols, name.lexeme, &new_value);

                self.symbols
                    .assign(name.lexeme, new_value.clone())
                    .map_err(|_| RuntimeError::UndefinedSymbol {
                        name: name.lexeme.to_string(),
                        line: name.line,
                    })?;

                self.log
                    .push(format!("Assignment: {} = {}", name.lexeme, new_value));

                info!("Assigned value {} to '{}'", new_value, name.lexeme);

                Ok(Completion::Normal)
            }

            Stmt::IndexAssignment { name, index, value } => {
                debug!("Assigning to element of '{}'", name.lexeme);

                let idx: i64 = self.evaluate_index(index)?;
                let val: Value = self.evaluate(value)?;

                let mut items: Vec<Value> = self.lookup_array(name)?;

                if idx < 0 || idx as usize >= items.len() {
                    return Err(RuntimeError::IndexOutOfBounds {
                        name: name.lexeme.to_string(),
                        index: idx,
                        len: items.len(),
                        line: name.line,
                    });
                }

                items[idx as usize] = val.clone();

                self.symbols
                    .assign(name.lexeme, Value::Array(items))
                    .map_err(|_| RuntimeError::UndefinedSymbol {
                        name: name.lexeme.to_string(),
                        line: name.line,
                    })?;

                self.log
                    .push(format!("Assignment: {}[{}] = {}", name.lexeme, idx, val));

                Ok(Completion::Normal)
            }

            Stmt::Block(statements) => self.execute_block(statements),

            Stmt::If { condition, body } => {
                debug!("Evaluating if condition");

                let cond_value: Value = self.evaluate(condition)?;

                if is_truthy(&cond_value) {
                    debug!("Condition is truthy; executing body");

                    return self.execute(body);
                }

                Ok(Completion::Normal)
            }

            Stmt::Loop { condition, body } => {
                debug!("Entering while loop");

                while is_truthy(&self.evaluate(condition)?) {
                    debug!("Loop condition is truthy; executing body");

                    if let Completion::Returning(value) = self.execute(body)? {
                        return Ok(Completion::Returning(value));
                    }
                }

                info!("Exited while loop");

                Ok(Completion::Normal)
            }

            Stmt::Function {
                ret: _,
                name,
                params,
                body,
            } => {
                debug!("Declaring function '{}'", name.lexeme);

                let mut parameters: Vec<(String, TypeTag)> = Vec::with_capacity(params.len());

                for (param_ty, param_name) in params {
                    parameters.push((param_name.lexeme.to_string(), self.type_tag(param_ty)?));
                }

                match self
                    .functions
                    .register(name.lexeme, parameters, body.clone())
                {
                    Ok(()) => {
                        self.log.push(format!("Function declared: {}", name.lexeme));

                        info!(
                            "Function '{}' declared with {} parameters",
                            name.lexeme,
                            params.len()
                        );
                    }

                    Err(e) => self.semantics.report(e.to_string()),
                }

                Ok(Completion::Normal)
            }

            Stmt::Call { name, arguments } => {
                let _ = self.call_function(name, arguments)?;

                Ok(Completion::Normal)
            }

            Stmt::ArrayDecl {
                elem_ty,
                name,
                size,
            } => {
                debug!("Declaring array '{}'", name.lexeme);

                let _ = self.type_tag(elem_ty)?; // element type is declared only

                let size_value: i64 = match self.evaluate(size)? {
                    Value::Integer(n) => n,
                    other => {
                        return Err(RuntimeError::TypeMismatch {
                            message: format!(
                                "Array size must be an Integer, got {}",
                                other.type_name()
                            ),
                            line: name.line,
                        });
                    }
                };

                if size_value < 0 {
                    return Err(RuntimeError::InvalidArraySize {
                        name: name.lexeme.to_string(),
                        size: size_value,
                        line: name.line,
                    });
                }

                let items: Vec<Value> = vec![Value::Integer(0); size_value as usize];

                match self
                    .symbols
                    .declare(name.lexeme, TypeTag::Array, Value::Array(items))
                {
                    Ok(()) => {
                        self.log.push(format!(
                            "Array {} created with size {}",
                            name.lexeme, size_value
                        ));

                        info!("Array '{}' created with size {}", name.lexeme, size_value);
                    }

                    Err(e) => self.semantics.report(e.to_string()),
                }

                Ok(Completion::Normal)
            }

            Stmt::Malloc { keyword, size } => {
                debug!("Evaluating malloc command");

                let size_value: i64 = match self.evaluate(size)? {
                    Value::Integer(n) => n,
                    other => {
                        return Err(RuntimeError::TypeMismatch {
                            message: format!(
                                "Allocation size must be an Integer, got {}",
                                other.type_name()
                            ),
                            line: keyword.line,
                        });
                    }
                };

                let id: String =
                    self.memory
                        .allocate(size_value)
                        .map_err(|e| match e {
                            MemoryError::InvalidAllocationSize(size) => {
                                RuntimeError::InvalidAllocationSize {
                                    size,
                                    line: keyword.line,
                                }
                            }
                            MemoryError::UnknownPointer(_) => unreachable!("allocate cannot miss"),
                        })?;

                // the minted pointer lands in the log only; binding it to a
                // variable is the program's responsibility
                let ptr: Value = Value::Pointer(id);

                self.log
                    .push(format!("Memory allocated: {} ({} bytes)", ptr, size_value));

                info!("Allocated {} bytes as {}", size_value, ptr);

                Ok(Completion::Normal)
            }

            Stmt::Free { keyword: _, target } => {
                debug!("Evaluating free command for '{}'", target.lexeme);

                match self.memory.free(target.lexeme) {
                    Ok(()) => {
                        self.log.push(format!("Memory freed: {}", target.lexeme));

                        info!("Freed {}", target.lexeme);
                    }

                    // double-free and unknown ids are findings, not aborts
                    Err(e) => self.semantics.report(e.to_string()),
                }

                Ok(Completion::Normal)
            }

            Stmt::Return { keyword: _, value } => {
                debug!("Executing return statement");

                let val: Value = self.evaluate(value)?;

                self.log.push(format!("Return: {}", val));

                debug!("Returning value: {}", val);

                Ok(Completion::Returning(val))
            }
        }
    }

    /// Executes a block's statements in a fresh scope.  The scope is popped
    /// on every exit path, including an in-flight `Returning`.
    fn execute_block(&mut self, statements: &[Stmt<'a>]) -> IResult<Completion> {
        debug!("Entering block with {} statements", statements.len());

        self.symbols.push_scope();

        let mut completion: Completion = Completion::Normal;

        for stmt in statements {
            match self.execute(stmt) {
                Ok(Completion::Normal) => {}

                Ok(Completion::Returning(value)) => {
                    completion = Completion::Returning(value);
                    break;
                }

                Err(e) => {
                    self.symbols
                        .pop_scope()
                        .expect("block scope was pushed above");
                    return Err(e);
                }
            }
        }

        self.symbols
            .pop_scope()
            .expect("block scope was pushed above");

        info!("Exited block");

        Ok(completion)
    }

    /// Evaluates an expression and returns a Value.
    pub fn evaluate(&mut self, expr: &Expr<'a>) -> IResult<Value> {
        debug!("Evaluating expression: {:?}", expr);

        let value: Value = match expr {
            Expr::Number(token) => match token.token_type {
                TokenType::NUMBER(n) => Value::Integer(n),
                _ => {
                    return Err(RuntimeError::MalformedTree {
                        message: format!("'{}' is not a number literal", token.lexeme),
                        line: token.line,
                    });
                }
            },

            Expr::StringLit(token) => match &token.token_type {
                TokenType::STRING(s) => Value::Text(s.clone()),
                _ => {
                    return Err(RuntimeError::MalformedTree {
                        message: format!("'{}' is not a string literal", token.lexeme),
                        line: token.line,
                    });
                }
            },

            Expr::Identifier(token) => self.lookup_value(token)?,

            Expr::ArrayAccess { name, index } => {
                let idx: i64 = self.evaluate_index(index)?;
                let items: Vec<Value> = self.lookup_array(name)?;

                if idx < 0 || idx as usize >= items.len() {
                    return Err(RuntimeError::IndexOutOfBounds {
                        name: name.lexeme.to_string(),
                        index: idx,
                        len: items.len(),
                        line: name.line,
                    });
                }

                items[idx as usize].clone()
            }

            Expr::Call { name, arguments } => self.call_function(name, arguments)?,

            Expr::Binary {
                left,
                operator,
                right,
            } => {
                // strict left-to-right operand evaluation
                let left_val: Value = self.evaluate(left)?;
                let right_val: Value = self.evaluate(right)?;

                debug!("Left operand: {}, Right operand: {}", left_val, right_val);

                self.apply_binary(&operator.token_type, operator.line, left_val, right_val)?
            }

            Expr::Grouping(e) => self.evaluate(e)?,
        };

        debug!("Expression evaluated to: {}", value);

        Ok(value)
    }

    /// Invokes a declared function: resolves it, evaluates arguments
    /// left-to-right, binds them positionally in a fresh scope, and executes
    /// the body.  The call's value is the body's `Returning` payload, or
    /// `Integer(0)` when the body falls through.
    fn call_function(&mut self, name: &Token<'a>, arguments: &[Expr<'a>]) -> IResult<Value> {
        debug!("Calling function '{}'", name.lexeme);

        let function = self
            .functions
            .resolve(name.lexeme)
            .map_err(|_| RuntimeError::UndefinedFunction {
                name: name.lexeme.to_string(),
                line: name.line,
            })?
            .clone();

        let mut arg_values: Vec<Value> = Vec::with_capacity(arguments.len());

        for arg in arguments {
            let av: Value = self.evaluate(arg)?;
            debug!("Evaluated argument => {}", av);
            arg_values.push(av);
        }

        if arg_values.len() != function.parameters.len() {
            self.semantics.report(format!(
                "Function '{}' expects {} arguments but got {}",
                name.lexeme,
                function.parameters.len(),
                arg_values.len()
            ));
        }

        self.symbols.push_scope();

        // positional binding; on an arity mismatch the shorter list binds
        for ((param_name, param_tag), value) in function.parameters.iter().zip(arg_values.iter()) {
            debug!("Binding parameter '{}' to {}", param_name, value);

            self.semantics
                .check_declaration(param_name, *param_tag, Some(value));

            if let Err(e) = self.symbols.declare(param_name, *param_tag, value.clone()) {
                self.semantics.report(e.to_string());
            }
        }

        let mut completion: Completion = Completion::Normal;

        for stmt in &function.body {
            match self.execute(stmt) {
                Ok(Completion::Normal) => {}

                Ok(Completion::Returning(value)) => {
                    completion = Completion::Returning(value);
                    break;
                }

                Err(e) => {
                    self.symbols
                        .pop_scope()
                        .expect("call scope was pushed above");
                    return Err(e);
                }
            }
        }

        self.symbols
            .pop_scope()
            .expect("call scope was pushed above");

        self.log.push(format!("Function {} called", name.lexeme));

        match completion {
            Completion::Returning(value) => {
                self.log.push(format!("Returned value: {}", value));

                info!("Function '{}' returned: {}", name.lexeme, value);

                Ok(value)
            }

            Completion::Normal => {
                info!("Function '{}' returned the default 0", name.lexeme);

                Ok(Value::Integer(0))
            }
        }
    }

    /// Operator dispatch for binary expressions and the compound-assignment
    /// forms that reuse them.
    fn apply_binary(
        &self,
        op: &TokenType,
        line: usize,
        left_val: Value,
        right_val: Value,
    ) -> IResult<Value> {
        match op {
            TokenType::PLUS => match (left_val, right_val) {
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a + b)),
                (Value::Text(a), Value::Text(b)) => Ok(Value::Text(a + &b)),
                (l, r) => Err(RuntimeError::TypeMismatch {
                    message: format!(
                        "Operands of '+' must be two Integers or two Texts, got {} and {}",
                        l.type_name(),
                        r.type_name()
                    ),
                    line,
                }),
            },

            TokenType::MINUS => match (left_val, right_val) {
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a - b)),
                (l, r) => Err(numeric_mismatch("-", &l, &r, line)),
            },

            TokenType::STAR => match (left_val, right_val) {
                (Value::Integer(a), Value::Integer(b)) => Ok(Value::Integer(a * b)),
                (l, r) => Err(numeric_mismatch("*", &l, &r, line)),
            },

            TokenType::SLASH => match (left_val, right_val) {
                (Value::Integer(a), Value::Integer(b)) => {
                    if b == 0 {
                        Err(RuntimeError::DivisionByZero { line })
                    } else {
                        Ok(Value::Integer(floor_div(a, b)))
                    }
                }
                (l, r) => Err(numeric_mismatch("/", &l, &r, line)),
            },

            TokenType::PERCENT => match (left_val, right_val) {
                (Value::Integer(a), Value::Integer(b)) => {
                    if b == 0 {
                        Err(RuntimeError::DivisionByZero { line })
                    } else {
                        Ok(Value::Integer(floor_mod(a, b)))
                    }
                }
                (l, r) => Err(numeric_mismatch("%", &l, &r, line)),
            },

            TokenType::EQUAL_EQUAL => Ok(bool_value(is_equal(&left_val, &right_val))),

            TokenType::BANG_EQUAL => Ok(bool_value(!is_equal(&left_val, &right_val))),

            TokenType::GREATER => match (left_val, right_val) {
                (Value::Integer(a), Value::Integer(b)) => Ok(bool_value(a > b)),
                (l, r) => Err(numeric_mismatch(">", &l, &r, line)),
            },

            TokenType::GREATER_EQUAL => match (left_val, right_val) {
                (Value::Integer(a), Value::Integer(b)) => Ok(bool_value(a >= b)),
                (l, r) => Err(numeric_mismatch(">=", &l, &r, line)),
            },

            TokenType::LESS => match (left_val, right_val) {
                (Value::Integer(a), Value::Integer(b)) => Ok(bool_value(a < b)),
                (l, r) => Err(numeric_mismatch("<", &l, &r, line)),
            },

            TokenType::LESS_EQUAL => match (left_val, right_val) {
                (Value::Integer(a), Value::Integer(b)) => Ok(bool_value(a <= b)),
                (l, r) => Err(numeric_mismatch("<=", &l, &r, line)),
            },

            _ => Err(RuntimeError::MalformedTree {
                message: format!("Invalid binary operator {:?}", op),
                line,
            }),
        }
    }

    // ───────────────────────── lookup helpers ─────────────────────────

    fn lookup_value(&self, token: &Token<'a>) -> IResult<Value> {
        debug!("Looking up variable '{}'", token.lexeme);

        self.symbols
            .lookup(token.lexeme)
            .map(|symbol| symbol.value.clone())
            .map_err(|_| RuntimeError::UndefinedSymbol {
                name: token.lexeme.to_string(),
                line: token.line,
            })
    }

    fn lookup_array(&self, name: &Token<'a>) -> IResult<Vec<Value>> {
        match self.lookup_value(name)? {
            Value::Array(items) => Ok(items),
            other => Err(RuntimeError::TypeMismatch {
                message: format!("'{}' is not an array (it holds {})", name.lexeme, other.type_name()),
                line: name.line,
            }),
        }
    }

    fn evaluate_index(&mut self, index: &Expr<'a>) -> IResult<i64> {
        match self.evaluate(index)? {
            Value::Integer(n) => Ok(n),
            other => Err(RuntimeError::TypeMismatch {
                message: format!("Array index must be an Integer, got {}", other.type_name()),
                line: index.line(),
            }),
        }
    }

    fn type_tag(&self, token: &Token<'a>) -> IResult<TypeTag> {
        TypeTag::from_keyword(&token.token_type).ok_or_else(|| RuntimeError::MalformedTree {
            message: format!("'{}' is not a type keyword", token.lexeme),
            line: token.line,
        })
    }
}

impl<'a> Default for Evaluator<'a> {
    fn default() -> Self {
        Self::new()
    }
}

// ───────────────────────── free helpers ─────────────────────────

/// Truthiness: a zero Integer is false; every other value is true.
fn is_truthy(value: &Value) -> bool {
    debug!("Checking truthiness of: {}", value);

    let result: bool = match value {
        Value::Integer(n) => *n != 0,
        _ => true,
    };

    debug!("Truthiness result: {}", result);

    result
}

fn is_equal(left: &Value, right: &Value) -> bool {
    debug!("Checking equality: {} == {}", left, right);

    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => a == b,
        (Value::Text(a), Value::Text(b)) => a == b,
        (Value::Pointer(a), Value::Pointer(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => a == b,
        _ => false,
    }
}

/// Comparisons yield Integers; the value model has no boolean variant.
fn bool_value(b: bool) -> Value {
    Value::Integer(i64::from(b))
}

fn numeric_mismatch(op: &str, left: &Value, right: &Value, line: usize) -> RuntimeError {
    RuntimeError::TypeMismatch {
        message: format!(
            "Operands of '{}' must be Integers, got {} and {}",
            op,
            left.type_name(),
            right.type_name()
        ),
        line,
    }
}

/// Floor division: quotient rounds toward negative infinity, so
/// `floor_div(-7, 2) == -4`.
fn floor_div(a: i64, b: i64) -> i64 {
    let q: i64 = a / b;

    if a % b != 0 && (a < 0) != (b < 0) {
        q - 1
    } else {
        q
    }
}

/// Modulo paired with [`floor_div`]: the result carries the divisor's sign.
fn floor_mod(a: i64, b: i64) -> i64 {
    a - floor_div(a, b) * b
}

/// Zero value a declaration without an initializer stores.  `dict` shares
/// the array default until a mapping variant exists.
fn default_value(tag: TypeTag) -> Value {
    match tag {
        TypeTag::Int => Value::Integer(0),
        TypeTag::Str => Value::Text(String::new()),
        TypeTag::Array | TypeTag::List | TypeTag::Dict => Value::Array(Vec::new()),
    }
}

/// Maps a compound-assignment operator onto the binary operator it applies
/// between the current and new values.  Plain `=` maps to `None`.
fn base_operator(op: &TokenType) -> Option<TokenType> {
    match op {
        TokenType::PLUS_EQUAL => Some(TokenType::PLUS),
        TokenType::MINUS_EQUAL => Some(TokenType::MINUS),
        TokenType::STAR_EQUAL => Some(TokenType::STAR),
        TokenType::SLASH_EQUAL => Some(TokenType::SLASH),
        _ => None,
    }
}
