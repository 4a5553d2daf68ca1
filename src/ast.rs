//! Typed parse tree for PyC.
//!
//! This is the contract between the front end (scanner + parser) and the
//! evaluator: each node exposes its tokens (literal text + line) and typed
//! children, and nothing else.  A program is a `Vec<Stmt>`.  Lifetime `'a`
//! ties nodes that contain token references back to the borrowed token slice
//! held by the parser.

use crate::token::{Token, TokenType};

/// **Abstract-Syntax-Tree node** representing every kind of *expression*
/// in PyC.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    /// An integer literal: `42`.
    Number(&'a Token<'a>),

    /// A string literal: `"Hello"` (token payload excludes the quotes).
    StringLit(&'a Token<'a>),

    /// Variable access – resolves to the identifier's current value at runtime.
    Identifier(&'a Token<'a>),

    /// Indexed array read: `numbers[i + 1]`.
    ArrayAccess {
        /// The array's name token.
        name: &'a Token<'a>,
        /// Index expression, evaluated to an Integer at runtime.
        index: Box<Expr<'a>>,
    },

    /// Function-call expression: `add(1, 2)`.
    Call {
        /// The callee's name token (PyC callables are plain names).
        name: &'a Token<'a>,
        /// Argument list (may be empty), evaluated left-to-right.
        arguments: Vec<Expr<'a>>,
    },

    /// Infix binary operator expression
    /// *Example:* `a + b`, `x <= y`
    Binary {
        left: Box<Expr<'a>>,
        /// Operator token such as `+`, `*`, `==`, …
        operator: &'a Token<'a>,
        right: Box<Expr<'a>>,
    },

    /// Parenthesised sub-expression: `"(" expression ")"`.
    Grouping(Box<Expr<'a>>),
}

impl<'a> Expr<'a> {
    /// Source line of the leftmost token of this expression.
    pub fn line(&self) -> usize {
        match self {
            Expr::Number(token) => token.line,

            Expr::StringLit(token) => token.line,

            Expr::Identifier(token) => token.line,

            Expr::ArrayAccess { name, .. } => name.line,

            Expr::Call { name, .. } => name.line,

            Expr::Binary { left, .. } => left.line(),

            Expr::Grouping(expr) => expr.line(),
        }
    }

    /// Render this expression in fully-parenthesised prefix form, used by
    /// the CLI `parse` subcommand.
    pub fn pretty(&self) -> String {
        match self {
            Expr::Number(token) => match token.token_type {
                TokenType::NUMBER(n) => n.to_string(),
                _ => token.lexeme.to_string(),
            },

            Expr::StringLit(token) => match &token.token_type {
                TokenType::STRING(s) => s.to_string(),
                _ => token.lexeme.to_string(),
            },

            Expr::Identifier(token) => token.lexeme.to_string(),

            Expr::ArrayAccess { name, index } => {
                format!("(index {} {})", name.lexeme, index.pretty())
            }

            Expr::Call { name, arguments } => {
                let mut out = format!("(call {}", name.lexeme);
                for arg in arguments {
                    out.push(' ');
                    out.push_str(&arg.pretty());
                }
                out.push(')');
                out
            }

            Expr::Binary {
                left,
                operator,
                right,
            } => format!("({} {} {})", operator.lexeme, left.pretty(), right.pretty()),

            Expr::Grouping(expr) => format!("(group {})", expr.pretty()),
        }
    }
}

/// **Abstract-Syntax-Tree node** for *statements* (complete executable
/// constructs).  A program is a sequence of these nodes returned by
/// [`crate::parser::Parser::parse`].
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt<'a> {
    /// Typed variable declaration: `int x = 10;` / `string y;`.
    Declaration {
        /// The type keyword token (`int`, `string`, `list`, `dict`).
        ty: &'a Token<'a>,
        name: &'a Token<'a>,
        initializer: Option<Expr<'a>>,
    },

    /// Assignment to a plain name, including compound forms:
    /// `x = 1;`, `x += 2;`, `x /= 3;`.
    Assignment {
        name: &'a Token<'a>,
        /// The assignment operator token (`=`, `+=`, `-=`, `*=`, `/=`).
        operator: &'a Token<'a>,
        value: Expr<'a>,
    },

    /// Assignment through an array index: `numbers[0] = 10;`.
    IndexAssignment {
        name: &'a Token<'a>,
        index: Expr<'a>,
        value: Expr<'a>,
    },

    /// `if` conditional with a colon-introduced block: `if x > 12: { … }`.
    /// The minimal grammar has no else branch.
    If {
        condition: Expr<'a>,
        body: Box<Stmt<'a>>,
    },

    /// `while` loop: `while x > 0: { … }`.
    Loop {
        condition: Expr<'a>,
        body: Box<Stmt<'a>>,
    },

    /// Braced scope containing zero or more statements.
    Block(Vec<Stmt<'a>>),

    /// Function declaration: `func int add(int a, int b) { … }`.
    Function {
        /// Declared return type keyword token.
        ret: &'a Token<'a>,
        name: &'a Token<'a>,
        /// `(type, name)` token pairs, in declaration order.
        params: Vec<(&'a Token<'a>, &'a Token<'a>)>,
        /// Body statements executed when the function is called.
        body: Vec<Stmt<'a>>,
    },

    /// Statement-form function call: `add(3, 5);`.
    Call {
        name: &'a Token<'a>,
        arguments: Vec<Expr<'a>>,
    },

    /// Array declaration: `array int numbers[5];`.
    ArrayDecl {
        /// Element type keyword token.
        elem_ty: &'a Token<'a>,
        name: &'a Token<'a>,
        size: Expr<'a>,
    },

    /// Memory allocation command: `malloc(150);`.
    Malloc {
        /// The `malloc` keyword token (for error locations).
        keyword: &'a Token<'a>,
        size: Expr<'a>,
    },

    /// Memory release command: `free(ptr0);`.  The target is the literal
    /// identifier token, not an evaluated expression.
    Free {
        keyword: &'a Token<'a>,
        target: &'a Token<'a>,
    },

    /// `return` statement inside a function body.
    Return {
        /// The `return` keyword token (for runtime error locations).
        keyword: &'a Token<'a>,
        value: Expr<'a>,
    },
}
