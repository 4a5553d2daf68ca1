use serde::Serialize;

use crate::token::TokenType;

/// Runtime value produced and consumed by the evaluator.
///
/// A closed tagged union: there are no implicit conversions between
/// variants, and every compatibility decision in the crate is a match on
/// the variant tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    /// 64-bit signed integer.
    Integer(i64),

    /// Text contents (string literal without quotes, or a concatenation).
    Text(String),

    /// Fixed-length sequence of values, created by an array declaration.
    Array(Vec<Value>),

    /// Opaque pointer id minted by the memory simulator (`ptr0`, `ptr1`, …).
    Pointer(String),
}

impl Value {
    /// Variant name used in log lines and error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "Integer",
            Value::Text(_) => "Text",
            Value::Array(_) => "Array",
            Value::Pointer(_) => "Pointer",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),

            Value::Text(s) => write!(f, "{}", s),

            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }

            Value::Pointer(id) => write!(f, "{}", id),
        }
    }
}

/// Declared-type vocabulary of the interpreted language.
///
/// These are the type keywords a PyC program attaches to variables and
/// parameters; they describe the source language, not the implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeTag {
    Int,
    Str,
    Array,
    List,
    Dict,
}

impl TypeTag {
    /// Maps a type-keyword token onto its tag.  Returns `None` for tokens
    /// that are not type keywords.
    pub fn from_keyword(token_type: &TokenType) -> Option<Self> {
        match token_type {
            TokenType::INT => Some(TypeTag::Int),
            TokenType::STRING_KW => Some(TypeTag::Str),
            TokenType::ARRAY => Some(TypeTag::Array),
            TokenType::LIST => Some(TypeTag::List),
            TokenType::DICT => Some(TypeTag::Dict),
            _ => None,
        }
    }
}

impl std::fmt::Display for TypeTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let keyword: &'static str = match self {
            TypeTag::Int => "int",
            TypeTag::Str => "string",
            TypeTag::Array => "array",
            TypeTag::List => "list",
            TypeTag::Dict => "dict",
        };

        write!(f, "{}", keyword)
    }
}
