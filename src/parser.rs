/*!
Recursive-descent parser for PyC.

Grammar (EBNF — condensed)
--------------------------

```text
program        → statement* EOF ;
statement      → declaration | arrayDecl | funcDecl | ifStmt | loop
               | returnStmt | memControl | block | simpleStmt ;
declaration    → type IDENT ( "=" expression )? ";" ;
arrayDecl      → "array" type IDENT "[" expression "]" ";" ;
funcDecl       → "func" type IDENT "(" parameters? ")" "{" statement* "}" ;
parameters     → type IDENT ( "," type IDENT )* ;
ifStmt         → "if" expression ":" "{" statement* "}" ;
loop           → "while" expression ":" "{" statement* "}" ;
returnStmt     → "return" expression ";" ;
memControl     → "malloc" "(" expression ")" ";"
               | "free" "(" IDENT ")" ";" ;
block          → "{" statement* "}" ;
simpleStmt     → IDENT "(" arguments? ")" ";"                      // call
               | IDENT "[" expression "]" "=" expression ";"       // element write
               | IDENT ( "=" | "+=" | "-=" | "*=" | "/=" ) expression ";" ;
expression     → equality ;
equality       → comparison ( ( "!=" | "==" ) comparison )* ;
comparison     → term ( ( ">" | ">=" | "<" | "<=" ) term )* ;
term           → factor ( ( "-" | "+" ) factor )* ;
factor         → primary ( ( "/" | "*" | "%" ) primary )* ;
arguments      → expression ( "," expression )* ;
primary        → NUMBER | STRING
               | IDENT ( "(" arguments? ")" | "[" expression "]" )?
               | "(" expression ")" ;
type           → "int" | "string" | "list" | "dict" ;
```

Each token is consumed once via `advance()`; the productions are
stream-oriented with no extra scans, so parsing is linear in the token
count.  Error recovery (`synchronize()`) discards tokens up to the next
statement boundary before the error propagates.
*/

use crate::ast::{Expr, Stmt};
use crate::error::{PycError, Result};
use crate::token::{Token, TokenType};

use log::{debug, info};

/// Top-level parser over an immutable slice of tokens.
pub struct Parser<'a> {
    tokens: &'a [Token<'a>],
    current: usize,
}

impl<'a> Parser<'a> {
    /// Construct a new parser.
    pub fn new(tokens: &'a [Token<'a>]) -> Self {
        info!("Parser created with {} tokens", tokens.len());

        Self { tokens, current: 0 }
    }

    // ───────────────────────── public API ─────────────────────────

    /// Parse an entire program and return its statement list.
    pub fn parse(&mut self) -> Result<Vec<Stmt<'a>>> {
        info!("Beginning parse phase");

        let mut statements: Vec<Stmt<'a>> = Vec::new();

        while !self.is_at_end() {
            statements.push(self.statement()?);
        }

        Ok(statements)
    }

    /// Parse a single expression (used by the CLI `parse` subcommand).
    pub fn parse_expression(&mut self) -> Result<Expr<'a>> {
        self.expression()
    }

    // ───────────────────────── statement rules ────────────────────

    fn statement(&mut self) -> Result<Stmt<'a>> {
        debug!("Entering statement");

        let result = if self.check_type_keyword() {
            self.var_declaration()
        } else if self.matches(TokenType::ARRAY) {
            self.array_declaration()
        } else if self.matches(TokenType::FUNC) {
            self.function()
        } else if self.matches(TokenType::IF) {
            self.if_statement()
        } else if self.matches(TokenType::WHILE) {
            self.while_statement()
        } else if self.matches(TokenType::RETURN) {
            self.return_statement()
        } else if self.matches(TokenType::MALLOC) {
            self.malloc_statement()
        } else if self.matches(TokenType::FREE) {
            self.free_statement()
        } else if self.matches(TokenType::LEFT_BRACE) {
            Ok(Stmt::Block(self.block()?))
        } else {
            self.simple_statement()
        };

        if result.is_err() {
            self.synchronize();
        }

        result
    }

    fn var_declaration(&mut self) -> Result<Stmt<'a>> {
        let ty: &Token<'_> = self.advance(); // type keyword, guarded by caller

        let name: &Token<'_> = self.consume(TokenType::IDENTIFIER, "Expected variable name")?;

        let initializer: Option<Expr<'a>> = if self.matches(TokenType::EQUAL) {
            Some(self.expression()?)
        } else {
            None
        };

        self.consume(
            TokenType::SEMICOLON,
            "Expected ';' after variable declaration",
        )?;
        Ok(Stmt::Declaration {
            ty,
            name,
            initializer,
        })
    }

    fn array_declaration(&mut self) -> Result<Stmt<'a>> {
        if !self.check_type_keyword() {
            return Err(PycError::parse(
                self.peek().line,
                "Expected element type after 'array'",
            ));
        }

        let elem_ty: &Token<'_> = self.advance();
        let name: &Token<'_> = self.consume(TokenType::IDENTIFIER, "Expected array name")?;

        self.consume(TokenType::LEFT_BRACKET, "Expected '[' after array name")?;
        let size: Expr<'a> = self.expression()?;
        self.consume(TokenType::RIGHT_BRACKET, "Expected ']' after array size")?;
        self.consume(
            TokenType::SEMICOLON,
            "Expected ';' after array declaration",
        )?;

        Ok(Stmt::ArrayDecl {
            elem_ty,
            name,
            size,
        })
    }

    fn function(&mut self) -> Result<Stmt<'a>> {
        if !self.check_type_keyword() {
            return Err(PycError::parse(
                self.peek().line,
                "Expected return type after 'func'",
            ));
        }

        let ret: &Token<'_> = self.advance();
        let name: &Token<'_> = self.consume(TokenType::IDENTIFIER, "Expected function name")?;

        self.consume(TokenType::LEFT_PAREN, "Expected '(' after function name")?;

        let mut params: Vec<(&Token<'_>, &Token<'_>)> = Vec::new();
        if !self.check(TokenType::RIGHT_PAREN) {
            loop {
                if params.len() >= 255 {
                    return Err(PycError::parse(
                        name.line,
                        "Cannot have more than 255 parameters",
                    ));
                }

                if !self.check_type_keyword() {
                    return Err(PycError::parse(self.peek().line, "Expected parameter type"));
                }

                let param_ty: &Token<'_> = self.advance();
                let param_name: &Token<'_> =
                    self.consume(TokenType::IDENTIFIER, "Expected parameter name")?;

                params.push((param_ty, param_name));

                if !self.matches(TokenType::COMMA) {
                    break;
                }
            }
        }

        self.consume(TokenType::RIGHT_PAREN, "Expected ')' after parameters")?;

        self.consume(TokenType::LEFT_BRACE, "Expected '{' before function body")?;
        let body = self.block()?;

        Ok(Stmt::Function {
            ret,
            name,
            params,
            body,
        })
    }

    fn if_statement(&mut self) -> Result<Stmt<'a>> {
        let condition: Expr<'a> = self.expression()?;

        self.consume(TokenType::COLON, "Expected ':' after if condition")?;
        self.consume(TokenType::LEFT_BRACE, "Expected '{' after ':'")?;

        let body: Box<Stmt<'a>> = Box::new(Stmt::Block(self.block()?));

        Ok(Stmt::If { condition, body })
    }

    fn while_statement(&mut self) -> Result<Stmt<'a>> {
        let condition: Expr<'a> = self.expression()?;

        self.consume(TokenType::COLON, "Expected ':' after loop condition")?;
        self.consume(TokenType::LEFT_BRACE, "Expected '{' after ':'")?;

        let body: Box<Stmt<'a>> = Box::new(Stmt::Block(self.block()?));

        Ok(Stmt::Loop { condition, body })
    }

    fn return_statement(&mut self) -> Result<Stmt<'a>> {
        let keyword: &Token<'_> = self.previous();
        let value: Expr<'a> = self.expression()?;

        self.consume(TokenType::SEMICOLON, "Expected ';' after return value")?;
        Ok(Stmt::Return { keyword, value })
    }

    fn malloc_statement(&mut self) -> Result<Stmt<'a>> {
        let keyword: &Token<'_> = self.previous();

        self.consume(TokenType::LEFT_PAREN, "Expected '(' after 'malloc'")?;
        let size: Expr<'a> = self.expression()?;
        self.consume(TokenType::RIGHT_PAREN, "Expected ')' after allocation size")?;
        self.consume(TokenType::SEMICOLON, "Expected ';' after 'malloc' command")?;

        Ok(Stmt::Malloc { keyword, size })
    }

    fn free_statement(&mut self) -> Result<Stmt<'a>> {
        let keyword: &Token<'_> = self.previous();

        self.consume(TokenType::LEFT_PAREN, "Expected '(' after 'free'")?;
        let target: &Token<'_> =
            self.consume(TokenType::IDENTIFIER, "Expected pointer identifier")?;
        self.consume(TokenType::RIGHT_PAREN, "Expected ')' after pointer identifier")?;
        self.consume(TokenType::SEMICOLON, "Expected ';' after 'free' command")?;

        Ok(Stmt::Free { keyword, target })
    }

    /// Identifier-leading statements: call, element write, or (compound)
    /// assignment.
    fn simple_statement(&mut self) -> Result<Stmt<'a>> {
        let name: &Token<'_> = self.consume(TokenType::IDENTIFIER, "Expected statement")?;

        if self.matches(TokenType::LEFT_PAREN) {
            let arguments: Vec<Expr<'a>> = self.arguments()?;
            self.consume(TokenType::SEMICOLON, "Expected ';' after function call")?;

            return Ok(Stmt::Call { name, arguments });
        }

        if self.matches(TokenType::LEFT_BRACKET) {
            let index: Expr<'a> = self.expression()?;
            self.consume(TokenType::RIGHT_BRACKET, "Expected ']' after index")?;
            self.consume(TokenType::EQUAL, "Expected '=' after array index")?;

            let value: Expr<'a> = self.expression()?;
            self.consume(TokenType::SEMICOLON, "Expected ';' after assignment")?;

            return Ok(Stmt::IndexAssignment { name, index, value });
        }

        if self.check(TokenType::EQUAL)
            || self.check(TokenType::PLUS_EQUAL)
            || self.check(TokenType::MINUS_EQUAL)
            || self.check(TokenType::STAR_EQUAL)
            || self.check(TokenType::SLASH_EQUAL)
        {
            let operator: &Token<'_> = self.advance();
            let value: Expr<'a> = self.expression()?;
            self.consume(TokenType::SEMICOLON, "Expected ';' after assignment")?;

            return Ok(Stmt::Assignment {
                name,
                operator,
                value,
            });
        }

        Err(PycError::parse(
            self.peek().line,
            "Invalid assignment target",
        ))
    }

    fn block(&mut self) -> Result<Vec<Stmt<'a>>> {
        let mut statements: Vec<Stmt<'a>> = Vec::new();

        while !self.check(TokenType::RIGHT_BRACE) && !self.is_at_end() {
            statements.push(self.statement()?);
        }

        self.consume(TokenType::RIGHT_BRACE, "Expected '}' after block")?;
        Ok(statements)
    }

    // ─────────────────────── expression rules ─────────────────────

    fn expression(&mut self) -> Result<Expr<'a>> {
        self.equality()
    }

    fn equality(&mut self) -> Result<Expr<'a>> {
        let mut expr: Expr<'a> = self.comparison()?;

        while self.matches(TokenType::BANG_EQUAL) || self.matches(TokenType::EQUAL_EQUAL) {
            let operator: &Token<'_> = self.previous();
            let right: Expr<'a> = self.comparison()?;

            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn comparison(&mut self) -> Result<Expr<'a>> {
        let mut expr: Expr<'a> = self.term()?;

        while self.matches(TokenType::GREATER)
            || self.matches(TokenType::GREATER_EQUAL)
            || self.matches(TokenType::LESS)
            || self.matches(TokenType::LESS_EQUAL)
        {
            let operator: &Token<'_> = self.previous();
            let right: Expr<'a> = self.term()?;

            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn term(&mut self) -> Result<Expr<'a>> {
        let mut expr: Expr<'a> = self.factor()?;

        while self.matches(TokenType::MINUS) || self.matches(TokenType::PLUS) {
            let operator: &Token<'_> = self.previous();
            let right: Expr<'a> = self.factor()?;

            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn factor(&mut self) -> Result<Expr<'a>> {
        let mut expr: Expr<'a> = self.primary()?;

        while self.matches(TokenType::SLASH)
            || self.matches(TokenType::STAR)
            || self.matches(TokenType::PERCENT)
        {
            let operator: &Token<'_> = self.previous();
            let right: Expr<'a> = self.primary()?;

            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    fn primary(&mut self) -> Result<Expr<'a>> {
        if self.matches(TokenType::NUMBER(0)) {
            return Ok(Expr::Number(self.previous()));
        }

        if let TokenType::STRING(_) = self.peek().token_type {
            self.advance();
            return Ok(Expr::StringLit(self.previous()));
        }

        if self.matches(TokenType::IDENTIFIER) {
            let name: &Token<'_> = self.previous();

            if self.matches(TokenType::LEFT_PAREN) {
                let arguments: Vec<Expr<'a>> = self.arguments()?;
                return Ok(Expr::Call { name, arguments });
            }

            if self.matches(TokenType::LEFT_BRACKET) {
                let index: Expr<'a> = self.expression()?;
                self.consume(TokenType::RIGHT_BRACKET, "Expected ']' after index")?;

                return Ok(Expr::ArrayAccess {
                    name,
                    index: Box::new(index),
                });
            }

            return Ok(Expr::Identifier(name));
        }

        if self.matches(TokenType::LEFT_PAREN) {
            let expr: Expr<'a> = self.expression()?;

            self.consume(TokenType::RIGHT_PAREN, "Expected ')' after expression")?;

            return Ok(Expr::Grouping(Box::new(expr)));
        }

        Err(PycError::parse(self.peek().line, "Expected expression"))
    }

    /// Comma-separated argument list; the caller has already consumed `(`.
    /// Consumes the closing `)`.
    fn arguments(&mut self) -> Result<Vec<Expr<'a>>> {
        let mut arguments: Vec<Expr<'a>> = Vec::new();

        if !self.check(TokenType::RIGHT_PAREN) {
            loop {
                if arguments.len() >= 255 {
                    return Err(PycError::parse(
                        self.peek().line,
                        "Cannot have more than 255 arguments",
                    ));
                }

                arguments.push(self.expression()?);

                if !self.matches(TokenType::COMMA) {
                    break;
                }
            }
        }

        self.consume(TokenType::RIGHT_PAREN, "Expected ')' after arguments")?;

        Ok(arguments)
    }

    // ────────────────────── utility helpers ───────────────────────

    /// Does the current token start a `type` production?
    #[inline(always)]
    fn check_type_keyword(&self) -> bool {
        self.check(TokenType::INT)
            || self.check(TokenType::STRING_KW)
            || self.check(TokenType::LIST)
            || self.check(TokenType::DICT)
    }

    #[inline(always)]
    fn matches(&mut self, ttype: TokenType) -> bool {
        if self.check(ttype) {
            self.advance();

            return true;
        }

        false
    }

    #[inline(always)]
    fn consume(&mut self, ttype: TokenType, message: &str) -> Result<&'a Token<'a>> {
        if self.check(ttype) {
            return Ok(self.advance());
        }

        Err(PycError::parse(self.peek().line, message))
    }

    #[inline(always)]
    fn check(&self, ttype: TokenType) -> bool {
        if self.is_at_end() {
            return false;
        }

        self.peek().token_type == ttype
    }

    #[inline(always)]
    fn advance(&mut self) -> &'a Token<'a> {
        if !self.is_at_end() {
            self.current += 1;
        }

        self.previous()
    }

    #[inline(always)]
    fn is_at_end(&self) -> bool {
        matches!(self.peek().token_type, TokenType::EOF)
    }

    #[inline(always)]
    fn peek(&self) -> &'a Token<'a> {
        &self.tokens[self.current]
    }

    #[inline(always)]
    fn previous(&self) -> &'a Token<'a> {
        &self.tokens[self.current - 1]
    }

    /// Discards tokens until it thinks it is at a statement boundary.
    fn synchronize(&mut self) {
        self.advance(); // skip the token that caused the error

        while !self.is_at_end() {
            if matches!(self.previous().token_type, TokenType::SEMICOLON) {
                return;
            }

            match self.peek().token_type {
                TokenType::INT
                | TokenType::STRING_KW
                | TokenType::ARRAY
                | TokenType::LIST
                | TokenType::DICT
                | TokenType::FUNC
                | TokenType::IF
                | TokenType::WHILE
                | TokenType::MALLOC
                | TokenType::FREE
                | TokenType::RETURN => return,
                _ => {}
            }

            self.advance();
        }
    }
}
