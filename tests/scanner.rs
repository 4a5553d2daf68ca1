#[cfg(test)]
mod scanner_tests {
    use pyc_interpreter as pyc;

    use pyc::scanner::*;
    use pyc::token::*;

    fn assert_token_sequence(source: &str, expected: &[(TokenType, &str)]) {
        let scanner = Scanner::new(source.as_bytes());
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert_eq!(tokens.len(), expected.len());

        for (actual, (expected_type, expected_lexeme)) in tokens.iter().zip(expected.iter()) {
            assert_eq!(actual.token_type, *expected_type);
            assert_eq!(actual.lexeme, *expected_lexeme);
        }
    }

    #[test]
    fn test_scanner_01_symbols() {
        assert_token_sequence(
            "(){}[],;:%",
            &[
                (TokenType::LEFT_PAREN, "("),
                (TokenType::RIGHT_PAREN, ")"),
                (TokenType::LEFT_BRACE, "{"),
                (TokenType::RIGHT_BRACE, "}"),
                (TokenType::LEFT_BRACKET, "["),
                (TokenType::RIGHT_BRACKET, "]"),
                (TokenType::COMMA, ","),
                (TokenType::SEMICOLON, ";"),
                (TokenType::COLON, ":"),
                (TokenType::PERCENT, "%"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_02_operators() {
        assert_token_sequence(
            "+ += - -= * *= / /= = == != < <= > >=",
            &[
                (TokenType::PLUS, "+"),
                (TokenType::PLUS_EQUAL, "+="),
                (TokenType::MINUS, "-"),
                (TokenType::MINUS_EQUAL, "-="),
                (TokenType::STAR, "*"),
                (TokenType::STAR_EQUAL, "*="),
                (TokenType::SLASH, "/"),
                (TokenType::SLASH_EQUAL, "/="),
                (TokenType::EQUAL, "="),
                (TokenType::EQUAL_EQUAL, "=="),
                (TokenType::BANG_EQUAL, "!="),
                (TokenType::LESS, "<"),
                (TokenType::LESS_EQUAL, "<="),
                (TokenType::GREATER, ">"),
                (TokenType::GREATER_EQUAL, ">="),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_03_keywords_and_identifiers() {
        assert_token_sequence(
            "int string array list dict func if while return malloc free numbers",
            &[
                (TokenType::INT, "int"),
                (TokenType::STRING_KW, "string"),
                (TokenType::ARRAY, "array"),
                (TokenType::LIST, "list"),
                (TokenType::DICT, "dict"),
                (TokenType::FUNC, "func"),
                (TokenType::IF, "if"),
                (TokenType::WHILE, "while"),
                (TokenType::RETURN, "return"),
                (TokenType::MALLOC, "malloc"),
                (TokenType::FREE, "free"),
                (TokenType::IDENTIFIER, "numbers"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_04_literals() {
        let source = r#"int x = 42; string y = "Hello";"#;
        let scanner = Scanner::new(source.as_bytes());
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        assert!(tokens
            .iter()
            .any(|t| matches!(t.token_type, TokenType::NUMBER(42))));
        assert!(tokens
            .iter()
            .any(|t| matches!(&t.token_type, TokenType::STRING(s) if s == "Hello")));
    }

    #[test]
    fn test_scanner_05_declaration_statement() {
        assert_token_sequence(
            "array int numbers[5];",
            &[
                (TokenType::ARRAY, "array"),
                (TokenType::INT, "int"),
                (TokenType::IDENTIFIER, "numbers"),
                (TokenType::LEFT_BRACKET, "["),
                (TokenType::NUMBER(5), "5"),
                (TokenType::RIGHT_BRACKET, "]"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_06_comments_and_whitespace() {
        assert_token_sequence(
            "int x; // trailing note\nx += 1;",
            &[
                (TokenType::INT, "int"),
                (TokenType::IDENTIFIER, "x"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::IDENTIFIER, "x"),
                (TokenType::PLUS_EQUAL, "+="),
                (TokenType::NUMBER(1), "1"),
                (TokenType::SEMICOLON, ";"),
                (TokenType::EOF, ""),
            ],
        );
    }

    #[test]
    fn test_scanner_07_line_tracking() {
        let source = "int x;\nint y;\nint z;";
        let scanner = Scanner::new(source.as_bytes());
        let tokens: Vec<_> = scanner.filter_map(Result::ok).collect();

        let z = tokens
            .iter()
            .find(|t| t.lexeme == "z")
            .expect("token 'z' should be scanned");

        assert_eq!(z.line, 3);
    }

    #[test]
    fn test_unexpected_chars_token_sequence() {
        let source = ",;$(#";
        let scanner = Scanner::new(source.as_bytes());

        // Collect all results (both tokens and errors)
        let results: Vec<_> = scanner.collect();

        // We expect this sequence:
        // 0: COMMA ','
        // 1: SEMICOLON ';'
        // 2: Error for '$'
        // 3: LEFT_PAREN '('
        // 4: Error for '#'
        // 5: EOF
        assert_eq!(results.len(), 6, "Expected 6 items in result");

        let error_count = results.iter().filter(|r| r.is_err()).count();
        assert_eq!(error_count, 2, "Expected 2 error messages");

        for err in results.iter().filter_map(|r| r.as_ref().err()) {
            assert!(
                err.to_string().contains("Unexpected character"),
                "Error message should contain 'Unexpected character', got: {}",
                err
            );
        }
    }

    #[test]
    fn test_unterminated_string_is_an_error() {
        let source = "string s = \"oops";
        let scanner = Scanner::new(source.as_bytes());
        let results: Vec<_> = scanner.collect();

        assert!(results
            .iter()
            .any(|r| matches!(r, Err(e) if e.to_string().contains("Unterminated string"))));
    }

    #[test]
    fn test_bare_bang_is_an_error() {
        let scanner = Scanner::new(b"!x");
        let results: Vec<_> = scanner.collect();

        assert!(results.iter().any(|r| r.is_err()));
    }
}
