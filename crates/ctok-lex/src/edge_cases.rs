//! Edge case tests for ctok-lex

#[cfg(test)]
mod tests {
    use crate::{Scanner, Token, TokenCategory};
    use ctok_util::Handler;

    fn scan(line: &str) -> Vec<Token> {
        let handler = Handler::new();
        let mut scanner = Scanner::new(&handler);
        scanner.scan_line(line)
    }

    fn lexemes(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.lexeme.clone()).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_line() {
        assert!(scan("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_line() {
        assert!(scan(" \t \t ").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(scan("x"), vec![Token::new("x", TokenCategory::Identifier)]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let tokens = scan(&name);
        assert_eq!(tokens, vec![Token::new(&name, TokenCategory::Identifier)]);
    }

    #[test]
    fn test_edge_underscore_identifiers() {
        assert_eq!(scan("_"), vec![Token::new("_", TokenCategory::Identifier)]);
        assert_eq!(scan("_tmp"), vec![Token::new("_tmp", TokenCategory::Identifier)]);
        assert_eq!(scan("__LINE"), vec![Token::new("__LINE", TokenCategory::Identifier)]);
    }

    #[test]
    fn test_edge_case_sensitivity() {
        let tokens = scan("Int int");
        assert_eq!(tokens[0], Token::new("Int", TokenCategory::Identifier));
        assert_eq!(tokens[1], Token::new("int", TokenCategory::ReservedWord));
    }

    #[test]
    fn test_edge_all_delimiters() {
        let tokens = scan(";,(){}[].#?");
        assert_eq!(tokens.len(), 11);
        assert!(tokens.iter().all(|t| t.category == TokenCategory::Delimiter));
    }

    #[test]
    fn test_edge_consecutive_operators() {
        assert_eq!(lexemes(&scan("+++")), vec!["++", "+"]);
        assert_eq!(lexemes(&scan("a+++b")), vec!["a", "++", "+", "b"]);
    }

    #[test]
    fn test_edge_shift_operators() {
        assert_eq!(lexemes(&scan("a << 2")), vec!["2", "a", "<<"]);
        assert_eq!(lexemes(&scan("a >> 2")), vec!["2", "a", ">>"]);
    }

    #[test]
    fn test_edge_float_without_integer_part() {
        // `.5` is not a floating literal; the digits and the dot scan
        // separately, number first.
        assert_eq!(lexemes(&scan(".5")), vec!["5", "."]);
    }

    #[test]
    fn test_edge_float_without_fraction_digits() {
        // `5.` is integer then delimiter, not a float.
        let tokens = scan("5.");
        assert_eq!(tokens[0], Token::new("5", TokenCategory::Number));
        assert_eq!(tokens[1], Token::new(".", TokenCategory::Delimiter));
    }

    #[test]
    fn test_edge_empty_char_literal() {
        assert_eq!(scan("''"), vec![Token::new("''", TokenCategory::CharLiteral)]);
    }

    #[test]
    fn test_edge_empty_string_literal() {
        assert_eq!(scan("\"\""), vec![Token::new("\"\"", TokenCategory::StringLiteral)]);
    }

    #[test]
    fn test_edge_define_directive() {
        let tokens = scan("#define MAX 100");
        assert_eq!(
            tokens,
            vec![
                Token::new("#define", TokenCategory::PreprocessorDirective),
                Token::new("100", TokenCategory::Number),
                Token::new("MAX", TokenCategory::Identifier),
            ]
        );
    }

    #[test]
    fn test_edge_bare_hash_is_delimiter() {
        // `#` not followed by a word character is not a directive.
        assert_eq!(scan("#"), vec![Token::new("#", TokenCategory::Delimiter)]);
    }

    #[test]
    fn test_edge_block_comment_surrounded_by_code() {
        let tokens = scan("a /* c */ b");
        assert_eq!(lexemes(&tokens), vec!["/* c */", "a", "b"]);
    }

    #[test]
    fn test_edge_full_declaration_pipeline() {
        let tokens = scan("int mask = 0x1F; // hex");
        assert_eq!(
            tokens,
            vec![
                Token::new("// hex", TokenCategory::Comment),
                Token::new("0x1F", TokenCategory::Number),
                Token::new("int", TokenCategory::ReservedWord),
                Token::new("mask", TokenCategory::Identifier),
                Token::new("=", TokenCategory::Operator),
                Token::new(";", TokenCategory::Delimiter),
            ]
        );
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_hex_prefix_without_digits() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(&handler);
        let tokens = scanner.scan_line("0x");

        // No number matches, so `0` is unrecognized and `x` scans alone.
        assert_eq!(tokens, vec![Token::new("x", TokenCategory::Identifier)]);
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].message, "unrecognized symbol '0'");
    }

    #[test]
    fn test_err_multiple_unrecognized_symbols() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(&handler);
        scanner.scan_line("@ $ `");
        assert_eq!(handler.error_count(), 3);
    }

    #[test]
    fn test_err_colon_is_unrecognized() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(&handler);
        let tokens = scanner.scan_line("default: break;");

        assert!(tokens.contains(&Token::new("default", TokenCategory::ReservedWord)));
        assert!(tokens.contains(&Token::new("break", TokenCategory::ReservedWord)));
        assert_eq!(handler.error_count(), 1);
        assert_eq!(handler.diagnostics()[0].message, "unrecognized symbol ':'");
    }

    #[test]
    fn test_err_diagnostics_accumulate_across_lines() {
        let handler = Handler::new();
        let mut scanner = Scanner::new(&handler);
        scanner.scan_line("@");
        scanner.scan_line("ok();");
        scanner.scan_line("$");

        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 2);
        assert_eq!(diags[0].line, Some(1));
        assert_eq!(diags[1].line, Some(3));
    }

    // ------------------------------------------------------------------------
    // PROPERTY-BASED TESTS - Using proptest for arbitrary inputs
    // ------------------------------------------------------------------------

    #[test]
    fn test_property_arbitrary_identifier_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[a-zA-Z_][a-zA-Z0-9_]{0,100}")| {
            let tokens = scan(&input);
            // Exactly one token: reserved word or identifier.
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(&tokens[0].lexeme, &input);
            if crate::tables::is_reserved_word(&input) {
                prop_assert_eq!(tokens[0].category, TokenCategory::ReservedWord);
            } else {
                prop_assert_eq!(tokens[0].category, TokenCategory::Identifier);
            }
        });
    }

    #[test]
    fn test_property_arbitrary_decimal_number_strings() {
        use proptest::prelude::*;

        proptest!(|(input in "[0-9]{1,20}")| {
            let tokens = scan(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].category, TokenCategory::Number);
        });
    }

    #[test]
    fn test_property_arbitrary_hex_number_strings() {
        use proptest::prelude::*;

        proptest!(|(digits in "[0-9a-fA-F]{1,16}")| {
            let input = format!("0x{}", digits);
            let tokens = scan(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].category, TokenCategory::Number);
        });
    }

    #[test]
    fn test_property_arbitrary_string_literals() {
        use proptest::prelude::*;

        proptest!(|(content in "[a-zA-Z0-9_ ]{0,100}")| {
            let input = format!("\"{}\"", content);
            let tokens = scan(&input);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].category, TokenCategory::StringLiteral);
        });
    }

    #[test]
    fn test_property_scanning_is_idempotent() {
        use proptest::prelude::*;

        proptest!(|(input in "[ -~]{0,60}")| {
            let first = scan(&input);
            let second = scan(&input);
            prop_assert_eq!(first, second);
        });
    }
}
