use std::fs;

use treecalc::{
    error::{EvalError, ParseError},
    evaluate, get_result,
    interpreter::{lexer::Token, visitor::Visitor},
    parse, render_prefix, tokenize,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            count += 1;

            let (src, expected) = line.split_once("=>")
                                      .unwrap_or_else(|| {
                                          panic!("Malformed case on line {} of {path:?}: {line}",
                                                 lineno + 1)
                                      });
            let expected: i64 = expected.trim().parse().unwrap_or_else(|e| {
                                                           panic!("Bad expected value on line {} of {path:?}: {e}",
                                                                  lineno + 1)
                                                       });

            match get_result(src.trim()) {
                Ok(value) => assert_eq!(value,
                                        expected,
                                        "case on line {} of {path:?}: {src}",
                                        lineno + 1),
                Err(e) => panic!("Case on line {} of {path:?} failed: {src}\nError: {e}",
                                 lineno + 1),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_evaluates(src: &str, expected: i64) {
    match get_result(src) {
        Ok(value) => assert_eq!(value, expected, "wrong result for {src:?}"),
        Err(e) => panic!("Expression {src:?} failed: {e}"),
    }
}

fn assert_renders(src: &str, expected: &str) {
    let tree = parse(src).unwrap_or_else(|e| panic!("Expression {src:?} failed to parse: {e}"));
    assert_eq!(render_prefix(&tree), expected, "wrong rendering for {src:?}");
}

fn assert_syntax_error(src: &str) {
    match parse(src) {
        Ok(tree) => panic!("Expression {src:?} parsed but was expected to fail: {tree:?}"),
        Err(ParseError::Lex(e)) => {
            panic!("Expression {src:?} failed in the lexer instead of the parser: {e}")
        },
        Err(ParseError::Syntax(_)) => {},
    }
}

#[test]
fn tokenization_classifies_and_orders() {
    let tokens: Result<Vec<_>, _> = tokenize("3 + 4 * 5").collect();
    assert_eq!(tokens.unwrap(),
               vec![Token::Number(3),
                    Token::Plus,
                    Token::Number(4),
                    Token::Times,
                    Token::Number(5)]);
}

#[test]
fn tokenization_needs_no_whitespace() {
    let tokens: Result<Vec<_>, _> = tokenize("(2+3)/4").collect();
    assert_eq!(tokens.unwrap(),
               vec![Token::LeftParen,
                    Token::Number(2),
                    Token::Plus,
                    Token::Number(3),
                    Token::RightParen,
                    Token::Divide,
                    Token::Number(4)]);
    assert_evaluates("2+3", 5);
}

#[test]
fn empty_input_is_an_empty_token_stream_but_no_tree() {
    assert_eq!(tokenize("").count(), 0);
    assert_syntax_error("");
    assert_syntax_error("   ");
}

#[test]
fn unrecognized_character_reports_offset() {
    let err = tokenize("2 + x * 3").last().unwrap().unwrap_err();
    assert_eq!(err.character, 'x');
    assert_eq!(err.offset, 4);

    // The same failure surfaces unchanged through a parse.
    match parse("2 + x * 3") {
        Err(ParseError::Lex(e)) => assert_eq!(e, err),
        other => panic!("Expected a lexing failure, got {other:?}"),
    }
}

#[test]
fn precedence_nests_products_inside_sums() {
    assert_evaluates("2 + 3 * 4", 14);
    assert_renders("2 + 3 * 4", "(+ 2 (* 3 4))");
    assert_evaluates("2 * 3 + 4", 10);
    assert_renders("2 * 3 + 4", "(+ (* 2 3) 4)");
}

#[test]
fn same_precedence_operators_associate_left() {
    assert_evaluates("8 - 3 - 2", 3);
    assert_renders("8 - 3 - 2", "(- (- 8 3) 2)");
    assert_evaluates("24 / 4 / 2", 3);
    assert_renders("24 / 4 / 2", "(// (// 24 4) 2)");
}

#[test]
fn parentheses_override_precedence() {
    assert_evaluates("2 + (3 + 4) * 5", 37);
    assert_renders("2 + (3 + 4) * 5", "(+ 2 (* (+ 3 4) 5))");
    assert_evaluates("(2 + 3) * 4", 20);
}

#[test]
fn division_is_floor_division() {
    assert_evaluates("7 / 2", 3);
    assert_evaluates("(0 - 7) / 2", -4);
    assert_evaluates("7 / (0 - 2)", -4);
    assert_evaluates("(0 - 7) / (0 - 2)", 3);
    assert_renders("7 / 2", "(// 7 2)");
}

#[test]
fn division_by_zero_fails_only_at_evaluation() {
    let tree = parse("5 / 0").expect("'5 / 0' is syntactically valid");
    assert_eq!(render_prefix(&tree), "(// 5 0)");
    assert_eq!(evaluate(&tree), Err(EvalError::DivisionByZero));

    // The failure propagates out of an enclosing expression too.
    let tree = parse("1 + 5 / 0").unwrap();
    assert_eq!(evaluate(&tree), Err(EvalError::DivisionByZero));
}

#[test]
fn malformed_input_is_a_syntax_error() {
    assert_syntax_error("2 + (3 + * 4)");
    assert_syntax_error("2 +");
    assert_syntax_error("* 2");
    assert_syntax_error("2 3");
}

#[test]
fn unbalanced_parentheses_are_a_syntax_error() {
    assert_syntax_error("(2 + 3");
    assert_syntax_error("2 + 3)");
    assert_syntax_error("()");
}

#[test]
fn evaluation_is_pure_and_repeatable() {
    let tree = parse("2 + (3 + 4) * 5").unwrap();
    let copy = tree.clone();

    assert_eq!(evaluate(&tree).unwrap(), 37);
    assert_eq!(evaluate(&tree).unwrap(), 37);
    assert_eq!(render_prefix(&tree), render_prefix(&copy));
    assert_eq!(tree, copy);
}

#[test]
fn visitors_traverse_left_before_right() {
    use treecalc::ast::{BinaryOperator, Expr};

    /// Collects leaf values in traversal order.
    struct LeafOrder(Vec<i64>);

    impl Visitor<()> for LeafOrder {
        fn visit_number(&mut self, value: i64) {
            self.0.push(value);
        }

        fn visit_binary_op(&mut self, _op: BinaryOperator, left: &Expr, right: &Expr) {
            left.accept(self);
            right.accept(self);
        }
    }

    let tree = parse("2 + (3 + 4) * 5").unwrap();
    let mut order = LeafOrder(Vec::new());
    tree.accept(&mut order);
    assert_eq!(order.0, vec![2, 3, 4, 5]);
}
