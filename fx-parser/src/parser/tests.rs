use pretty_assertions::assert_eq;
use super::*;

use ast::{
    abs::Abs,
    binary::Binary,
    call::Call,
    expr::Expr,
    literal::{LitNum, LitSym},
    paren::Paren,
    sigma::Sigma,
    unary::Unary,
};
use token::op::{BinOp, BinOpKind, UnaryOp, UnaryOpKind};

#[test]
fn literal_int() {
    let mut parser = Parser::new("16");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Literal(LitNum {
        value: 16.0,
        span: 0..2,
    }));
}

#[test]
fn literal_float() {
    let mut parser = Parser::new("3.14");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Literal(LitNum {
        value: 3.14,
        span: 0..4,
    }));
}

#[test]
fn independent_variable() {
    let mut parser = Parser::new("x");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Symbol(LitSym {
        name: "x".to_string(),
        independent: true,
        span: 0..1,
    }));
}

#[test]
fn declared_constant() {
    let mut parser = Parser::new("pi");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Symbol(LitSym {
        name: "pi".to_string(),
        independent: false,
        span: 0..2,
    }));
}

#[test]
fn binary_left_associativity() {
    let mut parser = Parser::new("3 * x * 5");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Binary(Binary {
        lhs: Box::new(Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(LitNum {
                value: 3.0,
                span: 0..1,
            })),
            op: BinOp { kind: BinOpKind::Mul, implicit: false, span: 2..3 },
            rhs: Box::new(Expr::Symbol(LitSym {
                name: "x".to_string(),
                independent: true,
                span: 4..5,
            })),
            span: 0..5,
        })),
        op: BinOp { kind: BinOpKind::Mul, implicit: false, span: 6..7 },
        rhs: Box::new(Expr::Literal(LitNum {
            value: 5.0,
            span: 8..9,
        })),
        span: 0..9,
    }));
}

#[test]
fn binary_right_associativity() {
    let mut parser = Parser::new("1 ^ 2 ^ 3");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Binary(Binary {
        lhs: Box::new(Expr::Literal(LitNum {
            value: 1.0,
            span: 0..1,
        })),
        op: BinOp { kind: BinOpKind::Exp, implicit: false, span: 2..3 },
        rhs: Box::new(Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(LitNum {
                value: 2.0,
                span: 4..5,
            })),
            op: BinOp { kind: BinOpKind::Exp, implicit: false, span: 6..7 },
            rhs: Box::new(Expr::Literal(LitNum {
                value: 3.0,
                span: 8..9,
            })),
            span: 4..9,
        })),
        span: 0..9,
    }));
}

#[test]
fn binary_mixed_precedence() {
    let mut parser = Parser::new("1 + 2 * 3");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Binary(Binary {
        lhs: Box::new(Expr::Literal(LitNum {
            value: 1.0,
            span: 0..1,
        })),
        op: BinOp { kind: BinOpKind::Add, implicit: false, span: 2..3 },
        rhs: Box::new(Expr::Binary(Binary {
            lhs: Box::new(Expr::Literal(LitNum {
                value: 2.0,
                span: 4..5,
            })),
            op: BinOp { kind: BinOpKind::Mul, implicit: false, span: 6..7 },
            rhs: Box::new(Expr::Literal(LitNum {
                value: 3.0,
                span: 8..9,
            })),
            span: 4..9,
        })),
        span: 0..9,
    }));
}

#[test]
fn implicit_multiplication() {
    let mut parser = Parser::new("2(3 + 4)");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Binary(Binary {
        lhs: Box::new(Expr::Literal(LitNum {
            value: 2.0,
            span: 0..1,
        })),
        op: BinOp { kind: BinOpKind::Mul, implicit: true, span: 1..1 },
        rhs: Box::new(Expr::Paren(Paren {
            expr: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(LitNum {
                    value: 3.0,
                    span: 2..3,
                })),
                op: BinOp { kind: BinOpKind::Add, implicit: false, span: 4..5 },
                rhs: Box::new(Expr::Literal(LitNum {
                    value: 4.0,
                    span: 6..7,
                })),
                span: 2..7,
            })),
            span: 1..8,
        })),
        span: 0..8,
    }));
}

#[test]
fn implicit_multiplication_extra() {
    let mut parser = Parser::new("4x^2 + 5x + 1");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Binary(Binary {
        lhs: Box::new(Expr::Binary(Binary {
            lhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(LitNum {
                    value: 4.0,
                    span: 0..1,
                })),
                op: BinOp { kind: BinOpKind::Mul, implicit: true, span: 1..1 },
                rhs: Box::new(Expr::Binary(Binary {
                    lhs: Box::new(Expr::Symbol(LitSym {
                        name: "x".to_string(),
                        independent: true,
                        span: 1..2,
                    })),
                    op: BinOp { kind: BinOpKind::Exp, implicit: false, span: 2..3 },
                    rhs: Box::new(Expr::Literal(LitNum {
                        value: 2.0,
                        span: 3..4,
                    })),
                    span: 1..4,
                })),
                span: 0..4,
            })),
            op: BinOp { kind: BinOpKind::Add, implicit: false, span: 5..6 },
            rhs: Box::new(Expr::Binary(Binary {
                lhs: Box::new(Expr::Literal(LitNum {
                    value: 5.0,
                    span: 7..8,
                })),
                op: BinOp { kind: BinOpKind::Mul, implicit: true, span: 8..8 },
                rhs: Box::new(Expr::Symbol(LitSym {
                    name: "x".to_string(),
                    independent: true,
                    span: 8..9,
                })),
                span: 7..9,
            })),
            span: 0..9,
        })),
        op: BinOp { kind: BinOpKind::Add, implicit: false, span: 10..11 },
        rhs: Box::new(Expr::Literal(LitNum {
            value: 1.0,
            span: 12..13,
        })),
        span: 0..13,
    }));
}

#[test]
fn function_call() {
    let mut parser = Parser::new("sin(2)");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Call(Call {
        name: LitSym {
            name: "sin".to_string(),
            independent: false,
            span: 0..3,
        },
        arg: Box::new(Expr::Literal(LitNum {
            value: 2.0,
            span: 4..5,
        })),
        span: 0..6,
    }));
}

#[test]
fn constant_followed_by_paren_multiplies() {
    // only builtin function names turn `name(...)` into a call; a declared constant multiplies
    let mut parser = Parser::new("pi(2)");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Binary(Binary {
        lhs: Box::new(Expr::Symbol(LitSym {
            name: "pi".to_string(),
            independent: false,
            span: 0..2,
        })),
        op: BinOp { kind: BinOpKind::Mul, implicit: true, span: 2..2 },
        rhs: Box::new(Expr::Paren(Paren {
            expr: Box::new(Expr::Literal(LitNum {
                value: 2.0,
                span: 3..4,
            })),
            span: 2..5,
        })),
        span: 0..5,
    }));
}

#[test]
fn absolute_value() {
    let mut parser = Parser::new("|x - 1|");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Abs(Abs {
        expr: Box::new(Expr::Binary(Binary {
            lhs: Box::new(Expr::Symbol(LitSym {
                name: "x".to_string(),
                independent: true,
                span: 1..2,
            })),
            op: BinOp { kind: BinOpKind::Sub, implicit: false, span: 3..4 },
            rhs: Box::new(Expr::Literal(LitNum {
                value: 1.0,
                span: 5..6,
            })),
            span: 1..6,
        })),
        span: 0..7,
    }));
}

#[test]
fn absolute_values_side_by_side() {
    let mut parser = Parser::new("|x| - |e|");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    let Expr::Binary(binary) = expr else {
        panic!("expected a binary expression");
    };
    assert_eq!(binary.op.kind, BinOpKind::Sub);
    assert!(matches!(*binary.lhs, Expr::Abs(_)));
    assert!(matches!(*binary.rhs, Expr::Abs(_)));
}

#[test]
fn unary_negation_binds_looser_than_power() {
    let mut parser = Parser::new("-x^2");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Unary(Unary {
        operand: Box::new(Expr::Binary(Binary {
            lhs: Box::new(Expr::Symbol(LitSym {
                name: "x".to_string(),
                independent: true,
                span: 1..2,
            })),
            op: BinOp { kind: BinOpKind::Exp, implicit: false, span: 2..3 },
            rhs: Box::new(Expr::Literal(LitNum {
                value: 2.0,
                span: 3..4,
            })),
            span: 1..4,
        })),
        op: UnaryOp { kind: UnaryOpKind::Neg, span: 0..1 },
        span: 0..4,
    }));
}

#[test]
fn unary_factorial() {
    let mut parser = Parser::new("!5");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Unary(Unary {
        operand: Box::new(Expr::Literal(LitNum {
            value: 5.0,
            span: 1..2,
        })),
        op: UnaryOp { kind: UnaryOpKind::Factorial, span: 0..1 },
        span: 0..2,
    }));
}

#[test]
fn summation() {
    let mut parser = Parser::new("sigma(n = 1, 5, n)");
    let expr = parser.try_parse_full::<Expr>().unwrap();

    assert_eq!(expr, Expr::Sigma(Sigma {
        index: LitSym {
            name: "n".to_string(),
            independent: false,
            span: 6..7,
        },
        start: Box::new(Expr::Literal(LitNum {
            value: 1.0,
            span: 10..11,
        })),
        end: Box::new(Expr::Literal(LitNum {
            value: 5.0,
            span: 13..14,
        })),
        body: Box::new(Expr::Symbol(LitSym {
            name: "n".to_string(),
            independent: false,
            span: 16..17,
        })),
        span: 0..18,
    }));
}

#[test]
fn summation_index_does_not_leak() {
    // the index is only recognized inside the body
    let (_, errors) = Parser::new("sigma(n = 1, 5, n) + n").parse_full_recoverable::<Expr>();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "unknown symbol `n`");
}

#[test]
fn summation_shadowed_index() {
    let (_, errors) = Parser::new("sigma(pi = 1, 2, pi)").parse_full_recoverable::<Expr>();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "summation index `pi` is already defined");
}

#[test]
fn summation_malformed_header() {
    // a missing `=` is reported and the summation collapses to an error placeholder, but parsing
    // does not abort
    let (_, errors) = Parser::new("sigma(n 1, 5, n)").parse_full_recoverable::<Expr>();
    assert!(!errors.is_empty());
    assert_eq!(errors[0].message(), "unexpected token");
}

#[test]
fn unclosed_parenthesis_single_diagnostic() {
    let mut parser = Parser::new("(1 + 2");
    let errors = parser.try_parse_full::<Expr>().unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "unclosed parenthesis");
    assert_eq!(errors[0].span(), 0..1);
}

#[test]
fn unknown_symbol_diagnostic() {
    let (expr, errors) = Parser::new("y + 1").parse_full_recoverable::<Expr>();

    // the tree is still produced
    assert!(matches!(expr, Expr::Binary(_)));
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "unknown symbol `y`");
    assert_eq!(errors[0].span(), 0..1);
}

#[test]
fn unknown_symbol_in_calculator_mode() {
    // without an independent variable, `x` is just another unknown name
    let (_, errors) = Parser::with_independent("x + 1", None).parse_full_recoverable::<Expr>();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message(), "unknown symbol `x`");
}

#[test]
fn bare_function_name_is_not_an_unknown_symbol() {
    let (_, errors) = Parser::new("sin + 1").parse_full_recoverable::<Expr>();
    assert!(errors.is_empty());
}

#[test]
fn lexical_errors_are_surfaced() {
    let (_, errors) = Parser::new("1 + $").parse_full_recoverable::<Expr>();
    assert!(errors.iter().any(|error| error.message() == "unknown character `$`"));
}

#[test]
fn display_round_trips() {
    let mut parser = Parser::new("2x^2 + sin(x) - 3");
    let expr = parser.try_parse_full::<Expr>().unwrap();
    assert_eq!(expr.to_string(), "2*x^(2) + sin(x) - 3");

    // rendering an implicit product of a coefficient and a symbol drops the glyph
    let mut parser = Parser::new("2x");
    let expr = parser.try_parse_full::<Expr>().unwrap();
    assert_eq!(expr.to_string(), "2x");

    // the rendered form parses back cleanly
    let mut parser = Parser::new("2*x^(2) + sin(x) - 3");
    assert!(parser.try_parse_full::<Expr>().is_ok());
}

#[test]
fn implicit_and_explicit_multiplication_parse_alike() {
    let implicit = Parser::new("2x").try_parse_full::<Expr>().unwrap();
    let explicit = Parser::new("2 * x").try_parse_full::<Expr>().unwrap();

    let (Expr::Binary(implicit), Expr::Binary(explicit)) = (implicit, explicit) else {
        panic!("expected binary expressions");
    };
    assert_eq!(implicit.op.kind, explicit.op.kind);
    assert_eq!(*implicit.lhs, Expr::Literal(LitNum { value: 2.0, span: 0..1 }));
    assert!(matches!(*implicit.rhs, Expr::Symbol(_)));
    assert!(matches!(*explicit.rhs, Expr::Symbol(_)));
}
