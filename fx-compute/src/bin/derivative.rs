use fx_compute::numerical::{ctxt::Ctxt, eval::Eval};
use fx_compute::symbolic::{derivative::derivative, simplify::simplify};
use fx_parser::parser::{ast::Expr, Parser};

fn main() {
    let source = std::env::args().nth(1).unwrap_or_else(|| "x^2 + 5x + 6".to_string());

    let mut parser = Parser::new(&source);
    match parser.try_parse_full::<Expr>() {
        Ok(expr) => {
            let simplified = simplify(&expr);
            println!("f(x) = {simplified}");

            match derivative(&simplified).map(|d| simplify(&d)) {
                Some(derived) => println!("f'(x) = {derived}"),
                None => println!("f'(x) = undefined"),
            }

            let ctxt = Ctxt::default();
            for x in [-1.0, 0.0, 1.0, 2.0] {
                match simplified.eval(&ctxt, x) {
                    Some(y) => println!("f({x}) = {y}"),
                    None => println!("f({x}) is undefined"),
                }
            }
        },
        Err(errors) => {
            for error in errors {
                let span = error.span();
                println!("[{}..{}] {}", span.start + 1, span.end + 1, error.message());
            }
        },
    }
}
