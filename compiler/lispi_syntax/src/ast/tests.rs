use super::*;
use pretty_assertions::assert_eq;

#[test]
fn name_compares_by_content() {
    assert_eq!(Name::new("x"), Name::new("x"));
    assert_ne!(Name::new("x"), Name::new("y"));
    assert_eq!(Name::new("fact").as_str(), "fact");
}

#[test]
fn name_formats_like_source() {
    assert_eq!(Name::new("my-var").to_string(), "my-var");
    assert_eq!(format!("{:?}", Name::new("a")), "\"a\"");
}

#[test]
fn operator_symbols_round_out() {
    let ops = [
        BinaryOp::Add,
        BinaryOp::Sub,
        BinaryOp::Mul,
        BinaryOp::Div,
        BinaryOp::Eq,
    ];
    let symbols: Vec<String> = ops.iter().map(ToString::to_string).collect();
    assert_eq!(symbols, ["+", "-", "*", "/", "="]);
}

#[test]
fn lambda_bodies_compare_structurally() {
    let a = Expr::lambda(Name::new("x"), Expr::var("x"));
    let b = Expr::lambda(Name::new("x"), Expr::var("x"));
    assert_eq!(a, b);
    assert_ne!(a, Expr::lambda(Name::new("y"), Expr::var("y")));
}
