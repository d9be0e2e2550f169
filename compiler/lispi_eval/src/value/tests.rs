use super::*;
use pretty_assertions::assert_eq;

fn identity() -> Value {
    Value::closure(
        Environment::new(),
        Name::new("x"),
        Arc::new(Expr::var("x")),
    )
}

#[test]
fn display() {
    assert_eq!(Value::Number(42).to_string(), "42");
    assert_eq!(Value::Number(-7).to_string(), "-7");
    assert_eq!(Value::Bool(true).to_string(), "#t");
    assert_eq!(Value::Bool(false).to_string(), "#f");
    assert_eq!(identity().to_string(), "#<procedure (x)>");
}

#[test]
fn debug() {
    assert_eq!(format!("{:?}", Value::Number(3)), "Number(3)");
    assert_eq!(format!("{:?}", Value::Bool(false)), "Bool(false)");
    assert_eq!(format!("{:?}", identity()), "Closure(x)");
}

#[test]
fn type_names() {
    assert_eq!(Value::Number(0).type_name(), "number");
    assert_eq!(Value::Bool(true).type_name(), "boolean");
    assert_eq!(identity().type_name(), "procedure");
}

#[test]
fn equality_by_value_for_scalars() {
    assert_eq!(Value::Number(3), Value::Number(3));
    assert_eq!(Value::Bool(true), Value::Bool(true));
    assert_ne!(Value::Number(1), Value::Number(2));
}

#[test]
fn different_kinds_are_unequal() {
    assert_ne!(Value::Number(1), Value::Bool(true));
    assert_ne!(Value::Number(0), Value::Bool(false));
    assert_ne!(identity(), Value::Number(0));
}

#[test]
fn closures_compare_by_identity() {
    let f = identity();
    assert_eq!(f.clone(), f);
    assert_ne!(identity(), identity());
}

#[test]
fn values_cross_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Value>();
}
