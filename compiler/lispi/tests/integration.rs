// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! End-to-end tests: source text in, values or errors out.

use lispi::{evaluate, interpret, Config, Error, EvalError, Interpreter, SyntaxError, Value};

fn eval_ok(source: &str) -> Value {
    evaluate(source).unwrap_or_else(|e| panic!("evaluation of {source:?} failed: {e}"))
}

fn eval_err(source: &str) -> Error {
    match evaluate(source) {
        Ok(value) => panic!("expected {source:?} to fail, got {value}"),
        Err(e) => e,
    }
}

fn num(n: i64) -> Value {
    Value::Number(n)
}

const FACTORIAL: &str = "
(((lambda (x) (x x))
 (lambda (fact)
   (lambda (n)
     (if (= n 0)
         1
         (* n ((fact fact) (- n 1))))))) 5)
";

mod expressions {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn arithmetic() {
        assert_eq!(eval_ok("(+ 1 (+ 4 (- 0 -2)))"), num(7));
        assert_eq!(eval_ok("(/ 18 (- 1 (* -2 4)))"), num(2));
    }

    #[test]
    fn let_bindings() {
        assert_eq!(eval_ok("(let ([a 3]) (+ a -2))"), num(1));
        assert_eq!(eval_ok("(let ([a 3]) (let ([b a]) (- b (+ a 2))))"), num(-2));
    }

    #[test]
    fn let_initializer_may_be_a_let() {
        assert_eq!(
            eval_ok("(let ([a (let ([b 4]) (- b 1))]) (* a a))"),
            num(9)
        );
    }

    #[test]
    fn lambda_application() {
        assert_eq!(eval_ok("((lambda (a) (+ a 1)) 3)"), num(4));
    }

    #[test]
    fn lambda_bound_with_let_and_called_by_name() {
        assert_eq!(
            eval_ok("(let ([double (lambda (n) (* n 2))]) (double 21))"),
            num(42)
        );
    }

    #[test]
    fn lexical_scoping() {
        assert_eq!(
            eval_ok("(let ([x 2]) (let ([f (lambda (y) (* x y))]) (let ([x 4]) (f 3))))"),
            num(6)
        );
    }

    #[test]
    fn conditionals() {
        assert_eq!(eval_ok("(if #t 1 2)"), num(1));
        assert_eq!(eval_ok("(if #f 1 2)"), num(2));
        assert_eq!(eval_ok("((lambda (x) (if (= x 1) 1 2)) 3)"), num(2));
    }

    #[test]
    fn untaken_branch_is_never_evaluated() {
        assert_eq!(eval_ok("(if #t 7 (undefined 0))"), num(7));
        assert_eq!(eval_ok("(if #f (/ 1 0) 8)"), num(8));
    }

    #[test]
    fn factorial_by_self_application() {
        assert_eq!(eval_ok(FACTORIAL), num(120));
    }

    #[test]
    fn whitespace_is_insignificant() {
        assert_eq!(
            eval_ok("(let\n\t([a\t3])\n  (+\ta\n-2))"),
            eval_ok("(let ([a 3]) (+ a -2))")
        );
    }

    #[test]
    fn adjacent_forms_need_no_whitespace() {
        assert_eq!(eval_ok("((lambda (a) (* a a))(+ 1 2))"), num(9));
    }

    #[test]
    fn bare_binding_form() {
        assert_eq!(eval_ok("(let [a 5] a)"), num(5));
    }
}

mod failures {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unbound_variable() {
        match eval_err("(+ a 1)") {
            Error::Eval(EvalError::UnboundVariable(name)) => assert_eq!(name.as_str(), "a"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn apply_non_function() {
        assert!(matches!(
            eval_err("(1 2)"),
            Error::Eval(EvalError::ApplyNonFunction(Value::Number(1)))
        ));
    }

    #[test]
    fn type_mismatch() {
        assert!(matches!(
            eval_err("(* #t 2)"),
            Error::Eval(EvalError::TypeMismatch { .. })
        ));
        assert!(matches!(
            eval_err("(if (lambda (x) x) 1 2)"),
            Error::Eval(EvalError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn malformed_forms() {
        for source in [
            "()",
            "(let ([a 1]))",
            "(lambda x x)",
            "(lambda (a b) a)",
            "(if #t 1)",
            "(+ 1 2 3)",
            "(f 1 2)",
            "(1 2",
            "let",
            "$",
        ] {
            assert!(
                matches!(eval_err(source), Error::Syntax(_)),
                "{source:?} should be a syntax error"
            );
        }
    }

    #[test]
    fn messages_carry_codes() {
        let err = eval_err("(/ 10 0)");
        assert_eq!(err.code(), Some("E6004"));
        assert_eq!(err.to_string(), "division of 10 by zero");

        let err = eval_err("(if #t 1)");
        assert_eq!(err.code(), Some("E1008"));
    }
}

mod programs {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn independent_expressions() {
        assert_eq!(
            interpret("(+ 1 2) ((lambda (x) (if (= x 1) 1 2)) 0)").unwrap(),
            vec![num(3), num(2)]
        );
    }

    #[test]
    fn multiline_program() {
        let source = "
            (let ([a 1])
              (+ a 1))

            (if (= 2 2)
                #t
                #f)
        ";
        assert_eq!(interpret(source).unwrap(), vec![num(2), Value::Bool(true)]);
    }

    #[test]
    fn first_failing_expression_aborts() {
        assert!(matches!(
            interpret("1 (+ missing 1) (1 2)").unwrap_err(),
            Error::Eval(EvalError::UnboundVariable(_))
        ));
        assert!(matches!(
            interpret("1 (1 2) (+ missing 1)").unwrap_err(),
            Error::Eval(EvalError::ApplyNonFunction(_))
        ));
    }

    #[test]
    fn syntax_errors_surface_from_the_splitter() {
        assert!(matches!(
            interpret("(+ 1 2)) 3").unwrap_err(),
            Error::Syntax(SyntaxError::Unbalanced(_))
        ));
    }

    #[test]
    fn parallel_mode_matches_sequential() {
        let source = format!("{FACTORIAL} (+ 1 2) (let ([a 3]) (+ a -2)) #f {FACTORIAL}");
        let parallel = Interpreter::new(Config::default().with_parallel(true));
        assert_eq!(
            parallel.run(&source).unwrap(),
            interpret(&source).unwrap()
        );
        assert_eq!(
            parallel.run(&source).unwrap(),
            vec![num(120), num(3), num(1), Value::Bool(false), num(120)]
        );
    }

    #[test]
    fn parallel_mode_reports_the_same_failure() {
        let source = "(+ 1 1) (if 3 4 5) (/ 1 0)";
        let parallel = Interpreter::new(Config::default().with_parallel(true))
            .run(source)
            .unwrap_err();
        let sequential = interpret(source).unwrap_err();
        assert_eq!(parallel.to_string(), sequential.to_string());
        assert_eq!(parallel.code(), Some("E6003"));
    }

    #[test]
    fn deep_recursion_needs_no_depth_limit() {
        let sum = "
(((lambda (x) (x x))
 (lambda (self)
   (lambda (n)
     (if (= n 0) 0 (+ n ((self self) (- n 1))))))) 40000)
";
        assert_eq!(evaluate(sum).unwrap(), num(800_020_000));
    }

    #[test]
    fn runaway_recursion_is_reported() {
        let interpreter = Interpreter::new(Config::default().with_max_depth(2_000));
        assert!(matches!(
            interpreter
                .run("((lambda (x) (x x)) (lambda (x) (x x)))")
                .unwrap_err(),
            Error::Eval(EvalError::RecursionLimit { limit: 2_000 })
        ));
    }
}
