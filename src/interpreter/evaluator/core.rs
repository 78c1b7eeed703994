use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    ast::{Expr, Program, Property, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, evaluator::binary::eval_binary, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates every statement of a program in order.
///
/// The result is the value of the last statement. An empty program evaluates
/// to [`Value::Null`].
///
/// Evaluation stops at the first error. Declarations and assignments made by
/// earlier statements stay in `env`.
///
/// # Example
/// ```
/// use francois::{Environment, Value, interpreter::evaluator::core::evaluate, produce_ast};
///
/// let mut env = Environment::new();
/// let program = produce_ast("met a dans 5 fin a * 2").unwrap();
///
/// assert_eq!(evaluate(&program, &mut env).unwrap(), Value::Numeric(10.0));
/// ```
pub fn evaluate(program: &Program, env: &mut Environment) -> EvalResult<Value> {
    let mut last = Value::Null;
    for statement in &program.body {
        last = eval_statement(statement, env)?;
    }
    Ok(last)
}

/// Evaluates a single statement.
///
/// A declaration binds its initializer (or null) in the current scope and
/// yields the bound value; an expression statement yields the expression's
/// value.
pub fn eval_statement(statement: &Statement, env: &mut Environment) -> EvalResult<Value> {
    match statement {
        Statement::VariableDeclaration { constant,
                                         name,
                                         value,
                                         line, } => {
            let value = match value {
                Some(expr) => eval_expr(expr, env)?,
                None => Value::Null,
            };
            let declared = if *constant {
                env.declare_constant(name, value)
            } else {
                env.declare(name, value)
            };
            declared.map_err(|e| RuntimeError::name(e, *line))
        },
        Statement::Expression(expr) => eval_expr(expr, env),
    }
}

/// Evaluates an expression and returns the resulting value.
///
/// The evaluator dispatches on the expression variant. The tree is never
/// modified; the environment changes only through assignments.
///
/// Calls and member accesses are parsed but not evaluated: they yield
/// [`Value::Null`] without evaluating their operands.
pub fn eval_expr(expr: &Expr, env: &mut Environment) -> EvalResult<Value> {
    match expr {
        Expr::NumericLiteral { value, .. } => Ok(Value::Numeric(*value)),
        Expr::NullLiteral { .. } => Ok(Value::Null),
        Expr::Identifier { name, line } => env.get(name).map_err(|e| RuntimeError::name(e, *line)),
        Expr::Assignment { assignee,
                           value,
                           line, } => eval_assignment(assignee, value, *line, env),
        Expr::BinaryOp { left,
                         op,
                         right,
                         line, } => {
            let left = eval_expr(left, env)?;
            let right = eval_expr(right, env)?;
            eval_binary(*op, &left, &right, *line)
        },
        Expr::ObjectLiteral { properties, .. } => eval_object_literal(properties, env),
        Expr::Call { line, .. } | Expr::Member { line, .. } => {
            debug!(line, kind = expr.kind_name(), "not evaluated, yielding null");
            Ok(Value::Null)
        },
    }
}

/// Evaluates `assignee dans value`.
///
/// The assignee is checked before the value is evaluated, so a bad target
/// has no side effects.
///
/// # Errors
/// - `InvalidAssignmentTarget` if the assignee is not an identifier.
/// - `Name` if the variable is undeclared or constant.
fn eval_assignment(assignee: &Expr,
                   value: &Expr,
                   line: usize,
                   env: &mut Environment)
                   -> EvalResult<Value> {
    let Some(name) = assignee.as_identifier() else {
        return Err(RuntimeError::InvalidAssignmentTarget { target: assignee.kind_name(),
                                                           line });
    };
    let value = eval_expr(value, env)?;
    env.set(name, value).map_err(|e| RuntimeError::name(e, line))
}

/// Builds an object from its properties, evaluated in source order.
///
/// A repeated key overwrites the earlier one.
fn eval_object_literal(properties: &[Property], env: &mut Environment) -> EvalResult<Value> {
    let mut object = BTreeMap::new();
    for property in properties {
        let value = eval_expr(&property.value, env)?;
        object.insert(property.key.clone(), value);
    }
    Ok(Value::from(object))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{interpreter::environment::EnvironmentError, produce_ast};

    fn eval_in(source: &str, env: &mut Environment) -> EvalResult<Value> {
        let program = produce_ast(source).unwrap();
        evaluate(&program, env)
    }

    fn eval(source: &str) -> EvalResult<Value> {
        eval_in(source, &mut Environment::new())
    }

    #[test]
    fn arithmetic_scenarios() {
        assert_eq!(eval("1 + 2 * 3"), Ok(Value::Numeric(7.0)));
        assert_eq!(eval("(1 + 2) * 3"), Ok(Value::Numeric(9.0)));
        assert_eq!(eval("7 % 2"), Ok(Value::Numeric(1.0)));
        assert_eq!(eval("10 - 4 - 3"), Ok(Value::Numeric(3.0)));
        assert_eq!(eval("2.5 * 4 / 5"), Ok(Value::Numeric(2.0)));
    }

    #[test]
    fn declared_variable_is_readable() {
        let mut env = Environment::new();

        eval_in("met a dans 5 fin", &mut env).unwrap();
        assert_eq!(eval_in("a", &mut env), Ok(Value::Numeric(5.0)));
    }

    #[test]
    fn declaration_yields_the_bound_value() {
        assert_eq!(eval("met a dans 2 * 4 fin"), Ok(Value::Numeric(8.0)));
        assert_eq!(eval("met a fin"), Ok(Value::Null));
    }

    #[test]
    fn empty_program_is_null() {
        assert_eq!(eval(""), Ok(Value::Null));
    }

    #[test]
    fn redeclaration_is_a_name_error() {
        assert_eq!(eval("met a dans 1 fin\nmet a dans 2 fin"),
                   Err(RuntimeError::Name { source: EnvironmentError::AlreadyDeclared { name:
                                                                                         "a".to_string(), },
                                            line:   2, }));
    }

    #[test]
    fn unknown_variables_are_name_errors() {
        assert!(matches!(eval("b + 1"),
                         Err(RuntimeError::Name { source: EnvironmentError::Undeclared { .. },
                                                  .. })));
        assert!(matches!(eval("b dans 1"),
                         Err(RuntimeError::Name { source: EnvironmentError::Undeclared { .. },
                                                  .. })));
    }

    #[test]
    fn assignment_updates_and_yields_the_value() {
        let mut env = Environment::new();

        assert_eq!(eval_in("met a dans 1 fin a dans a + 1", &mut env),
                   Ok(Value::Numeric(2.0)));
        assert_eq!(env.get("a"), Ok(Value::Numeric(2.0)));
    }

    #[test]
    fn chained_assignment_sets_every_target() {
        let mut env = Environment::new();

        eval_in("met a fin met b fin a dans b dans 3", &mut env).unwrap();
        assert_eq!(env.get("a"), Ok(Value::Numeric(3.0)));
        assert_eq!(env.get("b"), Ok(Value::Numeric(3.0)));
    }

    #[test]
    fn assignment_target_must_be_an_identifier() {
        let mut env = Environment::new();
        env.declare("x", Value::Numeric(0.0)).unwrap();

        assert_eq!(eval_in("1 dans x dans 5", &mut env),
                   Err(RuntimeError::InvalidAssignmentTarget { target: "numeric literal",
                                                               line:   1, }));
        // The value side was never evaluated.
        assert_eq!(env.get("x"), Ok(Value::Numeric(0.0)));
    }

    #[test]
    fn constants_reject_assignment() {
        assert!(matches!(eval("const c dans 1 fin c dans 2"),
                         Err(RuntimeError::Name { source: EnvironmentError::ConstantReassignment { .. },
                                                  .. })));
    }

    #[test]
    fn object_literal_evaluates_its_properties() {
        let expected = Value::from(BTreeMap::from([("a".to_string(), Value::Numeric(1.0)),
                                                   ("b".to_string(), Value::Numeric(2.0))]));

        assert_eq!(eval("{ a : 1, b : 2 }"), Ok(expected));
    }

    #[test]
    fn duplicate_object_keys_keep_the_last_value() {
        let value = eval("{ a : 1, a : 2 }").unwrap();

        assert_eq!(value.property("a"), Some(&Value::Numeric(2.0)));
    }

    #[test]
    fn arithmetic_with_non_numbers_is_null() {
        let mut env = Environment::with_builtins();

        assert_eq!(eval_in("vrai + 1", &mut env), Ok(Value::Null));
        assert_eq!(eval_in("null * 2", &mut env), Ok(Value::Null));
        assert_eq!(eval_in("met o dans { a : 1 } fin o - 1", &mut env), Ok(Value::Null));
    }

    #[test]
    fn calls_and_members_are_null_stubs() {
        assert_eq!(eval("f(1, 2)"), Ok(Value::Null));
        assert_eq!(eval("o.p"), Ok(Value::Null));
        assert_eq!(eval("o[1 + 1]"), Ok(Value::Null));
    }

    #[test]
    fn errors_keep_earlier_declarations() {
        let mut env = Environment::new();

        assert!(eval_in("met a dans 1 fin 5 % 0", &mut env).is_err());
        assert_eq!(env.get("a"), Ok(Value::Numeric(1.0)));
    }

    #[test]
    fn evaluation_does_not_touch_the_tree() {
        let program = produce_ast("met a dans 1 fin a dans a + 1").unwrap();
        let before = program.clone();

        evaluate(&program, &mut Environment::new()).unwrap();
        assert_eq!(program, before);
    }
}
