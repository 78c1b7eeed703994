use std::{fs, path::Path};

use francois::{Environment, Error, ParseError, RuntimeError, TokenKind, Value, run, tokenize};
use walkdir::WalkDir;

fn eval(src: &str) -> Result<Value, Error> {
    run(src, &mut Environment::with_builtins())
}

fn assert_value(src: &str, expected: &str) {
    match eval(src) {
        Ok(value) => assert_eq!(value.to_string(), expected, "script: {src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match eval(src) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn script_files_produce_expected_values() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "fr"))
    {
        let path = entry.path();
        let script =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = read_expected(path);

        count += 1;
        match eval(&script) {
            Ok(value) => assert_eq!(value.to_string(), expected, "in {path:?}"),
            Err(e) => panic!("Script {path:?} failed:\n{script}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn read_expected(script: &Path) -> String {
    let path = script.with_extension("expected");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Missing {path:?}: {e}"))
                             .trim_end()
                             .to_string()
}

#[test]
fn declaration_and_lookup() {
    assert_value("met a dans 5 fin\na", "5");
    assert_value("met a fin a", "null");
    assert_value("const pi dans 3.14159 fin pi * 2", "6.28318");
}

#[test]
fn precedence_and_grouping() {
    assert_value("1 + 2 * 3", "7");
    assert_value("(1 + 2) * 3", "9");
    assert_value("2 * (3 + 4) - 10 / 4", "11.5");
    assert_value("7 % 2", "1");
    assert_value("17 % 5 * 2", "4");
}

#[test]
fn session_state_persists_between_runs() {
    let mut env = Environment::with_builtins();

    run("met compteur dans 1 fin", &mut env).unwrap();
    run("compteur dans compteur + 1", &mut env).unwrap();
    assert_eq!(run("compteur", &mut env).unwrap(), Value::Numeric(2.0));
}

#[test]
fn booleans_come_from_builtins() {
    assert_value("vrai", "vrai");
    assert_value("faux", "faux");
    assert!(run("vrai", &mut Environment::new()).is_err());
}

#[test]
fn objects() {
    assert_value("{ a : 1, b : 2 }", "{ a: 1, b: 2 }");
    assert_value("met x dans 4 fin { carre : x * x, moitie : x / 2 }", "{ carre: 16, moitie: 2 }");
    assert_value("{ dedans : { v : null } }", "{ dedans: { v: null } }");
}

#[test]
fn constant_without_initializer_fails_to_parse() {
    assert!(matches!(assert_failure("const x fin"),
                     Error::Parse(ParseError::MissingConstantInitializer { .. })));
}

#[test]
fn redeclaration_fails() {
    assert!(matches!(assert_failure("met a dans 1 fin met a dans 2 fin"),
                     Error::Runtime(RuntimeError::Name { .. })));
}

#[test]
fn invalid_assignment_target_fails_at_evaluation() {
    assert!(matches!(assert_failure("met a fin (a + 1) dans 2"),
                     Error::Runtime(RuntimeError::InvalidAssignmentTarget { .. })));
}

#[test]
fn modulo_by_zero_fails() {
    assert!(matches!(assert_failure("5 % 0.9"),
                     Error::Runtime(RuntimeError::ModuloByZero { .. })));
}

#[test]
fn modulo_of_large_integers() {
    assert_value("100000000000000000 % 30000000000000000", "10000000000000000");
}

#[test]
fn words_with_a_letter_are_names() {
    assert_value("met 2x dans 3 fin 2x * 2", "6");
    assert_value("met 1e5 fin 1e5", "null");
}

#[test]
fn syntax_errors() {
    assert_failure("(1 + 2");
    assert_failure("{ a : 1, }");
    assert_failure("met dans 1 fin");
    assert_failure("1 + ");
    assert_failure("a.1");
    assert_failure("x = 5");
}

#[test]
fn error_messages_name_the_line() {
    let error = assert_failure("met a dans 1 fin\n\nb");

    assert_eq!(error.to_string(), "Error on line 3: Unknown variable 'b'.");
}

#[test]
fn tokenize_is_total() {
    for source in ["", "§§§", "met met met", "((((", "1.2.3", "\u{0}"] {
        let tokens = tokenize(source);

        assert_eq!(tokens.iter().filter(|t| t.kind == TokenKind::Eof).count(), 1);
    }
}
