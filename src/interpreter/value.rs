use std::{collections::BTreeMap, fmt, rc::Rc};

/// Represents a runtime value in the interpreter.
///
/// Values are immutable once built. Objects share their property map through
/// an `Rc`, so cloning a value never copies the map.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Numeric(f64),
    /// The absence of a value. Produced by `null`, by `met x fin`, and by
    /// arithmetic on non-numeric operands.
    Null,
    /// A boolean value. There are no boolean literals; hosts bind `vrai` and
    /// `faux` through [`Environment::with_builtins`].
    ///
    /// [`Environment::with_builtins`]: crate::interpreter::environment::Environment::with_builtins
    Boolean(bool),
    /// A mapping from property names to values.
    Object(Rc<BTreeMap<String, Self>>),
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(properties: BTreeMap<String, Self>) -> Self {
        Self::Object(Rc::new(properties))
    }
}

impl Value {
    /// Looks up a property if `self` is an object.
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&Self> {
        match self {
            Self::Object(properties) => properties.get(key),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Null => write!(f, "null"),
            Self::Boolean(true) => write!(f, "vrai"),
            Self::Boolean(false) => write!(f, "faux"),
            Self::Object(properties) => {
                if properties.is_empty() {
                    return write!(f, "{{}}");
                }
                write!(f, "{{ ")?;

                for (index, (key, value)) in properties.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{key}: {value}")?;
                }

                write!(f, " }}")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn numbers_print_without_trailing_zero() {
        assert_eq!(Value::Numeric(5.0).to_string(), "5");
        assert_eq!(Value::Numeric(2.5).to_string(), "2.5");
        assert_eq!(Value::Numeric(-0.125).to_string(), "-0.125");
    }

    #[test]
    fn objects_print_sorted_and_nested() {
        let inner = Value::from(BTreeMap::from([("z".to_string(), Value::Null)]));
        let outer = Value::from(BTreeMap::from([("b".to_string(), Value::Boolean(true)),
                                                ("a".to_string(), inner)]));

        assert_eq!(outer.to_string(), "{ a: { z: null }, b: vrai }");
        assert_eq!(Value::from(BTreeMap::new()).to_string(), "{}");
    }

    #[test]
    fn clones_share_object_storage() {
        let object = Value::from(BTreeMap::from([("k".to_string(), Value::Numeric(1.0))]));
        let copy = object.clone();

        match (&object, &copy) {
            (Value::Object(a), Value::Object(b)) => assert!(Rc::ptr_eq(a, b)),
            _ => unreachable!(),
        }
        assert_eq!(copy.property("k"), Some(&Value::Numeric(1.0)));
    }
}
