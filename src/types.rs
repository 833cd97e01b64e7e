use std::fmt; // For custom display formatting

/// One value in the tree the reader produces.
/// This enum is the core data structure for everything the reader returns;
/// printing is its `Display` implementation, so every variant has a total,
/// unambiguous rendering.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Nil,                // Empty input at the top level
    Bool(bool),         // true, false
    Int(i64),           // 42, -7
    Float(f64),         // 1.5, -0.25, 1e3
    Symbol(String),     // e.g. +, variable-name, quote
    Str(String),        // "hello" with the quotes stripped, content verbatim
    List(Vec<Value>),   // (a b c)
    Vector(Vec<Value>), // [a b c]
}

impl Value {
    pub fn symbol(name: &str) -> Value {
        Value::Symbol(name.to_string())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Nil => "nil",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Symbol(_) => "symbol",
            Value::Str(_) => "string",
            Value::List(_) => "list",
            Value::Vector(_) => "vector",
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    let mut first = true;
    for item in items {
        if !first {
            write!(f, " ")?;
        }
        write!(f, "{}", item)?;
        first = false;
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Nil => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            // Debug formatting keeps a fractional marker on integral floats
            // (1.0, not 1), so a printed float reads back as a float.
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Symbol(s) => write!(f, "{}", s),
            // Content is re-emitted exactly as stored; no re-escaping.
            Value::Str(s) => write!(f, "\"{}\"", s),
            Value::List(items) => {
                write!(f, "(")?;
                write_joined(f, items)?;
                write!(f, ")")
            }
            Value::Vector(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
        }
    }
}

/// Render a value back to source text. The structural inverse of reading,
/// not a display formatter: no wrapping, no escaping, single spaces.
pub fn pr_str(value: &Value) -> String {
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_scalars() {
        assert_eq!(pr_str(&Value::Nil), "");
        assert_eq!(pr_str(&Value::Bool(true)), "true");
        assert_eq!(pr_str(&Value::Bool(false)), "false");
        assert_eq!(pr_str(&Value::Int(42)), "42");
        assert_eq!(pr_str(&Value::Int(-7)), "-7");
        assert_eq!(pr_str(&Value::symbol("abc")), "abc");
    }

    #[test]
    fn test_print_floats_keep_fractional_marker() {
        assert_eq!(pr_str(&Value::Float(1.5)), "1.5");
        assert_eq!(pr_str(&Value::Float(1.0)), "1.0");
        assert_eq!(pr_str(&Value::Float(-0.25)), "-0.25");
    }

    #[test]
    fn test_print_string_rewraps_without_escaping() {
        assert_eq!(pr_str(&Value::Str("hi".to_string())), "\"hi\"");
        assert_eq!(pr_str(&Value::Str("".to_string())), "\"\"");
        // Stored content is raw; backslash pairs come back verbatim
        assert_eq!(pr_str(&Value::Str(r"a\nb".to_string())), "\"a\\nb\"");
    }

    #[test]
    fn test_print_containers() {
        let list = Value::List(vec![Value::symbol("+"), Value::Int(1), Value::Int(2)]);
        assert_eq!(pr_str(&list), "(+ 1 2)");
        let vector = Value::Vector(vec![Value::Int(1), Value::Int(2)]);
        assert_eq!(pr_str(&vector), "[1 2]");
        assert_eq!(pr_str(&Value::List(vec![])), "()");
        assert_eq!(pr_str(&Value::Vector(vec![])), "[]");
    }

    #[test]
    fn test_print_nested_containers() {
        let nested = Value::List(vec![Value::Vector(vec![
            Value::Int(1),
            Value::List(vec![Value::symbol("a")]),
        ])]);
        assert_eq!(pr_str(&nested), "([1 (a)])");
    }

    #[test]
    fn test_list_and_vector_are_distinct() {
        let items = vec![Value::Int(1), Value::Int(2)];
        assert_ne!(Value::List(items.clone()), Value::Vector(items));
    }
}
