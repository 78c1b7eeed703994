use std::{fmt, str::FromStr};

/// A parsed program: the ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order.
    pub body: Vec<Statement>,
}

/// Represents a top-level statement.
///
/// Every expression is also a statement, so expression statements are legal at
/// the top level.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `met` or `const`.
    VariableDeclaration {
        /// Whether the binding was declared with `const`.
        constant: bool,
        /// The name of the variable.
        name:     String,
        /// The initializer. `None` for `met x fin`, which binds null.
        value:    Option<Expr>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A standalone expression evaluated for its result.
    Expression(Expr),
}

impl Statement {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::VariableDeclaration { line, .. } => *line,
            Self::Expression(expr) => expr.line_number(),
        }
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Children are owned, so a tree never aliases or cycles.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    NumericLiteral {
        /// The literal value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// The `null` literal.
    NullLiteral {
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// `assignee dans value`.
    ///
    /// The assignee is any expression here; only an [`Expr::Identifier`] is
    /// accepted when the assignment is evaluated.
    Assignment {
        /// The assignment target.
        assignee: Box<Self>,
        /// The assigned value.
        value:    Box<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Object literal `{ key : value, ... }`.
    ObjectLiteral {
        /// Properties in source order.
        properties: Vec<Property>,
        /// Line number in the source code.
        line:       usize,
    },
    /// Call expression `callee(arguments)`.
    Call {
        /// The called expression.
        callee:    Box<Self>,
        /// Arguments in source order.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Member access, either `object.property` or `object[property]`.
    Member {
        /// The accessed expression.
        object:   Box<Self>,
        /// The property; always an [`Expr::Identifier`] for dotted access.
        property: Box<Self>,
        /// `true` for bracket access, `false` for dotted access.
        computed: bool,
        /// Line number in the source code.
        line:     usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use francois::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::NumericLiteral { line, .. }
            | Self::NullLiteral { line }
            | Self::Identifier { line, .. }
            | Self::Assignment { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::ObjectLiteral { line, .. }
            | Self::Call { line, .. }
            | Self::Member { line, .. } => *line,
        }
    }

    /// Returns the variable name if `self` is an identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier { name, .. } => Some(name),
            _ => None,
        }
    }

    /// A short name for the node kind, used in diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::NumericLiteral { .. } => "numeric literal",
            Self::NullLiteral { .. } => "null literal",
            Self::Identifier { .. } => "identifier",
            Self::Assignment { .. } => "assignment",
            Self::BinaryOp { .. } => "binary expression",
            Self::ObjectLiteral { .. } => "object literal",
            Self::Call { .. } => "call expression",
            Self::Member { .. } => "member expression",
        }
    }
}

/// A `key : value` entry of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// The property name.
    pub key:   String,
    /// The value expression.
    pub value: Expr,
    /// Line number in the source code.
    pub line:  usize,
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Remainder of the truncated operands (`%`)
    Mod,
}

impl BinaryOperator {
    /// Whether the operator belongs to the multiplicative tier.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div | Self::Mod)
    }
}

/// The symbol did not name a binary operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperator(pub String);

impl FromStr for BinaryOperator {
    type Err = UnknownOperator;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol {
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Sub),
            "*" => Ok(Self::Mul),
            "/" => Ok(Self::Div),
            "%" => Ok(Self::Mod),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
        };
        write!(f, "{operator}")
    }
}
