//! Operator identities.
//!
//! The evaluator reaches operators by their dunder names (`__add__`, ...);
//! error messages show the source symbol.

use std::fmt;

/// Binary operators that produce a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    LShift,
    RShift,
    BitOr,
    BitAnd,
    BitXor,
}

impl BinOp {
    pub const ALL: [BinOp; 10] = [
        BinOp::Add,
        BinOp::Sub,
        BinOp::Mul,
        BinOp::Div,
        BinOp::Mod,
        BinOp::LShift,
        BinOp::RShift,
        BinOp::BitOr,
        BinOp::BitAnd,
        BinOp::BitXor,
    ];

    /// Get the operator symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Mod => "%",
            BinOp::LShift => "<<",
            BinOp::RShift => ">>",
            BinOp::BitOr => "|",
            BinOp::BitAnd => "&",
            BinOp::BitXor => "^",
        }
    }

    /// Get the evaluator lookup name
    pub fn dunder(&self) -> &'static str {
        match self {
            BinOp::Add => "__add__",
            BinOp::Sub => "__sub__",
            BinOp::Mul => "__mul__",
            BinOp::Div => "__div__",
            BinOp::Mod => "__mod__",
            BinOp::LShift => "__lshift__",
            BinOp::RShift => "__rshift__",
            BinOp::BitOr => "__or__",
            BinOp::BitAnd => "__and__",
            BinOp::BitXor => "__xor__",
        }
    }

    pub fn from_dunder(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.dunder() == name)
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
    Invert,
    Not,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 4] = [UnaryOp::Plus, UnaryOp::Minus, UnaryOp::Invert, UnaryOp::Not];

    /// Get the operator symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Invert => "~",
            UnaryOp::Not => "not",
        }
    }

    /// Get the evaluator lookup name
    pub fn dunder(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "__plus__",
            UnaryOp::Minus => "__minus__",
            UnaryOp::Invert => "__invert__",
            UnaryOp::Not => "__not__",
        }
    }

    pub fn from_dunder(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.dunder() == name)
    }
}

/// Any dispatcher entry point, as named in a dispatch failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Binary(BinOp),
    Eq,
    Unary(UnaryOp),
    Print,
    Range,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Binary(op) => op.as_str(),
            Operator::Eq => "==",
            Operator::Unary(op) => op.as_str(),
            Operator::Print => "print",
            Operator::Range => "range",
        }
    }

    /// Get the evaluator lookup name
    pub fn dunder(&self) -> &'static str {
        match self {
            Operator::Binary(op) => op.dunder(),
            Operator::Eq => "__eq__",
            Operator::Unary(op) => op.dunder(),
            Operator::Print => "print",
            Operator::Range => "range",
        }
    }

    /// Operators written as a symbol, as opposed to a call like `print(x)`
    pub fn is_symbolic(&self) -> bool {
        !matches!(self, Operator::Print | Operator::Range)
    }
}

impl From<BinOp> for Operator {
    fn from(op: BinOp) -> Self {
        Operator::Binary(op)
    }
}

impl From<UnaryOp> for Operator {
    fn from(op: UnaryOp) -> Self {
        Operator::Unary(op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
