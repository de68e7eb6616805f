//! Abstract Syntax Tree (AST) definitions
//!
//! The tree is built once by the parser and never mutated afterwards. Every
//! parent owns its children directly.

use crate::span::Span;
use serde::{Deserialize, Serialize};

/// AST schema version
///
/// Included in JSON dumps. Increment when making breaking changes to the AST
/// structure.
pub const AST_VERSION: u32 = 1;

/// Top-level program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

/// Versioned AST wrapper for JSON serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedProgram {
    /// AST schema version
    pub ast_version: u32,
    #[serde(flatten)]
    pub program: Program,
}

impl VersionedProgram {
    pub fn new(program: Program) -> Self {
        Self {
            ast_version: AST_VERSION,
            program,
        }
    }

    /// Serialize to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl From<Program> for VersionedProgram {
    fn from(program: Program) -> Self {
        Self::new(program)
    }
}

/// Statement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stmt {
    Assign(AssignStmt),
    Print(PrintStmt),
    Input(InputStmt),
    If(IfStmt),
}

/// `name = expression`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignStmt {
    pub identifier: Identifier,
    pub expression: Expr,
    pub span: Span,
}

/// `print(expression)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintStmt {
    pub expression: Expr,
    pub span: Span,
}

/// `input(name)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputStmt {
    pub identifier: Identifier,
    pub span: Span,
}

/// `if condition then ... endif`
///
/// There is no `else` branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_body: Vec<Stmt>,
    pub span: Span,
}

/// Expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Expr {
    Binary(BinaryExpr),
    Identifier(Identifier),
    Number(NumberLiteral),
}

/// Binary expression
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub op: BinaryOp,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
    pub span: Span,
}

// Operator chains fold into a left spine as long as the source expression,
// so the default recursive drop could exhaust the stack.
impl Drop for BinaryExpr {
    fn drop(&mut self) {
        if !self.left.is_binary() && !self.right.is_binary() {
            return;
        }

        let mut pending = vec![self.left.take(), self.right.take()];
        while let Some(expr) = pending.pop() {
            if let Expr::Binary(mut binary) = expr {
                pending.push(binary.left.take());
                pending.push(binary.right.take());
            }
        }
    }
}

/// Variable reference or binding target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

/// Integer literal, kept as written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumberLiteral {
    pub text: String,
    pub span: Span,
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    // Arithmetic
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Sub,
    #[serde(rename = "*")]
    Mul,
    // Comparison
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
}

impl BinaryOp {
    /// Look up the operator for a lexeme
    pub fn from_symbol(symbol: &str) -> Option<BinaryOp> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "==" => Some(BinaryOp::Eq),
            "!=" => Some(BinaryOp::Ne),
            "<" => Some(BinaryOp::Lt),
            "<=" => Some(BinaryOp::Le),
            ">" => Some(BinaryOp::Gt),
            ">=" => Some(BinaryOp::Ge),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
        }
    }

    pub fn is_comparison(&self) -> bool {
        !matches!(self, BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul)
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Helper methods for getting spans from AST nodes

impl Expr {
    pub fn is_binary(&self) -> bool {
        matches!(self, Expr::Binary(_))
    }

    /// Move the expression out, leaving an empty literal behind
    fn take(&mut self) -> Expr {
        std::mem::replace(
            self,
            Expr::Number(NumberLiteral {
                text: String::new(),
                span: Span::dummy(),
            }),
        )
    }

    /// Get the span of this expression
    pub fn span(&self) -> Span {
        match self {
            Expr::Binary(b) => b.span,
            Expr::Identifier(id) => id.span,
            Expr::Number(n) => n.span,
        }
    }
}

impl Stmt {
    /// Get the span of this statement
    pub fn span(&self) -> Span {
        match self {
            Stmt::Assign(a) => a.span,
            Stmt::Print(p) => p.span,
            Stmt::Input(i) => i.span,
            Stmt::If(i) => i.span,
        }
    }
}

impl std::fmt::Display for Expr {
    /// Fully parenthesized form, e.g. `((a + b) * c)`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary(b) => write!(f, "({} {} {})", b.left, b.op, b.right),
            Expr::Identifier(id) => f.write_str(&id.name),
            Expr::Number(n) => f.write_str(&n.text),
        }
    }
}
