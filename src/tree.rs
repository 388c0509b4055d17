//! Ordered syntax tree handed to renderers and other consumers.
//!
//! A node is either a leaf carrying one token spelling, or a group
//! owning its children in source order. Trees are built bottom-up
//! from the typed AST and never shared.

use crate::ast::{Assignment, Comparison, Conditional, Expression, Program, Statement, Term};
use crate::token::Keyword;

/// Syntax tree node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    /// Token spelling of a leaf, `None` for groups.
    pub value: Option<String>,
    /// Ordered children of a group, empty for leaves.
    pub children: Vec<Self>,
}

impl Node {
    /// Leaf holding one token spelling.
    #[must_use]
    pub fn leaf(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// Untitled group of children.
    #[must_use]
    pub const fn group(children: Vec<Self>) -> Self {
        Self {
            value: None,
            children,
        }
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.value.is_some()
    }

    /// Leaf spellings in depth-first, left-to-right order.
    #[must_use]
    pub fn leaves(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_leaves(self, &mut out);
        out
    }

    /// Number of nodes in this subtree, including itself.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self.children.iter().map(Self::size).sum::<usize>()
    }

    /// Longest root-to-leaf path, counting nodes.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}

fn collect_leaves<'a>(node: &'a Node, out: &mut Vec<&'a str>) {
    if node.children.is_empty() {
        if let Some(value) = &node.value {
            out.push(value);
        }
        return;
    }
    for child in &node.children {
        collect_leaves(child, out);
    }
}

impl From<&Program> for Node {
    fn from(program: &Program) -> Self {
        Self::group(program.statements.iter().map(Self::from).collect())
    }
}

impl From<&Statement> for Node {
    fn from(statement: &Statement) -> Self {
        match statement {
            Statement::Assignment(assignment) => Self::from(assignment),
            Statement::Conditional(conditional) => Self::from(conditional),
        }
    }
}

impl From<&Assignment> for Node {
    fn from(assignment: &Assignment) -> Self {
        Self::group(vec![
            Self::leaf(assignment.target.as_str()),
            Self::leaf(":="),
            Self::from(&assignment.value),
        ])
    }
}

impl From<&Expression> for Node {
    fn from(expression: &Expression) -> Self {
        let children = expression
            .terms
            .iter()
            .map(|term| match term {
                Term::Operand(operand) => Self::leaf(operand.text()),
                Term::Operator(op) => Self::leaf(op.as_str()),
                Term::Group(_, inner) => Self::group(vec![Self::from(inner)]),
            })
            .collect();
        Self::group(children)
    }
}

impl From<&Comparison> for Node {
    fn from(comparison: &Comparison) -> Self {
        Self::group(vec![
            Self::leaf(comparison.left.text()),
            Self::leaf(comparison.op.as_str()),
            Self::leaf(comparison.right.text()),
        ])
    }
}

impl From<&Conditional> for Node {
    fn from(conditional: &Conditional) -> Self {
        let mut children = vec![
            Self::leaf(Keyword::If.as_str()),
            Self::from(&conditional.condition),
            Self::leaf(Keyword::Then.as_str()),
        ];
        children.extend(conditional.then_branch.iter().map(Self::from));
        if let Some(else_branch) = &conditional.else_branch {
            children.push(Self::leaf(Keyword::Else.as_str()));
            children.extend(else_branch.iter().map(Self::from));
        }
        Self::group(children)
    }
}
