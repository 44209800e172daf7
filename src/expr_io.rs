extern crate dot;

use std::io;
use std::io::Write;

use itertools::Itertools;

use crate::expr::{Expr, Symbol};

/// Renders an expression tree as a Graphviz dot graph.
///
/// Structurally equal subexpressions are merged into a single node.
pub struct ExprTree<S: Symbol> {
    pub nodes: Vec<Expr<S>>,
}

type GraphNode = usize;
type GraphEdge = (usize, String, usize);

impl<S: Symbol> ExprTree<S> {
    pub fn new(root: &Expr<S>) -> Self {
        Self {
            nodes: Self::nodes_recursive(root).into_iter().unique().collect(),
        }
    }

    pub fn render_dot<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        dot::render(self, writer)
    }

    fn nodes_recursive(root: &Expr<S>) -> Vec<Expr<S>> {
        let this_node = vec![root.clone()];

        match root {
            Expr::Var(_) => this_node,
            Expr::Not(operand) => Self::nodes_recursive(operand)
                .into_iter()
                .chain(this_node)
                .collect(),
            Expr::And(l, r) | Expr::Or(l, r) => {
                let left_nodes = Self::nodes_recursive(l);
                let right_nodes = Self::nodes_recursive(r);

                left_nodes
                    .into_iter()
                    .chain(right_nodes)
                    .chain(this_node)
                    .collect()
            }
        }
    }

    fn position_of(&self, child: &Expr<S>) -> usize {
        self.nodes
            .iter()
            .position(|n| n == child)
            .expect("cannot find position")
    }
}

impl<'a, S: Symbol> dot::Labeller<'a, GraphNode, GraphEdge> for ExprTree<S> {
    fn graph_id(&self) -> dot::Id<'a> {
        dot::Id::new("expr_tree").expect("cannot create Id named 'expr_tree'")
    }

    fn node_id(&self, n: &GraphNode) -> dot::Id<'a> {
        dot::Id::new(format!("n_{}", n))
            .unwrap_or_else(|_| panic!("cannot create Id named 'n_{n}'"))
    }

    fn node_label(&self, n: &GraphNode) -> dot::LabelText<'a> {
        match &self.nodes[*n] {
            Expr::Var(s) => dot::LabelText::label(format!("Var {}", s)),
            Expr::Not(_) => dot::LabelText::label("Not".to_string()),
            Expr::And(_, _) => dot::LabelText::label("And".to_string()),
            Expr::Or(_, _) => dot::LabelText::label("Or".to_string()),
        }
    }

    fn edge_label(&self, e: &GraphEdge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.1.clone())
    }
}

impl<'a, S: Symbol> dot::GraphWalk<'a, GraphNode, GraphEdge> for ExprTree<S> {
    fn nodes(&self) -> dot::Nodes<'a, GraphNode> {
        (0..self.nodes.len()).collect()
    }

    fn edges(&self) -> dot::Edges<'a, GraphEdge> {
        let mut edges: Vec<GraphEdge> = Vec::new();

        for (i, node) in self.nodes.iter().enumerate() {
            match node {
                Expr::Var(_) => {}
                Expr::Not(operand) => {
                    edges.push((i, "".to_string(), self.position_of(operand)));
                }
                Expr::And(l, r) | Expr::Or(l, r) => {
                    edges.push((i, "L".to_string(), self.position_of(l)));
                    edges.push((i, "R".to_string(), self.position_of(r)));
                }
            }
        }

        edges.into()
    }

    fn source(&self, e: &GraphEdge) -> GraphNode {
        e.0
    }

    fn target(&self, e: &GraphEdge) -> GraphNode {
        e.2
    }
}
