use std::collections::BTreeSet;
use std::fmt::{self, Debug, Display};
use std::hash::Hash;

pub trait Symbol: Ord + Display + Debug + Clone + Hash {}

impl<T> Symbol for T where T: Ord + Display + Debug + Clone + Hash {}

/// A propositional formula over variables of type `S`.
///
/// Expressions are immutable once constructed. Structural equality and
/// hashing are derived: two expressions are equal iff their shapes and
/// contained variables match, which is what the memoizing evaluator keys
/// its cache on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr<S: Symbol> {
    Var(S),
    Not(Box<Expr<S>>),
    And(Box<Expr<S>>, Box<Expr<S>>),
    Or(Box<Expr<S>>, Box<Expr<S>>),
}

impl<S: Symbol> Expr<S> {
    pub fn var(s: S) -> Self {
        Self::Var(s)
    }

    pub fn not(operand: Self) -> Self {
        Self::Not(Box::new(operand))
    }

    pub fn and(left: Self, right: Self) -> Self {
        Self::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Self, right: Self) -> Self {
        Self::Or(Box::new(left), Box::new(right))
    }

    /// All distinct variables referenced by this expression, ascending.
    pub fn variables(&self) -> Vec<S> {
        let mut acc = BTreeSet::new();
        self.collect_variables(&mut acc);
        acc.into_iter().collect()
    }

    fn collect_variables(&self, acc: &mut BTreeSet<S>) {
        match self {
            Self::Var(s) => {
                acc.insert(s.clone());
            }
            Self::Not(operand) => operand.collect_variables(acc),
            Self::And(l, r) | Self::Or(l, r) => {
                l.collect_variables(acc);
                r.collect_variables(acc);
            }
        }
    }

    /// Work-stack variant of [`variables`]: same output for every input,
    /// but stays correct on expression trees too deep for native recursion.
    ///
    /// [`variables`]: Expr::variables
    pub fn variables_iterative(&self) -> Vec<S> {
        let mut acc = BTreeSet::new();
        let mut pending = vec![self];

        while let Some(node) = pending.pop() {
            match node {
                Self::Var(s) => {
                    acc.insert(s.clone());
                }
                Self::Not(operand) => pending.push(operand),
                Self::And(l, r) | Self::Or(l, r) => {
                    pending.push(r);
                    pending.push(l);
                }
            }
        }

        acc.into_iter().collect()
    }
}

// formula syntax:
// 1
// !1
// (1 & 2)
// (1 | (2 & !3))
impl<S: Symbol> Display for Expr<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(s) => Display::fmt(s, f),
            Self::Not(operand) => write!(f, "!{operand}"),
            Self::And(l, r) => write!(f, "({l} & {r})"),
            Self::Or(l, r) => write!(f, "({l} | {r})"),
        }
    }
}
