use std::cell::{Cell, RefCell};

use rustc_hash::FxHashMap;

use crate::error::Error;
use crate::expr::{Expr, Symbol};

/// One interpretation of an expression: an ordered sequence of
/// (variable, value) pairs with unique keys.
///
/// Equality and hashing are positional. Two assignments that bind the same
/// variables to the same values but list their pairs in a different order
/// compare unequal, and therefore occupy distinct memo-cache entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Assignment<S: Symbol> {
    pairs: Vec<(S, bool)>,
}

impl<S: Symbol> Assignment<S> {
    pub fn new(pairs: Vec<(S, bool)>) -> Result<Self, Error> {
        for (i, (key, _)) in pairs.iter().enumerate() {
            if pairs[i + 1..].iter().any(|(other, _)| other == key) {
                return Err(Error::InvalidArgument(format!(
                    "duplicate assignment key {key}"
                )));
            }
        }

        Ok(Self { pairs })
    }

    /// Pairs each variable with the value at the same position.
    pub fn from_zip(vars: &[S], values: &[bool]) -> Result<Self, Error> {
        if vars.len() != values.len() {
            return Err(Error::InvalidArgument(format!(
                "cannot zip {} variables with {} values",
                vars.len(),
                values.len()
            )));
        }

        Self::new(vars.iter().cloned().zip(values.iter().copied()).collect())
    }

    pub fn value(&self, var: &S) -> Option<bool> {
        self.pairs
            .iter()
            .find(|(key, _)| key == var)
            .map(|&(_, value)| value)
    }

    pub fn pairs(&self) -> &[(S, bool)] {
        &self.pairs
    }

    fn lookup(&self, var: &S) -> Result<bool, Error> {
        self.value(var)
            .ok_or_else(|| Error::VariableNotFound(var.to_string()))
    }
}

/// A strategy for computing the value of an expression under an assignment.
///
/// The assignment must define a value for every variable reachable in the
/// expression; a missing variable fails with [`Error::VariableNotFound`]
/// identically across all strategies.
pub trait Evaluator<S: Symbol> {
    fn eval(&self, expr: &Expr<S>, assignment: &Assignment<S>) -> Result<bool, Error>;
}

/// Ordinary recursive descent.
///
/// Both operands of a conjunction or disjunction are evaluated regardless
/// of the first result, so a missing-variable failure is deterministic and
/// does not depend on operand values.
#[derive(Debug, Default, Clone, Copy)]
pub struct DirectEval;

impl<S: Symbol> Evaluator<S> for DirectEval {
    fn eval(&self, expr: &Expr<S>, assignment: &Assignment<S>) -> Result<bool, Error> {
        match expr {
            Expr::Var(s) => assignment.lookup(s),
            Expr::Not(operand) => Ok(!self.eval(operand, assignment)?),
            Expr::And(l, r) => {
                let lv = self.eval(l, assignment)?;
                let rv = self.eval(r, assignment)?;
                Ok(lv && rv)
            }
            Expr::Or(l, r) => {
                let lv = self.eval(l, assignment)?;
                let rv = self.eval(r, assignment)?;
                Ok(lv || rv)
            }
        }
    }
}

enum Task<'a, S: Symbol> {
    Visit(&'a Expr<S>),
    Negate,
    Conjoin,
    Disjoin,
}

/// Explicit work-stack traversal.
///
/// No native call frame is held across the descent into a subexpression,
/// so arbitrarily deep trees evaluate within constant native stack depth.
/// Results and error behavior are identical to [`DirectEval`]: the left
/// operand is fully evaluated before the right, and the leftmost missing
/// variable is the one reported.
#[derive(Debug, Default, Clone, Copy)]
pub struct StackEval;

impl<S: Symbol> Evaluator<S> for StackEval {
    fn eval(&self, expr: &Expr<S>, assignment: &Assignment<S>) -> Result<bool, Error> {
        let mut tasks = vec![Task::Visit(expr)];
        let mut values: Vec<bool> = Vec::new();

        while let Some(task) = tasks.pop() {
            match task {
                Task::Visit(Expr::Var(s)) => values.push(assignment.lookup(s)?),
                Task::Visit(Expr::Not(operand)) => {
                    tasks.push(Task::Negate);
                    tasks.push(Task::Visit(operand));
                }
                Task::Visit(Expr::And(l, r)) => {
                    tasks.push(Task::Conjoin);
                    tasks.push(Task::Visit(r));
                    tasks.push(Task::Visit(l));
                }
                Task::Visit(Expr::Or(l, r)) => {
                    tasks.push(Task::Disjoin);
                    tasks.push(Task::Visit(r));
                    tasks.push(Task::Visit(l));
                }
                Task::Negate => {
                    let v = pop_value(&mut values);
                    values.push(!v);
                }
                Task::Conjoin => {
                    let rv = pop_value(&mut values);
                    let lv = pop_value(&mut values);
                    values.push(lv && rv);
                }
                Task::Disjoin => {
                    let rv = pop_value(&mut values);
                    let lv = pop_value(&mut values);
                    values.push(lv || rv);
                }
            }
        }

        Ok(pop_value(&mut values))
    }
}

// every Visit pushes exactly one value before its operator task runs
fn pop_value(values: &mut Vec<bool>) -> bool {
    values.pop().expect("value stack exhausted mid-traversal")
}

/// Recursive descent with a caller-owned result cache.
///
/// The cache is created with the evaluator, keyed by the (subexpression,
/// assignment) pair under full structural equality, consulted before every
/// descent and filled after every miss. Entries are never evicted; the
/// owner bounds the cache's lifetime by scoping the evaluator, or resets
/// it with [`clear`].
///
/// Because [`Assignment`] compares as an ordered sequence, logically
/// identical assignments listed in different orders do not share entries.
///
/// [`clear`]: MemoEval::clear
#[derive(Debug, Default)]
pub struct MemoEval<S: Symbol> {
    cache: RefCell<FxHashMap<(Expr<S>, Assignment<S>), bool>>,
    hits: Cell<u64>,
    misses: Cell<u64>,
}

impl<S: Symbol> MemoEval<S> {
    pub fn new() -> Self {
        Self {
            cache: RefCell::new(FxHashMap::default()),
            hits: Cell::new(0),
            misses: Cell::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.borrow().is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits.get()
    }

    pub fn misses(&self) -> u64 {
        self.misses.get()
    }

    pub fn clear(&self) {
        log::debug!(
            "clearing memo cache: {} entries, {} hits, {} misses",
            self.len(),
            self.hits.get(),
            self.misses.get()
        );

        self.cache.borrow_mut().clear();
        self.hits.set(0);
        self.misses.set(0);
    }

    fn eval_memo(&self, expr: &Expr<S>, assignment: &Assignment<S>) -> Result<bool, Error> {
        let key = (expr.clone(), assignment.clone());

        if let Some(&cached) = self.cache.borrow().get(&key) {
            self.hits.set(self.hits.get() + 1);
            return Ok(cached);
        }

        self.misses.set(self.misses.get() + 1);

        let result = match expr {
            Expr::Var(s) => assignment.lookup(s)?,
            Expr::Not(operand) => !self.eval_memo(operand, assignment)?,
            Expr::And(l, r) => {
                let lv = self.eval_memo(l, assignment)?;
                let rv = self.eval_memo(r, assignment)?;
                lv && rv
            }
            Expr::Or(l, r) => {
                let lv = self.eval_memo(l, assignment)?;
                let rv = self.eval_memo(r, assignment)?;
                lv || rv
            }
        };

        self.cache.borrow_mut().insert(key, result);

        Ok(result)
    }
}

impl<S: Symbol> Evaluator<S> for MemoEval<S> {
    fn eval(&self, expr: &Expr<S>, assignment: &Assignment<S>) -> Result<bool, Error> {
        self.eval_memo(expr, assignment)
    }
}
