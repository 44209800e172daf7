//! Solution and satisfiability queries over brute-force enumeration.
//!
//! Every query enumerates the full truth table of its (possibly derived)
//! expression with the supplied evaluation strategy, so the cost is
//! O(2ⁿ · cost-of-one-evaluation) in the number of distinct variables.
//! Implication and equivalence reduce to tautology checks over derived
//! expressions; no pruning or clause learning is performed.

use crate::error::Error;
use crate::eval::Evaluator;
use crate::expr::{Expr, Symbol};
use crate::truth_table::TruthTable;

/// Tautology check: every row of the truth table is `true`.
pub fn always_true<S, E>(evaluator: &E, expr: &Expr<S>) -> Result<bool, Error>
where
    S: Symbol,
    E: Evaluator<S> + ?Sized,
{
    Ok(TruthTable::build(evaluator, expr)?
        .results()
        .iter()
        .all(|&result| result))
}

/// Satisfiability check: at least one row is `true`.
pub fn exists_solution<S, E>(evaluator: &E, expr: &Expr<S>) -> Result<bool, Error>
where
    S: Symbol,
    E: Evaluator<S> + ?Sized,
{
    Ok(TruthTable::build(evaluator, expr)?
        .results()
        .iter()
        .any(|&result| result))
}

/// The satisfying rows, in truth-table order.
pub fn find_solutions<S, E>(evaluator: &E, expr: &Expr<S>) -> Result<TruthTable<S>, Error>
where
    S: Symbol,
    E: Evaluator<S> + ?Sized,
{
    Ok(TruthTable::build(evaluator, expr)?.true_rows())
}

/// `e1` logically implies `e2`: `!e1 | e2` is a tautology.
pub fn implies<S, E>(evaluator: &E, e1: &Expr<S>, e2: &Expr<S>) -> Result<bool, Error>
where
    S: Symbol,
    E: Evaluator<S> + ?Sized,
{
    let derived = Expr::or(Expr::not(e1.clone()), e2.clone());
    always_true(evaluator, &derived)
}

/// `e1` is logically implied by `e2`: `!e2 | e1` is a tautology.
pub fn implied_by<S, E>(evaluator: &E, e1: &Expr<S>, e2: &Expr<S>) -> Result<bool, Error>
where
    S: Symbol,
    E: Evaluator<S> + ?Sized,
{
    let derived = Expr::or(Expr::not(e2.clone()), e1.clone());
    always_true(evaluator, &derived)
}

/// Logical equivalence: `(e1 & e2) | (!e1 & !e2)` is a tautology.
pub fn iff<S, E>(evaluator: &E, e1: &Expr<S>, e2: &Expr<S>) -> Result<bool, Error>
where
    S: Symbol,
    E: Evaluator<S> + ?Sized,
{
    let derived = Expr::or(
        Expr::and(e1.clone(), e2.clone()),
        Expr::and(Expr::not(e1.clone()), Expr::not(e2.clone())),
    );
    always_true(evaluator, &derived)
}
