use std::fmt::{self, Display};

use itertools::Itertools;

use crate::combinations::combinations;
use crate::error::Error;
use crate::eval::{Assignment, Evaluator};
use crate::expr::{Expr, Symbol};

/// The full enumeration of an expression: one row per combination of its
/// variables, in combination-generator order, paired with the evaluation
/// result under that row's assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable<S: Symbol> {
    vars: Vec<S>,
    rows: Vec<(Vec<bool>, bool)>,
}

impl<S: Symbol> TruthTable<S> {
    /// Builds the table for `expr` with the supplied evaluation strategy.
    ///
    /// Variables are collected in ascending order and each combination is
    /// zipped positionally with them to form one assignment per row. A
    /// [`Error::VariableNotFound`] from the evaluator propagates unchanged.
    pub fn build<E: Evaluator<S> + ?Sized>(evaluator: &E, expr: &Expr<S>) -> Result<Self, Error> {
        let vars = expr.variables();
        let rows = combinations(vars.len())?;

        log::debug!(
            "building truth table over {} variables ({} rows)",
            vars.len(),
            rows.len()
        );

        let rows = rows
            .into_iter()
            .map(|combination| {
                let assignment = Assignment::from_zip(&vars, &combination)?;
                let result = evaluator.eval(expr, &assignment)?;
                Ok((combination, result))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self { vars, rows })
    }

    pub fn vars(&self) -> &[S] {
        &self.vars
    }

    pub fn rows(&self) -> &[(Vec<bool>, bool)] {
        &self.rows
    }

    /// The result column, in row order.
    pub fn results(&self) -> Vec<bool> {
        self.rows.iter().map(|&(_, result)| result).collect()
    }

    /// The ordered subsequence of rows whose result is `true`.
    pub fn true_rows(&self) -> Self {
        Self {
            vars: self.vars.clone(),
            rows: self
                .rows
                .iter()
                .filter(|&&(_, result)| result)
                .cloned()
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

fn bool_token(value: bool) -> &'static str {
    if value {
        "true "
    } else {
        "false"
    }
}

impl<S: Symbol> Display for TruthTable<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for var in &self.vars {
            write!(f, "{var:<6}")?;
        }
        writeln!(f)?;

        for (combination, result) in &self.rows {
            let values = combination.iter().map(|&value| bool_token(value)).join(" ");
            writeln!(f, "{} {}", values, bool_token(*result))?;
        }

        Ok(())
    }
}
