use pretty_assertions::assert_eq;
use rstt::eval::{DirectEval, MemoEval, StackEval};
use rstt::expr::Expr;
use rstt::TruthTable;

type E = Expr<usize>;

#[test]
fn conjunction_table() {
    let expr = Expr::and(E::var(1), E::var(2));
    let table = TruthTable::build(&DirectEval, &expr).unwrap();

    assert_eq!(table.vars(), &[1, 2]);
    assert_eq!(
        table.rows(),
        &[
            (vec![true, true], true),
            (vec![true, false], false),
            (vec![false, true], false),
            (vec![false, false], false),
        ]
    );
}

#[test]
fn disjunction_table() {
    let expr = Expr::or(E::var(1), E::var(2));
    let table = TruthTable::build(&DirectEval, &expr).unwrap();

    assert_eq!(
        table.rows(),
        &[
            (vec![true, true], true),
            (vec![true, false], true),
            (vec![false, true], true),
            (vec![false, false], false),
        ]
    );
}

#[test]
fn negation_table() {
    let expr = Expr::not(E::var(1));
    let table = TruthTable::build(&DirectEval, &expr).unwrap();

    assert_eq!(table.vars(), &[1]);
    assert_eq!(
        table.rows(),
        &[(vec![true], false), (vec![false], true)]
    );
}

#[test]
fn exclusive_or_shape_table() {
    let expr = Expr::or(
        Expr::and(E::var(1), Expr::not(E::var(2))),
        Expr::and(Expr::not(E::var(1)), E::var(2)),
    );
    let table = TruthTable::build(&DirectEval, &expr).unwrap();

    assert_eq!(table.results(), vec![false, true, true, false]);
}

#[test]
fn row_order_matches_combination_order() {
    let expr = Expr::or(E::var(1), Expr::and(E::var(2), E::var(3)));
    let table = TruthTable::build(&DirectEval, &expr).unwrap();

    assert_eq!(table.len(), 8);
    assert_eq!(table.rows()[0].0, vec![true, true, true]);
    assert_eq!(table.rows()[7].0, vec![false, false, false]);
}

#[test]
fn all_strategies_build_the_same_table() {
    let expr = Expr::not(Expr::and(E::var(1), Expr::or(E::var(2), E::var(3))));

    let direct = TruthTable::build(&DirectEval, &expr).unwrap();
    let stack = TruthTable::build(&StackEval, &expr).unwrap();
    let memo = TruthTable::build(&MemoEval::new(), &expr).unwrap();

    assert_eq!(direct, stack);
    assert_eq!(direct, memo);
}

#[test]
fn variables_out_of_appearance_order() {
    // 5 appears before 2 in the tree; columns still come out ascending
    let expr = Expr::and(E::var(5), E::var(2));
    let table = TruthTable::build(&DirectEval, &expr).unwrap();

    assert_eq!(table.vars(), &[2, 5]);
    // row (2=true, 5=false) is false under the conjunction
    assert_eq!(table.rows()[1], (vec![true, false], false));
}

#[test]
fn display_column_format() {
    let expr = Expr::and(E::var(1), E::var(2));
    let table = TruthTable::build(&DirectEval, &expr).unwrap();

    let rendered = table.to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], "1     2     ");
    assert_eq!(lines[1], "true  true  true ");
    assert_eq!(lines[2], "true  false false");
    assert_eq!(lines[3], "false true  false");
    assert_eq!(lines[4], "false false false");
}
