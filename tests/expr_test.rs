use pretty_assertions::assert_eq;
use rstt::expr::Expr;

type E = Expr<usize>;

fn xor(a: E, b: E) -> E {
    Expr::or(
        Expr::and(a.clone(), Expr::not(b.clone())),
        Expr::and(Expr::not(a), b),
    )
}

#[test]
fn structural_equality() {
    assert_eq!(E::var(1), E::var(1));
    assert_ne!(E::var(1), E::var(2));

    assert_eq!(
        Expr::and(E::var(1), E::var(2)),
        Expr::and(E::var(1), E::var(2))
    );
    assert_ne!(
        Expr::and(E::var(1), E::var(2)),
        Expr::and(E::var(2), E::var(1))
    );
    assert_ne!(
        Expr::and(E::var(1), E::var(2)),
        Expr::or(E::var(1), E::var(2))
    );
    assert_ne!(E::var(1), Expr::not(E::var(1)));
}

#[test]
fn variables_are_ascending_and_unique() {
    let e = Expr::or(
        Expr::and(E::var(7), E::var(2)),
        Expr::not(Expr::and(E::var(2), E::var(5))),
    );

    assert_eq!(e.variables(), vec![2, 5, 7]);
}

#[test]
fn variables_ignore_first_appearance_order() {
    // 9 appears first in the tree but sorts last
    let e = Expr::and(E::var(9), Expr::or(E::var(1), E::var(4)));

    assert_eq!(e.variables(), vec![1, 4, 9]);
}

#[test]
fn single_variable() {
    assert_eq!(E::var(3).variables(), vec![3]);
    assert_eq!(Expr::not(E::var(3)).variables(), vec![3]);
}

#[test]
fn collector_strategies_agree() {
    let cases = vec![
        E::var(0),
        Expr::not(E::var(4)),
        Expr::and(E::var(3), E::var(1)),
        xor(E::var(2), E::var(8)),
        Expr::or(xor(E::var(5), E::var(0)), Expr::and(E::var(5), E::var(9))),
    ];

    for e in &cases {
        assert_eq!(e.variables(), e.variables_iterative());
    }
}

#[test]
fn collector_handles_deep_trees() {
    let mut e = E::var(1);
    for _ in 0..10_000 {
        e = Expr::not(e);
    }

    assert_eq!(e.variables_iterative(), vec![1]);
}

#[test]
fn display_formula_syntax() {
    assert_eq!(E::var(1).to_string(), "1");
    assert_eq!(Expr::not(E::var(1)).to_string(), "!1");
    assert_eq!(Expr::and(E::var(1), E::var(2)).to_string(), "(1 & 2)");
    assert_eq!(
        Expr::or(E::var(1), Expr::and(E::var(2), Expr::not(E::var(3)))).to_string(),
        "(1 | (2 & !3))"
    );
}
