use itertools::Itertools;
use lazy_static::lazy_static;
use simplelog::{Config, LevelFilter, SimpleLogger};

use rstt::eval::{DirectEval, Evaluator, MemoEval, StackEval};
use rstt::expr::Expr;
use rstt::TruthTable;

struct Check {
    name: &'static str,
    expr: Expr<usize>,
    expected: Vec<bool>,
}

fn var(id: usize) -> Expr<usize> {
    Expr::var(id)
}

lazy_static! {
    static ref SUITE: Vec<Check> = vec![
        Check {
            name: "conjunction",
            expr: Expr::and(var(1), var(2)),
            expected: vec![true, false, false, false],
        },
        Check {
            name: "disjunction",
            expr: Expr::or(var(1), var(2)),
            expected: vec![true, true, true, false],
        },
        Check {
            name: "negation",
            expr: Expr::not(var(1)),
            expected: vec![false, true],
        },
        Check {
            name: "exclusive or",
            expr: Expr::or(
                Expr::and(var(1), Expr::not(var(2))),
                Expr::and(Expr::not(var(1)), var(2)),
            ),
            expected: vec![false, true, true, false],
        },
        Check {
            name: "implication shape",
            expr: Expr::or(Expr::not(var(1)), var(2)),
            expected: vec![true, false, true, true],
        },
        Check {
            name: "excluded middle",
            expr: Expr::or(var(1), Expr::not(var(1))),
            expected: vec![true, true],
        },
        Check {
            name: "contradiction",
            expr: Expr::and(var(1), Expr::not(var(1))),
            expected: vec![false, false],
        },
        Check {
            name: "three-variable majority",
            expr: Expr::or(
                Expr::or(Expr::and(var(1), var(2)), Expr::and(var(1), var(3))),
                Expr::and(var(2), var(3)),
            ),
            expected: vec![true, true, true, false, true, false, false, false],
        },
    ];
}

fn main() -> anyhow::Result<()> {
    SimpleLogger::init(LevelFilter::Info, Config::default())?;

    let strategies: Vec<(&str, Box<dyn Evaluator<usize>>)> = vec![
        ("direct", Box::new(DirectEval)),
        ("stack", Box::new(StackEval)),
        ("memo", Box::new(MemoEval::new())),
    ];

    let mut failures = 0;

    for check in SUITE.iter() {
        println!("{}: {}", check.name, check.expr);

        for (strategy, evaluator) in &strategies {
            let table = TruthTable::build(evaluator.as_ref(), &check.expr)?;
            let results = table.results();

            if results == check.expected {
                println!("  [{strategy}] PASS");
            } else {
                failures += 1;
                println!("  [{strategy}] FAIL");
                println!("    expected: {}", check.expected.iter().join(" "));
                println!("    actual:   {}", results.iter().join(" "));
                println!("{table}");
            }
        }

        let table = TruthTable::build(&DirectEval, &check.expr)?;
        println!("{table}");
    }

    if failures == 0 {
        log::info!("all {} checks passed", SUITE.len());
    } else {
        log::warn!("{failures} check/strategy combinations failed");
    }

    Ok(())
}
