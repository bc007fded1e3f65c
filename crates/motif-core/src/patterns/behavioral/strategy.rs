//! Strategy: the operator token picks which arithmetic strategy the
//! calculator executes. Tokens outside `+`/`-` are an invalid-input error
//! surfaced from the lookup, never thrown.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

trait ArithmeticStrategy: std::fmt::Debug {
    fn execute(&self, a: i64, b: i64) -> i64;
}

#[derive(Debug)]
struct Addition;
#[derive(Debug)]
struct Subtraction;

impl ArithmeticStrategy for Addition {
    fn execute(&self, a: i64, b: i64) -> i64 {
        a + b
    }
}

impl ArithmeticStrategy for Subtraction {
    fn execute(&self, a: i64, b: i64) -> i64 {
        a - b
    }
}

/// Select the strategy for an operator token.
fn strategy_for(token: &str) -> Result<Box<dyn ArithmeticStrategy>, DemoError> {
    match token {
        "+" => Ok(Box::new(Addition)),
        "-" => Ok(Box::new(Subtraction)),
        other => Err(DemoError::UnknownOperator {
            token: other.to_string(),
        }),
    }
}

struct Calculator {
    strategy: Box<dyn ArithmeticStrategy>,
}

impl Calculator {
    fn execute(&self, a: i64, b: i64) -> i64 {
        self.strategy.execute(a, b)
    }
}

pub struct StrategyDemo;

impl Demo for StrategyDemo {
    fn name(&self) -> &str {
        "strategy"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let input = "1 + 4";
        let tokens: Vec<&str> = input.split_whitespace().collect();
        let &[left, operator, right] = tokens.as_slice() else {
            return Err(DemoError::MalformedExpression {
                expr: input.to_string(),
            });
        };
        let left: i64 = left.parse().map_err(|_| DemoError::MalformedExpression {
            expr: input.to_string(),
        })?;
        let right: i64 = right.parse().map_err(|_| DemoError::MalformedExpression {
            expr: input.to_string(),
        })?;

        let calculator = Calculator {
            strategy: strategy_for(operator)?,
        };
        out.line(&format!("= {}", calculator.execute(left, right)))
    }
}
