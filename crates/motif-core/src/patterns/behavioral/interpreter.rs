//! Interpreter: a two-operand arithmetic expression parsed into a small
//! expression tree and evaluated. Only `+` and `-` exist in the grammar;
//! anything else is an invalid-input error returned, never thrown.

use crate::demo::Demo;
use crate::error::DemoError;
use crate::report::Reporter;

#[derive(Debug)]
enum Expression {
    Number(i64),
    Plus(Box<Expression>, Box<Expression>),
    Minus(Box<Expression>, Box<Expression>),
}

impl Expression {
    fn interpret(&self) -> i64 {
        match self {
            Expression::Number(n) => *n,
            Expression::Plus(left, right) => left.interpret() + right.interpret(),
            Expression::Minus(left, right) => left.interpret() - right.interpret(),
        }
    }
}

/// Parse `"<left> <op> <right>"` (whitespace-separated) into a tree.
fn parse_expression(input: &str) -> Result<Expression, DemoError> {
    let malformed = || DemoError::MalformedExpression {
        expr: input.to_string(),
    };

    let tokens: Vec<&str> = input.split_whitespace().collect();
    let &[left, operator, right] = tokens.as_slice() else {
        return Err(malformed());
    };

    let left: i64 = left.parse().map_err(|_| malformed())?;
    let right: i64 = right.parse().map_err(|_| malformed())?;

    match operator {
        "+" => Ok(Expression::Plus(
            Box::new(Expression::Number(left)),
            Box::new(Expression::Number(right)),
        )),
        "-" => Ok(Expression::Minus(
            Box::new(Expression::Number(left)),
            Box::new(Expression::Number(right)),
        )),
        other => Err(DemoError::UnknownOperator {
            token: other.to_string(),
        }),
    }
}

pub struct InterpreterDemo;

impl Demo for InterpreterDemo {
    fn name(&self) -> &str {
        "interpreter"
    }

    fn run(&self, out: &mut dyn Reporter) -> Result<(), DemoError> {
        let expression = parse_expression("2 + 3")?;
        out.line(&format!("result: {}", expression.interpret()))
    }
}
