//! Sample expression tree shared by the demo binary and snapshot tests.

use boxtree::TreeSource;

/// Arithmetic expression with function calls.
#[derive(Debug)]
pub enum Expr {
    Num(i64),
    Var(&'static str),
    Bin(char, Box<Expr>, Box<Expr>),
    Call(&'static str, Vec<Expr>),
}

impl Expr {
    pub fn bin(op: char, lhs: Expr, rhs: Expr) -> Self {
        Self::Bin(op, Box::new(lhs), Box::new(rhs))
    }
}

/// Reads [`Expr`] trees: operators and calls have children, operands do not.
pub struct ExprSource;

impl<'a> TreeSource<&'a Expr> for ExprSource {
    fn children(&self, node: &&'a Expr) -> Vec<Option<&'a Expr>> {
        match *node {
            Expr::Bin(_, lhs, rhs) => vec![Some(&**lhs), Some(&**rhs)],
            Expr::Call(_, args) => args.iter().map(Some).collect(),
            Expr::Num(_) | Expr::Var(_) => Vec::new(),
        }
    }

    fn value(&self, node: &&'a Expr) -> String {
        match *node {
            Expr::Num(n) => n.to_string(),
            Expr::Var(name) => (*name).to_string(),
            Expr::Bin(op, _, _) => op.to_string(),
            Expr::Call(name, args) => format!("call {name}\n{} args", args.len()),
        }
    }
}

/// `(a + b) * (c - 42) / max(x, y, 7)`
pub fn sample() -> Expr {
    Expr::bin(
        '/',
        Expr::bin(
            '*',
            Expr::bin('+', Expr::Var("a"), Expr::Var("b")),
            Expr::bin('-', Expr::Var("c"), Expr::Num(42)),
        ),
        Expr::Call("max", vec![Expr::Var("x"), Expr::Var("y"), Expr::Num(7)]),
    )
}
