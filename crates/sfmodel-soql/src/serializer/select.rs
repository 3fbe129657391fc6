use super::{delim::And, delim::Comma, value::Literal, Formatter, Ident, Period, ToSql};

use crate::stmt;

/// A column qualified with the table alias: `t.Parent.Field3`.
struct Qualified<'a> {
    key: &'a str,
    column: &'a stmt::Column,
}

impl ToSql for Qualified<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let path = Period([Ident(self.key), Ident(self.column.0.as_str())]);
        fmt!(f, path);
    }
}

struct EqExpr<'a> {
    key: &'a str,
    expr: &'a stmt::ExprEq,
}

impl ToSql for EqExpr<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let column = Qualified {
            key: self.key,
            column: &self.expr.column,
        };
        fmt!(f, column "=" Literal(&self.expr.value));
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let key = self.key.as_str();
        let columns = Comma(self.columns.iter().map(|column| Qualified { key, column }));

        fmt!(f, "Select " columns " from " Ident(&self.table) " " Ident(key));

        match &self.condition {
            None => {}
            Some(stmt::Condition::Raw(clause)) => fmt!(f, " WHERE " clause),
            Some(stmt::Condition::And(exprs)) => {
                let exprs = And(exprs.iter().map(|expr| EqExpr { key, expr }));
                fmt!(f, " WHERE " exprs);
            }
        }
    }
}
