use super::{Formatter, ToSql};

use crate::stmt::Value;

/// A value written as a query literal.
pub(super) struct Literal<'a>(pub(super) &'a Value);

impl ToSql for Literal<'_> {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use Value::*;

        match self.0 {
            // Booleans, dates and null are never quoted
            Bool(_) | Date(_) | Null => {
                let value = self.0.to_string();
                fmt!(f, &value);
            }
            value => {
                let value = value.to_string();
                f.dst.push('\'');
                if f.serializer.is_escaped() {
                    escape_into(f.dst, &value);
                } else {
                    f.dst.push_str(&value);
                }
                f.dst.push('\'');
            }
        }
    }
}

fn escape_into(dst: &mut String, value: &str) {
    for c in value.chars() {
        if matches!(c, '\\' | '\'') {
            dst.push('\\');
        }
        dst.push(c);
    }
}
