use super::{Formatter, ToSql};

/// Delimited by an arbitrary separator
pub(super) struct Delimited<L>(pub(super) L, pub(super) &'static str);

/// Period delimited
pub(super) struct Period<L>(pub(super) L);

impl<L> ToSql for Delimited<L>
where
    L: IntoIterator,
    L::Item: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0 {
            fmt!(f, s i);
            s = self.1;
        }
    }
}

impl<L, I> ToSql for Period<L>
where
    L: IntoIterator<Item = I>,
    I: ToSql,
{
    fn to_sql(self, f: &mut Formatter<'_>) {
        let mut s = "";
        for i in self.0.into_iter() {
            fmt!(f, s i);
            s = ".";
        }
    }
}

/// Comma delimited
#[allow(non_snake_case)]
pub(super) fn Comma<L>(list: L) -> Delimited<L> {
    Delimited(list, ", ")
}

/// `AND` delimited
#[allow(non_snake_case)]
pub(super) fn And<L>(list: L) -> Delimited<L> {
    Delimited(list, " AND ")
}
