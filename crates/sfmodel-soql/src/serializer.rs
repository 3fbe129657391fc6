#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::Period;

mod flavor;
pub use flavor::Flavor;

mod ident;
use ident::Ident;

// Fragment serializers
mod select;
mod value;

use crate::stmt::Statement;

/// Serialize a statement to a SOQL string
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    /// Controls how quoted literals are written.
    flavor: Flavor,
}

struct Formatter<'a> {
    /// Handle to the serializer
    serializer: &'a Serializer,

    /// Where to write the serialized SOQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new(flavor: Flavor) -> Serializer {
        Serializer { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn serialize(&self, stmt: &Statement) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter {
            serializer: self,
            dst: &mut ret,
        };

        stmt.to_sql(&mut fmt);

        log::debug!("serialized statement: {ret}");
        ret
    }
}

impl ToSql for &Statement {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            Statement::Select(select) => select.to_sql(f),
        }
    }
}
