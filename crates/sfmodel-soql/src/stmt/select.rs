use super::{Filter, Value};

use sfmodel_core::schema::{Schema, TYPE_ATTRIBUTE};

/// A resolved `Select .. from .. WHERE ..` statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Remote table name
    pub table: String,

    /// Alias the table is bound to, and every column prefixed with
    pub key: String,

    /// Selected columns, in schema order
    pub columns: Vec<Column>,

    /// `None` selects every record
    pub condition: Option<Condition>,
}

/// A remote column or nested path, relative to the table alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column(pub String);

#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Verbatim clause
    Raw(String),

    /// Equality conditions joined with `AND`
    And(Vec<ExprEq>),
}

/// `column=literal`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprEq {
    pub column: Column,
    pub value: Value,
}

impl Select {
    /// Builds a select over every schema field except the virtual `type`
    /// attribute.
    ///
    /// Filter names resolve through the schema, so filtering on an alias
    /// field compares against its remote path. Names the schema does not
    /// know are used as remote names verbatim.
    pub fn new(schema: &Schema, filter: Filter) -> Select {
        let columns = schema
            .remote_field_names(&[TYPE_ATTRIBUTE])
            .map(|remote| Column(remote.to_string()))
            .collect();

        let condition = match filter {
            Filter::Raw(clause) => Some(Condition::Raw(clause)),
            Filter::Eq(conditions) if conditions.is_empty() => None,
            Filter::Eq(conditions) => Some(Condition::And(
                conditions
                    .into_iter()
                    .map(|(name, value)| ExprEq {
                        column: Column::resolve(schema, &name),
                        value,
                    })
                    .collect(),
            )),
        };

        Select {
            table: schema.table().to_string(),
            key: schema.query_key(),
            columns,
            condition,
        }
    }
}

impl Column {
    fn resolve(schema: &Schema, name: &str) -> Column {
        match schema.lookup(name) {
            Some(field) => Column(field.remote_name().to_string()),
            None => {
                log::debug!("{}: filtering on undeclared field `{name}`", schema.table());
                Column(name.to_string())
            }
        }
    }
}
