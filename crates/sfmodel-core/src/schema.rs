mod builder;
pub use builder::Builder;

mod field;
pub use field::{Field, FieldName};

mod field_ty;
pub use field_ty::FieldTy;

mod options;
pub use options::FieldOptions;

use indexmap::IndexMap;

/// Local name of the field every schema starts with.
pub const ID: &str = "Id";

/// The virtual attribute carrying the table name in create/update payloads.
/// It is never selected.
pub const TYPE_ATTRIBUTE: &str = "type";

/// The field registry of one model type.
///
/// Built once through [`Builder`] and immutable afterwards; share it behind an
/// `Arc`.
#[derive(Debug, Clone)]
pub struct Schema {
    /// Remote table (SObject) name
    table: String,

    /// Fields keyed by local name, in declaration order. `Id` is always first
    /// unless it was redeclared, in which case it keeps its slot.
    fields: IndexMap<String, Field>,
}

impl Schema {
    pub fn builder(table: impl Into<String>) -> Builder {
        Builder::new(table)
    }

    /// The remote table name.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The alias used to namespace columns in queries: the table name's first
    /// character, lower-cased (`Lead` => `l`).
    pub fn query_key(&self) -> String {
        self.table
            .chars()
            .next()
            .map(|c| c.to_lowercase().collect())
            .unwrap_or_default()
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> impl ExactSizeIterator<Item = &Field> + '_ {
        self.fields.values()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Gets a field by local name.
    pub fn field(&self, local: &str) -> Option<&Field> {
        self.fields.get(local)
    }

    /// Gets a field by its remote name or path.
    pub fn field_by_remote(&self, remote: &str) -> Option<&Field> {
        self.fields().find(|field| field.remote_name() == remote)
    }

    /// Gets a field by local name, falling back to its remote name.
    pub fn lookup(&self, local_or_alias: &str) -> Option<&Field> {
        self.field(local_or_alias)
            .or_else(|| self.field_by_remote(local_or_alias))
    }

    /// Position of a field, by local name.
    pub fn index_of(&self, local: &str) -> Option<usize> {
        self.fields.get_index_of(local)
    }

    /// Field at position `index`.
    #[track_caller]
    pub fn field_at(&self, index: usize) -> &Field {
        &self.fields[index]
    }

    /// Remote names in declaration order, skipping the given local names.
    pub fn remote_field_names<'a>(
        &'a self,
        exclude: &'a [&'a str],
    ) -> impl Iterator<Item = &'a str> + 'a {
        self.fields()
            .filter(move |field| !exclude.contains(&field.local_name()))
            .map(Field::remote_name)
    }
}
