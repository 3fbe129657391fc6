/// How a field's values are coerced between the remote and local sides.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldTy {
    /// Passed through untouched
    #[default]
    Plain,

    /// `YYYY-MM-DD` remotely, [`chrono::NaiveDate`] locally
    Date,

    /// Coerced to `f64`
    Float,

    /// Coerced to `i64`
    Integer,

    /// Record identifier, passed through untouched
    Id,
}

impl FieldTy {
    /// Name used in coercion errors.
    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Date => "date",
            Self::Float => "float",
            Self::Integer => "integer",
            Self::Id => "id",
        }
    }
}
