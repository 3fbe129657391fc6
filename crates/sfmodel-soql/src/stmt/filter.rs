use super::{Attributes, Value};

/// The WHERE part of a finder call, in local terms.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// A clause passed through verbatim, e.g. `Name='Acme' ORDER BY CreatedDate DESC`.
    ///
    /// The caller is responsible for its correctness and for escaping any
    /// values interpolated into it.
    Raw(String),

    /// Attribute equality conditions, joined with `AND`. Names are local field
    /// names; they are resolved to remote paths when the select is built.
    Eq(Vec<(String, Value)>),
}

impl Filter {
    /// Matches every record.
    pub fn all() -> Self {
        Filter::Eq(vec![])
    }

    /// A single equality condition.
    pub fn eq(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Eq(vec![(name.into(), value.into())])
    }

    /// Adds an equality condition. A raw filter is left untouched.
    pub fn and(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        if let Filter::Eq(conditions) = &mut self {
            conditions.push((name.into(), value.into()));
        }
        self
    }

    pub fn is_raw(&self) -> bool {
        matches!(self, Filter::Raw(_))
    }
}

impl From<&str> for Filter {
    fn from(value: &str) -> Self {
        Filter::Raw(value.to_string())
    }
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        Filter::Raw(value)
    }
}

impl From<Attributes> for Filter {
    fn from(value: Attributes) -> Self {
        Filter::Eq(value.into_iter().collect())
    }
}

impl From<Vec<(String, Value)>> for Filter {
    fn from(value: Vec<(String, Value)>) -> Self {
        Filter::Eq(value)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Filter
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(value: [(K, V); N]) -> Self {
        Filter::Eq(
            value
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
