use super::FieldTy;

/// Per-field declaration options.
///
/// ```
/// use sfmodel_core::schema::{FieldOptions, FieldTy};
///
/// let opts = FieldOptions::new().remote("Owner.Email");
/// let typed: FieldOptions = FieldTy::Date.into();
/// # let _ = (opts, typed);
/// ```
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FieldOptions {
    /// Remote name or dotted path the field is read from.
    pub from: Option<String>,

    /// Value coercion.
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: FieldTy,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the field from `path` instead of its local name.
    pub fn remote(mut self, path: impl Into<String>) -> Self {
        self.from = Some(path.into());
        self
    }

    pub fn ty(mut self, ty: FieldTy) -> Self {
        self.ty = ty;
        self
    }
}

impl From<FieldTy> for FieldOptions {
    fn from(ty: FieldTy) -> Self {
        Self::new().ty(ty)
    }
}
