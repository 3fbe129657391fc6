/// Builds an [`Attributes`](crate::stmt::Attributes) mapping.
///
/// ```
/// let attrs = sfmodel_core::attrs! { "Street" => "1 Main St", "IsConverted" => false };
/// assert_eq!(attrs.len(), 2);
/// ```
#[macro_export]
macro_rules! attrs {
    () => {
        $crate::stmt::Attributes::new()
    };
    ( $( $name:expr => $value:expr ),+ $(,)? ) => {{
        let mut attributes = $crate::stmt::Attributes::new();
        $(
            attributes.insert(
                ::std::string::String::from($name),
                $crate::stmt::Value::from($value),
            );
        )+
        attributes
    }};
}
