use thiserror::Error;

/// The field layout of a type could not be obtained.
///
/// Raised once per failed comparator build and never cached, so other types
/// are unaffected and a later request for the same type builds again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntrospectionError {
    #[error("type `{type_name}` declares the field `{field}` more than once")]
    DuplicateField {
        type_name: &'static str,
        field: String,
    },
    #[error("type `{type_name}` cannot be introspected: {reason}")]
    Inaccessible {
        type_name: &'static str,
        reason: String,
    },
    #[error("flattened field `{field}` of type `{type_name}` cannot be introspected")]
    Ancestor {
        type_name: &'static str,
        field: String,
        #[source]
        source: Box<IntrospectionError>,
    },
}

impl IntrospectionError {
    /// Refusal raised by a hand-written [`Reflect`](crate::Reflect) impl.
    pub fn inaccessible<T: ?Sized>(reason: impl Into<String>) -> Self {
        IntrospectionError::Inaccessible {
            type_name: core::any::type_name::<T>(),
            reason: reason.into(),
        }
    }
}
