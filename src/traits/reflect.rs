use crate::descriptor::Fields;
use crate::error::IntrospectionError;

/// Exposes the ordered field layout of a struct.
///
/// Implemented by `#[derive(StructuralEq)]`, which records every field
/// (private ones included) in declaration order and splices in the fields of
/// `#[structural(flatten)]` ancestors.
pub trait Reflect: Sized + 'static {
    fn fields() -> Result<Fields<Self>, IntrospectionError>;
}
