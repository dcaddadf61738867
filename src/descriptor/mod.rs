mod field_descriptor;
mod fields;
mod type_descriptor;

pub use field_descriptor::{FieldCheck, FieldDescriptor, FieldEquality};
pub use fields::Fields;
pub use type_descriptor::{ShapeCategory, TypeDescriptor};
