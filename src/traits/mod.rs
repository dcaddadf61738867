pub mod comparable;
pub mod handle;
pub mod reflect;
pub mod structural_eq;
