use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};
mod structural_eq_macros;

/// Derives field-by-field structural equality for a struct.
/// ```ignore
/// #[derive(StructuralEq)]
/// struct Account {
///     #[structural(flatten)]
///     base: Entity,
///     balance: i64,
///     owner: Rc<User>,
/// }
/// ```
/// Each field is compared with `==` if its type implements `PartialEq`, with
/// `structural_eq` if it implements `StructuralEq`, and by identity
/// otherwise. `#[structural(flatten)]` splices in the fields of an embedded
/// struct, named `base.<field>`.
///
/// Identity means a field without `PartialEq` or `StructuralEq` only equals
/// itself: handles (`&T`, `Box`, `Rc`, `Arc`, `Option`s of them) compare the
/// address they point to, every other field compares its own storage
/// address. A clone or a rebuilt copy of such a struct is therefore never
/// equal to the original, even when every byte matches. Give the field type
/// `PartialEq` or `StructuralEq` to compare its content.
/// The struct also gets `StructuralEq`, so it can be nested in other
/// derived structs.
#[proc_macro_derive(StructuralEq, attributes(structural))]
pub fn derive_structural_eq(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    structural_eq_macros::derive_structural_eq(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
