use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Field, Index, Member, parse_quote};

/// Derives `Reflect`, `Comparable` and `StructuralEq` for a struct.
/// Every field is registered in declaration order; fields marked with
/// `#[structural(flatten)]` contribute the fields of their own type instead.
pub fn derive_structural_eq(input: DeriveInput) -> syn::Result<TokenStream> {
    let ident = &input.ident;

    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            ident,
            "#[derive(StructuralEq)] only works on structs",
        ));
    };

    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            "#[derive(StructuralEq)] does not support lifetime parameters",
        ));
    }

    // comparators are cached per TypeId
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!('static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let registrations = data
        .fields
        .iter()
        .enumerate()
        .map(|(index, field)| field_registration(index, field))
        .collect::<syn::Result<Vec<_>>>()?;

    Ok(quote! {
        impl #impl_generics ::fieldwise::Reflect for #ident #ty_generics #where_clause {
            fn fields() -> ::core::result::Result<
                ::fieldwise::descriptor::Fields<Self>,
                ::fieldwise::IntrospectionError,
            > {
                let fields = ::fieldwise::descriptor::Fields::<Self>::new();
                #( let fields = #registrations; )*
                ::core::result::Result::Ok(fields)
            }
        }

        impl #impl_generics ::fieldwise::Comparable for #ident #ty_generics #where_clause {
            type Target = Self;
            const SHAPE: ::fieldwise::ShapeCategory = ::fieldwise::ShapeCategory::Value;

            fn target(&self) -> ::core::option::Option<&Self> {
                ::core::option::Option::Some(self)
            }
        }

        impl #impl_generics ::fieldwise::StructuralEq for #ident #ty_generics #where_clause {
            fn structural_eq(&self, other: &Self) -> bool {
                ::fieldwise::equal(self, other)
            }
        }
    })
}

fn field_registration(index: usize, field: &Field) -> syn::Result<TokenStream> {
    let (member, name) = match &field.ident {
        Some(ident) => (Member::Named(ident.clone()), ident.unraw().to_string()),
        None => (Member::Unnamed(Index::from(index)), index.to_string()),
    };
    let ty = &field.ty;

    if is_flattened(field)? {
        Ok(quote! {
            fields.flatten::<#ty>(#name, |value: &Self| &value.#member)?
        })
    } else {
        Ok(quote! {
            fields.field::<#ty>(
                #name,
                |value: &Self| &value.#member,
                ::fieldwise::__field_equality!(#ty),
            )
        })
    }
}

fn is_flattened(field: &Field) -> syn::Result<bool> {
    let mut flatten = false;
    for attr in field
        .attrs
        .iter()
        .filter(|attr| attr.path().is_ident("structural"))
    {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("flatten") {
                flatten = true;
                Ok(())
            } else {
                Err(meta.error("unsupported structural attribute, expected `flatten`"))
            }
        })?;
    }
    Ok(flatten)
}
