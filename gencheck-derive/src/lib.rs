//! Derive macro for gencheck's `Arbitrary` trait.
//!
//! The generated implementation resolves every field generator through the
//! `Registry` it is given, so overrides registered for a field's type are
//! picked up by the record.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Path};

/// Derive `gencheck::Arbitrary` for a struct or a fieldless enum.
///
/// Struct fields are generated in declaration order, each by the generator
/// the registry holds for its type. `#[arbitrary(with = path)]` on a field
/// replaces the lookup with `path(registry)`, where `path` is a
/// `fn(&Registry) -> gencheck::Result<Gen<FieldType>>`.
///
/// Fieldless enums pick one of their variants uniformly; they must be `Clone`.
///
/// # Example
///
/// ```rust,ignore
/// use gencheck::*;
///
/// fn age(_: &Registry) -> gencheck::Result<Gen<i32>> {
///     Ok(IntGen::new(0, 100)?.boxed())
/// }
///
/// #[derive(Arbitrary, Debug, Clone, PartialEq)]
/// enum Role {
///     Student,
///     Teacher,
/// }
///
/// #[derive(Arbitrary, Debug, Clone)]
/// struct Person {
///     first_name: String,
///     #[arbitrary(with = age)]
///     age: i32,
///     role: Role,
/// }
///
/// let mut registry = Registry::with_defaults();
/// registry.register_arbitrary::<Role>().register_arbitrary::<Person>();
/// let person = registry.resolve::<Person>()?;
/// ```
#[proc_macro_derive(Arbitrary, attributes(arbitrary))]
pub fn derive_arbitrary(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match arbitrary_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn arbitrary_impl(input: &DeriveInput) -> Result<TokenStream2, syn::Error> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Arbitrary derive does not support generic types",
        ));
    }

    let body = match &input.data {
        Data::Struct(data) => struct_body(&data.fields)?,
        Data::Enum(data) => enum_body(data)?,
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Arbitrary derive does not support unions",
            ));
        }
    };

    Ok(quote! {
        impl gencheck::Arbitrary for #name {
            fn arbitrary(
                registry: &gencheck::Registry,
            ) -> gencheck::Result<gencheck::Gen<Self>> {
                #body
            }
        }
    })
}

fn struct_body(fields: &Fields) -> Result<TokenStream2, syn::Error> {
    let resolved = fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let var = format_ident!("field_{}", i);
            let generator = field_generator(field)?;
            Ok((var, generator))
        })
        .collect::<Result<Vec<_>, syn::Error>>()?;

    let bindings = resolved.iter().map(|(var, generator)| {
        quote! { let #var = #generator; }
    });

    let draws = resolved
        .iter()
        .map(|(var, _)| quote! { gencheck::Generator::generate(&#var, source) });

    let construct = match fields {
        Fields::Named(named) => {
            let names = named.named.iter().map(|field| &field.ident);
            quote! { Self { #(#names: #draws),* } }
        }
        Fields::Unnamed(_) => quote! { Self(#(#draws),*) },
        Fields::Unit => quote! { Self },
    };

    let source = if resolved.is_empty() {
        format_ident!("_source")
    } else {
        format_ident!("source")
    };

    // Struct literal fields evaluate in source order, which is the draw order.
    Ok(quote! {
        #(#bindings)*
        Ok(gencheck::Gen::new(move |#source: &mut gencheck::Source| #construct))
    })
}

fn enum_body(data: &syn::DataEnum) -> Result<TokenStream2, syn::Error> {
    let variants = data
        .variants
        .iter()
        .map(|variant| match variant.fields {
            Fields::Unit => {
                let ident = &variant.ident;
                Ok(quote! { Self::#ident })
            }
            _ => Err(syn::Error::new_spanned(
                variant,
                "Arbitrary derive only supports enums without variant data",
            )),
        })
        .collect::<Result<Vec<_>, syn::Error>>()?;

    Ok(quote! {
        let _ = registry;
        Ok(gencheck::Generator::boxed(gencheck::OneOf::new(vec![#(#variants),*])?))
    })
}

fn field_generator(field: &Field) -> Result<TokenStream2, syn::Error> {
    let ty = &field.ty;
    match with_override(field)? {
        Some(path) => Ok(quote! { #path(registry)? }),
        None => Ok(quote! { registry.resolve::<#ty>()? }),
    }
}

/// Parse `#[arbitrary(with = path)]`.
fn with_override(field: &Field) -> Result<Option<Path>, syn::Error> {
    let mut found = None;
    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("arbitrary")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("with") {
                found = Some(meta.value()?.parse::<Path>()?);
                Ok(())
            } else {
                Err(meta.error("expected `with = path`"))
            }
        })?;
    }
    Ok(found)
}
