extern crate proc_macro;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    Data, DeriveInput, Error, Field, Fields, GenericArgument, LitStr, PathArguments, Type,
    ext::IdentExt, parse_macro_input, parse_quote,
};

/// Derive `minijson::Parse` for a struct with named fields.
///
/// Each field is read from the object member with the same name, or the name given by
/// `#[json(rename = "...")]`. `Option` fields may be absent (or `null`); any other absent
/// field is a `MissingField` error. Members with no matching field are parsed and dropped.
/// Type parameters get a `Parse` bound.
#[proc_macro_derive(JsonDeserialise, attributes(json))]
pub fn derive_json_deserialise(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> Result<TokenStream2, Error> {
    // TODO: support enums
    let Data::Struct(data) = &input.data else {
        return Err(Error::new_spanned(
            input,
            "JSON deserialising can only be derived for structs",
        ));
    };

    let Fields::Named(fields) = &data.fields else {
        return Err(Error::new_spanned(
            input,
            "JSON deserialising can only be derived for named field structs",
        ));
    };

    let struct_name = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(::minijson::Parse));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let mut slot_decls = Vec::new();
    let mut member_branches = Vec::new();
    let mut constructor_fields = Vec::new();

    for field in &fields.named {
        let Some(field_name) = field.ident.as_ref() else {
            return Err(Error::new_spanned(field, "expected a named field"));
        };
        let field_type = &field.ty;
        let key = member_name(field, field_name.unraw().to_string())?;
        let slot = format_ident!("__field_{}", field_name.unraw());

        // `Option` fields are their own slot, starting at `None`. Anything else gets wrapped
        // so that a missing member can be detected at the end.
        if is_option(field_type) {
            slot_decls.push(quote! {
                let mut #slot: #field_type = ::core::option::Option::None;
            });
            member_branches.push(quote! {
                #key => #slot = <#field_type as ::minijson::Parse>::parse(parser)?,
            });
            constructor_fields.push(quote! { #field_name: #slot });
        } else {
            slot_decls.push(quote! {
                let mut #slot: ::core::option::Option<#field_type> = ::core::option::Option::None;
            });
            member_branches.push(quote! {
                #key => #slot = ::core::option::Option::Some(
                    <#field_type as ::minijson::Parse>::parse(parser)?
                ),
            });
            constructor_fields.push(quote! {
                #field_name: #slot.ok_or_else(|| parser.make_err_at(
                    ::minijson::ParserErrKind::MissingField(#key.to_string()),
                    __start,
                ))?
            });
        }
    }

    let expanded = quote! {
        impl #impl_generics ::minijson::Parse for #struct_name #ty_generics #where_clause {
            fn parse(
                parser: &mut ::minijson::Parser,
            ) -> ::core::result::Result<Self, ::minijson::ParserErr> {
                parser.peek()?;
                let __start = parser.location();

                #( #slot_decls )*

                parser.parse_members(|parser, name| {
                    match name.as_str() {
                        #( #member_branches )*
                        _ => {
                            <::minijson::JsonValue as ::minijson::Parse>::parse(parser)?;
                        }
                    }

                    ::core::result::Result::Ok(())
                })?;

                ::core::result::Result::Ok(Self {
                    #( #constructor_fields, )*
                })
            }
        }
    };

    Ok(expanded)
}

fn member_name(field: &Field, default: String) -> Result<String, Error> {
    let mut name = default;

    for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("json")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                name = meta.value()?.parse::<LitStr>()?.value();
                return Ok(());
            }

            Err(meta.error("unsupported json attribute, expected `rename`"))
        })?;
    }

    Ok(name)
}

fn is_option(ty: &Type) -> bool {
    let Type::Path(type_path) = ty else {
        return false;
    };

    type_path.qself.is_none()
        && type_path.path.segments.last().is_some_and(|segment| {
            segment.ident == "Option"
                && matches!(
                    &segment.arguments,
                    PathArguments::AngleBracketed(args)
                        if args.args.len() == 1
                            && matches!(args.args.first(), Some(GenericArgument::Type(_)))
                )
        })
}
