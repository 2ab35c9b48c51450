use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// How a channel is stored, clamped and normalized.
#[derive(Clone, Copy)]
enum Channel {
    /// 0..=255, normalized to 0..=1.
    Byte,
    /// 0..=100, normalized to 0..=1.
    Percent,
    /// Degrees wrapping in 0..360, kept in degrees when normalized.
    Hue,
}

impl Channel {
    fn from_attrs(attrs: &[syn::Attribute]) -> Option<Self> {
        attrs.iter().find_map(|attr| {
            let path = attr.path();
            if path.is_ident("byte") {
                Some(Channel::Byte)
            } else if path.is_ident("percent") {
                Some(Channel::Percent)
            } else if path.is_ident("hue") {
                Some(Channel::Hue)
            } else {
                None
            }
        })
    }

    fn is_channel_attr(attr: &syn::Attribute) -> bool {
        let path = attr.path();
        path.is_ident("byte") || path.is_ident("percent") || path.is_ident("hue")
    }

    /// Expression turning an `i32` into the stored field type.
    fn clamp(&self, value: &syn::Ident, ty: &syn::Type) -> proc_macro2::TokenStream {
        match self {
            Channel::Byte => quote! { #value.clamp(0, 255) as #ty },
            Channel::Percent => quote! { #value.clamp(0, 100) as #ty },
            Channel::Hue => quote! { #value.rem_euclid(360) as #ty },
        }
    }

    /// Expression turning the stored field into a floating point component.
    fn normalize(&self, field: &syn::Ident) -> proc_macro2::TokenStream {
        match self {
            Channel::Byte => quote! { self.#field as crate::color::Component / 255.0 },
            Channel::Percent => quote! { self.#field as crate::color::Component / 100.0 },
            Channel::Hue => quote! { self.#field as crate::color::Component },
        }
    }

    /// Expression turning a floating point component back into an `i32`.
    fn denormalize(&self, value: proc_macro2::TokenStream) -> proc_macro2::TokenStream {
        match self {
            Channel::Byte => quote! { crate::math::round(#value * 255.0) },
            Channel::Percent => quote! { crate::math::round(#value * 100.0) },
            Channel::Hue => quote! { crate::math::round(#value) },
        }
    }
}

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each channel of the color.")
        }
        .into();
    }

    let mut names = vec![];
    let mut types = vec![];
    let mut channels = vec![];

    for field in input.fields.iter_mut() {
        let Some(channel) = Channel::from_attrs(&field.attrs) else {
            return syn::Error::new_spanned(
                &field.ident,
                "every channel needs one of #[byte], #[percent] or #[hue]",
            )
            .to_compile_error()
            .into();
        };

        field.attrs.retain(|attr| !Channel::is_channel_attr(attr));
        field.vis = syn::Visibility::Public(Default::default());

        names.push(field.ident.clone().expect("models use named fields"));
        types.push(field.ty.clone());
        channels.push(channel);
    }

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        })
        .expect("derive attributes are valid");
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();

    let clamped = names
        .iter()
        .zip(types.iter())
        .zip(channels.iter())
        .map(|((name, ty), channel)| {
            let expr = channel.clamp(name, ty);
            quote! { #name: #expr }
        });

    let normalized = names
        .iter()
        .zip(channels.iter())
        .map(|(name, channel)| channel.normalize(name));

    let denormalized = channels.iter().enumerate().map(|(i, channel)| {
        let index = syn::Index::from(i);
        channel.denormalize(quote! { value.#index })
    });

    let field1 = &names[0];
    let field2 = &names[1];
    let field3 = &names[2];

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model. Channels outside of their
            /// valid range are clamped and hues wrap around.
            pub fn new(#field1: i32, #field2: i32, #field3: i32) -> Self {
                Self {
                    #(#clamped,)*
                }
            }

            /// Return the channels as floating point components, with bytes
            /// and percentages normalized to `0..=1` and hues in degrees.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(#(#normalized),*)
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(#(#denormalized),*)
            }
        }

        impl crate::color::HasSpace for #struct_name {
            const SPACE: crate::color::Space = crate::color::Space::#struct_name;
        }

        impl From<#struct_name> for crate::color::Color {
            fn from(value: #struct_name) -> Self {
                crate::color::Color::#struct_name(value)
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
