use proc_macro::TokenStream;
use quote::quote;
use syn::{
    DeriveInput, Path,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Registers an ability type for a character at load time.
///
/// Place on a struct or enum that implements `knack::Ability` and `Default`.
/// The argument names the character, either as a bare variant (`Frosty`) or
/// as a path (`Character::Frosty`).
///
/// ```rust,ignore
/// #[knack::ability(Bones)]
/// #[derive(Default)]
/// struct Rattle {
///     punches: u32,
/// }
///
/// impl knack::Ability for Rattle { ... }
/// ```
#[proc_macro_attribute]
pub fn ability(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as AbilityArgs);
    let input = parse_macro_input!(item as DeriveInput);

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "#[ability] types cannot be generic; register a concrete type",
        )
        .to_compile_error()
        .into();
    }

    let name = &input.ident;
    let character = args.character_expr();

    let expanded = quote! {
        #input

        ::knack::register_ability!(#character, #name);
    };

    TokenStream::from(expanded)
}

struct AbilityArgs {
    character: Path,
}

impl AbilityArgs {
    /// A bare variant is resolved against `::knack::Character`.
    fn character_expr(&self) -> proc_macro2::TokenStream {
        let path = &self.character;
        match path.get_ident() {
            Some(variant) => quote! { ::knack::Character::#variant },
            None => quote! { #path },
        }
    }
}

impl Parse for AbilityArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected a character, e.g. #[ability(Frosty)]"));
        }
        let character: Path = input.parse()?;
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after character"));
        }
        Ok(AbilityArgs { character })
    }
}
