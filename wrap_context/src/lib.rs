use proc_macro::TokenStream;
use quote::{quote, ToTokens};
use syn::{parse_macro_input, punctuated::Punctuated, token::Comma, Expr, Member};

/// Use this instead of `anyhow::anyhow!()`
#[proc_macro]
pub fn wohyna(input: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(input);
    let message = located(quote!(format!(#args)));

    quote!(anyhow::anyhow!("{}", #message)).into()
}

/// Use this instead of `anyhow::bail!()`
#[proc_macro]
pub fn liab(input: TokenStream) -> TokenStream {
    let args = proc_macro2::TokenStream::from(input);
    let message = located(quote!(format!(#args)));

    quote!(anyhow::bail!("{}", #message)).into()
}

/// Attaches `[file:line:column] call(args…)` to the error of a `Result` or `Option`
#[proc_macro]
pub fn arg_context(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as Expr);

    with_context(&expr, true).into()
}

/// Same as `arg_context!()`, but arguments are printed as `?`
///
/// Use it when an argument is moved into the call.
#[proc_macro]
pub fn raw_context(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as Expr);

    with_context(&expr, false).into()
}

fn located(message: proc_macro2::TokenStream) -> proc_macro2::TokenStream {
    quote! {
        {
            let loc = std::panic::Location::caller();

            format!("[{}:{}:{}] {}", loc.file(), loc.line(), loc.column(), #message)
        }
    }
}

fn with_context(expr: &Expr, print_args: bool) -> proc_macro2::TokenStream {
    let description = describe_expr(expr, print_args);
    let message = located(description);

    quote! {
        {
            use anyhow::Context;

            #expr.with_context(|| #message)
        }
    }
}

fn describe_args(args: &Punctuated<Expr, Comma>, print_args: bool) -> proc_macro2::TokenStream {
    if !print_args {
        return quote!("?");
    }

    let rendered = args
        .iter()
        .map(|arg| quote!(crate::utils::clip_debug(&#arg)));

    quote!(<[String]>::join(&[#(#rendered),*], ", "))
}

fn flatten_path(tokens: proc_macro2::TokenStream) -> String {
    tokens
        .to_string()
        .replace(" :: ", "::")
        .replace(" . ", ".")
}

fn describe_expr(expr: &Expr, print_args: bool) -> proc_macro2::TokenStream {
    match expr {
        Expr::Call(call) => {
            let func = describe_expr(&call.func, print_args);
            let args = describe_args(&call.args, print_args);

            quote!(format!("{}({})", #func, #args))
        }
        Expr::MethodCall(method) => {
            let receiver = describe_expr(&method.receiver, print_args);
            let name = method.method.to_string();
            let args = describe_args(&method.args, print_args);

            quote!(format!("{}.{}({})", #receiver, #name, #args))
        }
        Expr::Path(path) => {
            let path = flatten_path(path.to_token_stream());

            quote!(String::from(#path))
        }
        Expr::Field(field) => {
            let base = describe_expr(&field.base, print_args);
            let member = match &field.member {
                Member::Named(ident) => ident.to_string(),
                Member::Unnamed(index) => index.index.to_string(),
            };

            quote!(format!("{}.{}", #base, #member))
        }
        Expr::Await(aw) => {
            let base = describe_expr(&aw.base, print_args);

            quote!(format!("{}.await", #base))
        }
        Expr::Macro(ma) => {
            let path = flatten_path(ma.mac.path.to_token_stream());
            let tokens = ma.mac.tokens.to_string();

            quote!(format!("{}!({})", #path, #tokens))
        }
        Expr::Paren(paren) => describe_expr(&paren.expr, print_args),
        Expr::Try(tr) => describe_expr(&tr.expr, print_args),
        _ => syn::Error::new_spanned(expr, "Unexpected expression in context macro")
            .to_compile_error(),
    }
}
