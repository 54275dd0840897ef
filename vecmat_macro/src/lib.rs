use proc_macro::TokenStream;
use quote::quote;

/// Builds a `Vector` from a comma separated list of component literals.
///
/// `vector_new!(1.0, 3.0, 5.0)` expands to `Vector::new(vec![1.0, 3.0, 5.0])`.
/// The `Vector` type has to be in scope at the call site.
#[proc_macro]
pub fn vector_new(input: TokenStream) -> TokenStream {
    if input.is_empty() {
        panic!("No components provided");
    }

    // Re-embed the component list verbatim.
    let components: proc_macro2::TokenStream = format!("{}", input)
        .parse()
        .expect("Failed to parse component list");

    let gen = quote! {
        Vector::new(vec![#components])
    };
    gen.into()
}

/// Builds a `Matrix` from bracketed column literals.
///
/// `matrix_new!([0.0, 1.0], [1.0, 0.0])` expands to
/// `Matrix::new(vec![Vector::new(vec![0.0, 1.0]), Vector::new(vec![1.0, 0.0])])`,
/// which yields a `Result` because the column lengths are checked at runtime.
/// Both `Matrix` and `Vector` have to be in scope at the call site.
#[proc_macro]
pub fn matrix_new(input: TokenStream) -> TokenStream {
    if input.is_empty() {
        panic!("No columns provided");
    }

    // Get a string from the TokenStream and cut it into one
    // segment per bracketed column.
    let tokens = format!("{}", input);
    let mut columns = String::new();

    for segment in tokens.split(']') {
        let column = segment
            .trim()
            .trim_start_matches(',')
            .trim()
            .trim_start_matches('[')
            .trim();

        if column.is_empty() {
            continue;
        }

        columns.push_str("Vector::new(vec![");
        columns.push_str(column);
        columns.push_str("]), ");
    }

    if columns.is_empty() {
        panic!("No columns provided");
    }

    let columns: proc_macro2::TokenStream = columns
        .parse()
        .expect("Failed to parse column list");

    let gen = quote! {
        Matrix::new(vec![#columns])
    };
    gen.into()
}
