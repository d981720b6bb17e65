use heck::ToSnakeCase;
use heck::ToUpperCamelCase;
use proc_macro2::Ident;
use proc_macro2::Span;
use std::collections::HashSet;

const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break",
    "const", "continue", "crate", "do", "dyn", "else", "enum", "extern",
    "false", "final", "fn", "for", "gen", "if", "impl", "in", "let", "loop",
    "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "self", "static", "struct", "super", "trait", "true", "try",
    "type", "typeof", "unsafe", "unsized", "use", "virtual", "where", "while",
    "yield",
];

pub(crate) fn is_rust_keyword(name: &str) -> bool {
    RUST_KEYWORDS.contains(&name)
}

fn ident(name: String) -> Ident {
    if is_rust_keyword(name.as_str()) {
        Ident::new(format!("{name}_").as_str(), Span::call_site())
    } else {
        Ident::new(name.as_str(), Span::call_site())
    }
}

/// `ContainerID` -> `ContainerId`
pub(crate) fn type_ident(graphql_name: &str) -> Ident {
    ident(graphql_name.to_upper_camel_case())
}

/// `SHARED` -> `Shared`
pub(crate) fn variant_ident(graphql_name: &str) -> Ident {
    ident(graphql_name.to_upper_camel_case())
}

/// `withExec` -> `with_exec`, `type` -> `type_`
pub(crate) fn value_ident(graphql_name: &str) -> Ident {
    ident(graphql_name.to_snake_case())
}

/// Like [`value_ident()`], but a field named after its enclosing type (such
/// as `Directory.directory`) also gets a `_` suffix.
pub(crate) fn method_ident(field_name: &str, enclosing_type_name: &str) -> Ident {
    let name = field_name.to_snake_case();
    if field_name.eq_ignore_ascii_case(enclosing_type_name) && !is_rust_keyword(name.as_str()) {
        Ident::new(format!("{name}_").as_str(), Span::call_site())
    } else {
        ident(name)
    }
}

/// Identifiers already handed out within one Rust scope (an enum's variants,
/// an impl's methods, a struct's fields, a method's parameters).
///
/// Distinct GraphQL names can case-convert to the same identifier (`Gzip`
/// and `GZIP`). The first keeps the plain identifier; each later one gets
/// the lowest free numeric suffix (`Gzip2`, `with_exec_2`).
#[derive(Debug, Default)]
pub(crate) struct IdentScope {
    taken: HashSet<String>,
}
impl IdentScope {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn claim(&mut self, ident: Ident) -> Ident {
        let base = ident.to_string();
        if self.taken.insert(base.clone()) {
            return ident;
        }

        let separator = if base.starts_with(char::is_uppercase) || base.ends_with('_') {
            ""
        } else {
            "_"
        };
        let mut ordinal = 2;
        loop {
            let candidate = format!("{base}{separator}{ordinal}");
            if self.taken.insert(candidate.clone()) {
                log::debug!("Renamed colliding identifier `{base}` to `{candidate}`.");
                return Ident::new(candidate.as_str(), Span::call_site());
            }
            ordinal += 1;
        }
    }
}
