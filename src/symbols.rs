//! Symbol tree model and its builder.
//!
//! A [`Symbol`] is one documented unit of code: a module, a type ("class") or a function.
//! The builder walks a parsed file's AST and produces one module `Symbol` per source file,
//! with functions, types and their methods as members. The resulting tree is built once per
//! run and is read-only during rendering.

use crate::parser::ParsedFile;
use log::debug;
use syn::spanned::Spanned;

/// The variant of a documented symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// A module (one per source file, or an inline `mod` item)
    Module,
    /// A `struct` or `enum` together with its inherent methods
    Class,
    /// A free function or a method
    Function,
}

/// A documented unit of code.
///
/// Members are kept in source order and each symbol belongs to exactly one owning
/// namespace; `use` re-exports are never collected.
#[derive(Debug, Clone)]
pub struct Symbol {
    /// The symbol's unqualified name
    pub name: String,
    /// Which variant this symbol is
    pub kind: SymbolKind,
    /// Raw doc comment text, if any
    pub doc_text: Option<String>,
    /// Ordered parameter names, excluding receivers (`self`). `None` when the
    /// signature could not be resolved to plain names, in which case the
    /// docstring cross-check is skipped for this symbol.
    pub declared_params: Option<Vec<String>>,
    /// The declared return type, if any
    pub declared_return_type: Option<String>,
    /// Raw source text of the item, for optional inclusion in the output
    pub source_text: Option<String>,
    /// Child symbols (modules and classes only), in source order
    pub members: Vec<Symbol>,
}

impl Symbol {
    /// Create a module symbol
    pub fn module(name: String, doc_text: Option<String>) -> Self {
        Self {
            name,
            kind: SymbolKind::Module,
            doc_text,
            declared_params: None,
            declared_return_type: None,
            source_text: None,
            members: Vec::new(),
        }
    }

    /// Create a class symbol
    pub fn class(name: String, doc_text: Option<String>) -> Self {
        Self {
            name,
            kind: SymbolKind::Class,
            doc_text,
            declared_params: None,
            declared_return_type: None,
            source_text: None,
            members: Vec::new(),
        }
    }

    /// Create a function symbol
    pub fn function(
        name: String,
        doc_text: Option<String>,
        declared_params: Option<Vec<String>>,
        declared_return_type: Option<String>,
        source_text: Option<String>,
    ) -> Self {
        Self {
            name,
            kind: SymbolKind::Function,
            doc_text,
            declared_params,
            declared_return_type,
            source_text,
            members: Vec::new(),
        }
    }
}

/// Builder that turns a parsed source file into a module [`Symbol`].
pub struct SymbolTreeBuilder;

impl SymbolTreeBuilder {
    /// Builds the symbol tree for one source file.
    ///
    /// Free functions and type definitions become members of the returned module symbol,
    /// in source order. Inherent `impl` methods are attached to their type's class symbol.
    /// Inline `mod` items are recorded as module members but not recursed into; nested
    /// modules are documented through their own files. Items whose name starts with `_`
    /// are skipped.
    ///
    /// # Arguments
    ///
    /// * `module_name` - The dotted module name derived from the file's relative path
    /// * `parsed` - The parsed source file
    pub fn build_module(module_name: &str, parsed: &ParsedFile) -> Symbol {
        debug!("Building symbol tree for module: {}", module_name);

        let module_doc = doc_text(&parsed.syntax_tree.attrs);
        let mut module = Symbol::module(module_name.to_string(), module_doc);

        for item in &parsed.syntax_tree.items {
            match item {
                syn::Item::Fn(item_fn) => {
                    let name = item_fn.sig.ident.to_string();
                    if is_skipped(&name) {
                        continue;
                    }
                    debug!("\tFunction: {}", name);
                    module.members.push(function_symbol(
                        &name,
                        &item_fn.attrs,
                        &item_fn.sig,
                        snippet(&parsed.content, item_fn.span()),
                    ));
                }
                syn::Item::Struct(item_struct) => {
                    let name = item_struct.ident.to_string();
                    if is_skipped(&name) {
                        continue;
                    }
                    debug!("\tClass: {}", name);
                    let mut class = Symbol::class(name.clone(), doc_text(&item_struct.attrs));
                    class.members = methods_of(&name, parsed);
                    module.members.push(class);
                }
                syn::Item::Enum(item_enum) => {
                    let name = item_enum.ident.to_string();
                    if is_skipped(&name) {
                        continue;
                    }
                    debug!("\tClass: {}", name);
                    let mut class = Symbol::class(name.clone(), doc_text(&item_enum.attrs));
                    class.members = methods_of(&name, parsed);
                    module.members.push(class);
                }
                syn::Item::Mod(item_mod) => {
                    let name = item_mod.ident.to_string();
                    if is_skipped(&name) {
                        continue;
                    }
                    debug!("\tModule: {}", name);
                    module
                        .members
                        .push(Symbol::module(name, doc_text(&item_mod.attrs)));
                }
                // `use` re-exports and everything else stay out of the tree
                _ => {}
            }
        }

        module
    }
}

/// Collects the inherent methods of the named type from all `impl` blocks in the file.
///
/// Trait impl methods are not collected; they document the trait, not the type.
fn methods_of(type_name: &str, parsed: &ParsedFile) -> Vec<Symbol> {
    let mut methods = Vec::new();

    for item in &parsed.syntax_tree.items {
        let item_impl = match item {
            syn::Item::Impl(item_impl) if item_impl.trait_.is_none() => item_impl,
            _ => continue,
        };

        if impl_type_name(item_impl).as_deref() != Some(type_name) {
            continue;
        }

        for impl_item in &item_impl.items {
            if let syn::ImplItem::Fn(method) = impl_item {
                let name = method.sig.ident.to_string();
                if is_skipped(&name) {
                    continue;
                }
                debug!("\t\tMethod: {}::{}", type_name, name);
                methods.push(function_symbol(
                    &name,
                    &method.attrs,
                    &method.sig,
                    snippet(&parsed.content, method.span()),
                ));
            }
        }
    }

    methods
}

fn function_symbol(
    name: &str,
    attrs: &[syn::Attribute],
    sig: &syn::Signature,
    source_text: Option<String>,
) -> Symbol {
    Symbol::function(
        name.to_string(),
        doc_text(attrs),
        param_names(sig),
        return_type(sig),
        source_text,
    )
}

/// Extracts the name of the type an `impl` block applies to.
fn impl_type_name(item_impl: &syn::ItemImpl) -> Option<String> {
    if let syn::Type::Path(type_path) = &*item_impl.self_ty {
        type_path
            .path
            .segments
            .last()
            .map(|segment| segment.ident.to_string())
    } else {
        None
    }
}

/// Joins the `#[doc]` attribute values into the symbol's raw docstring.
fn doc_text(attrs: &[syn::Attribute]) -> Option<String> {
    let mut lines = Vec::new();

    for attr in attrs {
        if !attr.path().is_ident("doc") {
            continue;
        }
        if let syn::Meta::NameValue(name_value) = &attr.meta {
            if let syn::Expr::Lit(expr_lit) = &name_value.value {
                if let syn::Lit::Str(lit_str) = &expr_lit.lit {
                    lines.push(lit_str.value());
                }
            }
        }
    }

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Collects the parameter names of a signature, excluding receivers.
///
/// Returns `None` when any parameter is bound by a pattern rather than a plain
/// identifier; such a signature has no recoverable parameter list.
fn param_names(sig: &syn::Signature) -> Option<Vec<String>> {
    let mut names = Vec::new();

    for input in &sig.inputs {
        match input {
            syn::FnArg::Receiver(_) => continue,
            syn::FnArg::Typed(pat_type) => match &*pat_type.pat {
                syn::Pat::Ident(pat_ident) => names.push(pat_ident.ident.to_string()),
                _ => return None,
            },
        }
    }

    Some(names)
}

fn return_type(sig: &syn::Signature) -> Option<String> {
    match &sig.output {
        syn::ReturnType::Default => None,
        syn::ReturnType::Type(_, ty) => Some(type_to_string(ty)),
    }
}

fn type_to_string(ty: &syn::Type) -> String {
    match ty {
        syn::Type::Path(type_path) => {
            let mut parts = Vec::new();
            for segment in &type_path.path.segments {
                let mut part = segment.ident.to_string();
                if let syn::PathArguments::AngleBracketed(args) = &segment.arguments {
                    let inner: Vec<String> = args
                        .args
                        .iter()
                        .map(|arg| match arg {
                            syn::GenericArgument::Type(inner_ty) => type_to_string(inner_ty),
                            syn::GenericArgument::Lifetime(lifetime) => format!("'{}", lifetime.ident),
                            _ => "_".to_string(),
                        })
                        .collect();
                    part.push('<');
                    part.push_str(&inner.join(", "));
                    part.push('>');
                }
                parts.push(part);
            }
            parts.join("::")
        }
        syn::Type::Reference(reference) => {
            let mutability = if reference.mutability.is_some() { "mut " } else { "" };
            format!("&{}{}", mutability, type_to_string(&reference.elem))
        }
        syn::Type::Tuple(tuple) => {
            let inner: Vec<String> = tuple.elems.iter().map(type_to_string).collect();
            format!("({})", inner.join(", "))
        }
        syn::Type::Slice(slice) => format!("[{}]", type_to_string(&slice.elem)),
        _ => "_".to_string(),
    }
}

/// Slices the raw source text covered by a span.
///
/// Span locations are 1-indexed lines and 0-indexed character columns.
fn snippet(content: &str, span: proc_macro2::Span) -> Option<String> {
    let start = span.start();
    let end = span.end();
    let lines: Vec<&str> = content.lines().collect();

    if start.line == 0 || end.line == 0 || end.line > lines.len() {
        return None;
    }

    if start.line == end.line {
        return slice_columns(lines[start.line - 1], start.column, end.column);
    }

    let mut out = String::new();
    out.push_str(&slice_columns(lines[start.line - 1], start.column, usize::MAX)?);
    out.push('\n');
    for line in &lines[start.line..end.line - 1] {
        out.push_str(line);
        out.push('\n');
    }
    out.push_str(&slice_columns(lines[end.line - 1], 0, end.column)?);
    Some(out)
}

/// Column-safe slice of one line (columns count characters, not bytes).
fn slice_columns(line: &str, start_col: usize, end_col: usize) -> Option<String> {
    if start_col == 0 && end_col >= line.chars().count() {
        return Some(line.to_string());
    }
    let collected: String = line
        .chars()
        .skip(start_col)
        .take(end_col.saturating_sub(start_col))
        .collect();
    Some(collected)
}

fn is_skipped(name: &str) -> bool {
    name.starts_with('_')
}
