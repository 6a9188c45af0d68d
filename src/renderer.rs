//! Document renderer: recursive traversal of the symbol tree into Markdown blocks.
//!
//! Within one namespace level, functions are always rendered before classes, each
//! in the order the symbol tree supplies them. Classes recurse into their own
//! members with the qualified path extended. The renderer returns an owned block
//! list from every call instead of mutating a shared accumulator, which keeps the
//! ordering guarantees explicit across recursion.

use crate::crosscheck::{self, Diagnostic};
use crate::docstring::{self, MISSING_DOCSTRING_SENTINEL};
use crate::symbols::{Symbol, SymbolKind};
use log::{debug, warn};

/// Renders symbol trees into ordered Markdown blocks.
pub struct Renderer {
    show_source: bool,
}

/// Ordered Markdown fragments plus the diagnostics produced while rendering them.
///
/// Blocks are joined with newlines at assembly time; each block carries its own
/// trailing newline where the layout needs one.
#[derive(Debug, Default)]
pub struct RenderOutput {
    /// Markdown fragments, append-only, in emission order
    pub blocks: Vec<String>,
    /// Recoverable conditions encountered during rendering
    pub diagnostics: Vec<Diagnostic>,
}

impl RenderOutput {
    fn absorb(&mut self, other: RenderOutput) {
        self.blocks.extend(other.blocks);
        self.diagnostics.extend(other.diagnostics);
    }
}

impl Renderer {
    /// Creates a renderer.
    ///
    /// # Arguments
    ///
    /// * `show_source` - When true, function source text is included as fenced code blocks
    pub fn new(show_source: bool) -> Self {
        Self { show_source }
    }

    /// Renders one file's module symbol into ordered Markdown blocks.
    ///
    /// A missing docstring is never fatal: the sentinel warning is substituted,
    /// a diagnostic is emitted and traversal of siblings continues.
    pub fn render_module(&self, module: &Symbol) -> RenderOutput {
        debug!("Rendering module: {}", module.name);
        self.render_members(module, "")
    }

    /// Renders the members of one namespace level. `prefix` is the qualified
    /// path accumulated so far, either empty or ending with `.`.
    fn render_members(&self, parent: &Symbol, prefix: &str) -> RenderOutput {
        let mut output = RenderOutput::default();

        // Functions first
        for member in members_of_kind(parent, SymbolKind::Function) {
            self.render_function(member, prefix, &mut output);
        }

        // Classes second
        for member in members_of_kind(parent, SymbolKind::Class) {
            self.render_class(member, prefix, &mut output);
        }

        // Nested modules are recorded but documented through their own files
        for member in members_of_kind(parent, SymbolKind::Module) {
            debug!("Nested module noted, not rendered here: {}", member.name);
        }

        output
    }

    fn render_function(&self, function: &Symbol, prefix: &str, output: &mut RenderOutput) {
        debug!("Rendering function: {}{}", prefix, function.name);
        output
            .blocks
            .push(format!("### FUNCTION: {}{}\n", prefix, function.name));

        self.render_docstring(function, output);

        if self.show_source {
            if let Some(source) = &function.source_text {
                output.blocks.push(format!("```rust\n{}\n```\n", source));
            }
        }

        output.blocks.push(horizontal_rule());
    }

    fn render_class(&self, class: &Symbol, prefix: &str, output: &mut RenderOutput) {
        debug!("Rendering class: {}{}", prefix, class.name);
        output.blocks.push(format!("### CLASS: {}\n", class.name));

        self.render_docstring(class, output);

        // Recurse into the class's own members with the path extended
        let nested = self.render_members(class, &format!("{}{}.", prefix, class.name));

        if nested.blocks.is_empty() {
            // A class with nothing to render still closes with exactly one rule,
            // keeping separator symmetry with the function case
            output.diagnostics.extend(nested.diagnostics);
            output.blocks.push(horizontal_rule());
        } else {
            output.absorb(nested);
        }
    }

    /// Emits the reformatted docstring block for a symbol, or the sentinel
    /// warning when there is none. Cross-checking only applies to functions
    /// whose parameter list could be resolved.
    fn render_docstring(&self, symbol: &Symbol, output: &mut RenderOutput) {
        let doc = symbol.doc_text.as_deref().unwrap_or("");

        if doc.is_empty() {
            let diagnostic = Diagnostic::MissingDocstring {
                symbol: symbol.name.clone(),
            };
            warn!("{}", diagnostic);
            output.diagnostics.push(diagnostic);
            output
                .blocks
                .push(format!("{}\n", MISSING_DOCSTRING_SENTINEL));
            return;
        }

        let formatted = docstring::reformat(doc);
        output.blocks.push(format!("{}\n", formatted.markdown));

        if symbol.kind == SymbolKind::Function {
            if let Some(declared) = &symbol.declared_params {
                output.diagnostics.extend(crosscheck::check_signature(
                    &symbol.name,
                    declared,
                    &formatted.signature,
                ));
            }
        }
    }
}

fn members_of_kind<'a>(
    parent: &'a Symbol,
    kind: SymbolKind,
) -> impl Iterator<Item = &'a Symbol> {
    parent.members.iter().filter(move |m| m.kind == kind)
}

fn horizontal_rule() -> String {
    "\n---\n".to_string()
}
