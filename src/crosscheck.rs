//! Signature cross-check: reconciles declared parameters with documented ones.
//!
//! The check is advisory only: it never blocks rendering and never changes the
//! rendered Markdown. Its findings go to the diagnostic stream as [`Diagnostic`]
//! values, which are also logged as warnings.

use crate::docstring::ExtractedSignature;
use log::warn;

/// A recoverable condition found while rendering documentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A symbol has no docstring; the sentinel warning was substituted
    MissingDocstring {
        /// Name of the undocumented symbol
        symbol: String,
    },
    /// A declared parameter is absent from its function's docstring
    MissingParamDoc {
        /// Name of the function
        function: String,
        /// Name of the undocumented parameter
        param: String,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Diagnostic::MissingDocstring { symbol } => {
                write!(f, "Warning: No docstring found for: {}!", symbol)
            }
            Diagnostic::MissingParamDoc { function, param } => {
                write!(
                    f,
                    "Warning: Parameter `{}` of `{}` is not documented",
                    param, function
                )
            }
        }
    }
}

/// Compares a function's declared parameters against the signature extracted
/// from its own docstring.
///
/// Emits one [`Diagnostic::MissingParamDoc`] for every declared parameter the
/// docstring does not mention. Documented names with no declared counterpart are
/// left alone; the docstring may legitimately describe more than the signature.
///
/// Callers skip this check entirely for symbols with no recoverable parameter
/// list and for symbols with no docstring.
pub fn check_signature(
    function: &str,
    declared_params: &[String],
    extracted: &ExtractedSignature,
) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();

    for param in declared_params {
        if !extracted.params.iter().any(|documented| documented == param) {
            let diagnostic = Diagnostic::MissingParamDoc {
                function: function.to_string(),
                param: param.clone(),
            };
            warn!("{}", diagnostic);
            diagnostics.push(diagnostic);
        }
    }

    diagnostics
}
