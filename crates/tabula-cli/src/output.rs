//! Output formatting for CLI responses.

use tabula_types::DiagnosticError;

/// Prints the cause and fix of a failure, when known, to stderr.
pub fn print_diagnostic(error: &dyn DiagnosticError) {
    if let Some(hint) = error.hint() {
        eprintln!("\n  Cause: {hint}");
    }
    if let Some(fix) = error.fix() {
        eprintln!("  Fix:   {fix}\n");
    }
}
