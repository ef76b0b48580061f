//! Turns a finished helper process into a call outcome.

use tabula_types::ResultEnvelope;

use crate::error::RuntimeError;
use crate::types::HelperOutput;

/// Interprets a helper's exit status and buffered output.
///
/// - non-zero exit (or signal): `Exited`, carrying stderr
/// - exit 0, stdout not JSON (or the bare `null` document): `InvalidOutput`,
///   carrying stdout
/// - exit 0, falsy `success`: `Reported`, carrying the envelope's `error`
/// - otherwise the parsed envelope
pub fn interpret_output(output: HelperOutput) -> Result<ResultEnvelope, RuntimeError> {
    if !output.exited_cleanly() {
        return Err(RuntimeError::Exited {
            code: output.exit_code,
            stderr: output.stderr,
        });
    }

    let envelope = match ResultEnvelope::parse(&output.stdout) {
        // `null` has no fields to read `success` from.
        Ok(envelope) if !envelope.as_value().is_null() => envelope,
        _ => {
            return Err(RuntimeError::InvalidOutput {
                stdout: output.stdout,
            })
        }
    };

    if !envelope.is_success() {
        return Err(RuntimeError::Reported {
            message: envelope.error_message(),
        });
    }

    Ok(envelope)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn exited(code: Option<i32>, stdout: &str, stderr: &str) -> HelperOutput {
        HelperOutput {
            exit_code: code,
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            duration_ms: 1,
        }
    }

    #[test]
    fn success_envelope_is_returned_whole() {
        let env = interpret_output(exited(Some(0), r#"{"success": true, "data": [[1,2]]}"#, ""))
            .expect("success");
        assert_eq!(env.as_value(), &json!({"success": true, "data": [[1, 2]]}));
    }

    #[test]
    fn reported_failure_uses_error_field() {
        let err = interpret_output(exited(
            Some(0),
            r#"{"success": false, "error": "file not found"}"#,
            "",
        ))
        .expect_err("failure");
        assert_eq!(err.to_string(), "file not found");
    }

    #[test]
    fn non_json_stdout_is_invalid_output() {
        let err = interpret_output(exited(Some(0), "oops", "")).expect_err("failure");
        assert!(matches!(err, RuntimeError::InvalidOutput { .. }));
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn empty_stdout_is_invalid_output() {
        let err = interpret_output(exited(Some(0), "", "")).expect_err("failure");
        assert!(matches!(err, RuntimeError::InvalidOutput { .. }));
    }

    #[test]
    fn null_document_is_invalid_output() {
        let err = interpret_output(exited(Some(0), "null\n", "")).expect_err("failure");
        assert!(matches!(err, RuntimeError::InvalidOutput { .. }));
        assert_eq!(err.to_string(), "Invalid JSON output: null\n");
    }

    #[test]
    fn scalar_document_is_reported_failure() {
        let err = interpret_output(exited(Some(0), "42", "")).expect_err("failure");
        assert!(matches!(err, RuntimeError::Reported { .. }));
    }

    #[test]
    fn nonzero_exit_carries_stderr_even_with_valid_stdout() {
        let err = interpret_output(exited(
            Some(2),
            r#"{"success": true}"#,
            "disk full",
        ))
        .expect_err("failure");
        assert!(matches!(err, RuntimeError::Exited { code: Some(2), .. }));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn signal_death_is_exited() {
        let err = interpret_output(exited(None, "", "")).expect_err("failure");
        assert!(matches!(err, RuntimeError::Exited { code: None, .. }));
    }
}
