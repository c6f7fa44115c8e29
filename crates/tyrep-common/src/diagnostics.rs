//! Diagnostics for the reification pass.
//!
//! The pipeline itself is total: classification falls back to `any`,
//! encoding falls back to `void 0`, and rewrites that cannot proceed leave
//! the node unchanged. Every such degradation that stems from user code is
//! made observable through a `Diagnostic` aggregated by the driver.

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DiagnosticCategory {
    Warning,
    Error,
    Suggestion,
    Message,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub category: DiagnosticCategory,
    pub code: u32,
    pub file: String,
    pub start: u32,
    pub length: u32,
    pub message_text: String,
}

impl Diagnostic {
    pub fn error(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Error,
            code,
            file: file.into(),
            start,
            length,
            message_text: message.into(),
        }
    }

    pub fn warning(
        file: impl Into<String>,
        start: u32,
        length: u32,
        message: impl Into<String>,
        code: u32,
    ) -> Self {
        Self {
            category: DiagnosticCategory::Warning,
            code,
            file: file.into(),
            start,
            length,
            message_text: message.into(),
        }
    }
}

/// Message codes for the reification pass. The 90xxx block is reserved for
/// transform-produced diagnostics so they cannot collide with checker codes.
pub mod diagnostic_codes {
    /// Marker call with zero or more than one explicit type argument.
    pub const MARKER_TYPE_ARGUMENT_COUNT: u32 = 90001;
    /// The marker's type argument could not be resolved to a static type.
    pub const UNRESOLVED_TYPE_ARGUMENT: u32 = 90002;
    /// A witness identifier was required for a type parameter that has no
    /// enclosing generic declaration in scope.
    pub const WITNESS_NOT_IN_SCOPE: u32 = 90003;
    /// A polymorphic type argument that is not itself a bare type parameter
    /// cannot be forwarded as a single witness.
    pub const COMPOSITE_POLYMORPHIC_FORWARD: u32 = 90004;
    /// A generic call's inferred type arguments could not be resolved.
    pub const UNRESOLVED_CALL_TYPE_ARGUMENTS: u32 = 90005;
}

pub mod diagnostic_messages {
    use super::diagnostic_codes as codes;

    pub struct MessageTemplate {
        pub code: u32,
        pub message: &'static str,
    }

    pub const MESSAGES: &[MessageTemplate] = &[
        MessageTemplate {
            code: codes::MARKER_TYPE_ARGUMENT_COUNT,
            message: "The reification marker takes exactly one type argument, but {0} were provided.",
        },
        MessageTemplate {
            code: codes::UNRESOLVED_TYPE_ARGUMENT,
            message: "Cannot resolve the type argument '{0}' to a static type.",
        },
        MessageTemplate {
            code: codes::WITNESS_NOT_IN_SCOPE,
            message: "Type parameter '{0}' has no witness in scope here.",
        },
        MessageTemplate {
            code: codes::COMPOSITE_POLYMORPHIC_FORWARD,
            message: "Cannot forward a single witness for the composite polymorphic type '{0}'.",
        },
        MessageTemplate {
            code: codes::UNRESOLVED_CALL_TYPE_ARGUMENTS,
            message: "Type arguments for this generic call could not be resolved.",
        },
    ];
}

pub fn get_message_template(code: u32) -> Option<&'static str> {
    diagnostic_messages::MESSAGES
        .iter()
        .find(|m| m.code == code)
        .map(|m| m.message)
}

/// Substitute `{0}`, `{1}`, ... placeholders in a message template.
pub fn format_message(message: &str, args: &[&str]) -> String {
    let mut result = message.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{i}}}"), arg);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_message_substitutes_placeholders() {
        let template = get_message_template(diagnostic_codes::WITNESS_NOT_IN_SCOPE).unwrap();
        let message = format_message(template, &["T"]);
        assert_eq!(message, "Type parameter 'T' has no witness in scope here.");
    }

    #[test]
    fn all_codes_have_templates() {
        for code in [
            diagnostic_codes::MARKER_TYPE_ARGUMENT_COUNT,
            diagnostic_codes::UNRESOLVED_TYPE_ARGUMENT,
            diagnostic_codes::WITNESS_NOT_IN_SCOPE,
            diagnostic_codes::COMPOSITE_POLYMORPHIC_FORWARD,
            diagnostic_codes::UNRESOLVED_CALL_TYPE_ARGUMENTS,
        ] {
            assert!(get_message_template(code).is_some(), "missing template for {code}");
        }
    }
}
