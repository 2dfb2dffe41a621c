// src/checker/classify.rs
// =============================================================================
// This module turns a numeric HTTP status code into a category and a label.
//
// The table is closed on purpose: only the thirteen codes below get a real
// label. Everything else, including common codes like 302, 429 and 503,
// falls through to Unknown. New codes should be added here and nowhere else.
//
// Rust concepts:
// - Enums: StatusCategory is one of a fixed set of values
// - match on integers: each arm is one row of the table
// - &'static str: labels are string literals baked into the binary
// =============================================================================

/// Severity tier of a probed URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCategory {
    /// 200
    Success,
    /// 300, 301, 307, 308
    Redirect,
    /// 400-404, 410
    ClientError,
    /// 500
    ServerError,
    /// Transport failure (code 0) or any code not in the table
    Unknown,
}

impl StatusCategory {
    // Alive means the server answered with a code we recognise as usable
    pub fn is_alive(self) -> bool {
        matches!(self, StatusCategory::Success | StatusCategory::Redirect)
    }

    pub fn is_bad(self) -> bool {
        matches!(self, StatusCategory::ClientError | StatusCategory::ServerError)
    }
}

/// A status code's place in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub category: StatusCategory,
    pub label: &'static str,
}

// Looks up `code` in the status table
//
// Example:
//   classify(404) -> ClientError, "is bad, [Not Found]"
//   classify(429) -> Unknown, "is unknown"
pub fn classify(code: u16) -> Classification {
    use StatusCategory::*;

    let (category, label) = match code {
        200 => (Success, "is alive, [OK]"),
        300 => (Redirect, "it's alive, [Multiple Choices]"),
        301 => (Redirect, "it's alive, [Found but its moved permanently]"),
        307 => (Redirect, "it's alive, [Found but its a temporary redirect]"),
        308 => (Redirect, "it's alive, [Found but its a permanent redirect]"),
        400 => (ClientError, "is bad, [Bad Request]"),
        401 => (ClientError, "is bad, [Unauthorized]"),
        402 => (ClientError, "is bad, [Payment Required]"),
        403 => (ClientError, "is bad, [Forbidden]"),
        404 => (ClientError, "is bad, [Not Found]"),
        410 => (ClientError, "is bad, [Gone]"),
        500 => (ServerError, "is bad, [Internal Server Error]"),
        _ => (Unknown, "is unknown"),
    };

    Classification { category, label }
}
