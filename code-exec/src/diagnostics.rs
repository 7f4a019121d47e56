//! Recognizes common runtime failures in free-text diagnostics and rewrites
//! them into guidance for the user.
//!
//! Matching is by substring over text produced by the remote runtimes, so a
//! change in upstream wording silently falls through to [`RuntimeDiagnostic::Other`].

/// Known runtime failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeDiagnostic {
    /// A blocking read found no input
    MissingInput,
    /// Input was present but not of the requested token type
    InputMismatch,
    Other,
}

const MISSING_INPUT_SIGNATURES: &[&str] = &[
    "NoSuchElementException",
    "EOFError: EOF when reading a line",
];

const INPUT_MISMATCH_SIGNATURES: &[&str] = &["InputMismatchException"];

pub fn classify(message: &str) -> RuntimeDiagnostic {
    let matches = |signatures: &[&str]| signatures.iter().any(|s| message.contains(s));

    if matches(MISSING_INPUT_SIGNATURES) {
        RuntimeDiagnostic::MissingInput
    } else if matches(INPUT_MISMATCH_SIGNATURES) {
        RuntimeDiagnostic::InputMismatch
    } else {
        RuntimeDiagnostic::Other
    }
}

/// Returns `message` unchanged unless it is a recognized failure
pub fn enrich(message: &str) -> String {
    match classify(message) {
        RuntimeDiagnostic::MissingInput => format!(
            "Input Missing Error:
Your code is trying to read input, but no input was provided.

Quick fixes:
1. Add input in the \"Input\" section below the code editor
2. For two integers, try: \"5 10\" or \"5\\n10\"
3. Make sure you provide enough input values for every read your program performs

Original error:
{message}"
        ),
        RuntimeDiagnostic::InputMismatch => format!(
            "Input Format Error:
The input does not match the type your code is trying to read.

Common fixes:
- For integers: Use space or newline separation (e.g., \"5 10\" or \"5\\n10\")
- For arrays: Put size on first line, elements on second line
- Check if your input matches what your reads expect

Original error:
{message}"
        ),
        RuntimeDiagnostic::Other => message.to_string(),
    }
}
