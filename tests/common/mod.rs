//! Common test utilities

/// Build an owned argument vector from string literals
pub fn args(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}
