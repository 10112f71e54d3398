/// Message shown to the assistant when a bare python invocation is blocked
pub const MESSAGE: &str = "Please use `uv run python ...`";

/// Block commands that invoke python directly instead of through uv.
/// The prefix match is case-sensitive and does not skip leading whitespace.
pub fn check(command: &str) -> Option<String> {
    if command.starts_with("python") {
        Some(MESSAGE.to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_python_blocked() {
        assert_eq!(check("python").as_deref(), Some(MESSAGE));
        assert_eq!(check("python script.py").as_deref(), Some(MESSAGE));
        assert_eq!(check("python3 foo.py").as_deref(), Some(MESSAGE));
    }

    #[test]
    fn test_any_python_prefix_blocked() {
        // Literal prefix, not a word match
        assert!(check("pythonic-sounding-but-unrelated").is_some());
    }

    #[test]
    fn test_case_sensitive() {
        assert!(check("Python script.py").is_none());
        assert!(check("PYTHON").is_none());
    }

    #[test]
    fn test_leading_whitespace_not_trimmed() {
        assert!(check(" python script.py").is_none());
        assert!(check("\tpython").is_none());
    }

    #[test]
    fn test_other_commands_pass() {
        assert!(check("").is_none());
        assert!(check("ls -la").is_none());
        assert!(check("uv run python script.py").is_none());
        assert!(check("cd src && python main.py").is_none());
    }
}
