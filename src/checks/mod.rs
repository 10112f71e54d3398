pub mod python;

/// A single command rule.
/// Returns Some(issue) if the command should be blocked, None if OK.
pub type Rule = fn(&str) -> Option<String>;

/// Rules applied to every Bash command, in reporting order
pub const RULES: &[(&str, Rule)] = &[("python", python::check)];

/// Run every rule against a command.
/// Returns the issues found, in rule order (empty if the command is OK).
pub fn validate(command: &str) -> Vec<String> {
    validate_with(RULES, command)
}

fn validate_with(rules: &[(&str, Rule)], command: &str) -> Vec<String> {
    rules
        .iter()
        .filter_map(|(name, rule)| {
            let issue = rule(command)?;
            tracing::debug!(rule = *name, "check failed");
            Some(issue)
        })
        .collect()
}
