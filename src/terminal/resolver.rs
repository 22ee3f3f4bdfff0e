use super::registry::{CommandRegistry, CommandSpec};

/// Maps raw input to a registered command.
///
/// Only the first whitespace-delimited token is considered, compared
/// case-insensitively by exact name. Remaining tokens are ignored.
pub fn resolve<'r>(registry: &'r CommandRegistry, input: &str) -> Option<&'r CommandSpec> {
    let token = command_token(input)?;
    registry.get(&token.to_lowercase())
}

fn command_token(input: &str) -> Option<&str> {
    input.split_whitespace().next()
}
