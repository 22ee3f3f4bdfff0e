//! The command vocabulary of the terminal.
use super::content::{self, ContentBlock, RenderContext};

/// Builds the output block of a command.
pub type ContentProducer = fn(&RenderContext<'_>) -> ContentBlock;

/// What happens once a command has been resolved.
#[derive(Clone, Copy)]
pub enum CommandAction {
    /// Append a reference to the block built by the producer.
    Render(ContentProducer),
    /// Empty the scrollback instead of printing anything.
    ClearScrollback,
}

impl std::fmt::Debug for CommandAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(_) => f.write_str("Render"),
            Self::ClearScrollback => f.write_str("ClearScrollback"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Lower-cased command name.
    pub name: String,
    /// One-line description surfaced by `help`.
    pub description: String,
    pub action: CommandAction,
}

/// Ordered, case-insensitive table of registered commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: Vec<CommandSpec>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The default vocabulary, in the order `help` lists it.
    pub fn builtin() -> Self {
        use CommandAction::{ClearScrollback, Render};

        let mut registry = Self::new();
        registry.register("help", "list commands", Render(content::help));
        registry.register("profile", "overview of the person", Render(content::profile));
        registry.register("bio", "short biography", Render(content::bio));
        registry.register("skills", "technical skills", Render(content::skills));
        registry.register("certificates", "earned certificates", Render(content::certificates));
        registry.register("projects", "selected projects", Render(content::projects));
        registry.register("contact", "contact information", Render(content::contact));
        registry.register("whoami", "current user", Render(content::whoami));
        registry.register("date", "current date/time", Render(content::date));
        registry.register("sysinfo", "service information", Render(content::sysinfo));
        registry.register("clear", "clear screen", ClearScrollback);
        registry
    }

    /// Adds a command, replacing any existing command of the same name in place.
    pub fn register(&mut self, name: &str, description: &str, action: CommandAction) {
        let spec = CommandSpec {
            name: name.trim().to_lowercase(),
            description: description.to_string(),
            action,
        };

        match self.commands.iter_mut().find(|c| c.name == spec.name) {
            Some(existing) => *existing = spec,
            None => self.commands.push(spec),
        }
    }

    /// Exact lookup of an already lower-cased name.
    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSpec> {
        self.commands.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the block of a registered command.
    ///
    /// Returns `None` for unknown names and for commands that mutate the
    /// scrollback instead of printing.
    pub fn render(&self, name: &str, ctx: &RenderContext<'_>) -> Option<ContentBlock> {
        match self.get(name)?.action {
            CommandAction::Render(produce) => Some(produce(ctx)),
            CommandAction::ClearScrollback => None,
        }
    }
}
