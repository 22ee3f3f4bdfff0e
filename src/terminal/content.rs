//! Structured output blocks and the producers for the built-in commands.
use chrono::{DateTime, Local};

use crate::config::ProfileConfig;

use super::registry::CommandRegistry;

/// Width of the command-name column in the `help` listing.
const HELP_NAME_WIDTH: usize = 10;
const SYSINFO_DIVIDER_WIDTH: usize = 50;

/// How a piece of output text should be styled by the front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Accent,
    Dim,
    Link { url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tone: Tone,
}

impl Span {
    pub fn plain<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Plain,
        }
    }

    pub fn accent<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Accent,
        }
    }

    pub fn dim<S: Into<String>>(text: S) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Dim,
        }
    }

    pub fn link<S: Into<String>, U: Into<String>>(text: S, url: U) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Link { url: url.into() },
        }
    }
}

pub type ContentLine = Vec<Span>;

/// The output of a command, as lines of styled spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentBlock {
    pub lines: Vec<ContentLine>,
}

impl ContentBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(mut self, spans: ContentLine) -> Self {
        self.lines.push(spans);
        self
    }

    pub fn text<S: Into<String>>(self, text: S) -> Self {
        self.line(vec![Span::plain(text)])
    }

    #[cfg(test)]
    /// The block without styling, one string per line.
    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|spans| spans.iter().map(|span| span.text.as_str()).collect())
            .collect()
    }
}

/// What a producer may read while building its block.
pub struct RenderContext<'a> {
    pub profile: &'a ProfileConfig,
    pub registry: &'a CommandRegistry,
    /// Wall-clock time of the render, used by `date`.
    pub now: DateTime<Local>,
}

impl<'a> RenderContext<'a> {
    pub fn new(profile: &'a ProfileConfig, registry: &'a CommandRegistry) -> Self {
        Self {
            profile,
            registry,
            now: Local::now(),
        }
    }
}

pub(super) fn help(ctx: &RenderContext<'_>) -> ContentBlock {
    let mut block = ContentBlock::new().text("available commands:");
    for command in ctx.registry.iter() {
        let name = if command.name.chars().count() < HELP_NAME_WIDTH {
            format!("{:<width$}", command.name, width = HELP_NAME_WIDTH)
        } else {
            format!("{} ", command.name)
        };
        block = block.line(vec![Span::accent(name), Span::dim(command.description.clone())]);
    }
    block
}

pub(super) fn profile(ctx: &RenderContext<'_>) -> ContentBlock {
    let record = &ctx.profile.profile;
    ContentBlock::new()
        .text(format!("service: {}", ctx.profile.service))
        .text(format!("profile id: {}", record.id))
        .text(format!("name: {}", record.name))
        .text(format!("role: {}", record.role))
}

pub(super) fn bio(ctx: &RenderContext<'_>) -> ContentBlock {
    ctx.profile
        .bio
        .iter()
        .fold(ContentBlock::new().text("bio:"), |block, paragraph| {
            block.text(paragraph.clone())
        })
}

pub(super) fn skills(ctx: &RenderContext<'_>) -> ContentBlock {
    ctx.profile
        .skills
        .iter()
        .fold(ContentBlock::new().text("skills:"), |block, skill| {
            block.text(format!("- {}", skill))
        })
}

pub(super) fn certificates(ctx: &RenderContext<'_>) -> ContentBlock {
    if ctx.profile.certificates.is_empty() {
        return ContentBlock::new().text("to be added");
    }

    ctx.profile
        .certificates
        .iter()
        .fold(ContentBlock::new().text("certificates:"), |block, cert| {
            block.text(format!("- {}", cert))
        })
}

pub(super) fn projects(ctx: &RenderContext<'_>) -> ContentBlock {
    let mut block = ContentBlock::new().text("selected projects:");
    for project in &ctx.profile.projects {
        let name = match &project.url {
            Some(url) => Span::link(project.name.clone(), url.clone()),
            None => Span::plain(project.name.clone()),
        };
        block = block.line(vec![
            Span::plain("- "),
            name,
            Span::plain(format!(": {}", project.summary)),
        ]);
    }
    block
}

pub(super) fn contact(ctx: &RenderContext<'_>) -> ContentBlock {
    let mut block = ContentBlock::new().text("contact:");
    for entry in &ctx.profile.contact {
        let value = match &entry.url {
            Some(url) => Span::link(entry.value.clone(), url.clone()),
            None => Span::plain(entry.value.clone()),
        };
        block = block.line(vec![Span::plain(format!("- {}: ", entry.label)), value]);
    }
    block
}

pub(super) fn whoami(ctx: &RenderContext<'_>) -> ContentBlock {
    ContentBlock::new().text(ctx.profile.identity())
}

pub(super) fn date(ctx: &RenderContext<'_>) -> ContentBlock {
    ContentBlock::new().text(ctx.now.format("%a %b %d %Y %H:%M:%S GMT%z").to_string())
}

pub(super) fn sysinfo(ctx: &RenderContext<'_>) -> ContentBlock {
    let profile = ctx.profile;
    let block = ContentBlock::new()
        .line(vec![Span::accent(format!("{} status", profile.service))])
        .text("-".repeat(SYSINFO_DIVIDER_WIDTH))
        .text(format!("Service: {}", profile.service))
        .text(format!("Host: {}", profile.host));

    profile.status.iter().fold(block, |block, fact| {
        block.text(format!("{}: {}", fact.label, fact.value))
    })
}
