//! Turns the scrollback log into styled, width-wrapped display lines.
use unicode_width::UnicodeWidthChar;

use crate::terminal::{LogEntry, RenderContext, Session, Tone};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Boot lines and non-error system messages.
    System,
    Plain,
    Prompt,
    Accent,
    Error,
    Dim,
    Link,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: LineStyle,
}

impl Segment {
    fn new<S: Into<String>>(text: S, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewLine {
    pub segments: Vec<Segment>,
}

impl ViewLine {
    fn single<S: Into<String>>(text: S, style: LineStyle) -> Self {
        Self {
            segments: vec![Segment::new(text, style)],
        }
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Display lines of the whole session, before wrapping.
pub fn scrollback(session: &Session, ctx: &RenderContext<'_>) -> Vec<ViewLine> {
    let prompt = session.profile().prompt();
    session
        .log()
        .iter()
        .flat_map(|entry| entry_lines(entry, ctx, &prompt))
        .collect()
}

/// Display lines of one entry. Rendered outputs are looked up in the registry here.
pub fn entry_lines(entry: &LogEntry, ctx: &RenderContext<'_>, prompt: &str) -> Vec<ViewLine> {
    match entry {
        LogEntry::BootLine { text } => vec![ViewLine::single(text.clone(), LineStyle::System)],
        LogEntry::InputEcho { text } => vec![ViewLine {
            segments: vec![
                Segment::new(prompt, LineStyle::Prompt),
                Segment::new(format!(" {}", text), LineStyle::Plain),
            ],
        }],
        LogEntry::CommandResult {
            raw_text,
            matched_name,
        } => match matched_name {
            Some(name) => vec![ViewLine::single(format!("> {}", name), LineStyle::Accent)],
            None => vec![ViewLine::single(format!("> {}", raw_text), LineStyle::Error)],
        },
        LogEntry::SystemMessage { text, is_error } => {
            let style = if *is_error {
                LineStyle::Error
            } else {
                LineStyle::System
            };
            vec![ViewLine::single(text.clone(), style)]
        }
        LogEntry::RenderedOutput { command_name } => ctx
            .registry
            .render(command_name, ctx)
            .map(|block| {
                block
                    .lines
                    .into_iter()
                    .map(|spans| ViewLine {
                        segments: spans.into_iter().flat_map(span_segments).collect(),
                    })
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn span_segments(span: crate::terminal::Span) -> Vec<Segment> {
    match span.tone {
        Tone::Plain => vec![Segment::new(span.text, LineStyle::Plain)],
        Tone::Accent => vec![Segment::new(span.text, LineStyle::Accent)],
        Tone::Dim => vec![Segment::new(span.text, LineStyle::Dim)],
        Tone::Link { url } => vec![
            Segment::new(span.text, LineStyle::Link),
            Segment::new(format!(" <{}>", url), LineStyle::Dim),
        ],
    }
}

/// Hard-wraps a line at `width` display columns. Empty lines stay one empty line.
pub fn wrap(line: &ViewLine, width: usize) -> Vec<ViewLine> {
    let width = width.max(1);
    let mut rows = vec![ViewLine::default()];
    let mut used = 0;

    for segment in &line.segments {
        let mut chunk = String::new();
        for c in segment.text.chars() {
            let char_width = c.width().unwrap_or(0);
            if used + char_width > width && used > 0 {
                push_chunk(&mut rows, &mut chunk, segment.style);
                rows.push(ViewLine::default());
                used = 0;
            }
            chunk.push(c);
            used += char_width;
        }
        push_chunk(&mut rows, &mut chunk, segment.style);
    }

    rows
}

fn push_chunk(rows: &mut [ViewLine], chunk: &mut String, style: LineStyle) {
    if chunk.is_empty() {
        return;
    }
    if let Some(row) = rows.last_mut() {
        row.segments.push(Segment::new(std::mem::take(chunk), style));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProfileConfig;
    use crate::terminal::CommandRegistry;
    use pretty_assertions::assert_eq;

    fn lines_for(entry: LogEntry) -> Vec<ViewLine> {
        let profile = ProfileConfig::default();
        let registry = CommandRegistry::builtin();
        let ctx = RenderContext::new(&profile, &registry);
        entry_lines(&entry, &ctx, &profile.prompt())
    }

    #[test]
    fn input_echo_carries_prompt_prefix() {
        let lines = lines_for(LogEntry::input_echo("help"));
        assert_eq!(lines[0].text(), "guest@eger.software:~$ help");
        assert_eq!(lines[0].segments[0].style, LineStyle::Prompt);
    }

    #[test]
    fn command_results_are_accent_or_error() {
        let matched = lines_for(LogEntry::CommandResult {
            raw_text: "BIO".to_string(),
            matched_name: Some("bio".to_string()),
        });
        let unmatched = lines_for(LogEntry::CommandResult {
            raw_text: "foobar".to_string(),
            matched_name: None,
        });

        assert_eq!(matched, vec![ViewLine::single("> bio", LineStyle::Accent)]);
        assert_eq!(unmatched, vec![ViewLine::single("> foobar", LineStyle::Error)]);
    }

    #[test]
    fn rendered_output_is_looked_up_by_name() {
        let lines = lines_for(LogEntry::RenderedOutput {
            command_name: "whoami".to_string(),
        });
        assert_eq!(lines, vec![ViewLine::single("guest@eger.software", LineStyle::Plain)]);

        let unknown = lines_for(LogEntry::RenderedOutput {
            command_name: "gone".to_string(),
        });
        assert!(unknown.is_empty());
    }

    #[test]
    fn links_show_their_target() {
        let lines = lines_for(LogEntry::RenderedOutput {
            command_name: "contact".to_string(),
        });
        assert_eq!(
            lines[1].text(),
            "- github: Profex993 <https://github.com/Profex993>"
        );
        assert_eq!(lines[1].segments[1].style, LineStyle::Link);
    }

    #[test]
    fn wrapping_splits_on_display_width() {
        let line = ViewLine {
            segments: vec![
                Segment::new("abc", LineStyle::Prompt),
                Segment::new("defgh", LineStyle::Plain),
            ],
        };
        let rows = wrap(&line, 4);

        assert_eq!(
            rows.iter().map(ViewLine::text).collect::<Vec<_>>(),
            vec!["abcd", "efgh"]
        );
        assert_eq!(rows[0].segments.len(), 2);
        assert_eq!(rows[1].segments[0].style, LineStyle::Plain);
    }

    #[test]
    fn wide_characters_count_double() {
        let rows = wrap(&ViewLine::single("日本語", LineStyle::Plain), 4);
        assert_eq!(
            rows.iter().map(ViewLine::text).collect::<Vec<_>>(),
            vec!["日本", "語"]
        );
    }

    #[test]
    fn empty_line_survives_wrapping() {
        let rows = wrap(&ViewLine::single("", LineStyle::System), 10);
        assert_eq!(rows, vec![ViewLine::default()]);
    }
}
