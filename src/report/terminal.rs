//! Terminal display of generated reports

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::error::Result;

/// Pretty-print a generated report to the terminal with colors
///
/// Handles the constructs our reports emit: headings, paragraphs,
/// bullet lists, links, and emphasis.
pub fn format_markdown(markdown: &str) -> Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    render(&mut stdout, markdown)
}

fn render(out: &mut impl WriteColor, markdown: &str) -> Result<()> {
    let parser = Parser::new_ext(markdown, Options::all());

    for event in parser {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                let color = match level {
                    HeadingLevel::H1 => Color::Magenta,
                    _ => Color::Cyan,
                };
                writeln!(out)?;
                out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
            }
            Event::End(TagEnd::Heading(_)) => {
                out.reset()?;
                writeln!(out)?;
            }
            Event::End(TagEnd::Paragraph) => {
                writeln!(out)?;
            }
            Event::Start(Tag::Item) => {
                write!(out, "  • ")?;
            }
            Event::End(TagEnd::Item) => {
                writeln!(out)?;
            }
            Event::End(TagEnd::List(_)) => {
                writeln!(out)?;
            }
            Event::Start(Tag::Link { .. }) => {
                out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_underline(true))?;
            }
            Event::End(TagEnd::Link) => {
                out.reset()?;
            }
            Event::Start(Tag::Strong) => {
                out.set_color(ColorSpec::new().set_bold(true))?;
            }
            Event::End(TagEnd::Strong) => {
                out.reset()?;
            }
            Event::Start(Tag::Emphasis) => {
                out.set_color(ColorSpec::new().set_italic(true))?;
            }
            Event::End(TagEnd::Emphasis) => {
                out.reset()?;
            }
            Event::Text(text) => {
                write!(out, "{}", text)?;
            }
            Event::Code(code) => {
                write!(out, "`{}`", code)?;
            }
            Event::SoftBreak | Event::HardBreak => {
                writeln!(out)?;
            }
            _ => {}
        }
    }

    Ok(())
}
