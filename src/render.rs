//! Terminal rendering of highlighted blocks using crossterm

use std::io::Write;

use crossterm::{
    queue,
    style::{self, Attribute, Print, SetAttribute, SetForegroundColor},
};

use crate::error::Result;
use crate::syntax::{Color, SpanResult, Style};

/// Map a palette color onto the terminal's
fn term_color(color: Color) -> style::Color {
    match color {
        Color::Default => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::BrightBlack => style::Color::DarkGrey,
        Color::BrightRed => style::Color::Red,
        Color::BrightGreen => style::Color::Green,
        Color::BrightYellow => style::Color::Yellow,
        Color::BrightBlue => style::Color::Blue,
        Color::BrightMagenta => style::Color::Magenta,
        Color::BrightCyan => style::Color::Cyan,
        Color::BrightWhite => style::Color::White,
    }
}

/// Queue the escape sequences for a style
fn set_style<W: Write>(out: &mut W, style: Style) -> Result<()> {
    queue!(out, SetForegroundColor(term_color(style.fg)))?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.italic {
        queue!(out, SetAttribute(Attribute::Italic))?;
    }
    Ok(())
}

/// Write one highlighted block, without a trailing newline
///
/// Text outside every span is written as-is.
pub fn write_block<W: Write>(out: &mut W, text: &str, spans: &SpanResult) -> Result<()> {
    let mut pos = 0;

    for span in spans {
        if span.start > pos {
            queue!(out, Print(&text[pos..span.start]))?;
        }
        set_style(out, span.style)?;
        queue!(out, Print(&text[span.start..span.end()]), SetAttribute(Attribute::Reset))?;
        pos = span.end();
    }

    if pos < text.len() {
        queue!(out, Print(&text[pos..]))?;
    }

    Ok(())
}

/// Write a dimmed, right-aligned line number gutter
pub fn write_line_number<W: Write>(out: &mut W, number: usize, width: usize) -> Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Dim),
        Print(format!("{:>width$} ", number, width = width)),
        SetAttribute(Attribute::NormalIntensity)
    )?;
    Ok(())
}
