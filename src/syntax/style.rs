//! Style types for highlighted text
//!
//! A `Style` is pure formatting data: a foreground color plus bold and
//! italic flags. The renderer decides how a color is actually drawn.

/// Foreground colors (ANSI 16-color palette for compatibility)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// Parse a color name, case-insensitively
    ///
    /// Accepts the palette names (`blue`, `bright-blue`, `bright_blue`,
    /// `brightblue`) and the Qt-style `darkX` names, which map onto the
    /// normal-intensity half of the palette while plain names like `blue`
    /// map onto the same entry.
    pub fn from_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();
        let key = key.strip_prefix("dark").unwrap_or(&key);
        let color = match key {
            "default" | "none" => Color::Default,
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" => Color::White,
            "gray" | "grey" | "brightblack" => Color::BrightBlack,
            "brightred" => Color::BrightRed,
            "brightgreen" => Color::BrightGreen,
            "brightyellow" => Color::BrightYellow,
            "brightblue" => Color::BrightBlue,
            "brightmagenta" => Color::BrightMagenta,
            "brightcyan" => Color::BrightCyan,
            "brightwhite" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }
}

/// Text style attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Bold text
    pub bold: bool,
    /// Italic text
    pub italic: bool,
}

impl Style {
    /// Create a style with just foreground color
    pub fn fg(color: Color) -> Self {
        Self {
            fg: color,
            ..Default::default()
        }
    }

    /// Build a style from a color name and a flag string
    ///
    /// The flag string is scanned for `bold` and `italic`, so `"bold italic"`,
    /// `"italic"` and `""` are all valid.
    pub fn parse(color: &str, flags: &str) -> Option<Self> {
        let mut style = Style::fg(Color::from_name(color)?);
        let flags = flags.to_lowercase();
        style.bold = flags.contains("bold");
        style.italic = flags.contains("italic");
        Some(style)
    }

    /// Build a style from a description like `"darkGreen italic"`
    ///
    /// The first word is the color; the rest are flags.
    pub fn describe(description: &str) -> Option<Self> {
        let description = description.trim();
        let (color, flags) = description.split_once(char::is_whitespace).unwrap_or((description, ""));
        Self::parse(color, flags)
    }

    /// Builder: set bold
    pub fn with_bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Builder: set italic
    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Check if this is the default (no styling)
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

/// A styled run of text within one block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset where this span starts
    pub start: usize,
    /// Length of the span in bytes
    pub len: usize,
    /// Style to apply to this span
    pub style: Style,
}

impl Span {
    /// Create a new span
    pub fn new(start: usize, len: usize, style: Style) -> Self {
        Self { start, len, style }
    }

    /// Byte offset one past the end of this span
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Check if this span contains a byte position
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start && pos < self.end()
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default() {
        let style = Style::default();
        assert!(style.is_default());
        assert_eq!(style.fg, Color::Default);
        assert!(!style.bold);
        assert!(!style.italic);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::fg(Color::Red).with_bold().with_italic();
        assert_eq!(style.fg, Color::Red);
        assert!(style.bold);
        assert!(style.italic);
        assert!(!style.is_default());
    }

    #[test]
    fn test_color_names() {
        assert_eq!(Color::from_name("blue"), Some(Color::Blue));
        assert_eq!(Color::from_name("darkMagenta"), Some(Color::Magenta));
        assert_eq!(Color::from_name("darkYellow"), Some(Color::Yellow));
        assert_eq!(Color::from_name("Bright-Cyan"), Some(Color::BrightCyan));
        assert_eq!(Color::from_name("grey"), Some(Color::BrightBlack));
        assert_eq!(Color::from_name("chartreuse"), None);
    }

    #[test]
    fn test_style_parse() {
        let style = Style::parse("darkGreen", "italic").unwrap();
        assert_eq!(style, Style::fg(Color::Green).with_italic());

        let style = Style::parse("red", "Bold Italic").unwrap();
        assert!(style.bold && style.italic);

        assert!(Style::parse("nope", "").is_none());
    }

    #[test]
    fn test_style_describe() {
        assert_eq!(
            Style::describe("darkGreen italic"),
            Some(Style::fg(Color::Green).with_italic())
        );
        assert_eq!(Style::describe(" blue "), Some(Style::fg(Color::Blue)));
        assert_eq!(
            Style::describe("bright-red bold italic"),
            Some(Style::fg(Color::BrightRed).with_bold().with_italic())
        );
        assert!(Style::describe("").is_none());
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(5, 5, Style::default());
        assert_eq!(span.end(), 10);
        assert!(!span.contains(4));
        assert!(span.contains(5));
        assert!(span.contains(9));
        assert!(!span.contains(10));
        assert!(Span::new(3, 0, Style::default()).is_empty());
    }
}
