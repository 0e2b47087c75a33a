use crate::{Segment, Theme};
use std::{
    borrow::Cow,
    fmt::{Display, Formatter, Result as FmtResult},
};

fn is_shell_special(ch: char) -> bool {
    matches!(ch, '$' | '&' | '\\' | '`' | '!')
}

/// Backslash-escape characters the shell would expand inside a prompt
pub fn escape(text: &str) -> Cow<'_, str> {
    if !text.contains(is_shell_special) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 4);
    for ch in text.chars() {
        if is_shell_special(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    Cow::Owned(escaped)
}

/// Rendered prompt line
///
/// Parts of one chip are joined with the thin separator in the chip's own colours. The chip ends
/// with the full separator drawn in its background colour over the next chip, so the arrow points
/// from one chip into the other.
pub struct Line<'a> {
    segments: &'a [Segment],
    theme: &'a Theme,
}

impl<'a> Line<'a> {
    pub fn new(segments: &'a [Segment], theme: &'a Theme) -> Self {
        Self { segments, theme }
    }
}

impl Display for Line<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let shell = self.theme.shell;
        let icons = &self.theme.icons;

        for (i, segment) in self.segments.iter().enumerate() {
            let fg = shell.foreground(segment.foreground);
            let bg = shell.background(segment.background);
            let next = self.segments.get(i + 1);
            let last = segment.parts().len().saturating_sub(1);

            for (j, part) in segment.parts().iter().enumerate() {
                let text = if part.requires_escaping {
                    escape(&part.text)
                } else {
                    Cow::Borrowed(part.text.as_str())
                };
                write!(f, "{fg}{bg} {text} ")?;

                match next {
                    _ if j < last => write!(f, "{bg}{fg}{}", icons.separator_thin)?,
                    Some(next) => write!(
                        f,
                        "{}{}{}",
                        shell.background(next.background),
                        shell.foreground(segment.background),
                        icons.separator
                    )?,
                    None => write!(
                        f,
                        "{}{}{}",
                        shell.reset(),
                        shell.foreground(segment.background),
                        icons.separator
                    )?,
                }
            }
        }

        write!(f, "{} ", shell.reset())
    }
}

pub fn render(segments: &[Segment], theme: &Theme) -> String {
    Line::new(segments, theme).to_string()
}
