use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Errors,
    Warnings,
}

/// Boxed list of the error or warning messages of one file.
#[derive(Debug, Clone)]
pub struct MessageBlock<'a> {
    kind: MessageKind,
    messages: &'a [String],
}

impl<'a> MessageBlock<'a> {
    pub fn errors(messages: &'a [String]) -> Self {
        Self {
            kind: MessageKind::Errors,
            messages,
        }
    }

    pub fn warnings(messages: &'a [String]) -> Self {
        Self {
            kind: MessageKind::Warnings,
            messages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        if self.is_empty() {
            return String::new();
        }

        let (icon, style, title) = match self.kind {
            MessageKind::Errors => (
                Icon::Error,
                BoxStyle::Error,
                ColoredText::error(format!("Errors ({})", self.messages.len())),
            ),
            MessageKind::Warnings => (
                Icon::Warning,
                BoxStyle::Warning,
                ColoredText::warning(format!("Warnings ({})", self.messages.len())),
            ),
        };

        let header = format!(
            "{} {}",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );
        let mut b = Box::with_title(header).style(style);
        for message in self.messages {
            b.add_line(format!("- {}", message));
        }
        b.render(supports_color, supports_unicode)
    }
}
