use crate::ui::theme;

/// The six characters needed to draw a box outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: &'static str,
    pub top_right: &'static str,
    pub bottom_left: &'static str,
    pub bottom_right: &'static str,
    pub horizontal: &'static str,
    pub vertical: &'static str,
}

impl BorderSet {
    pub fn for_terminal(supports_unicode: bool) -> Self {
        if supports_unicode {
            Self {
                top_left: theme::borders::TOP_LEFT,
                top_right: theme::borders::TOP_RIGHT,
                bottom_left: theme::borders::BOTTOM_LEFT,
                bottom_right: theme::borders::BOTTOM_RIGHT,
                horizontal: theme::borders::HORIZONTAL,
                vertical: theme::borders::VERTICAL,
            }
        } else {
            Self {
                top_left: theme::borders_ascii::TOP_LEFT,
                top_right: theme::borders_ascii::TOP_RIGHT,
                bottom_left: theme::borders_ascii::BOTTOM_LEFT,
                bottom_right: theme::borders_ascii::BOTTOM_RIGHT,
                horizontal: theme::borders_ascii::HORIZONTAL,
                vertical: theme::borders_ascii::VERTICAL,
            }
        }
    }

    pub fn top(&self, inner_width: usize) -> String {
        format!(
            "{}{}{}",
            self.top_left,
            self.horizontal.repeat(inner_width),
            self.top_right
        )
    }

    pub fn bottom(&self, inner_width: usize) -> String {
        format!(
            "{}{}{}",
            self.bottom_left,
            self.horizontal.repeat(inner_width),
            self.bottom_right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_set_uses_plus_corners() {
        let set = BorderSet::for_terminal(false);
        assert_eq!(set.top(3), "+---+");
        assert_eq!(set.bottom(1), "+-+");
    }
}
