// Output formatting and styling

use colored::Colorize;

/// Output styling configuration
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Style with colors forced off, for `--no-color` or piped output
    pub fn plain() -> Self {
        Self { use_colors: false }
    }

    /// Format the menu and prompts
    pub fn menu(&self, msg: &str) -> String {
        if self.use_colors {
            msg.blue().to_string()
        } else {
            msg.to_string()
        }
    }

    /// Format the current value after an apply or undo
    pub fn value(&self, value: i64) -> String {
        if self.use_colors {
            value.to_string().bold().to_string()
        } else {
            value.to_string()
        }
    }

    /// Format an informational message
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "ℹ".blue(), msg)
        } else {
            format!("ℹ {}", msg)
        }
    }

    /// Format an error message
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_style_passes_text_through() {
        let style = OutputStyle::plain();
        assert_eq!(style.menu("menu text"), "menu text");
        assert_eq!(style.value(12), "12");
        assert_eq!(style.error("bad"), "✗ bad");
    }
}
