//! Terminal color helpers.

use std::io::IsTerminal;
use std::sync::OnceLock;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

pub fn init(no_color_flag: bool) {
    let _ = NO_COLOR.set(
        no_color_flag || std::env::var("NO_COLOR").is_ok() || !std::io::stdout().is_terminal(),
    );
}

pub fn is_disabled() -> bool {
    *NO_COLOR.get().unwrap_or(&false)
}

mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const MAGENTA: &str = "\x1b[35m";
    pub const CYAN: &str = "\x1b[36m";
}

/// Style token. Resolved to an escape sequence only when text is written,
/// so everything upstream deals in plain strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    Bold,
    Cyan,
    Magenta,
    Yellow,
    Green,
}

impl Tint {
    fn code(self) -> &'static str {
        match self {
            Self::Bold => codes::BOLD,
            Self::Cyan => codes::CYAN,
            Self::Magenta => codes::MAGENTA,
            Self::Yellow => codes::YELLOW,
            Self::Green => codes::GREEN,
        }
    }

    pub fn paint(self, text: &str) -> String {
        if is_disabled() {
            return text.to_string();
        }
        let code = self.code();
        let mut out = String::with_capacity(code.len() + text.len() + codes::RESET.len());
        out.push_str(code);
        out.push_str(text);
        out.push_str(codes::RESET);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paint_disabled() {
        let _ = NO_COLOR.set(true);
        assert_eq!(Tint::Cyan.paint("test"), "test");
        assert_eq!(Tint::Bold.paint("test"), "test");
    }
}
