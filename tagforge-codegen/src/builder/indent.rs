//! One level of indentation in generated C/C++.

/// Indentation unit written once per nesting level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// `n` spaces per level.
    Spaces(u8),
    Tab,
}

impl Indent {
    /// What every built-in tool emits.
    pub const FOUR: Self = Self::Spaces(4);

    /// Append `level` levels of indentation to `out`.
    pub fn write_to(&self, out: &mut String, level: usize) {
        match *self {
            Self::Spaces(width) => {
                out.extend(std::iter::repeat_n(' ', usize::from(width) * level));
            }
            Self::Tab => out.extend(std::iter::repeat_n('\t', level)),
        }
    }

    /// `level` levels of indentation.
    pub fn prefix(&self, level: usize) -> String {
        let mut out = String::new();
        self.write_to(&mut out, level);
        out
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::FOUR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(Indent::FOUR.prefix(0), "");
        assert_eq!(Indent::FOUR.prefix(2), " ".repeat(8));
        assert_eq!(Indent::Spaces(3).prefix(1), "   ");
        assert_eq!(Indent::Tab.prefix(3), "\t\t\t");
    }

    #[test]
    fn test_write_to_appends() {
        let mut out = String::from("x");
        Indent::Spaces(2).write_to(&mut out, 2);
        assert_eq!(out, "x    ");
    }
}
