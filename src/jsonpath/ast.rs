//! Compiled form of a path expression.

use super::scanner::is_name_char;
use std::fmt;

/// One step of a compiled path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Property access (`.name`, `['name']`, `["name"]`)
    Name(String),
    /// Array index (`[0]`, `[-1]`); negative values count from the end
    Index(i64),
    /// Zero-argument array function (`.(first)`, `.(last)`, `.(length)`)
    Function(String),
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Name(name) if !name.is_empty() && name.chars().all(is_name_char) => {
                write!(f, ".{}", name)
            }
            Selector::Name(name) => {
                f.write_str("[\"")?;
                for ch in name.chars() {
                    write_escaped(f, ch)?;
                }
                f.write_str("\"]")
            }
            Selector::Index(index) => write!(f, "[{}]", index),
            Selector::Function(name) => write!(f, ".({})", name),
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, ch: char) -> fmt::Result {
    match ch {
        '\\' => f.write_str("\\\\"),
        '"' => f.write_str("\\\""),
        '\n' => f.write_str("\\n"),
        '\r' => f.write_str("\\r"),
        '\t' => f.write_str("\\t"),
        '\u{08}' => f.write_str("\\b"),
        '\u{0B}' => f.write_str("\\v"),
        '\u{0C}' => f.write_str("\\f"),
        c if c.is_control() => write!(f, "\\u{{{:x}}}", c as u32),
        c => write!(f, "{}", c),
    }
}

/// A compiled path expression: the ordered list of steps after `$`.
///
/// Immutable once built, so a single `CompiledPath` can be shared and
/// evaluated from many threads at once. An empty step list selects the root.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CompiledPath {
    steps: Vec<Selector>,
}

impl CompiledPath {
    /// Creates a compiled path from already-built steps.
    pub fn new(steps: Vec<Selector>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Selector] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True for the root-only path `$`.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for CompiledPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for step in &self.steps {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_bare_and_quoted_names() {
        assert_eq!(Selector::Name("abc".to_string()).to_string(), ".abc");
        assert_eq!(Selector::Name("a-b".to_string()).to_string(), "[\"a-b\"]");
        assert_eq!(Selector::Name(String::new()).to_string(), "[\"\"]");
        assert_eq!(
            Selector::Name("say \"hi\"\n".to_string()).to_string(),
            "[\"say \\\"hi\\\"\\n\"]"
        );
    }

    #[test]
    fn test_display_control_character_uses_braced_escape() {
        assert_eq!(
            Selector::Name("\u{1}".to_string()).to_string(),
            "[\"\\u{1}\"]"
        );
    }

    #[test]
    fn test_display_path() {
        let path = CompiledPath::new(vec![
            Selector::Name("test".to_string()),
            Selector::Index(-1),
            Selector::Function("length".to_string()),
        ]);
        assert_eq!(path.to_string(), "$.test[-1].(length)");
        assert_eq!(CompiledPath::default().to_string(), "$");
    }
}
