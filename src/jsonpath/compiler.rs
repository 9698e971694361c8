//! Path string to [`CompiledPath`] compiler.
//!
//! A single left-to-right scan after the `$` root marker, with no
//! backtracking. Each branch consumes its whole token before returning to
//! the top-level dispatch.

use super::ast::{CompiledPath, Selector};
use super::error::{CompileError, CompileErrorKind};
use super::scanner::{
    is_space, parse_bare_name, parse_decimal_run, parse_quoted_name, skip_spaces,
};
use std::str::FromStr;

const ROOT: char = '$';

/// Compiler state for one path string.
pub struct Compiler {
    src: Vec<char>,
    position: usize,
    steps: Vec<Selector>,
}

impl Compiler {
    /// Creates a compiler for the given path string.
    pub fn new(path: &str) -> Self {
        Self {
            src: path.chars().collect(),
            position: 0,
            steps: Vec::new(),
        }
    }

    /// Compiles a path string into a [`CompiledPath`].
    ///
    /// ```
    /// use jsonpick::jsonpath::{Compiler, Selector};
    ///
    /// let path = Compiler::compile("$.store['book'][0]").unwrap();
    /// assert_eq!(
    ///     path.steps(),
    ///     &[
    ///         Selector::Name("store".to_string()),
    ///         Selector::Name("book".to_string()),
    ///         Selector::Index(0),
    ///     ]
    /// );
    /// ```
    pub fn compile(path: &str) -> Result<CompiledPath, CompileError> {
        let compiled = Compiler::new(path).compile_path()?;
        log::debug!("compiled {:?} into {} step(s)", path, compiled.len());
        Ok(compiled)
    }

    fn compile_path(mut self) -> Result<CompiledPath, CompileError> {
        if self.src.is_empty() {
            return Err(self.error(CompileErrorKind::EmptySource, 0));
        }

        let root = skip_spaces(&self.src, 0);
        if self.src.get(root) != Some(&ROOT) {
            return Err(self.error(CompileErrorKind::MissingRoot, root));
        }
        self.position = root + 1;

        while let Some(&ch) = self.src.get(self.position) {
            match ch {
                c if is_space(c) => self.position = skip_spaces(&self.src, self.position),
                '[' => self.compile_bracket()?,
                '.' => self.compile_dot()?,
                _ => {
                    return Err(self.error(
                        CompileErrorKind::UnexpectedCharacter {
                            expected: "'.' or '['",
                        },
                        self.position,
                    ))
                }
            }
        }

        Ok(CompiledPath::new(self.steps))
    }

    /// `[N]`, `['name']` or `["name"]`, with optional inner spaces.
    fn compile_bracket(&mut self) -> Result<(), CompileError> {
        const OPERAND: &str = "an index or a quoted name";

        let start = skip_spaces(&self.src, self.position + 1);
        let end = match self.src.get(start) {
            None => {
                return Err(self.error(CompileErrorKind::UnexpectedEnd { expected: OPERAND }, start))
            }
            Some('0'..='9') | Some('-') => {
                let (end, negative) = parse_decimal_run(&self.src, start)?;
                let digits_start = if negative { start + 1 } else { start };
                let digits: String = self.src[digits_start..end].iter().collect();
                let index = digits
                    .parse::<u64>()
                    .ok()
                    .and_then(|magnitude| {
                        if negative {
                            0i64.checked_sub_unsigned(magnitude)
                        } else {
                            i64::try_from(magnitude).ok()
                        }
                    })
                    .ok_or_else(|| self.error(CompileErrorKind::BadNumber, start))?;
                self.steps.push(Selector::Index(index));
                end
            }
            Some(&quote @ ('\'' | '"')) => {
                let (name, end) = parse_quoted_name(&self.src, quote, start + 1)?;
                self.steps.push(Selector::Name(name));
                end
            }
            Some(_) => {
                return Err(self.error(
                    CompileErrorKind::UnexpectedCharacter { expected: OPERAND },
                    start,
                ))
            }
        };

        self.position = self.expect_closing(end, ']', "']'")?;
        Ok(())
    }

    /// `.name` or `.(function)`, with optional spaces after the dot.
    fn compile_dot(&mut self) -> Result<(), CompileError> {
        let start = skip_spaces(&self.src, self.position + 1);
        match self.src.get(start) {
            None => Err(self.error(
                CompileErrorKind::UnexpectedEnd {
                    expected: "a name or '('",
                },
                start,
            )),
            Some('(') => {
                let name_start = skip_spaces(&self.src, start + 1);
                let (name, end) = parse_bare_name(&self.src, name_start)?;
                self.steps.push(Selector::Function(name));
                self.position = self.expect_closing(end, ')', "')'")?;
                Ok(())
            }
            Some(_) => {
                let (name, end) = parse_bare_name(&self.src, start)?;
                self.steps.push(Selector::Name(name));
                self.position = skip_spaces(&self.src, end);
                Ok(())
            }
        }
    }

    /// Skips spaces from `from` and requires `close`; returns the position after it.
    fn expect_closing(
        &self,
        from: usize,
        close: char,
        expected: &'static str,
    ) -> Result<usize, CompileError> {
        let at = skip_spaces(&self.src, from);
        match self.src.get(at) {
            Some(&ch) if ch == close => Ok(at + 1),
            Some(_) => Err(self.error(CompileErrorKind::UnexpectedCharacter { expected }, at)),
            None => Err(self.error(CompileErrorKind::UnexpectedEnd { expected }, at)),
        }
    }

    fn error(&self, kind: CompileErrorKind, position: usize) -> CompileError {
        CompileError::at(kind, &self.src, position)
    }
}

impl CompiledPath {
    /// Compiles a path string. Same as [`Compiler::compile`].
    pub fn compile(path: &str) -> Result<Self, CompileError> {
        Compiler::compile(path)
    }
}

impl FromStr for CompiledPath {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Compiler::compile(s)
    }
}
