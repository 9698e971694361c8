//! Walks a [`Value`] tree with the steps of a [`CompiledPath`].

use super::ast::{CompiledPath, Selector};
use super::error::QueryError;
use crate::document::node::Value;
use std::borrow::Cow;

/// Result of applying one selector.
enum Step<'a> {
    /// A value inside the queried tree.
    Node(&'a Value),
    /// The element count produced by `length`.
    Count(usize),
}

/// Evaluates compiled steps against one root value.
///
/// The tree is only borrowed; results that come from the tree are returned
/// as `Cow::Borrowed`, computed results (`length`) as `Cow::Owned`.
pub struct Evaluator<'a> {
    root: &'a Value,
}

impl<'a> Evaluator<'a> {
    pub fn new(root: &'a Value) -> Self {
        Evaluator { root }
    }

    /// Applies `steps` in order, starting at the root.
    pub fn evaluate(&self, steps: &[Selector]) -> Result<Cow<'a, Value>, QueryError> {
        let mut current = self.root;

        for (step, selector) in steps.iter().enumerate() {
            log::trace!("step {}: {} on {}", step, selector, current.kind());
            match select(current, selector, step)? {
                Step::Node(next) => current = next,
                Step::Count(count) => {
                    let count = Value::Number(count as f64);
                    // A count is a number, so nothing can follow it.
                    if let Some(next) = steps.get(step + 1) {
                        return Err(type_mismatch(&count, next, step + 1));
                    }
                    return Ok(Cow::Owned(count));
                }
            }
        }

        Ok(Cow::Borrowed(current))
    }
}

fn select<'a>(value: &'a Value, selector: &Selector, step: usize) -> Result<Step<'a>, QueryError> {
    match value {
        Value::Null => Err(QueryError::NullReference { step }),
        Value::Object(fields) => match selector {
            Selector::Name(name) => {
                fields
                    .get(name)
                    .map(Step::Node)
                    .ok_or_else(|| QueryError::MissingProperty {
                        step,
                        name: name.clone(),
                    })
            }
            Selector::Index(_) | Selector::Function(_) => {
                Err(type_mismatch(value, selector, step))
            }
        },
        Value::Array(items) => match selector {
            Selector::Name(_) => Err(type_mismatch(value, selector, step)),
            Selector::Index(index) => resolve_index(items.len(), *index)
                .map(|i| Step::Node(&items[i]))
                .ok_or_else(|| out_of_range(items.len(), selector, step)),
            Selector::Function(name) => call_function(items, name, selector, step),
        },
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Err(type_mismatch(value, selector, step))
        }
    }
}

/// Maps an index onto `[0, len)`; negative indices count from the end.
fn resolve_index(len: usize, index: i64) -> Option<usize> {
    let resolved = if index < 0 { len as i64 + index } else { index };
    usize::try_from(resolved).ok().filter(|&i| i < len)
}

fn call_function<'a>(
    items: &'a [Value],
    name: &str,
    selector: &Selector,
    step: usize,
) -> Result<Step<'a>, QueryError> {
    let element = match name {
        "length" => return Ok(Step::Count(items.len())),
        "first" => items.first(),
        "last" => items.last(),
        _ => {
            return Err(QueryError::UndefinedFunction {
                step,
                name: name.to_string(),
            })
        }
    };
    element
        .map(Step::Node)
        .ok_or_else(|| out_of_range(items.len(), selector, step))
}

fn type_mismatch(value: &Value, selector: &Selector, step: usize) -> QueryError {
    let selector = match selector {
        Selector::Name(name) => format!("name '{}'", name),
        Selector::Index(index) => format!("index {}", index),
        Selector::Function(name) => format!("function '{}'", name),
    };
    QueryError::TypeMismatch {
        step,
        found: value.kind(),
        selector,
    }
}

fn out_of_range(length: usize, selector: &Selector, step: usize) -> QueryError {
    QueryError::IndexOutOfRange {
        step,
        length,
        selector: selector.to_string(),
    }
}

impl CompiledPath {
    /// Evaluates this path against `root`.
    ///
    /// ```
    /// use jsonpick::document::node::Value;
    /// use jsonpick::document::parser::parse_json;
    /// use jsonpick::jsonpath::CompiledPath;
    ///
    /// let doc = parse_json(r#"{"test":[{"abc":1},{"abc":10}]}"#).unwrap();
    /// let path = CompiledPath::compile("$.test[1].abc").unwrap();
    /// assert_eq!(path.query(&doc).unwrap().as_ref(), &Value::Number(10.0));
    /// ```
    pub fn query<'a>(&self, root: &'a Value) -> Result<Cow<'a, Value>, QueryError> {
        Evaluator::new(root).evaluate(self.steps())
    }

    /// Returns the result if it is a string, otherwise `""`. Never fails.
    pub fn query_as_string_or_default(&self, root: &Value) -> String {
        self.query(root)
            .ok()
            .and_then(|value| value.as_str().map(str::to_string))
            .unwrap_or_default()
    }

    /// Returns the result if it is a number, otherwise `0.0`. Never fails.
    ///
    /// `.(length)` yields a number here, so a path ending in it returns the
    /// element count rather than `0.0`.
    pub fn query_as_number_or_default(&self, root: &Value) -> f64 {
        self.query(root)
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or_default()
    }

    /// Returns the result if it is a boolean, otherwise `false`. Never fails.
    pub fn query_as_bool_or_default(&self, root: &Value) -> bool {
        self.query(root)
            .ok()
            .and_then(|value| value.as_bool())
            .unwrap_or_default()
    }
}
