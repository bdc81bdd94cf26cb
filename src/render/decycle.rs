//! Cycle removal for shared node graphs
//!
//! Walks a [`Node`] depth-first, keys in order. The first visit of each
//! array or object records its path; any later visit of the same container
//! is replaced by `{"$ref": "<path>"}`. Paths start at `$` and append `[i]`
//! for array positions and `["key"]` for object keys.

use std::collections::HashMap;

use serde_json::{Map, Number, Value};

use super::Node;

/// Convert a node graph into a finite JSON tree.
///
/// Whole numbers below 2^53 in magnitude become JSON integers, so `2.0`
/// prints as `2`.
///
/// The walk is recursive, one stack frame per level of nesting, and so is
/// serializing the result. Acyclic chains nested thousands of levels deep
/// can exhaust the thread's stack; cycles of any length are cut at their
/// first repeated container.
pub fn decycle(node: &Node) -> Value {
    let mut seen = HashMap::new();
    walk(node, "$".to_string(), &mut seen)
}

fn reference(path: &str) -> Value {
    let mut marker = Map::new();
    marker.insert("$ref".to_string(), Value::String(path.to_string()));
    Value::Object(marker)
}

fn number(n: f64) -> Value {
    const EXACT: f64 = 9_007_199_254_740_992.0;
    if n.fract() == 0.0 && n.abs() < EXACT {
        return Value::Number(Number::from(n as i64));
    }
    // Non-finite numbers have no JSON form
    Number::from_f64(n).map_or(Value::Null, Value::Number)
}

fn walk(node: &Node, path: String, seen: &mut HashMap<*const (), String>) -> Value {
    match node {
        Node::Null => Value::Null,
        Node::Bool(b) => Value::Bool(*b),
        Node::Number(n) => number(*n),
        Node::String(s) => Value::String(s.clone()),
        Node::Array(items) => {
            let key = std::rc::Rc::as_ptr(items) as *const ();
            if let Some(first) = seen.get(&key) {
                return reference(first);
            }
            seen.insert(key, path.clone());

            let items = items.borrow();
            let out = items
                .iter()
                .enumerate()
                .map(|(i, child)| walk(child, format!("{}[{}]", path, i), seen))
                .collect();
            Value::Array(out)
        }
        Node::Object(fields) => {
            let key = std::rc::Rc::as_ptr(fields) as *const ();
            if let Some(first) = seen.get(&key) {
                return reference(first);
            }
            seen.insert(key, path.clone());

            let fields = fields.borrow();
            let mut out = Map::new();
            for (name, child) in fields.iter() {
                let quoted = Value::String(name.clone()).to_string();
                let child_path = format!("{}[{}]", path, quoted);
                out.insert(name.clone(), walk(child, child_path, seen));
            }
            Value::Object(out)
        }
    }
}
