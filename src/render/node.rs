//! Shared dynamic values that may reference themselves

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// A dynamically typed value whose arrays and objects are shared handles.
///
/// Cloning a `Node` clones the handle, not the contents, so a node can be
/// inserted into itself. Such cycles keep their contents alive until broken
/// with [`Node::clear`].
#[derive(Clone)]
pub enum Node {
    /// Absent value
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Numeric scalar
    Number(f64),
    /// String scalar
    String(String),
    /// Shared ordered list
    Array(Rc<RefCell<Vec<Node>>>),
    /// Shared keyed map, iterated in key order
    Object(Rc<RefCell<BTreeMap<String, Node>>>),
}

impl Node {
    /// New empty shared array.
    pub fn array() -> Self {
        Node::Array(Rc::new(RefCell::new(Vec::new())))
    }

    /// New empty shared object.
    pub fn object() -> Self {
        Node::Object(Rc::new(RefCell::new(BTreeMap::new())))
    }

    /// Append to an array node. Returns `false` for any other kind.
    pub fn push(&self, value: Node) -> bool {
        match self {
            Node::Array(items) => {
                items.borrow_mut().push(value);
                true
            }
            _ => false,
        }
    }

    /// Set a key on an object node. Returns `false` for any other kind.
    pub fn insert(&self, key: impl Into<String>, value: Node) -> bool {
        match self {
            Node::Object(fields) => {
                fields.borrow_mut().insert(key.into(), value);
                true
            }
            _ => false,
        }
    }

    /// Empty an array or object, breaking any cycle running through it.
    pub fn clear(&self) {
        match self {
            Node::Array(items) => items.borrow_mut().clear(),
            Node::Object(fields) => fields.borrow_mut().clear(),
            _ => {}
        }
    }

    /// Whether this is an array or object.
    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Array(_) | Node::Object(_))
    }

    /// Whether two nodes are the same shared container.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Array(a), Node::Array(b)) => Rc::ptr_eq(a, b),
            (Node::Object(a), Node::Object(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<f64> for Node {
    fn from(n: f64) -> Self {
        Node::Number(n)
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Self {
        Node::Bool(b)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::String(s)
    }
}

// Derived Debug would recurse forever on a cycle.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", super::decycle(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_shares_contents() {
        let a = Node::array();
        let b = a.clone();
        b.push(Node::from(1.0));
        assert!(a.ptr_eq(&b));
        match &a {
            Node::Array(items) => assert_eq!(items.borrow().len(), 1),
            _ => panic!("expected array"),
        }
    }

    #[test]
    fn test_push_and_insert_reject_wrong_kind() {
        assert!(!Node::object().push(Node::Null));
        assert!(!Node::array().insert("k", Node::Null));
        assert!(!Node::from("s").push(Node::Null));
    }

    #[test]
    fn test_debug_on_cycle_terminates() {
        let node = Node::object();
        node.insert("me", node.clone());
        let text = format!("{:?}", node);
        assert!(text.contains("$ref"));
        node.clear();
    }
}
