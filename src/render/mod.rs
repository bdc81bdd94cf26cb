//! Human-readable rendering of list values
//!
//! Scalars render as their natural string form. Composite values render as
//! indented JSON; shared or cyclic [`Node`] graphs are decycled first, so a
//! self-referential value produces a bounded string with `$ref` markers.

mod decycle;
mod node;

pub use decycle::decycle;
pub use node::Node;

use serde::Serialize;
use thiserror::Error;

/// Errors raised while rendering a value
#[derive(Error, Debug)]
pub enum RenderError {
    /// Value could not be serialized to JSON
    #[error("failed to serialize value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Values that can appear in a rendered list preview
pub trait Render {
    /// Produce the display string.
    fn render(&self) -> Result<String, RenderError>;

    /// Whether the value is object-like. Lists of composite values show a
    /// shorter preview.
    fn is_composite(&self) -> bool {
        false
    }
}

/// Pretty-print any serializable value with two-space indentation.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> Result<String, RenderError> {
    Ok(serde_json::to_string_pretty(value)?)
}

macro_rules! render_via_display {
    ($($t:ty),* $(,)?) => {
        $(
            impl Render for $t {
                fn render(&self) -> Result<String, RenderError> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

render_via_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String, str
);

fn render_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        value.to_string()
    }
}

impl Render for f64 {
    fn render(&self) -> Result<String, RenderError> {
        Ok(render_float(*self))
    }
}

impl Render for f32 {
    fn render(&self) -> Result<String, RenderError> {
        Ok(render_float(f64::from(*self)))
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self) -> Result<String, RenderError> {
        (**self).render()
    }

    fn is_composite(&self) -> bool {
        (**self).is_composite()
    }
}

impl<T: Serialize> Render for Vec<T> {
    fn render(&self) -> Result<String, RenderError> {
        to_pretty_json(self)
    }

    fn is_composite(&self) -> bool {
        true
    }
}

impl<A: Serialize, B: Serialize> Render for (A, B) {
    fn render(&self) -> Result<String, RenderError> {
        to_pretty_json(self)
    }

    fn is_composite(&self) -> bool {
        true
    }
}

impl Render for serde_json::Value {
    fn render(&self) -> Result<String, RenderError> {
        match self {
            serde_json::Value::String(s) => Ok(s.clone()),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => to_pretty_json(self),
            other => Ok(other.to_string()),
        }
    }

    fn is_composite(&self) -> bool {
        matches!(
            self,
            serde_json::Value::Array(_) | serde_json::Value::Object(_)
        )
    }
}

impl Render for Node {
    fn render(&self) -> Result<String, RenderError> {
        match self {
            Node::Null => Ok("null".to_string()),
            Node::Bool(b) => b.render(),
            Node::Number(n) => Ok(render_float(*n)),
            Node::String(s) => Ok(s.clone()),
            Node::Array(_) | Node::Object(_) => decycle(self).render(),
        }
    }

    fn is_composite(&self) -> bool {
        self.is_composite()
    }
}
