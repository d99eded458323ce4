mod display;
mod error;
mod value;

pub use display::render;
pub use error::{ErrorKind, EvalError};
pub use value::Value;
