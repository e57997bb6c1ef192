pub mod parameter;
pub mod unit;

pub use parameter::{ParamKind, ParamValue};
pub use unit::Unit;
