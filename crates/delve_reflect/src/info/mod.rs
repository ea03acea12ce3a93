//! Shape information about reflected values.

mod kind;

pub use kind::ReflectKind;
