pub mod calc;
pub mod model;
pub mod store;
pub mod validate;

pub use calc::Calculator;
pub use model::task::{FieldEdit, Status, Task};
pub use store::TaskStore;
pub use validate::{coerce_integer, is_integer, is_valid_date};
