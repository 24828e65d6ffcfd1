// Domain module: problem model, validation rules, and solve results

pub mod models;
pub mod result;
pub mod validation;
pub mod value_objects;

pub use models::*;
pub use result::*;
pub use validation::*;
pub use value_objects::*;
