pub mod literal;
pub mod value;


pub use literal::parse_literal;
pub use value::{Kind, Value};
