pub mod dispatch;
pub mod encode;
pub mod engine;
pub mod introspection;
pub mod module;
pub mod query_builder;
pub mod value;

pub use introspection::Schema;
pub use query_builder::QueryBuilder;
pub use value::Value;
