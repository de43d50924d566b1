// Domain types and value objects
mod category;
mod channel;
mod data_point;
mod field;

// Re-export commonly used types to the world
pub use category::Category;
pub use channel::Channel;
pub use data_point::{DataPoint, YieldDistribution};
pub use field::{FIELDS, FieldSpec, field_label};
