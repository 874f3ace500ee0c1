mod serializer;
pub use serializer::{Serializer, TableOptions};
