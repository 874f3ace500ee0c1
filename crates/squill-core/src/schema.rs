mod column;
pub use column::Column;

mod foreign_key;
pub use foreign_key::{ForeignKey, RefAction};

mod index;
pub use index::Index;

mod model;
pub use model::Model;

mod ty;
pub use ty::{normalize_column_type, BOOL, CHAR, INTEGER, VARCHAR};
