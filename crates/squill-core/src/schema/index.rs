/// A secondary index over one key column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Index {
    pub name: String,
    pub target: String,
    pub key: String,
    pub unique: bool,
}

impl Index {
    /// The name used when dropping the index: the explicit name, or the
    /// key column when no name was given.
    pub fn drop_name(&self) -> &str {
        if self.name.is_empty() {
            &self.key
        } else {
            &self.name
        }
    }
}
