use crate::stmt::Reference;

/// Referential action for ON DELETE / ON UPDATE. Defaults to NO ACTION
/// when unspecified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RefAction {
    #[default]
    NoAction,
    Cascade,
    SetNull,
}

impl RefAction {
    pub fn keyword(&self) -> &'static str {
        match self {
            RefAction::NoAction => "NO ACTION",
            RefAction::Cascade => "CASCADE",
            RefAction::SetNull => "SET NULL",
        }
    }
}

/// A foreign key: the local column (`with`), the referenced table/column
/// (`target`), and the referential actions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForeignKey {
    pub name: String,
    pub target: Reference,
    pub with: Reference,
    pub on_delete: RefAction,
    pub on_update: RefAction,
}
