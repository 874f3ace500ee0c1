/// A table/key pair naming one side of a join or foreign key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reference {
    pub table: String,
    pub key: String,
}

impl Reference {
    pub fn new(table: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            key: key.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JoinKind {
    #[default]
    Left,
    Right,
    Inner,
}

impl JoinKind {
    pub fn keyword(&self) -> &'static str {
        match self {
            JoinKind::Left => "LEFT",
            JoinKind::Right => "RIGHT",
            JoinKind::Inner => "INNER",
        }
    }
}

/// A JOIN clause: `<KIND> JOIN target ON (target.key <condition> with.key)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub target: Reference,
    pub with: Reference,
    pub condition: String,
    pub kind: JoinKind,
}

impl Join {
    pub fn new(
        target: Reference,
        with: Reference,
        condition: impl Into<String>,
        kind: JoinKind,
    ) -> Self {
        Self {
            target,
            with,
            condition: condition.into(),
            kind,
        }
    }

    pub fn left(target: Reference, with: Reference, condition: impl Into<String>) -> Self {
        Self::new(target, with, condition, JoinKind::Left)
    }
}
