/// LIMIT bounds. Both bounds zero means "no clause"; a lone upper bound
/// renders as `LIMIT to`; anything else as `LIMIT from, to`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Limit {
    pub from: i64,
    pub to: i64,
}

impl Limit {
    pub fn new(from: i64, to: i64) -> Self {
        Self { from, to }
    }

    pub fn upper(to: i64) -> Self {
        Self { from: 0, to }
    }

    pub fn is_unset(&self) -> bool {
        self.from == 0 && self.to == 0
    }
}
