use super::{Serializer, TableOptions};

#[derive(Debug)]
pub(super) enum Flavor {
    Sqlite,
    Mysql,
}

impl Serializer {
    /// The embedded-engine dialect.
    pub fn sqlite() -> Serializer {
        Serializer {
            flavor: Flavor::Sqlite,
            options: TableOptions::default(),
        }
    }

    /// The networked-engine dialect with no table options.
    pub fn mysql() -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
            options: TableOptions::default(),
        }
    }

    /// The networked-engine dialect with CREATE TABLE suffixes sourced
    /// from the connection configuration.
    pub fn mysql_with_options(options: TableOptions) -> Serializer {
        Serializer {
            flavor: Flavor::Mysql,
            options,
        }
    }
}
