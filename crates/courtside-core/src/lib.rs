// Library root: league table loading, cleaning, and the per-table parsers.

pub mod clean;
pub mod holdout;
pub mod loader;
pub mod parse;
pub mod table;

pub use loader::{
    load_tables, parse_all, parse_all_data, League, LeagueData, LoadError, RawTables, TableKind,
};
pub use table::{Table, TableError};
