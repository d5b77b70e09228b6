pub mod csv_parse;
pub mod file;
pub mod sheet;
pub mod traits;
pub mod types;

pub use csv_parse::parse_spaces;
pub use file::CsvFileSource;
pub use sheet::SheetSource;
pub use traits::SpaceSource;
pub use types::SourceConfig;
