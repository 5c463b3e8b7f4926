pub mod extreme_type;
pub mod family;
pub mod raw_table;

// re-export for cleaner imports
pub use self::extreme_type::ExtremeType;
pub use self::family::{FamilyRecord, FamilyTable};
pub use self::raw_table::RawTable;
