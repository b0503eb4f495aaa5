//! Card system: records, column values, and the title-indexed table.
//!
//! ## Key Types
//!
//! - `CardType`: Fixed game vocabulary plus `Other` for unknown types
//! - `Card`: One database row - title, type, stats, text box, source columns
//! - `ColumnValue`: Normalized source cell (Int/Float/Text/Null)
//! - `CardTable`: Title lookup, iteration, and the keyword dictionary

pub mod card;
pub mod column;
pub mod table;

pub use card::{Card, CardType, Keyword, TextBox, Trait};
pub use column::{ColumnValue, Columns};
pub use table::CardTable;
