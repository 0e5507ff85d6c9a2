//! Player statistics data model: the validated season record, its raw feed
//! form, and the validation rules that connect them.

pub mod columns;
pub mod raw;
pub mod record;
pub mod validate;

pub use raw::RawRow;
pub use record::PlayerRecord;
pub use validate::{RowRejection, Violation, ViolationKind};
