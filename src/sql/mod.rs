//! SQL text construction.
//!
//! The pieces that turn metadata and values into SQL fragments:
//! - Identifier quoting policy
//! - Scalar value to SQL literal codec
//! - Catalog type name to SQL type syntax mapping
//! - Document header generation
//!
//! Everything here is pure. String-concatenation SQL assembly elsewhere in
//! the crate is safe exactly because all identifiers pass through
//! `identifier` and all values pass through `codec` first.

pub mod codec;
pub mod header;
pub mod identifier;
pub mod typemap;

pub use codec::format_value;
pub use header::sql_header;
pub use identifier::{escape_identifier, needs_quoting};
pub use typemap::map_type;
