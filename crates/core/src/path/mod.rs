mod error;
mod lookup;
mod resolve;
mod types;

pub use error::{PathError, Result};
pub use lookup::Lookup;
pub use resolve::{resolve, resolve_as, resolve_detailed, undefined_or_null_chained};
pub use types::{PathExpression, Resolved, Segment};
