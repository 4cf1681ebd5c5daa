/// Listing commands return result structs instead of printing directly; the
/// repl renders them as a table or JSON.
mod fs_ops;
mod ls;

pub use fs_ops::*;
pub use ls::*;
