//! The BigBiteDocs documentation standard.

mod function_comment;

pub use function_comment::FunctionComment;
