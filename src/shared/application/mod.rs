/// Shared application layer patterns used across the films module.
pub mod pagination;

pub use pagination::Page;
