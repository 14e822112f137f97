pub mod reporter;
pub mod ticker;
