pub(crate) mod fallback;

pub mod health;
pub mod page;
pub mod process;
