pub mod router;
pub mod shutdown;
pub mod state;
