pub mod incoming;
pub mod outgoing;
pub mod shared;
