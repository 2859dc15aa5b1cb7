pub mod error;
pub mod channel;
pub mod discover;
pub mod io;
pub mod job;
