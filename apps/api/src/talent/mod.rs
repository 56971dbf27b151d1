pub mod aggregate;
pub mod handlers;
pub mod projection;
pub mod queries;
pub mod writer;
