pub mod endpoints;
pub mod requests;
pub mod responses;
