pub mod customer;
pub mod invoice;
pub mod revenue;
pub mod user;

pub use customer::Customer;
pub use invoice::{Invoice, InvoiceStatus};
pub use revenue::Revenue;
pub use user::User;
