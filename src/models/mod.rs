pub mod user;
pub mod movie;
pub mod hall;
pub mod session;

pub use user::{AuthenticatedUser, User};
pub use movie::Movie;
pub use hall::Hall;
pub use session::{BookingRecord, Session};
