mod users;
pub use users::*;

mod places;
pub use places::*;

mod trips;
pub use trips::*;

mod bookings;
pub use bookings::*;

mod requests;
pub use requests::*;

mod accommodations;
pub use accommodations::*;
