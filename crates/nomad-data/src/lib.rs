// Operations
#[macro_use]
mod record;
pub use record::*;

mod operations;
pub use operations::*;

mod errors;
pub use errors::*;

mod filter;
pub use filter::*;

mod memory;
pub use memory::*;

// Models
mod users;
pub use users::*;

mod places;
pub use places::*;

mod trips;
pub use trips::*;

mod requests;
pub use requests::*;

mod accommodations;
pub use accommodations::*;
