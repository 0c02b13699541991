pub mod gate;
pub mod password;
pub mod token;

pub use self::gate::{require_auth, Identity};
pub use self::token::{Claims, TokenService};
