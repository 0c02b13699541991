pub mod health;
pub use self::health::health;

pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

pub mod questions;
pub use self::questions::{create_question, get_question, list_questions};

pub mod answers;
pub use self::answers::add_answer;
