pub mod exercises;
pub mod health;
pub mod logs;
pub mod users;
pub mod validation;

pub use exercises::add_exercise;
pub use health::health_check;
pub use logs::get_log;
pub use users::{create_user, list_users};
pub use validation::{parse_date_input, parse_leading_int};
