//! Request input validated at construction
//!
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod user;
pub mod post;

pub use validation::ValidationError;
pub use user::{LoginEmail, NewUser};
pub use post::NewPost;
