pub mod core;
pub mod demos;
pub mod routes;
pub mod settings;
pub mod types;

pub use core::App;
pub use routes::Route;
pub use types::{InputTarget, Mode};
