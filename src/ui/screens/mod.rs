pub mod components;
pub mod data_binding;
pub mod home;
pub mod lifecycle;
pub mod placeholder;
