pub mod components;
pub mod data_binding;
pub mod lifecycle;

pub use components::ComponentsState;
pub use data_binding::DataBindingState;
pub use lifecycle::LifecycleDemo;
