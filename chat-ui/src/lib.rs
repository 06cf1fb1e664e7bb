pub mod api;
pub mod backend;
pub mod components;
pub mod conversation;
pub mod interop;
pub mod styles;
pub mod trace_log;

pub use api::*;
pub use backend::*;
pub use components::*;
pub use conversation::*;
pub use trace_log::*;
