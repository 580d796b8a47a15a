pub mod dispatch;
pub mod history;
pub mod status;

pub use dispatch::dispatch;
