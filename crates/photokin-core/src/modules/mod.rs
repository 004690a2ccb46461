pub mod compton;
pub mod photoelectric;

mod dispatch;
mod traits;

pub use dispatch::{execute_request, executor_for_mode};
pub use traits::ModuleExecutor;
