//! API request handlers.

pub mod books;
pub mod health;
pub mod notes;
pub mod schedules;
pub mod short_tasks;
pub mod tasks;

pub use books::*;
pub use health::*;
pub use notes::*;
pub use schedules::*;
pub use short_tasks::*;
pub use tasks::*;
