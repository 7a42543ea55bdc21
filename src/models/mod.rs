pub mod error;
pub mod health;
pub mod item;
pub mod item_delete;

pub use error::*;
pub use health::*;
pub use item::*;
pub use item_delete::*;
