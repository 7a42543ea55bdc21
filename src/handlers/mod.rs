pub mod create_item;
pub mod delete_item;
pub mod get_by_name;
pub mod get_item;
pub mod health;
pub mod update_item;

pub use create_item::*;
pub use delete_item::*;
pub use get_by_name::*;
pub use get_item::*;
pub use health::*;
pub use update_item::*;
