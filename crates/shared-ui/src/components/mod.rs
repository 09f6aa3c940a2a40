// Standalone components
pub mod button;
pub mod card;
pub mod data_table;
pub mod input;
pub mod page_header;
pub mod pagination;
pub mod skeleton;

// Depends on input
pub mod search_bar;

// Depends on button
pub mod dialog;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use input::*;
pub use page_header::*;
pub use pagination::*;
pub use search_bar::*;
pub use skeleton::*;
