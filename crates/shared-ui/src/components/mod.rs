// Standalone building blocks
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod skeleton;

// Panels shown in place of view content
pub mod status_panel;

// Dashboard chrome: depends on badge, button and the menu icons
pub mod menu_icon;
pub mod header_bar;
pub mod sidebar;

// Re-exports for convenience
pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use header_bar::*;
pub use input::*;
pub use menu_icon::*;
pub use page_header::*;
pub use sidebar::*;
pub use skeleton::*;
pub use status_panel::*;
