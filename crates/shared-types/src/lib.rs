pub mod error;
pub mod feature_flags;
pub mod models;

// Navigation core
pub mod inflight;
pub mod menu;
pub mod navigation;
pub mod registry;
pub mod session;

pub use error::*;
pub use feature_flags::*;
pub use models::*;

pub use inflight::{InFlight, Ticket};
pub use menu::{menu_for, MenuGroup, MenuIcon, MenuItem, MenuLeaf};
pub use navigation::{ContentInset, NavigationState};
pub use registry::{
    resolve, AdminView, ManagementView, ParentView, Resolved, StudentView, TeacherView, ViewSet,
};
pub use session::{ActiveSession, SessionPhase};
