//! The components module contains the status widgets shared across the app: the status pill,
//! the dropdown built on top of it, and the chevron icons the dropdown uses.

mod icons;

mod status_pill;
pub use status_pill::StatusPill;

mod dropdown;
pub use dropdown::{Dropdown, DropdownVariant};
