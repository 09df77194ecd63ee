//! UI Components
//!
//! Reusable Leptos components.

mod app_link;
mod avatar;
mod editable_list;
mod family_tree_view;
mod form_fields;
mod image_picker;
mod info_modal;
mod live_position;
mod memories_info;
mod memory_card;
mod memory_gallery;
mod mobile_nav;
mod relative_card;
mod toaster;
mod top_bar;
mod user_info;

pub use app_link::{follow, AppLink};
pub use avatar::Avatar;
pub use editable_list::EditableList;
pub use family_tree_view::FamilyTreeView;
pub use form_fields::{Field, PeoplePicker};
pub use image_picker::ImagePicker;
pub use info_modal::InfoModal;
pub use live_position::LivePosition;
pub use memories_info::MemoriesInfo;
pub use memory_card::MemoryCard;
pub use memory_gallery::MemoryGallery;
pub use mobile_nav::MobileNav;
pub use relative_card::RelativeCard;
pub use toaster::Toaster;
pub use top_bar::TopBar;
pub use user_info::UserInfo;
