//! Pages
//!
//! One component per route.

mod add_memory;
mod create_parent;
mod memories;
mod memory_detail;
mod profile;
mod tree;
mod who_am_i;

pub use add_memory::AddMemoryPage;
pub use create_parent::CreateParentPage;
pub use memories::MemoriesPage;
pub use memory_detail::MemoryDetailPage;
pub use profile::ProfilePage;
pub use tree::TreePage;
pub use who_am_i::WhoAmIPage;
