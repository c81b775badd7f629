//! Reusable view components.
//!
//! - `toast`: Auto-dismissing notice
//! - `page_header`: Back arrow with page title
//! - `request_status`: Pending and failed states of a provider request
//! - `nav_bar`: Bottom navigation bar

pub mod nav_bar;
pub mod page_header;
pub mod request_status;
pub mod toast;

pub use iced_fonts::LUCIDE_FONT_BYTES;
pub use nav_bar::view_nav_bar;
pub use page_header::{view_page_header, view_section_title};
pub use request_status::{view_failure, view_pending};
pub use toast::{ToastState, view_toast};
