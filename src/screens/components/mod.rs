pub mod confirm_dialog;
pub mod navigation_footer;
pub mod notify_banner;
pub mod select;
pub mod text_box;
