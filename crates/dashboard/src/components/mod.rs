pub mod home_view;
pub mod not_found;
pub mod platform_view;
