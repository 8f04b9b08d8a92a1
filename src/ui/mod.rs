pub mod app;
pub mod dialogs;
pub mod draw;
pub mod landing;
pub mod not_found;
pub mod palette_dev;
pub mod theme;
