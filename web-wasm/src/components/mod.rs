//! UIコンポーネント

pub mod cards;
pub mod dashboard_controls;
pub mod dashboard_page;
pub mod data_loader;
pub mod developer_panel;
pub mod header;
pub mod landing;
pub mod loading_overlay;
pub mod record_list;
pub mod toast;
pub mod upload_area;
