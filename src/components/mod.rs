//! UI Components
//!
//! Public site sections, the admin dashboard and the shared pieces both use.

mod admin_dashboard;
mod admin_page;
mod carousel_row;
mod catalog_sections;
mod clients_section;
mod contact_section;
mod delete_confirm_button;
mod field_editor;
mod hero_section;
mod image_edit_dialog;
mod image_viewer;
mod list_editor;
mod modal;
mod public_site;
mod site_header;

pub use admin_dashboard::AdminDashboard;
pub use admin_page::AdminPage;
pub use carousel_row::CarouselRow;
pub use catalog_sections::{FurnitureSection, StoreSection};
pub use clients_section::ClientsSection;
pub use contact_section::{ContactSection, SiteFooter};
pub use delete_confirm_button::DeleteConfirmButton;
pub use field_editor::{ImageField, ImageThumb, TextField};
pub use hero_section::{AboutSection, HeroSection};
pub use image_edit_dialog::ImageEditDialog;
pub use image_viewer::{ImageViewer, ViewerImage};
pub use list_editor::ListEditor;
pub use modal::Modal;
pub use public_site::PublicSite;
pub use site_header::SiteHeader;
