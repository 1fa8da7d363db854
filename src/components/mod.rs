//! UI Components
//!
//! Pages and the form pieces they are built from.

mod header;
mod home;
mod create_point;
mod text_field;
mod region_select;
mod item_grid;
mod notice_bar;

pub use header::Header;
pub use home::Home;
pub use create_point::CreatePoint;
pub use text_field::TextField;
pub use region_select::RegionSelect;
pub use item_grid::ItemGrid;
pub use notice_bar::NoticeBar;
