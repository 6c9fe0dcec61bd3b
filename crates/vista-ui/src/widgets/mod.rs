pub mod column;
pub mod grouped_list;
pub mod theme_toggle;
pub mod virtual_list;

mod nav;
mod scrollbar;
