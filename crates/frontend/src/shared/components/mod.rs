pub mod filter_panel;
pub mod infinite_scroll;
pub mod multi_select;
