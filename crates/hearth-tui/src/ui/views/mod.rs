pub mod help;
pub mod hunt_detail;
pub mod hunt_table;
pub mod tag_picker;
