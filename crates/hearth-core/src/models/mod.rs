pub mod hunt;

pub use hunt::{DocumentRef, Hunt, HuntFields, Submitter};
