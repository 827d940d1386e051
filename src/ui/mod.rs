pub mod form;
pub mod preview;
