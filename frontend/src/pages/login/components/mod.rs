pub mod branding;
pub mod form;
pub mod messages;
