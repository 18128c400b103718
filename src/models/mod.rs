pub mod form;
pub mod goals;
pub mod record;
