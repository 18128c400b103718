pub mod clock;
pub mod confirm;
pub mod debounce;
pub mod goals;
pub mod reconciler;
pub mod session;
pub mod slots;
pub mod status;
