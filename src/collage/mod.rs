pub mod crop;
pub mod session;
pub mod slots;
