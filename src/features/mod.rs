pub mod chamber;
pub mod status;
pub mod stubs;
