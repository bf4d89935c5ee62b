pub mod use_active_profile;
pub mod use_timeline;

pub use use_active_profile::use_active_profile;
pub use use_timeline::use_timeline;
