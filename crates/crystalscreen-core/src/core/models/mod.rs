pub mod fragment;
pub mod record;
pub mod substance;
