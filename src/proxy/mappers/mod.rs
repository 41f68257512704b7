// Protocol mappers

pub mod records;

pub use records::{map_ad_create, map_event_create, map_event_patch};
