// Utility functions

use rand::Rng;

/// Largest record id the proxy synthesizes
pub const MAX_RECORD_ID: u32 = 999_999;

/// Random numeric record id in `0..=999999`, rendered as a string
pub fn generate_record_id() -> String {
    rand::thread_rng().gen_range(0..=MAX_RECORD_ID).to_string()
}
