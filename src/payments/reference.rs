//! Transaction reference generation
//!
//! A reference is a UTC timestamp (`YYYYMMDDhhmmss`) followed by 18 upper-case
//! hex characters taken from a v4 UUID, 32 characters in total.

use crate::payments::traits::ReferenceGenerator;
use chrono::Utc;
use uuid::Uuid;

/// Length of every generated reference.
pub const REFERENCE_LEN: usize = 32;

const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
const RANDOM_LEN: usize = 18;

/// Generate a new transaction reference.
pub fn generate_reference() -> String {
    let timestamp = Utc::now().format(TIMESTAMP_FORMAT).to_string();
    let random = Uuid::new_v4().simple().to_string();

    let mut reference = String::with_capacity(REFERENCE_LEN);
    reference.push_str(&timestamp);
    reference.push_str(&random[..RANDOM_LEN].to_ascii_uppercase());
    reference
}

/// Default generator backed by [`generate_reference`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampReferenceGenerator;

impl ReferenceGenerator for TimestampReferenceGenerator {
    fn generate(&self) -> String {
        generate_reference()
    }
}
