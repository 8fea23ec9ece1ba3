pub mod helpers;

pub use helpers::{parse_field_spec, parse_message_spec, parse_parameter};
