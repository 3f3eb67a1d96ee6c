//! Domain models and API payload types.
//!
//! Payload structs for the Discord REST API are kept minimal: only the fields
//! this application reads are declared, and unknown fields are ignored during
//! deserialization. Snowflake identifiers use Serenity's model ID types so
//! they serialize as the decimal strings Discord (and the dashboard frontend)
//! expect.

pub mod api;
pub mod guild;
pub mod user;
