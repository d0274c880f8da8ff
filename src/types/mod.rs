//! Value types of a parsed session description.
//!
//! Everything here is plain owned data: a [`SessionDescription`] owns its
//! media blocks, which own their own connections, bandwidths and attributes.

mod connection;
mod fields;
mod media;
mod session;
mod time;

pub use connection::{AddressType, ConnectionDescription, NetworkType};
pub use fields::{
    Attribute, BandwidthDescription, Contact, EncryptionKey, EncryptionMethod,
    UnknownEncryptionMethod,
};
pub use media::{MediaDescription, MediaType};
pub use session::{Origin, SessionDescription};
pub use time::{ntp_to_datetime, Interval, Repeat, Time, TimeUnit, TimeZoneAdjustment, NTP_UNIX_OFFSET};
