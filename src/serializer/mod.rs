//! # SDP Serializer
//!
//! Writes a [`SessionDescription`] back to text in RFC 4566 §5 order:
//!
//! ```text
//! v o s [i] [u] e* p* [c] b* (t r*)* [z] [k] a*
//! m [i] c* b* [k] a*    (once per media block)
//! ```
//!
//! Every line, the last included, ends with CRLF regardless of the
//! terminators the description was parsed from.

use std::fmt::{self, Display, Formatter};

use crate::types::{
    AddressType, Attribute, BandwidthDescription, ConnectionDescription, Contact, EncryptionKey,
    EncryptionMethod, Interval, MediaDescription, MediaType, NetworkType, Origin, Repeat,
    SessionDescription, TimeZoneAdjustment,
};


/// Line terminator used on output.
pub const CRLF: &str = "\r\n";

/// Serializes a description to canonical SDP text.
///
/// The output always ends with CRLF, so text whose last line had no
/// terminator parses fine but does not come back byte-for-byte: the
/// result gains a trailing `\r\n`.
pub fn stringify(description: &SessionDescription) -> String {
    description.to_string()
}

fn write_line(f: &mut Formatter<'_>, key: char, value: impl Display) -> fmt::Result {
    write!(f, "{}={}{}", key, value, CRLF)
}

fn join<T: Display>(f: &mut Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Display for NetworkType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for AddressType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for MediaType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for EncryptionMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Interval {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)?;
        if let Some(unit) = self.unit {
            write!(f, "{}", unit.letter())?;
        }
        Ok(())
    }
}

impl Display for Repeat {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.interval, self.duration)?;
        for offset in &self.offsets {
            write!(f, " {}", offset)?;
        }
        Ok(())
    }
}

impl Display for TimeZoneAdjustment {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.time, self.adjustment)
    }
}

impl Display for Origin {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {} {}",
            self.username,
            self.session_id,
            self.session_version,
            self.network_type,
            self.address_type,
            self.address
        )
    }
}

/// `value (name)` when a name is known, the bare value otherwise.
impl Display for Contact {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", self.value, name),
            None => f.write_str(&self.value),
        }
    }
}

impl Display for ConnectionDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.network_type, self.address_type, self.address)?;

        let layers = self.layer_count.filter(|&n| n > 1);
        match (&self.network_type, &self.address_type) {
            (NetworkType::In, AddressType::Ip4) => {
                if let Some(ttl) = self.time_to_live {
                    write!(f, "/{}", ttl)?;
                    if let Some(layers) = layers {
                        write!(f, "/{}", layers)?;
                    }
                }
            }
            (NetworkType::In, AddressType::Ip6) => {
                if let Some(layers) = layers {
                    write!(f, "/{}", layers)?;
                }
            }
            _ => {}
        }
        Ok(())
    }
}

impl Display for BandwidthDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.modifier, self.value)
    }
}

impl Display for EncryptionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "{}:{}", self.method, key),
            None => write!(f, "{}", self.method),
        }
    }
}

/// `name` for a property attribute, `name:value` otherwise (even for an empty value).
impl Display for Attribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{}:{}", self.name, value),
            None => f.write_str(&self.name),
        }
    }
}

/// The full media block, `m=` line first.
impl Display for MediaDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "m={} {}", self.media_type, self.port)?;
        if self.number_of_ports > 1 {
            write!(f, "/{}", self.number_of_ports)?;
        }
        write!(f, " {}", self.transport)?;
        for format in &self.formats {
            write!(f, " {}", format)?;
        }
        f.write_str(CRLF)?;

        if let Some(title) = &self.title {
            write_line(f, 'i', title)?;
        }
        for connection in &self.connections {
            write_line(f, 'c', connection)?;
        }
        for bandwidth in &self.bandwidth {
            write_line(f, 'b', bandwidth)?;
        }
        if let Some(key) = &self.encryption_key {
            write_line(f, 'k', key)?;
        }
        for attribute in &self.attributes {
            write_line(f, 'a', attribute)?;
        }
        Ok(())
    }
}

impl Display for SessionDescription {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_line(f, 'v', self.version)?;
        write_line(f, 'o', &self.origin)?;
        write_line(f, 's', &self.session_name)?;

        if let Some(information) = &self.information {
            write_line(f, 'i', information)?;
        }
        if let Some(uri) = &self.uri {
            write_line(f, 'u', uri)?;
        }
        for email in &self.emails {
            write_line(f, 'e', email)?;
        }
        for phone in &self.phone_numbers {
            write_line(f, 'p', phone)?;
        }
        if let Some(connection) = &self.connection {
            write_line(f, 'c', connection)?;
        }
        for bandwidth in &self.bandwidth {
            write_line(f, 'b', bandwidth)?;
        }
        for time in &self.times {
            write!(f, "t={} {}{}", time.start_time, time.stop_time, CRLF)?;
            for repeat in &time.repeats {
                write_line(f, 'r', repeat)?;
            }
        }
        if !self.time_zone_adjustments.is_empty() {
            f.write_str("z=")?;
            join(f, &self.time_zone_adjustments)?;
            f.write_str(CRLF)?;
        }
        if let Some(key) = &self.encryption_key {
            write_line(f, 'k', key)?;
        }
        for attribute in &self.attributes {
            write_line(f, 'a', attribute)?;
        }

        for media in &self.media {
            write!(f, "{}", media)?;
        }
        Ok(())
    }
}
