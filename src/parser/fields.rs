//! Sub-parsers for the value part of each line type.
//!
//! Each function takes the text after `x=` and returns one value or the
//! [`FieldError`] naming what was missing or malformed.

use std::str::FromStr;

use crate::error::FieldError;
use crate::types::{
    AddressType, Attribute, BandwidthDescription, ConnectionDescription, Contact, EncryptionKey,
    EncryptionMethod, Interval, MediaDescription, MediaType, NetworkType, Origin, Repeat, Time,
    TimeUnit, TimeZoneAdjustment,
};

pub(crate) type FieldResult<T> = std::result::Result<T, FieldError>;

fn next_token<'a>(
    tokens: &mut impl Iterator<Item = &'a str>,
    field: &'static str,
) -> FieldResult<&'a str> {
    tokens.next().ok_or(FieldError::Missing(field))
}

fn parse_number<T: FromStr>(field: &'static str, token: &str) -> FieldResult<T> {
    token.parse().map_err(|_| FieldError::invalid(field, token))
}

/// `<version>`, a decimal number.
pub fn parse_version(value: &str) -> FieldResult<u32> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FieldError::Missing("version"));
    }
    parse_number("version", value)
}

/// `<username> <sess-id> <sess-version> <nettype> <addrtype> <unicast-address>`
pub fn parse_origin(value: &str) -> FieldResult<Origin> {
    let mut tokens = value.split_whitespace();

    let username = next_token(&mut tokens, "username")?;
    let session_id = parse_number("session id", next_token(&mut tokens, "session id")?)?;
    let session_version = parse_number(
        "session version",
        next_token(&mut tokens, "session version")?,
    )?;
    let network_type = NetworkType::from(next_token(&mut tokens, "network type")?);
    let address_type = AddressType::from(next_token(&mut tokens, "address type")?);
    let address = next_token(&mut tokens, "address")?;

    Ok(Origin {
        username: username.to_string(),
        session_id,
        session_version,
        network_type,
        address_type,
        address: address.to_string(),
    })
}

/// `<nettype> <addrtype> <connection-address>`
pub fn parse_connection(value: &str) -> FieldResult<ConnectionDescription> {
    let mut tokens = value.split_whitespace();

    let network_type = NetworkType::from(next_token(&mut tokens, "network type")?);
    let address_type = AddressType::from(next_token(&mut tokens, "address type")?);
    let raw_address = next_token(&mut tokens, "address")?;

    let mut connection = ConnectionDescription {
        network_type,
        address_type,
        address: raw_address.to_string(),
        time_to_live: None,
        layer_count: None,
    };

    match (&connection.network_type, &connection.address_type) {
        (NetworkType::In, AddressType::Ip4) => {
            let mut parts = raw_address.split('/');
            connection.address = parts.next().unwrap_or_default().to_string();
            if let Some(ttl) = parts.next() {
                connection.time_to_live = Some(parse_number("time to live", ttl)?);
            }
            if let Some(layers) = parts.next() {
                connection.layer_count = Some(parse_number("layer count", layers)?);
            }
            if parts.next().is_some() {
                return Err(FieldError::invalid("connection address", raw_address));
            }
        }
        (NetworkType::In, AddressType::Ip6) => {
            let mut parts = raw_address.split('/');
            connection.address = parts.next().unwrap_or_default().to_string();
            if let Some(layers) = parts.next() {
                connection.layer_count = Some(parse_number("layer count", layers)?);
            }
            if parts.next().is_some() {
                return Err(FieldError::invalid("connection address", raw_address));
            }
        }
        _ => {}
    }

    if connection.address.is_empty() {
        return Err(FieldError::Missing("address"));
    }

    Ok(connection)
}

/// `<modifier>:<bandwidth-value>`
pub fn parse_bandwidth(value: &str) -> FieldResult<BandwidthDescription> {
    let (modifier, kbps) = value
        .split_once(':')
        .ok_or(FieldError::Missing("bandwidth value"))?;
    if modifier.is_empty() {
        return Err(FieldError::Missing("bandwidth modifier"));
    }

    Ok(BandwidthDescription {
        modifier: modifier.to_string(),
        value: parse_number("bandwidth value", kbps.trim())?,
    })
}

/// `<start-time> <stop-time>`
pub fn parse_time(value: &str) -> FieldResult<Time> {
    let mut tokens = value.split_whitespace();
    let start_time = parse_number("start time", next_token(&mut tokens, "start time")?)?;
    let stop_time = parse_number("stop time", next_token(&mut tokens, "stop time")?)?;
    Ok(Time::new(start_time, stop_time))
}

/// `<repeat interval> <active duration> <offset>...`
pub fn parse_repeat(value: &str) -> FieldResult<Repeat> {
    let mut tokens = value.split_whitespace();
    let interval = parse_interval(next_token(&mut tokens, "repeat interval")?)?;
    let duration = parse_interval(next_token(&mut tokens, "active duration")?)?;
    let offsets = tokens.map(parse_interval).collect::<FieldResult<Vec<_>>>()?;
    if offsets.is_empty() {
        return Err(FieldError::Missing("repeat offset"));
    }

    Ok(Repeat {
        interval,
        duration,
        offsets,
    })
}

/// A typed time: an optionally signed number with an optional `d|h|m|s` suffix.
pub fn parse_interval(token: &str) -> FieldResult<Interval> {
    if token.is_empty() {
        return Err(FieldError::Missing("interval"));
    }

    let (digits, unit) = match token.chars().last().and_then(TimeUnit::from_letter) {
        Some(unit) => (&token[..token.len() - 1], Some(unit)),
        None => (token, None),
    };

    Ok(Interval {
        value: parse_number("interval", digits)?,
        unit,
    })
}

/// `<adjustment time> <offset> <adjustment time> <offset> ...`
pub fn parse_time_zones(value: &str) -> FieldResult<Vec<TimeZoneAdjustment>> {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(FieldError::Missing("adjustment time"));
    }

    tokens
        .chunks(2)
        .map(|pair| match pair {
            [time, offset] => Ok(TimeZoneAdjustment {
                time: parse_number("adjustment time", time)?,
                adjustment: parse_interval(offset)?,
            }),
            _ => Err(FieldError::Missing("time zone offset")),
        })
        .collect()
}

/// `<method>` or `<method>:<encryption key>`
pub fn parse_encryption_key(value: &str) -> FieldResult<EncryptionKey> {
    let (method, key) = match value.split_once(':') {
        Some((method, key)) => (method, Some(key.to_string())),
        None => (value, None),
    };

    let method = method
        .parse::<EncryptionMethod>()
        .map_err(|_| FieldError::invalid("encryption method", method))?;

    Ok(EncryptionKey { method, key })
}

/// `<name>` or `<name>:<value>`. A missing colon means no value at all.
pub fn parse_attribute(value: &str) -> FieldResult<Attribute> {
    let attribute = match value.split_once(':') {
        Some((name, value)) => Attribute::value(name, value),
        None => Attribute::property(value),
    };
    if attribute.name.is_empty() {
        return Err(FieldError::Missing("attribute name"));
    }
    Ok(attribute)
}

/// Accepts `value (name)`, `name <value>` and a bare `value`.
pub fn parse_contact(value: &str) -> Contact {
    if let Some(inner) = value.strip_suffix(')') {
        if let Some(split) = inner.rfind(" (") {
            let address = inner[..split].trim_end();
            if !address.is_empty() {
                return Contact::new(address).with_name(&inner[split + 2..]);
            }
        }
    }

    if let Some(inner) = value.strip_suffix('>') {
        if let Some(split) = inner.rfind(" <") {
            let name = inner[..split].trim_end();
            if !name.is_empty() {
                return Contact::new(&inner[split + 2..]).with_name(name);
            }
        }
    }

    Contact::new(value)
}

/// `<media> <port>[/<count>] <proto> <fmt> ...`
pub fn parse_media(value: &str) -> FieldResult<MediaDescription> {
    let mut tokens = value.split_whitespace();

    let media_type = MediaType::from(next_token(&mut tokens, "media type")?);
    let port_token = next_token(&mut tokens, "port")?;
    let transport = next_token(&mut tokens, "transport")?;
    let formats: Vec<String> = tokens.map(str::to_string).collect();
    if formats.is_empty() {
        return Err(FieldError::Missing("media format"));
    }

    let (port, number_of_ports) = match port_token.split_once('/') {
        Some((port, count)) => (
            parse_number("port", port)?,
            parse_number("port count", count)?,
        ),
        None => (parse_number("port", port_token)?, 1),
    };

    Ok(MediaDescription {
        media_type,
        port,
        number_of_ports,
        transport: transport.to_string(),
        formats,
        title: None,
        connections: Vec::new(),
        bandwidth: Vec::new(),
        encryption_key: None,
        attributes: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_origin() {
        let origin = parse_origin("jdoe 2890844526 2890842807 IN IP4 10.47.16.5").unwrap();
        assert_eq!(origin.username, "jdoe");
        assert_eq!(origin.session_id, 2890844526);
        assert_eq!(origin.session_version, 2890842807);
        assert_eq!(origin.network_type, NetworkType::In);
        assert_eq!(origin.address_type, AddressType::Ip4);
        assert_eq!(origin.address, "10.47.16.5");

        // NTP-derived ids do not fit in 32 bits
        let origin = parse_origin("- 3724394400123456 1 IN IP6 ::1").unwrap();
        assert_eq!(origin.session_id, 3724394400123456);
        assert_eq!(origin.address_type, AddressType::Ip6);
    }

    #[test]
    fn test_parse_origin_errors() {
        assert_eq!(
            parse_origin("jdoe 1 2 IN IP4"),
            Err(FieldError::Missing("address"))
        );
        assert_eq!(
            parse_origin("jdoe abc 2 IN IP4 10.0.0.1"),
            Err(FieldError::invalid("session id", "abc"))
        );
        assert_eq!(parse_origin(""), Err(FieldError::Missing("username")));
    }

    #[test]
    fn test_parse_connection_ip4() {
        let c = parse_connection("IN IP4 224.2.17.12/127").unwrap();
        assert_eq!(c.address, "224.2.17.12");
        assert_eq!(c.time_to_live, Some(127));
        assert_eq!(c.layer_count, None);
        assert_eq!(c.effective_layer_count(), 1);

        let c = parse_connection("IN IP4 224.2.17.12/127/2").unwrap();
        assert_eq!(c.time_to_live, Some(127));
        assert_eq!(c.effective_layer_count(), 2);

        let c = parse_connection("IN IP4 10.0.0.1").unwrap();
        assert_eq!(c, ConnectionDescription::ip4("10.0.0.1"));
        assert!(!c.is_multicast());
    }

    #[test]
    fn test_parse_connection_ip6() {
        let c = parse_connection("IN IP6 FF15::101/3").unwrap();
        assert_eq!(c.address, "FF15::101");
        assert_eq!(c.time_to_live, None);
        assert_eq!(c.layer_count, Some(3));

        let c = parse_connection("IN IP6 ::1").unwrap();
        assert_eq!(c, ConnectionDescription::ip6("::1"));
    }

    #[test]
    fn test_parse_connection_other_types_pass_through() {
        let c = parse_connection("ATM NSAP 47.0005.80/ffe1").unwrap();
        assert_eq!(c.network_type, NetworkType::Other("ATM".into()));
        assert_eq!(c.address_type, AddressType::Other("NSAP".into()));
        assert_eq!(c.address, "47.0005.80/ffe1");
        assert_eq!(c.time_to_live, None);
        assert_eq!(c.layer_count, None);
    }

    #[test]
    fn test_parse_connection_errors() {
        assert_eq!(
            parse_connection("IN IP4 224.2.1.1/abc"),
            Err(FieldError::invalid("time to live", "abc"))
        );
        assert_eq!(
            parse_connection("IN IP4 224.2.1.1/300"),
            Err(FieldError::invalid("time to live", "300"))
        );
        assert!(parse_connection("IN IP4 224.2.1.1/1/2/3").is_err());
        assert_eq!(parse_connection("IN"), Err(FieldError::Missing("address type")));
    }

    #[test]
    fn test_parse_bandwidth() {
        assert_eq!(
            parse_bandwidth("AS:128").unwrap(),
            BandwidthDescription::new("AS", 128)
        );
        assert_eq!(
            parse_bandwidth("CT"),
            Err(FieldError::Missing("bandwidth value"))
        );
        assert_eq!(
            parse_bandwidth("CT:lots"),
            Err(FieldError::invalid("bandwidth value", "lots"))
        );
    }

    #[test]
    fn test_parse_time() {
        let t = parse_time("2873397496 2873404696").unwrap();
        assert_eq!(t.start_time, 2873397496);
        assert_eq!(t.stop_time, 2873404696);
        assert!(t.repeats.is_empty());
        assert_eq!(parse_time("0"), Err(FieldError::Missing("stop time")));
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("7d").unwrap(), Interval::new(7, TimeUnit::Days));
        assert_eq!(parse_interval("-1h").unwrap(), Interval::new(-1, TimeUnit::Hours));
        assert_eq!(parse_interval("25m").unwrap(), Interval::new(25, TimeUnit::Minutes));
        assert_eq!(parse_interval("90000").unwrap(), Interval::seconds(90000));
        assert_eq!(parse_interval("h"), Err(FieldError::invalid("interval", "")));
        assert_eq!(parse_interval("3w"), Err(FieldError::invalid("interval", "3w")));
    }

    #[test]
    fn test_parse_repeat() {
        let r = parse_repeat("7d 1h 0 25h").unwrap();
        assert_eq!(r.interval, Interval::new(7, TimeUnit::Days));
        assert_eq!(r.duration, Interval::new(1, TimeUnit::Hours));
        assert_eq!(
            r.offsets,
            vec![Interval::seconds(0), Interval::new(25, TimeUnit::Hours)]
        );
        assert_eq!(parse_repeat("7d 1h"), Err(FieldError::Missing("repeat offset")));
    }

    #[test]
    fn test_parse_time_zones() {
        let zones = parse_time_zones("2882844526 -1h 2898848070 0").unwrap();
        assert_eq!(zones.len(), 2);
        assert_eq!(zones[0].time, 2882844526);
        assert_eq!(zones[0].adjustment, Interval::new(-1, TimeUnit::Hours));
        assert_eq!(zones[1].adjustment, Interval::seconds(0));

        assert_eq!(
            parse_time_zones("2882844526 -1h 2898848070"),
            Err(FieldError::Missing("time zone offset"))
        );
    }

    #[test]
    fn test_parse_encryption_key() {
        let k = parse_encryption_key("clear:secret").unwrap();
        assert_eq!(k.method, EncryptionMethod::Clear);
        assert_eq!(k.key.as_deref(), Some("secret"));

        let k = parse_encryption_key("uri:https://example.com/key").unwrap();
        assert_eq!(k.key.as_deref(), Some("https://example.com/key"));

        let k = parse_encryption_key("prompt").unwrap();
        assert_eq!(k.method, EncryptionMethod::Prompt);
        assert_eq!(k.key, None);

        assert!(parse_encryption_key("magic:1").is_err());
    }

    #[test]
    fn test_parse_attribute() {
        assert_eq!(parse_attribute("recvonly").unwrap(), Attribute::property("recvonly"));
        assert_eq!(
            parse_attribute("rtpmap:99 h263-1998/90000").unwrap(),
            Attribute::value("rtpmap", "99 h263-1998/90000")
        );
        assert_eq!(parse_attribute("tool:").unwrap(), Attribute::value("tool", ""));
        assert_eq!(
            parse_attribute("fingerprint:sha-1 4A:AD").unwrap().value.as_deref(),
            Some("sha-1 4A:AD")
        );
    }

    #[test]
    fn test_parse_contact() {
        assert_eq!(
            parse_contact("j.doe@example.com (Jane Doe)"),
            Contact::new("j.doe@example.com").with_name("Jane Doe")
        );
        assert_eq!(
            parse_contact("Jane Doe <j.doe@example.com>"),
            Contact::new("j.doe@example.com").with_name("Jane Doe")
        );
        assert_eq!(parse_contact("+1 617 555-6011"), Contact::new("+1 617 555-6011"));
        assert_eq!(parse_contact("(nobody)"), Contact::new("(nobody)"));
    }

    #[test]
    fn test_parse_media() {
        let m = parse_media("audio 49170 RTP/AVP 0").unwrap();
        assert_eq!(m.media_type, MediaType::Audio);
        assert_eq!(m.port, 49170);
        assert_eq!(m.number_of_ports, 1);
        assert_eq!(m.transport, "RTP/AVP");
        assert_eq!(m.formats, vec!["0"]);

        let m = parse_media("video 49170/2 RTP/AVP 31 32").unwrap();
        assert_eq!(m.port, 49170);
        assert_eq!(m.number_of_ports, 2);
        assert_eq!(m.formats, vec!["31", "32"]);

        let m = parse_media("application 9 UDP/DTLS/SCTP webrtc-datachannel").unwrap();
        assert_eq!(m.media_type, MediaType::Application);
        assert_eq!(m.formats, vec!["webrtc-datachannel"]);
    }

    #[test]
    fn test_parse_media_errors() {
        assert_eq!(
            parse_media("audio 49170 RTP/AVP"),
            Err(FieldError::Missing("media format"))
        );
        assert_eq!(
            parse_media("audio 70000 RTP/AVP 0"),
            Err(FieldError::invalid("port", "70000"))
        );
        assert_eq!(
            parse_media("audio 49170/x RTP/AVP 0"),
            Err(FieldError::invalid("port count", "x"))
        );
    }
}
