use super::{
    AddressType, Attribute, BandwidthDescription, ConnectionDescription, Contact, EncryptionKey,
    MediaDescription, MediaType, NetworkType, Time, TimeZoneAdjustment,
};

/// The `o=` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin {
    /// Login of the originating user, `-` when unavailable
    pub username: String,
    /// NTP-derived identifiers routinely exceed 32 bits
    pub session_id: u64,
    /// Bumped by the originator on every modification
    pub session_version: u64,
    /// Network type of `address`
    pub network_type: NetworkType,
    /// Address type of `address`
    pub address_type: AddressType,
    /// Where the session was created
    pub address: String,
}

impl Default for Origin {
    fn default() -> Self {
        Self {
            username: "-".to_string(),
            session_id: 0,
            session_version: 0,
            network_type: NetworkType::In,
            address_type: AddressType::Ip4,
            address: "0.0.0.0".to_string(),
        }
    }
}

/// A complete session description.
///
/// Built either by the parser or directly by the caller for serialization.
/// Fields that a text omits keep their [`Default`] values: version 0, the
/// placeholder origin, an empty session name and empty sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDescription {
    /// `v=`, always 0 in practice
    pub version: u32,
    /// `o=`
    pub origin: Origin,
    /// `s=`
    pub session_name: String,
    /// Session level `i=`
    pub information: Option<String>,
    /// `u=`
    pub uri: Option<String>,
    /// `e=` lines
    pub emails: Vec<Contact>,
    /// `p=` lines
    pub phone_numbers: Vec<Contact>,
    /// Session level `c=`
    pub connection: Option<ConnectionDescription>,
    /// Session level `b=` lines
    pub bandwidth: Vec<BandwidthDescription>,
    /// `t=` lines with their repeats
    pub times: Vec<Time>,
    /// Pairs from every `z=` line, flattened
    pub time_zone_adjustments: Vec<TimeZoneAdjustment>,
    /// Deprecated in RFC 4566
    pub encryption_key: Option<EncryptionKey>,
    /// Session level `a=` lines
    pub attributes: Vec<Attribute>,
    /// Media blocks in text order
    pub media: Vec<MediaDescription>,
}

impl SessionDescription {
    /// A description with the given origin and name and nothing else.
    pub fn new(origin: Origin, session_name: &str) -> Self {
        Self {
            origin,
            session_name: session_name.to_string(),
            ..Default::default()
        }
    }

    /// First session-level attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// First media block of the given kind.
    pub fn media_of_type(&self, media_type: &MediaType) -> Option<&MediaDescription> {
        self.media.iter().find(|m| &m.media_type == media_type)
    }
}
