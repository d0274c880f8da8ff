use std::convert::Infallible;
use std::str::FromStr;

/// Network type of an origin or connection line. Only `IN` is defined by RFC 4566.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NetworkType {
    /// Internet
    In,
    /// Any other token, kept verbatim
    Other(String),
}

impl NetworkType {
    /// The wire token.
    pub fn as_str(&self) -> &str {
        match self {
            NetworkType::In => "IN",
            NetworkType::Other(s) => s,
        }
    }
}

impl From<&str> for NetworkType {
    fn from(s: &str) -> Self {
        match s {
            "IN" => NetworkType::In,
            other => NetworkType::Other(other.to_string()),
        }
    }
}

impl FromStr for NetworkType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// Address type of an origin or connection line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// `IP4`
    Ip4,
    /// `IP6`
    Ip6,
    /// Any other token, kept verbatim
    Other(String),
}

impl AddressType {
    /// The wire token.
    pub fn as_str(&self) -> &str {
        match self {
            AddressType::Ip4 => "IP4",
            AddressType::Ip6 => "IP6",
            AddressType::Other(s) => s,
        }
    }
}

impl From<&str> for AddressType {
    fn from(s: &str) -> Self {
        match s {
            "IP4" => AddressType::Ip4,
            "IP6" => AddressType::Ip6,
            other => AddressType::Other(other.to_string()),
        }
    }
}

impl FromStr for AddressType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// A `c=` line.
///
/// For `IN IP4` the address may carry `/ttl[/layers]`, for `IN IP6` only
/// `/layers`. Any other network/address type keeps the address verbatim
/// and leaves both optional fields empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionDescription {
    /// Usually `IN`
    pub network_type: NetworkType,
    /// `IP4`, `IP6` or something else
    pub address_type: AddressType,
    /// Address or host name without the `/` suffixes
    pub address: String,
    /// Multicast time-to-live, IP4 only
    pub time_to_live: Option<u8>,
    /// Number of contiguous multicast addresses, absent means 1
    pub layer_count: Option<u32>,
}

impl ConnectionDescription {
    /// Plain unicast `IN IP4` connection.
    pub fn ip4(address: &str) -> Self {
        Self {
            network_type: NetworkType::In,
            address_type: AddressType::Ip4,
            address: address.to_string(),
            time_to_live: None,
            layer_count: None,
        }
    }

    /// Plain unicast `IN IP6` connection.
    pub fn ip6(address: &str) -> Self {
        Self {
            address_type: AddressType::Ip6,
            ..Self::ip4(address)
        }
    }

    /// Sets the multicast TTL.
    pub fn with_time_to_live(mut self, ttl: u8) -> Self {
        self.time_to_live = Some(ttl);
        self
    }

    /// Sets the number of layered addresses.
    pub fn with_layer_count(mut self, layers: u32) -> Self {
        self.layer_count = Some(layers);
        self
    }

    /// Layer count with the RFC default of 1 applied.
    pub fn effective_layer_count(&self) -> u32 {
        self.layer_count.unwrap_or(1)
    }

    /// Whether the line carried a multicast suffix.
    pub fn is_multicast(&self) -> bool {
        self.time_to_live.is_some() || self.effective_layer_count() > 1
    }
}
