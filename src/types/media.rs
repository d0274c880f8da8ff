use std::convert::Infallible;
use std::str::FromStr;

use super::{Attribute, BandwidthDescription, ConnectionDescription, EncryptionKey};

/// Media kind of an `m=` line. The set is open; unknown kinds are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `audio`
    Audio,
    /// `video`
    Video,
    /// `text`
    Text,
    /// `application`
    Application,
    /// `message`
    Message,
    /// `data`
    Data,
    /// `control`
    Control,
    /// Any other token, kept verbatim
    Other(String),
}

impl MediaType {
    /// The wire token.
    pub fn as_str(&self) -> &str {
        match self {
            MediaType::Audio => "audio",
            MediaType::Video => "video",
            MediaType::Text => "text",
            MediaType::Application => "application",
            MediaType::Message => "message",
            MediaType::Data => "data",
            MediaType::Control => "control",
            MediaType::Other(s) => s,
        }
    }
}

impl From<&str> for MediaType {
    fn from(s: &str) -> Self {
        match s {
            "audio" => MediaType::Audio,
            "video" => MediaType::Video,
            "text" => MediaType::Text,
            "application" => MediaType::Application,
            "message" => MediaType::Message,
            "data" => MediaType::Data,
            "control" => MediaType::Control,
            other => MediaType::Other(other.to_string()),
        }
    }
}

impl FromStr for MediaType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

/// A media block: the `m=` line and the `i c b k a` lines following it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaDescription {
    /// First token of the `m=` line
    pub media_type: MediaType,
    /// Transport port, 0 for a rejected stream
    pub port: u16,
    /// Size of a `port/count` range, 1 for a single port
    pub number_of_ports: u16,
    /// Transport protocol such as `RTP/AVP`
    pub transport: String,
    /// Format tokens kept as text; RTP payload types are not interpreted
    pub formats: Vec<String>,
    /// `i=` line of this block
    pub title: Option<String>,
    /// `c=` lines of this block; empty means the session connection applies
    pub connections: Vec<ConnectionDescription>,
    /// `b=` lines of this block
    pub bandwidth: Vec<BandwidthDescription>,
    /// `k=` line of this block
    pub encryption_key: Option<EncryptionKey>,
    /// `a=` lines of this block, in order
    pub attributes: Vec<Attribute>,
}

impl MediaDescription {
    /// A block with one port and no optional lines.
    pub fn new(media_type: MediaType, port: u16, transport: &str, formats: &[&str]) -> Self {
        Self {
            media_type,
            port,
            number_of_ports: 1,
            transport: transport.to_string(),
            formats: formats.iter().map(|f| f.to_string()).collect(),
            title: None,
            connections: Vec::new(),
            bandwidth: Vec::new(),
            encryption_key: None,
            attributes: Vec::new(),
        }
    }

    /// Sets the `port/count` range size.
    pub fn with_port_count(mut self, count: u16) -> Self {
        self.number_of_ports = count;
        self
    }

    /// Appends an attribute.
    pub fn with_attribute(mut self, attribute: Attribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// First attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// All attributes with the given name, e.g. every `rtpmap`.
    pub fn attributes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Attribute> + 'a {
        self.attributes.iter().filter(move |a| a.name == name)
    }
}
