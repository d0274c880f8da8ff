use crate::diagnostics::Scope;

/// The single-character line types of RFC 4566.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `v=`
    Version,
    /// `o=`
    Origin,
    /// `s=`
    SessionName,
    /// `i=`, session information or media title
    Information,
    /// `u=`
    Uri,
    /// `e=`
    Email,
    /// `p=`
    Phone,
    /// `c=`
    Connection,
    /// `b=`
    Bandwidth,
    /// `t=`
    Time,
    /// `r=`, applies to the preceding `t=`
    Repeat,
    /// `z=`
    TimeZone,
    /// `k=`
    EncryptionKey,
    /// `a=`
    Attribute,
    /// `m=`, opens a media block
    Media,
}

impl LineKind {
    /// Maps the text before `=` to a line type; anything else is unrecognized.
    pub fn from_key(key: &str) -> Option<Self> {
        let kind = match key {
            "v" => LineKind::Version,
            "o" => LineKind::Origin,
            "s" => LineKind::SessionName,
            "i" => LineKind::Information,
            "u" => LineKind::Uri,
            "e" => LineKind::Email,
            "p" => LineKind::Phone,
            "c" => LineKind::Connection,
            "b" => LineKind::Bandwidth,
            "t" => LineKind::Time,
            "r" => LineKind::Repeat,
            "z" => LineKind::TimeZone,
            "k" => LineKind::EncryptionKey,
            "a" => LineKind::Attribute,
            "m" => LineKind::Media,
            _ => return None,
        };
        Some(kind)
    }

    /// The key character written before `=`.
    pub fn key(self) -> char {
        match self {
            LineKind::Version => 'v',
            LineKind::Origin => 'o',
            LineKind::SessionName => 's',
            LineKind::Information => 'i',
            LineKind::Uri => 'u',
            LineKind::Email => 'e',
            LineKind::Phone => 'p',
            LineKind::Connection => 'c',
            LineKind::Bandwidth => 'b',
            LineKind::Time => 't',
            LineKind::Repeat => 'r',
            LineKind::TimeZone => 'z',
            LineKind::EncryptionKey => 'k',
            LineKind::Attribute => 'a',
            LineKind::Media => 'm',
        }
    }

    /// Whether the line may appear inside a media block.
    pub fn is_media_level(self) -> bool {
        matches!(
            self,
            LineKind::Information
                | LineKind::Connection
                | LineKind::Bandwidth
                | LineKind::EncryptionKey
                | LineKind::Attribute
        )
    }
}

/// Where the scanner currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseState {
    /// Before the first `m=` line
    #[default]
    SessionLevel,
    /// Inside the media block with this index
    MediaLevel(usize),
    /// After an `m=` line that failed to decode in lenient mode. Media
    /// level lines are dropped until the next `m=`; any other key is
    /// reported at session scope.
    DiscardedMedia,
}

/// What the dispatcher should do with one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Start a new media block
    OpenMedia,
    /// Apply to the session level. Never carries [`LineKind::Media`].
    Session(LineKind),
    /// Apply to the media block at this index. Only carries media level kinds.
    Media(usize, LineKind),
    /// Media level line of a block that was not decoded
    Discard,
    /// Not valid here; report it with this scope
    Unrecognized(Scope),
}

impl ParseState {
    /// Decides where a line of `kind` goes from this state. `None` is a key
    /// that [`LineKind::from_key`] did not recognize.
    pub fn route(self, kind: Option<LineKind>) -> Route {
        match (self, kind) {
            (_, Some(LineKind::Media)) => Route::OpenMedia,
            (ParseState::SessionLevel, Some(kind)) => Route::Session(kind),
            (ParseState::MediaLevel(index), Some(kind)) if kind.is_media_level() => {
                Route::Media(index, kind)
            }
            (ParseState::DiscardedMedia, Some(kind)) if kind.is_media_level() => Route::Discard,
            (state, _) => Route::Unrecognized(state.scope()),
        }
    }

    /// The scope warnings raised in this state are attributed to.
    pub fn scope(self) -> Scope {
        match self {
            ParseState::MediaLevel(index) => Scope::Media(index),
            ParseState::SessionLevel | ParseState::DiscardedMedia => Scope::Session,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_covers_every_kind() {
        for key in "vosiuepcbtrzkam".chars() {
            let kind = LineKind::from_key(&key.to_string()).unwrap();
            assert_eq!(kind.key(), key);
        }
        assert_eq!(LineKind::from_key("x"), None);
        assert_eq!(LineKind::from_key("aa"), None);
        assert_eq!(LineKind::from_key(""), None);
    }

    #[test]
    fn test_session_level_routes_everything_known() {
        let state = ParseState::SessionLevel;
        assert_eq!(state.route(Some(LineKind::Time)), Route::Session(LineKind::Time));
        assert_eq!(
            state.route(Some(LineKind::Attribute)),
            Route::Session(LineKind::Attribute)
        );
        assert_eq!(state.route(Some(LineKind::Media)), Route::OpenMedia);
        assert_eq!(state.route(None), Route::Unrecognized(Scope::Session));
    }

    #[test]
    fn test_media_level_routes() {
        let state = ParseState::MediaLevel(2);
        for kind in [
            LineKind::Information,
            LineKind::Connection,
            LineKind::Bandwidth,
            LineKind::EncryptionKey,
            LineKind::Attribute,
        ] {
            assert_eq!(state.route(Some(kind)), Route::Media(2, kind));
        }
        for kind in [LineKind::Origin, LineKind::SessionName, LineKind::Time, LineKind::Repeat] {
            assert_eq!(state.route(Some(kind)), Route::Unrecognized(Scope::Media(2)));
        }
        assert_eq!(state.route(Some(LineKind::Media)), Route::OpenMedia);
    }

    #[test]
    fn test_discarded_media_drops_until_next_block() {
        let state = ParseState::DiscardedMedia;
        for kind in [
            LineKind::Information,
            LineKind::Connection,
            LineKind::Bandwidth,
            LineKind::EncryptionKey,
            LineKind::Attribute,
        ] {
            assert_eq!(state.route(Some(kind)), Route::Discard);
        }
        // keys the block could never have owned are still reported
        assert_eq!(state.route(None), Route::Unrecognized(Scope::Session));
        assert_eq!(state.route(Some(LineKind::Time)), Route::Unrecognized(Scope::Session));
        assert_eq!(state.route(Some(LineKind::Origin)), Route::Unrecognized(Scope::Session));
        assert_eq!(state.route(Some(LineKind::Media)), Route::OpenMedia);
    }

    #[test]
    fn test_routes_never_carry_misplaced_kinds() {
        let states = [
            ParseState::SessionLevel,
            ParseState::MediaLevel(0),
            ParseState::DiscardedMedia,
        ];
        for state in states {
            for key in "vosiuepcbtrzkam".chars() {
                match state.route(LineKind::from_key(&key.to_string())) {
                    Route::Session(kind) => assert_ne!(kind, LineKind::Media),
                    Route::Media(_, kind) => assert!(kind.is_media_level()),
                    _ => {}
                }
            }
        }
    }
}
