//! The host's URI type vocabulary.

use std::fmt;
use std::str::FromStr;

use crate::error::{AssertError, AssertErrorKind};

/// Defines the `UriType` enum along with its wire names.
///
/// Generates `as_str`, `ALL`, `Display` and `FromStr` from a single table so
/// the variant list and the wire names cannot drift apart.
macro_rules! uri_types {
    ($($(#[$meta:meta])* $variant:ident => $wire:literal,)+) => {
        /// The type of a URI, as enumerated by the host.
        ///
        /// # Examples
        ///
        /// ```
        /// use uri_assert::UriType;
        ///
        /// let kind: UriType = "local-track".parse().unwrap();
        /// assert_eq!(kind, UriType::LocalTrack);
        /// assert_eq!(kind.as_str(), "local-track");
        /// ```
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub enum UriType {
            $(
                #[doc = concat!("The `", $wire, "` type.")]
                $(#[$meta])*
                #[cfg_attr(feature = "serde", serde(rename = $wire))]
                $variant,
            )+
        }

        impl UriType {
            /// Every URI type, in declaration order.
            pub const ALL: &'static [UriType] = &[$(UriType::$variant,)+];

            /// Returns the wire name of this type.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl FromStr for UriType {
            type Err = AssertError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(AssertError::new(
                        other,
                        AssertErrorKind::InvalidSpecification {
                            reason: format!("unknown URI type '{other}'"),
                        },
                    )),
                }
            }
        }
    };
}

uri_types! {
    Ad => "ad",
    Album => "album",
    Genre => "genre",
    Queue => "queue",
    Application => "application",
    Artist => "artist",
    ArtistToplist => "artist-toplist",
    ArtistConcerts => "artist-concerts",
    AudioFile => "audiofile",
    Collection => "collection",
    CollectionAlbum => "collection-album",
    CollectionArtist => "collection-artist",
    CollectionMissingAlbum => "collection-missing-album",
    CollectionTrackList => "collectiontracklist",
    Concert => "concert",
    ContextGroup => "context-group",
    DailyMix => "dailymix",
    Empty => "empty",
    Episode => "episode",
    ///
    /// URI particle; not an actual URI type.
    Facebook => "facebook",
    Folder => "folder",
    Followers => "followers",
    Following => "following",
    Image => "image",
    Inbox => "inbox",
    Interruption => "interruption",
    Library => "library",
    Live => "live",
    Room => "room",
    Expression => "expression",
    Local => "local",
    LocalTrack => "local-track",
    LocalAlbum => "local-album",
    LocalArtist => "local-artist",
    Merch => "merch",
    Mosaic => "mosaic",
    Playlist => "playlist",
    PlaylistV2 => "playlist-v2",
    Prerelease => "prerelease",
    Profile => "profile",
    PublishedRootlist => "published-rootlist",
    Radio => "radio",
    Rootlist => "rootlist",
    Search => "search",
    Show => "show",
    SocialSession => "socialsession",
    Special => "special",
    Starred => "starred",
    Station => "station",
    TempPlaylist => "temp-playlist",
    Toplist => "toplist",
    Track => "track",
    Trackset => "trackset",
    UserToplist => "user-toplist",
    UserTopTracks => "user-top-tracks",
    Unknown => "unknown",
    Media => "media",
    Question => "question",
    Poll => "poll",
}

impl UriType {
    /// Returns true for types that are URI particles rather than real URI types.
    #[must_use]
    pub const fn is_particle(self) -> bool {
        matches!(self, Self::Facebook)
    }

    /// Returns true for both playlist generations.
    #[must_use]
    pub const fn is_playlist(self) -> bool {
        matches!(self, Self::Playlist | Self::PlaylistV2)
    }

    /// Returns true for references to local files.
    #[must_use]
    pub const fn is_local(self) -> bool {
        matches!(
            self,
            Self::Local | Self::LocalTrack | Self::LocalAlbum | Self::LocalArtist
        )
    }
}

impl fmt::Display for UriType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for UriType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
