//! Cache lookup outcome

/// Outcome of a cache read.
///
/// Reads never fail: transport problems and unreadable payloads are logged
/// by the cache and reported as an absent value. Callers that only care
/// about presence use [`Lookup::is_absent`]; callers that need to tell a
/// genuine miss from a damaged item match on the variants.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Lookup<T> {
    /// The key was found and its value decoded
    Hit(T),
    /// The key was not found or the server could not be reached
    #[default]
    Miss,
    /// The key was found but its stored bytes could not be decoded
    Corrupt,
}

impl<T> Lookup<T> {
    /// Whether a usable value was found
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit(_))
    }

    /// Whether nothing usable was found (miss or corrupt item)
    pub fn is_absent(&self) -> bool {
        !self.is_hit()
    }

    /// Whether the item existed but could not be decoded
    pub fn is_corrupt(&self) -> bool {
        matches!(self, Self::Corrupt)
    }

    /// Convert into an `Option`, treating miss and corruption alike
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Miss | Self::Corrupt => None,
        }
    }

    /// Borrow the hit value
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Self::Hit(value) => Some(value),
            Self::Miss | Self::Corrupt => None,
        }
    }

    /// Map the hit value, keeping miss and corrupt as they are
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lookup<U> {
        match self {
            Self::Hit(value) => Lookup::Hit(f(value)),
            Self::Miss => Lookup::Miss,
            Self::Corrupt => Lookup::Corrupt,
        }
    }
}

impl<T> From<Lookup<T>> for Option<T> {
    fn from(lookup: Lookup<T>) -> Self {
        lookup.into_option()
    }
}
