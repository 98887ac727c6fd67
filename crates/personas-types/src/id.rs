/// Declares a UUID v7 newtype identifier with `Display`/`FromStr` and serde
/// support (serialized as the bare UUID string).
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            /// Generate a fresh identifier (UUID v7, time-sortable).
            pub fn new() -> Self {
                Self(uuid::Uuid::now_v7())
            }

            /// Parse only the canonical lowercase hyphenated spelling ids are
            /// stored under. Braced, simple, URN and uppercase forms give `None`.
            pub fn parse_canonical(s: &str) -> Option<Self> {
                let id: Self = s.parse().ok()?;
                (id.to_string() == s).then_some(id)
            }

            /// Wrap an existing UUID.
            pub fn from_uuid(uuid: uuid::Uuid) -> Self {
                Self(uuid)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(uuid::Uuid::parse_str(s)?))
            }
        }
    };
}
