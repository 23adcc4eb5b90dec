// src/icons/registry.rs
//! Static name -> icon mapping and the identifier type derived from it.
//!
//! [`icon_registry!`](crate::icon_registry) takes one ordered list of
//! `Name => GLYPH` pairs and emits both the identifier enum and its glyph
//! table from it. The enum is the key set, so every typed lookup has an
//! entry and the two sides cannot drift apart.

use std::{fmt, hash::Hash, marker::PhantomData};

use serde::{Deserialize, Deserializer, de::Error as _};

use super::Icon;
use crate::error::UnknownIconId;

/// An identifier type produced by [`icon_registry!`](crate::icon_registry).
pub trait IconKey: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    /// Every identifier, in declaration order.
    const ALL: &'static [Self];

    /// The identifier's string form (the variant name).
    fn name(self) -> &'static str;

    /// The glyph this identifier maps to.
    fn icon(self) -> &'static Icon;
}

/// Read-only view over the icons declared for `K`.
pub struct IconRegistry<K: IconKey> {
    _keys: PhantomData<fn() -> K>,
}

impl<K: IconKey> IconRegistry<K> {
    pub const fn new() -> Self {
        Self { _keys: PhantomData }
    }

    /// Glyph for a typed identifier. Total over `K`.
    pub fn get(&self, id: K) -> &'static Icon {
        id.icon()
    }

    /// All identifiers in declaration order.
    pub fn keys(&self) -> &'static [K] {
        K::ALL
    }

    /// Validate a raw name coming from an untyped boundary.
    pub fn lookup(&self, name: &str) -> Result<K, UnknownIconId> {
        lookup(name)
    }

    /// Validate a raw name and return its glyph.
    pub fn resolve(&self, name: &str) -> Result<&'static Icon, UnknownIconId> {
        self.lookup(name).map(K::icon)
    }

    /// `(id, icon)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (K, &'static Icon)> + 'static {
        K::ALL.iter().map(|&id| (id, id.icon()))
    }

    pub fn len(&self) -> usize {
        K::ALL.len()
    }

    pub fn is_empty(&self) -> bool {
        K::ALL.is_empty()
    }
}

impl<K: IconKey> Default for IconRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: IconKey> fmt::Debug for IconRegistry<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(id, icon)| (id.name(), icon.glyph())))
            .finish()
    }
}

/// Exact, case-sensitive match of `name` against the declared identifiers.
pub fn lookup<K: IconKey>(name: &str) -> Result<K, UnknownIconId> {
    K::ALL
        .iter()
        .copied()
        .find(|id| id.name() == name)
        .ok_or_else(|| UnknownIconId::new(name))
}

#[doc(hidden)]
pub fn deserialize_key<'de, K, D>(deserializer: D) -> Result<K, D::Error>
where
    K: IconKey,
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    lookup(&name).map_err(D::Error::custom)
}

/// Declare an icon identifier enum together with its glyph table.
///
/// ```
/// use iconmap::icons::{nerd, IconRegistry};
///
/// iconmap::icon_registry! {
///     pub enum Transport {
///         Play => nerd::PLAY,
///         Pause => nerd::PAUSE,
///     }
/// }
///
/// let registry = IconRegistry::<Transport>::new();
/// assert_eq!(registry.keys(), &[Transport::Play, Transport::Pause]);
/// assert!(registry.lookup("Stop").is_err());
/// ```
#[macro_export]
macro_rules! icon_registry {
    (
        $(#[$enum_meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$meta:meta])* $id:ident => $icon:expr ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        $vis enum $name {
            $( $(#[$meta])* $id, )+
        }

        impl $name {
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$id => stringify!($id), )+
                }
            }
        }

        impl $crate::icons::IconKey for $name {
            const ALL: &'static [Self] = &[ $( Self::$id, )+ ];

            fn name(self) -> &'static str {
                self.as_str()
            }

            fn icon(self) -> &'static $crate::icons::Icon {
                match self {
                    $( Self::$id => &$icon, )+
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::UnknownIconId;

            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::icons::registry::lookup(s)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::icons::registry::deserialize_key(deserializer)
            }
        }
    };
}
