macro_rules! enum_sim {
    (
        $(#[$enum_attr: meta])*
        pub struct $tname:ident ($size_t:ty) {
            $(
                $(#[$arm_attr: meta])*
                $enum_arm:ident = $num_exp:expr
            ),+ $(,)?
        }
    ) => {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
        $(#[$enum_attr])*
        pub struct $tname($size_t);

        impl $tname {
            $(
                $(#[$arm_attr])*
                pub const $enum_arm: Self = Self($num_exp);
            )+

            /// Get the raw value.
            pub fn raw(&self) -> $size_t {
                self.0
            }
        }

        impl ::core::convert::From<$size_t> for $tname {
            #[inline]
            fn from(value: $size_t) -> $tname {
                $tname(value)
            }
        }

        impl ::core::convert::From<$tname> for $size_t {
            #[inline]
            fn from(value: $tname) -> $size_t {
                value.0
            }
        }
    };
}

// Owned, dynamically sized address storage. Each generated type only tags
// the bytes with the kind of address they hold.
macro_rules! byte_addr {
    (
        $(#[$attr: meta])*
        pub struct $tname:ident;
    ) => {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Default)]
        $(#[$attr])*
        pub struct $tname(Vec<u8>);

        impl $tname {
            /// Wrap an owned byte vector.
            #[inline]
            pub fn new(bytes: Vec<u8>) -> Self {
                Self(bytes)
            }

            /// Copy the address out of a byte slice.
            #[inline]
            pub fn from_bytes(bytes: &[u8]) -> Self {
                Self(bytes.to_vec())
            }

            /// Return the address as a sequence of octets.
            #[inline]
            pub fn as_bytes(&self) -> &[u8] {
                &self.0
            }

            /// Release the underlying storage.
            #[inline]
            pub fn into_vec(self) -> Vec<u8> {
                self.0
            }
        }

        impl ::core::ops::Deref for $tname {
            type Target = [u8];

            #[inline]
            fn deref(&self) -> &[u8] {
                &self.0
            }
        }

        impl ::core::convert::AsRef<[u8]> for $tname {
            #[inline]
            fn as_ref(&self) -> &[u8] {
                &self.0
            }
        }

        impl ::core::convert::From<Vec<u8>> for $tname {
            #[inline]
            fn from(value: Vec<u8>) -> Self {
                Self(value)
            }
        }

        impl ::core::convert::From<&[u8]> for $tname {
            #[inline]
            fn from(value: &[u8]) -> Self {
                Self::from_bytes(value)
            }
        }

        impl<const N: usize> ::core::convert::From<[u8; N]> for $tname {
            #[inline]
            fn from(value: [u8; N]) -> Self {
                Self(value.to_vec())
            }
        }

        impl ::core::convert::From<$tname> for Vec<u8> {
            #[inline]
            fn from(value: $tname) -> Vec<u8> {
                value.0
            }
        }
    };
}

// Trace-level events for rejected packets. Expands to nothing unless the
// `tracing` feature is on.
macro_rules! arp_trace {
    ($($arg:tt)*) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    }};
}
