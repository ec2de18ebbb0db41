//! Scalar entries: transport ports and the identity scheme name.

use std::fmt;

use rlp::{Rlp, RlpStream};

use super::entry::{keys, Entry};
use super::errors::EntryError;

/// Defines a `u16` port entry bound to a fixed key.
macro_rules! port_entry {
    ($(#[$doc:meta])* $name:ident => $key:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u16);

        impl $name {
            /// The port number.
            pub fn port(self) -> u16 {
                self.0
            }
        }

        impl From<u16> for $name {
            fn from(port: u16) -> Self {
                Self(port)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl Entry for $name {
            fn enr_key(&self) -> &str {
                $key
            }

            fn encode(&self, s: &mut RlpStream) -> Result<(), EntryError> {
                s.append(&self.0);
                Ok(())
            }

            fn decode(&mut self, rlp: &Rlp<'_>) -> Result<(), EntryError> {
                self.0 = rlp.as_val()?;
                Ok(())
            }
        }
    };
}

port_entry!(
    /// The "tcp" key, which holds the TCP port of the node.
    Tcp => keys::TCP
);
port_entry!(
    /// The "tcp6" key, which holds the IPv6-specific TCP port of the node.
    Tcp6 => keys::TCP6
);
port_entry!(
    /// The "udp" key, which holds the UDP port of the node.
    Udp => keys::UDP
);
port_entry!(
    /// The "udp6" key, which holds the IPv6-specific UDP port of the node.
    Udp6 => keys::UDP6
);
port_entry!(
    /// The "quic" key, which holds the QUIC port of the node.
    Quic => keys::QUIC
);
port_entry!(
    /// The "quic6" key, which holds the IPv6-specific QUIC port of the node.
    Quic6 => keys::QUIC6
);

/// Name of the default identity scheme.
pub const ID_V4: &str = "v4";

/// The "id" key, which holds the name of the identity scheme.
///
/// Scheme-specific validation belongs to the identity scheme, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Id(pub String);

impl Id {
    /// The default identity scheme.
    pub fn v4() -> Self {
        Self(ID_V4.to_string())
    }

    /// The scheme name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Id {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Entry for Id {
    fn enr_key(&self) -> &str {
        keys::ID
    }

    fn encode(&self, s: &mut RlpStream) -> Result<(), EntryError> {
        s.append(&self.0);
        Ok(())
    }

    fn decode(&mut self, rlp: &Rlp<'_>) -> Result<(), EntryError> {
        self.0 = rlp.as_val()?;
        Ok(())
    }
}
