//! EIP-7636 client info entry.

use rlp::{DecoderError, Rlp, RlpStream};

use super::entry::{keys, Entry};
use super::errors::EntryError;

/// Accepted number of present client info values.
const CLIENT_INFO_LEN: std::ops::RangeInclusive<usize> = 2..=3;

/// The "client" key, which holds the EIP-7636 client info.
///
/// By convention the slots are name, version and an optional build/extra
/// string. Only the number of present slots is validated, not their meaning.
///
/// Slots are `String`s, so decoding rejects values that are not valid UTF-8
/// with [`DecoderError::RlpExpectedToBeData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Client(pub [Option<String>; 3]);

impl Client {
    /// Client info with a name and version.
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self([Some(name.into()), Some(version.into()), None])
    }

    /// Client info with a name, version and extra build information.
    pub fn with_extra(
        name: impl Into<String>,
        version: impl Into<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self([Some(name.into()), Some(version.into()), Some(extra.into())])
    }

    /// First slot.
    pub fn name(&self) -> Option<&str> {
        self.0[0].as_deref()
    }

    /// Second slot.
    pub fn version(&self) -> Option<&str> {
        self.0[1].as_deref()
    }

    /// Third slot.
    pub fn extra(&self) -> Option<&str> {
        self.0[2].as_deref()
    }

    /// Number of present slots.
    pub fn present(&self) -> usize {
        self.0.iter().flatten().count()
    }
}

impl Entry for Client {
    fn enr_key(&self) -> &str {
        keys::CLIENT
    }

    fn encode(&self, s: &mut RlpStream) -> Result<(), EntryError> {
        let list: Vec<&String> = self.0.iter().flatten().collect();
        if !CLIENT_INFO_LEN.contains(&list.len()) {
            return Err(EntryError::InvalidClientLength(list.len()));
        }
        s.begin_list(list.len());
        for value in list {
            s.append(value);
        }
        Ok(())
    }

    fn decode(&mut self, rlp: &Rlp<'_>) -> Result<(), EntryError> {
        if !rlp.is_list() {
            return Err(DecoderError::RlpExpectedToBeList.into());
        }
        let list: Vec<String> = rlp.as_list()?;
        if !CLIENT_INFO_LEN.contains(&list.len()) {
            return Err(EntryError::InvalidClientLength(list.len()));
        }
        self.0 = Default::default();
        for (slot, value) in self.0.iter_mut().zip(list) {
            *slot = Some(value);
        }
        Ok(())
    }
}
