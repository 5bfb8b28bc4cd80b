//! Record descriptor stored in an [`EntryRing`](super::EntryRing) slot.
//!
//! An `Entry` is a borrowed view: the bytes belong to the caller and the
//! lifetime `'a` ties every descriptor to that owner. Copying an entry copies
//! the reference, never the bytes.

use std::fmt;

use crate::error::EntryError;

/// Non-owning descriptor for one record: a content reference and its length.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct Entry<'a> {
    content: &'a [u8],
}

impl<'a> Entry<'a> {
    /// Zero-length descriptor used for slots that hold no record.
    pub const EMPTY: Entry<'static> = Entry { content: &[] };

    /// Describes all of `content`.
    #[inline]
    pub const fn new(content: &'a [u8]) -> Self {
        Self { content }
    }

    /// Describes the first `len` bytes of `content`.
    ///
    /// Callers that track record length separately from the backing buffer
    /// (for example a partially filled allocation) use this form.
    ///
    /// # Errors
    /// Returns [`EntryError::LengthExceedsContent`] if `len > content.len()`.
    pub fn with_len(content: &'a [u8], len: usize) -> Result<Self, EntryError> {
        match content.get(..len) {
            Some(content) => Ok(Self { content }),
            None => Err(EntryError::LengthExceedsContent {
                len,
                available: content.len(),
            }),
        }
    }

    /// The described bytes.
    #[inline]
    pub const fn content(&self) -> &'a [u8] {
        self.content
    }

    /// Number of bytes in the record.
    #[inline]
    pub const fn len(&self) -> usize {
        self.content.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl<'a> From<&'a [u8]> for Entry<'a> {
    fn from(content: &'a [u8]) -> Self {
        Self::new(content)
    }
}

impl<'a, const M: usize> From<&'a [u8; M]> for Entry<'a> {
    fn from(content: &'a [u8; M]) -> Self {
        Self::new(content)
    }
}

impl<'a> From<&'a str> for Entry<'a> {
    fn from(content: &'a str) -> Self {
        Self::new(content.as_bytes())
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("content", &String::from_utf8_lossy(self.content))
            .field("len", &self.len())
            .finish()
    }
}
