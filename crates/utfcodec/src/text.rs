//! Borrowed buffer views with a byte cursor.
//!
//! A view never owns its bytes. `offset` is public and may be moved freely;
//! an offset past the end is not an error until an operation reads through
//! it, at which point the operation fails instead of panicking.

use core::fmt;

use bstr::ByteSlice;

/// A read-only view over encoded text.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Text<'a> {
    buffer: &'a [u8],
    /// Byte offset of the cursor.
    pub offset: usize,
}

impl<'a> Text<'a> {
    /// A view with its cursor at the start of `buffer`.
    #[must_use]
    pub const fn new(buffer: &'a [u8]) -> Self {
        Self::at(buffer, 0)
    }

    /// A view with its cursor at `offset`.
    #[must_use]
    pub const fn at(buffer: &'a [u8], offset: usize) -> Self {
        Self { buffer, offset }
    }

    /// Total extent of the view in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.buffer.len()
    }

    /// `true` if the underlying buffer is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The whole buffer, ignoring the cursor.
    #[must_use]
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.buffer
    }

    /// Bytes from the cursor to the end, or `None` if the cursor is past the
    /// end.
    #[must_use]
    pub fn remaining(&self) -> Option<&'a [u8]> {
        self.buffer.get(self.offset..)
    }

    /// `true` once the cursor has reached or passed the end.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.offset >= self.buffer.len()
    }

    /// A copy of this view with the cursor moved `bytes` forward.
    #[must_use]
    pub(crate) const fn skipped(mut self, bytes: usize) -> Self {
        self.offset = self.offset.saturating_add(bytes);
        self
    }
}

impl<'a> From<&'a [u8]> for Text<'a> {
    fn from(buffer: &'a [u8]) -> Self {
        Self::new(buffer)
    }
}

impl<'a> From<&'a str> for Text<'a> {
    fn from(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl fmt::Debug for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("buffer", &self.buffer.as_bstr())
            .field("offset", &self.offset)
            .finish()
    }
}

/// A writable view: encoders write at the cursor and advance it.
pub struct TextMut<'a> {
    buffer: &'a mut [u8],
    /// Byte offset of the cursor.
    pub offset: usize,
}

impl<'a> TextMut<'a> {
    /// A view with its cursor at the start of `buffer`.
    #[must_use]
    pub fn new(buffer: &'a mut [u8]) -> Self {
        Self::at(buffer, 0)
    }

    /// A view with its cursor at `offset`.
    #[must_use]
    pub fn at(buffer: &'a mut [u8], offset: usize) -> Self {
        Self { buffer, offset }
    }

    /// Total extent of the view in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// `true` if the underlying buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Room from the cursor to the end, or `None` if the cursor is past the
    /// end.
    pub fn remaining_mut(&mut self) -> Option<&mut [u8]> {
        self.buffer.get_mut(self.offset..)
    }

    /// Everything before the cursor.
    #[must_use]
    pub fn written(&self) -> &[u8] {
        &self.buffer[..self.offset.min(self.buffer.len())]
    }

    /// Consumes the view, returning everything before the cursor.
    #[must_use]
    pub fn into_written(self) -> &'a [u8] {
        let end = self.offset.min(self.buffer.len());
        &self.buffer[..end]
    }
}

impl<'a> From<&'a mut [u8]> for TextMut<'a> {
    fn from(buffer: &'a mut [u8]) -> Self {
        Self::new(buffer)
    }
}

impl fmt::Debug for TextMut<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextMut")
            .field("written", &self.written().as_bstr())
            .field("offset", &self.offset)
            .field("len", &self.buffer.len())
            .finish()
    }
}
