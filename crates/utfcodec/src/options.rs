use crate::encoding::OtherType;

/// Configuration for handler selection.
///
/// # Examples
///
/// ```rust
/// use utfcodec::{Encoding, HandlerOptions, OtherType, UtfType};
///
/// let options = HandlerOptions {
///     fallback: OtherType::Cp1252,
/// };
/// assert_eq!(Encoding::handler_with(UtfType::Other, &options), Encoding::Cp1252);
/// assert_eq!(Encoding::handler_with(UtfType::Utf16Le, &options), Encoding::Utf16Le);
/// ```
///
/// # Default
///
/// Unrecognised input falls back to Java-style UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct HandlerOptions {
    /// Handler used when the encoding tag is [`UtfType::Other`](crate::UtfType::Other),
    /// including when [`Encoding::detect`](crate::Encoding::detect) cannot
    /// recognise a buffer.
    ///
    /// # Default
    ///
    /// [`OtherType::JUtf8`]
    pub fallback: OtherType,
}
