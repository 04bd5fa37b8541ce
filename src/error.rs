use core::fmt;

/// Broad failure class of a [`CborError`].
///
/// Every error is terminal for the decode (or encode) call that produced it; the class only
/// tells callers which family of problem they are looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Not enough bytes left for the requested read.
    Truncation,
    /// Reserved or forbidden header bits.
    MalformedHeader,
    /// The item present is not of the expected type.
    TypeMismatch,
    /// A value is structurally present but outside the accepted range.
    RangeViolation,
    /// A fixed-arity decoder saw too few or too many elements, or an unknown field.
    Arity,
    /// A lazy reader was pulled after its last item.
    Exhaustion,
    /// Text content is not valid UTF-8.
    Utf8,
}

/// A structured error code identifying the reason an item was rejected.
///
/// This enum is string-free so errors stay `Copy` and work without `std`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorCode {
    /// Unexpected end of input while decoding.
    UnexpectedEof,
    /// A declared length does not fit in `usize`.
    LengthOverflow,
    /// Input contains trailing bytes after the decoded item.
    TrailingBytes,

    /// Reserved additional-info value (28..=30) was used.
    ReservedAdditionalInfo,
    /// Indefinite-length marker on a major type that forbids it, or where a definite head is required.
    IndefiniteLengthForbidden,
    /// A float16/32/64 head reached the generic head decoder; use the float decoders instead.
    FloatHead,
    /// A break byte where an item was expected.
    UnexpectedBreak,

    /// Expected an integer (major 0/1 or bignum tag 2/3).
    ExpectedInteger,
    /// Expected a byte string.
    ExpectedBytes,
    /// Expected a text string.
    ExpectedText,
    /// Expected a list.
    ExpectedList,
    /// Expected a map.
    ExpectedMap,
    /// Expected a tag.
    ExpectedTag,
    /// Expected a boolean.
    ExpectedBool,
    /// Expected null.
    ExpectedNull,
    /// Expected a float of any width.
    ExpectedFloat,
    /// Expected a float16.
    ExpectedFloat16,
    /// Expected a float32.
    ExpectedFloat32,
    /// Expected a float64.
    ExpectedFloat64,
    /// A tag was present but its number is not the one this decoder handles.
    UnexpectedTag,

    /// An indefinite byte/text string chunk declares more than 64 bytes.
    ChunkTooLarge,
    /// An indefinite-length item is missing its `0xff` break byte.
    MissingBreak,
    /// Constructor tag outside `{102} ∪ [121,127] ∪ [1280,1400]`.
    ConstrTagOutOfRange,
    /// Tag-102 constructor payload is not `[2-element list head][index][fields]`.
    MalformedConstrEscape,
    /// Integer does not fit in the requested machine type.
    IntegerOverflow,
    /// Constructor index that the target type has no variant for.
    UnexpectedVariant,

    /// Fewer items than the mandatory decoders.
    TooFewItems,
    /// More items than the decoders available.
    TooManyItems,
    /// Object key without a registered field decoder.
    UnhandledField,

    /// A lazy list reader was pulled after the last item.
    EndOfList,

    /// Text is not valid UTF-8.
    Utf8Invalid,
}

impl ErrorCode {
    /// Classify this code into the broad error taxonomy.
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        match self {
            Self::UnexpectedEof | Self::LengthOverflow => ErrorKind::Truncation,
            Self::ReservedAdditionalInfo
            | Self::IndefiniteLengthForbidden
            | Self::FloatHead
            | Self::UnexpectedBreak => ErrorKind::MalformedHeader,
            Self::ExpectedInteger
            | Self::ExpectedBytes
            | Self::ExpectedText
            | Self::ExpectedList
            | Self::ExpectedMap
            | Self::ExpectedTag
            | Self::ExpectedBool
            | Self::ExpectedNull
            | Self::ExpectedFloat
            | Self::ExpectedFloat16
            | Self::ExpectedFloat32
            | Self::ExpectedFloat64
            | Self::UnexpectedTag => ErrorKind::TypeMismatch,
            Self::ChunkTooLarge
            | Self::MissingBreak
            | Self::ConstrTagOutOfRange
            | Self::MalformedConstrEscape
            | Self::IntegerOverflow
            | Self::UnexpectedVariant => ErrorKind::RangeViolation,
            Self::TrailingBytes | Self::TooFewItems | Self::TooManyItems | Self::UnhandledField => {
                ErrorKind::Arity
            }
            Self::EndOfList => ErrorKind::Exhaustion,
            Self::Utf8Invalid => ErrorKind::Utf8,
        }
    }

    const fn message(self) -> &'static str {
        match self {
            Self::UnexpectedEof => "unexpected end of input",
            Self::LengthOverflow => "length overflow",
            Self::TrailingBytes => "trailing bytes after decoded item",

            Self::ReservedAdditionalInfo => "reserved additional info value",
            Self::IndefiniteLengthForbidden => "indefinite length forbidden here",
            Self::FloatHead => "float head; decode with a float decoder directly",
            Self::UnexpectedBreak => "unexpected break byte",

            Self::ExpectedInteger => "expected integer",
            Self::ExpectedBytes => "expected byte string",
            Self::ExpectedText => "expected text string",
            Self::ExpectedList => "expected list",
            Self::ExpectedMap => "expected map",
            Self::ExpectedTag => "expected tag",
            Self::ExpectedBool => "expected bool",
            Self::ExpectedNull => "expected null",
            Self::ExpectedFloat => "expected float",
            Self::ExpectedFloat16 => "expected float16",
            Self::ExpectedFloat32 => "expected float32",
            Self::ExpectedFloat64 => "expected float64",
            Self::UnexpectedTag => "unexpected tag number",

            Self::ChunkTooLarge => "string chunk longer than 64 bytes",
            Self::MissingBreak => "indefinite item missing break byte",
            Self::ConstrTagOutOfRange => "constructor tag out of range",
            Self::MalformedConstrEscape => "malformed tag-102 constructor payload",
            Self::IntegerOverflow => "integer out of range for target type",
            Self::UnexpectedVariant => "constructor index has no matching variant",

            Self::TooFewItems => "too few items",
            Self::TooManyItems => "too many items",
            Self::UnhandledField => "unhandled object field",

            Self::EndOfList => "end-of-list",

            Self::Utf8Invalid => "text must be valid UTF-8",
        }
    }
}

/// A codec error with a stable code and the byte offset where it was detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CborError {
    /// The error code.
    pub code: ErrorCode,
    /// Byte offset into the input where the error was detected.
    pub offset: usize,
}

impl CborError {
    /// Construct an error at `offset`.
    #[inline]
    #[must_use]
    pub const fn new(code: ErrorCode, offset: usize) -> Self {
        Self { code, offset }
    }

    /// The broad class of this error.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> ErrorKind {
        self.code.kind()
    }
}

impl fmt::Display for CborError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cbor error at {}: {}", self.offset, self.code.message())
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CborError {}
