use crate::frame::FrameKind;

/// All errors that can occur while building or validating solar WCS metadata.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// An argument was given as the wrong kind of object (names the argument).
    InvalidInputKind(&'static str),
    /// The coordinate frame has no observation time.
    MissingObservationTime,
    /// The coordinate frame has no FITS-WCS header representation.
    UnsupportedFrameKind(FrameKind),
    /// A quantity's unit is dimensionally incompatible with the expected unit.
    IncompatibleUnits {
        expected: &'static str,
        found: &'static str,
    },
    /// An observation time string could not be parsed.
    InvalidTime,
    /// The data array is not two-dimensional.
    InvalidDimensions(usize),
    /// A projection code is not three ASCII letters.
    InvalidProjectionCode,
    /// Both a rotation angle and a rotation matrix were supplied.
    ConflictingRotation,
    /// The observer is not outside the solar radius.
    InvalidObserverDistance,
    /// A keyword required by the image container was not found in the header.
    MissingKeyword(&'static str),
    /// A header keyword holds a value of the wrong type.
    InvalidKeywordValue(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidInputKind(arg) => write!(f, "invalid input kind for argument: {arg}"),
            Error::MissingObservationTime => {
                write!(f, "the coordinate needs an observation time")
            }
            Error::UnsupportedFrameKind(kind) => {
                write!(f, "unsupported coordinate frame: {kind}")
            }
            Error::IncompatibleUnits { expected, found } => {
                write!(f, "incompatible units: expected {expected}, found {found}")
            }
            Error::InvalidTime => write!(f, "invalid observation time"),
            Error::InvalidDimensions(n) => {
                write!(f, "expected two-dimensional data, found {n} dimensions")
            }
            Error::InvalidProjectionCode => write!(f, "invalid projection code"),
            Error::ConflictingRotation => write!(
                f,
                "cannot specify both a rotation angle and a rotation matrix"
            ),
            Error::InvalidObserverDistance => {
                write!(f, "observer distance must exceed the solar radius")
            }
            Error::MissingKeyword(kw) => write!(f, "missing required keyword: {kw}"),
            Error::InvalidKeywordValue(kw) => write!(f, "invalid value for keyword: {kw}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
