use thiserror::Error;

/// Failures raised by the crossing maintainer.
///
/// Every variant is caused by the caller; a failed mutation leaves the
/// store exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CrossingError {
    #[error("street name does not exist: {0}")]
    UnknownStreet(String),
    #[error("street name already exists: {0}")]
    DuplicateStreet(String),
    #[error("streets {0} and {1} overlap along a collinear segment")]
    DegenerateIntersection(String, String),
    #[error("street {0} has no coordinates")]
    EmptyPolyline(String),
    #[error("street {0} has a non-finite coordinate")]
    NonFiniteCoordinate(String),
}

/// Failures while parsing an input line into a [`Command`](crate::Command).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty command")]
    EmptyInput,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("missing street name")]
    MissingName,
    #[error("missing coordinate list, expected `(`")]
    MissingCoordinates,
    #[error("coordinate list has an odd number of values")]
    OddCoordinateCount,
    #[error("invalid number: {0}")]
    InvalidNumber(String),
    #[error("unexpected arguments: {0}")]
    UnexpectedArguments(String),
}
