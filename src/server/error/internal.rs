use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enumeration column holds a value the application does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {column} value '{value}' stored for row {id}")]
    UnknownStoredValue {
        /// Column holding the value, e.g. `booking.status`
        column: &'static str,
        /// Primary key of the row
        id: i32,
        /// The unrecognised value
        value: String,
    },

    /// A stored booking has a check-out on or before its check-in.
    #[error("Booking {id} has an invalid stored date range")]
    InvalidStoredRange {
        /// Primary key of the booking
        id: i32,
    },

    /// Hashing or parsing a password hash failed.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}
