use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A value read back from the database does not match any known variant.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown {kind} '{value}' stored in database")]
    UnknownVariant {
        /// Which enum was being parsed (e.g. "order status")
        kind: &'static str,
        /// The stored value
        value: String,
    },

    /// A row that was just written could not be read back.
    #[error("{entity} with id {id} not found after write")]
    MissingAfterWrite {
        /// Entity name
        entity: &'static str,
        /// Primary key that was written
        id: i32,
    },
}
