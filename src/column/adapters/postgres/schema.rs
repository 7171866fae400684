//! Diesel schema for board column persistence.

diesel::table! {
    /// Board column records with layout metadata.
    board_columns (id) {
        /// Internal column record identifier.
        id -> Uuid,
        /// Unique external column key.
        #[max_length = 255]
        column_key -> Varchar,
        /// Display title.
        #[max_length = 255]
        title -> Varchar,
        /// Presentation order, ascending.
        display_order -> Int4,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
