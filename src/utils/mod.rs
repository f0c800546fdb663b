// Start of file: /src/utils/mod.rs

/*
    * Shared helpers used by the router: error mapping, fallbacks, panic recovery.
*/

pub mod error_handler;

// End of file: /src/utils/mod.rs
