//! Content adapters.
//!
//! - **StaticContentReader** - Serves the embedded reference content
//! - **PostgresContentReader** - Reads content tables, can seed them from the embedded set

mod postgres_reader;
mod static_reader;

pub use postgres_reader::PostgresContentReader;
pub use static_reader::StaticContentReader;
