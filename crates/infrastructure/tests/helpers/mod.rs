mod query_builder;

pub use query_builder::{a_query, QueryBuilder};
