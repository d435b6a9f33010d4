//! # permalink-routes
//!
//! Path building, parsing, and canonical redirects for entity permalinks.
//!
//! Each route family has a fixed prefix followed by one permalink segment
//! produced by [`permalink_slug::SlugCodec`]:
//!
//! - `/browse/databases/{id}-{slug}`
//! - `/dashboard/{id}-{slug}`
//! - `/question/{id}-{slug}`
//! - `/model/{id}-{slug}`
//! - `/collection/{id}-{slug}`
//!
//! `/collection/root` and `/collection/users` are literal routes. They are
//! matched before any id decoding and never yield a numeric id.
//!
//! Resolving a path is `parse → lookup by id → compare with canonical path`.
//! A stale or missing label resolves to the same entity and produces a
//! redirect to the current canonical path.

mod error;
mod lookup;
mod path;
mod resolve;

pub use error::RouteError;
pub use lookup::{CatalogEntry, EntityLookup, StaticLookup};
pub use path::{
    CollectionTarget, DatabaseTarget, Route, RouteCodec, RouteFamily, ROOT_COLLECTION_PATH,
    USERS_COLLECTION_PATH,
};
pub use resolve::Resolution;
