//! Shared cache-control policies for HTTP handlers.

/// Private responses must always be revalidated before reuse.
pub const PRIVATE_NO_CACHE_MUST_REVALIDATE: &str = "private, no-cache, must-revalidate";

/// Catalogue data that any cache may keep for an hour.
pub const PUBLIC_MAX_AGE_ONE_HOUR: &str = "public, max-age=3600";

/// Build the standard cache-control header tuple for private API responses.
pub const fn private_no_cache_header() -> (&'static str, &'static str) {
    ("Cache-Control", PRIVATE_NO_CACHE_MUST_REVALIDATE)
}

/// Cache-control header tuple for publicly cacheable catalogue responses.
pub const fn public_one_hour_header() -> (&'static str, &'static str) {
    ("Cache-Control", PUBLIC_MAX_AGE_ONE_HOUR)
}
