//! Network layer: JSON calls to the server's `/api` endpoints.

pub mod api;
