//! HTTP API for identification resolution.
//!
//! ## Starting the Server
//!
//! ```text
//! # Start on default port 8080 with the embedded sample catalog
//! plant-resolver serve
//!
//! # Custom port and catalog
//! plant-resolver serve --port 3000 --catalog products.json
//!
//! # Bind to all interfaces
//! plant-resolver serve --address 0.0.0.0
//! ```
//!
//! ## API Endpoints
//!
//! - `POST /api/resolve` - Resolve `{candidates, catalog?}` to tier, match and care
//! - `GET /api/catalog` - List products in the server catalog
//! - `GET /api/rules` - List care rules in evaluation order
//! - `GET /health` - Liveness check

pub mod server;
