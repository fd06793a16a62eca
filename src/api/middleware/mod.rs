//! API middleware.
//!
//! Execution order (outermost first): CORS, `Cache-Control: no-store`,
//! audit logger, handler.

pub mod audit;
