//! Message chunking tests

mod properties;
mod transports;
