//! Answer pipeline tests

mod pipeline;
