//! Markdown reformatting tests

mod headings;
mod lists;
mod spacing;
