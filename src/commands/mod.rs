pub mod fetch;
pub mod scan;
pub mod taxonomy;
