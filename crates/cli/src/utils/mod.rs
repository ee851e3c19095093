pub mod output;

pub use output::write_json;
