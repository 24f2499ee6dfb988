mod builder;


pub use builder::{History, build_history};
