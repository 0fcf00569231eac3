pub mod harness;

pub use harness::Harness;
pub use test_backend::TestBackend;
