pub mod error;
pub mod scenario;
pub mod telemetry;

pub use error::DemoError;

#[cfg(test)]
mod tests;
