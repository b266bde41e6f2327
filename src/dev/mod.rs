/// Development utilities module
///
/// This module contains utilities for development and testing,
/// such as a provider serving fixture menus and screenshot capture.

pub mod mock_provider;

#[cfg(feature = "development")]
pub mod screenshot;

pub use mock_provider::MockProvider;
