pub mod commands;
pub mod config;
pub mod data_provider;
pub mod dom;
pub mod error;
pub mod fixtures;
pub mod menu;
pub mod surface;
pub mod tui;
pub mod widget;

#[cfg(any(test, feature = "development"))]
pub mod dev;

pub use data_provider::{DefaultMenuProvider, MenuProvider};
pub use dom::Document;
pub use error::{MenuError, MenuResult};
pub use menu::{Menu, MenuItem, MenuSection};
pub use surface::RenderSurface;
pub use widget::MenuWidget;
