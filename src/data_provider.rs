/// Trait for providing menu data, abstracting over network, filesystem and mock sources
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

use crate::error::{MenuError, MenuResult};
use crate::menu::Menu;

/// Default timeout for menu requests
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Trait for menu providers, implemented by the HTTP, file and mock providers
#[async_trait]
pub trait MenuProvider: Send + Sync {
    /// Fetch and parse the menu found at `location`
    async fn fetch_menu(&self, location: &str) -> MenuResult<Menu>;
}

/// Where a menu document lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Http(Url),
    File(PathBuf),
}

impl Location {
    /// Classify a caller-supplied locator
    ///
    /// `http(s)://` and `file://` URLs are recognised; anything that does not
    /// parse as an absolute URL is taken as a filesystem path.
    pub fn parse(location: &str) -> MenuResult<Self> {
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return Err(MenuError::InvalidLocation(location.to_string()));
        }

        match Url::parse(trimmed) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(Location::Http(url)),
                "file" => url
                    .to_file_path()
                    .map(Location::File)
                    .map_err(|_| MenuError::InvalidLocation(location.to_string())),
                // Windows drive letters parse as a one-letter scheme
                scheme if scheme.len() == 1 => Ok(Location::File(PathBuf::from(trimmed))),
                _ => Err(MenuError::InvalidLocation(location.to_string())),
            },
            Err(_) => Ok(Location::File(PathBuf::from(trimmed))),
        }
    }
}

/// Fetches menus over HTTP(S)
pub struct HttpMenuProvider {
    client: reqwest::Client,
}

impl HttpMenuProvider {
    pub fn new(timeout: Duration) -> MenuResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(MenuError::Client)?;
        Ok(Self { client })
    }

    async fn fetch_url(&self, url: Url, location: &str) -> MenuResult<Menu> {
        debug!("HTTP: GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| MenuError::Fetch {
                location: location.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(MenuError::Status {
                location: location.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(|source| MenuError::Fetch {
            location: location.to_string(),
            source,
        })?;
        parse_body(&body, location)
    }
}

#[async_trait]
impl MenuProvider for HttpMenuProvider {
    async fn fetch_menu(&self, location: &str) -> MenuResult<Menu> {
        match Location::parse(location)? {
            Location::Http(url) => self.fetch_url(url, location).await,
            Location::File(_) => Err(MenuError::InvalidLocation(location.to_string())),
        }
    }
}

/// Reads menus from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FileMenuProvider;

impl FileMenuProvider {
    async fn read_path(&self, path: PathBuf, location: &str) -> MenuResult<Menu> {
        debug!("FILE: reading {}", path.display());
        let body = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| MenuError::Io {
                location: location.to_string(),
                source,
            })?;
        parse_body(&body, location)
    }
}

#[async_trait]
impl MenuProvider for FileMenuProvider {
    async fn fetch_menu(&self, location: &str) -> MenuResult<Menu> {
        match Location::parse(location)? {
            Location::File(path) => self.read_path(path, location).await,
            Location::Http(_) => Err(MenuError::InvalidLocation(location.to_string())),
        }
    }
}

/// Dispatches to the HTTP or file provider depending on the location
pub struct DefaultMenuProvider {
    http: HttpMenuProvider,
    file: FileMenuProvider,
}

impl DefaultMenuProvider {
    pub fn new(timeout: Duration) -> MenuResult<Self> {
        Ok(Self {
            http: HttpMenuProvider::new(timeout)?,
            file: FileMenuProvider,
        })
    }
}

#[async_trait]
impl MenuProvider for DefaultMenuProvider {
    async fn fetch_menu(&self, location: &str) -> MenuResult<Menu> {
        let menu = match Location::parse(location)? {
            Location::Http(url) => self.http.fetch_url(url, location).await?,
            Location::File(path) => self.file.read_path(path, location).await?,
        };
        info!("Loaded menu with {} sections from {}", menu.len(), location);
        Ok(menu)
    }
}

fn parse_body(body: &str, location: &str) -> MenuResult<Menu> {
    Menu::from_json(body).map_err(|source| MenuError::Parse {
        location: location.to_string(),
        source,
    })
}
