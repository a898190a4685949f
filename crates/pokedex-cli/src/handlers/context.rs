use crate::args::OutputFormat;
use crate::catalog_loader::CatalogLoader;
use crate::config::Settings;
use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use anyhow::Result;
use pokedex_client::FetchError;
use pokedex_types::Catalog;
use serde::Serialize;
use std::path::PathBuf;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    pub settings: Settings,
    pub config_path: PathBuf,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, settings: Settings, config_path: PathBuf) -> Self {
        Self {
            format,
            settings,
            config_path,
        }
    }

    pub fn loader(&self) -> Result<CatalogLoader> {
        CatalogLoader::new(self.settings.client.clone())
    }

    /// Load the whole catalog or fail with the user-facing message.
    ///
    /// The underlying `FetchError` is logged by the loader.
    pub fn load_catalog(&self) -> Result<Catalog> {
        self.loader()?
            .load()
            .map_err(|_| anyhow::anyhow!(FetchError::USER_MESSAGE))
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format.into());
        renderer.render(view_model)
    }
}
