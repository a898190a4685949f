use anyhow::Result;
use pokedex_client::{ClientConfig, FetchError, PokeApiClient};
use pokedex_types::Catalog;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use tokio::runtime::Runtime;

/// Result of one load attempt, as delivered to the UI.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(Box<Catalog>),
    Failed(FetchError),
}

impl From<std::result::Result<Catalog, FetchError>> for LoadOutcome {
    fn from(result: std::result::Result<Catalog, FetchError>) -> Self {
        match result {
            Ok(catalog) => LoadOutcome::Loaded(Box::new(catalog)),
            Err(err) => LoadOutcome::Failed(err),
        }
    }
}

/// Requests sent to a running load worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadCommand {
    Load,
}

/// Blocking front for `PokeApiClient`.
///
/// Owns its own tokio runtime so synchronous callers (console commands,
/// the TUI worker thread) can drive the async client.
pub struct CatalogLoader {
    client: PokeApiClient,
    runtime: Runtime,
}

impl CatalogLoader {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = PokeApiClient::new(config)?;
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        Ok(Self { client, runtime })
    }

    pub fn config(&self) -> &ClientConfig {
        self.client.config()
    }

    pub fn load(&self) -> std::result::Result<Catalog, FetchError> {
        let result = self.runtime.block_on(self.client.load());
        if let Err(err) = &result {
            tracing::error!(url = err.url(), reason = err.reason(), "catalog load failed");
        }
        result
    }

    /// Move the loader onto a worker thread.
    ///
    /// Every `LoadCommand::Load` produces exactly one `LoadOutcome`. The
    /// worker exits when either channel is closed.
    pub fn spawn(self) -> (Sender<LoadCommand>, Receiver<LoadOutcome>) {
        let (command_tx, command_rx) = mpsc::channel::<LoadCommand>();
        let (outcome_tx, outcome_rx) = mpsc::channel::<LoadOutcome>();

        thread::spawn(move || {
            while let Ok(LoadCommand::Load) = command_rx.recv() {
                tracing::debug!("load requested");
                let outcome = LoadOutcome::from(self.load());
                if outcome_tx.send(outcome).is_err() {
                    break;
                }
            }
            tracing::debug!("load worker stopped");
        });

        (command_tx, outcome_rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pokedex_testing::{MockPokeApi, fixtures};
    use std::time::Duration;

    fn loader_for(api: &MockPokeApi) -> Result<CatalogLoader> {
        CatalogLoader::new(ClientConfig::default().with_base_url(api.base_url()))
    }

    #[test]
    fn test_blocking_load() -> Result<()> {
        let api = MockPokeApi::start(fixtures::starter_entities())?;
        let loader = loader_for(&api)?;

        let catalog = loader.load()?;
        assert_eq!(catalog.len(), 12);
        assert!(catalog.categories.contains(&"fire".to_string()));

        Ok(())
    }

    #[test]
    fn test_worker_answers_each_request() -> Result<()> {
        let api = MockPokeApi::builder(fixtures::starter_entities())
            .failing_detail(4)
            .start()?;
        let (commands, outcomes) = loader_for(&api)?.spawn();

        commands.send(LoadCommand::Load)?;
        let first = outcomes.recv_timeout(Duration::from_secs(10))?;
        assert!(matches!(first, LoadOutcome::Failed(_)));

        commands.send(LoadCommand::Load)?;
        let second = outcomes.recv_timeout(Duration::from_secs(10))?;
        assert!(matches!(second, LoadOutcome::Failed(_)));

        Ok(())
    }

    #[test]
    fn test_worker_stops_when_commands_close() -> Result<()> {
        let api = MockPokeApi::start(fixtures::starter_entities())?;
        let (commands, outcomes) = loader_for(&api)?.spawn();

        drop(commands);
        assert!(outcomes.recv_timeout(Duration::from_secs(10)).is_err());

        Ok(())
    }
}
