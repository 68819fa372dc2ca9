//! Application bootstrap implementation.
//!
//! `TerrainViewApp` builds every runtime piece from configuration in a fixed
//! order and owns the cancellation token that in-flight fetches hang off.

use std::sync::Arc;

use bytes::Bytes;
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::config::AppConfig;
use super::error::AppError;
use crate::archive::{ArchiveLayout, ArchiveReader};
use crate::config::ConfigFile;
use crate::contour::{ContourPolicy, ContourTemplate, DEFAULT_PROTOCOL_ID};
use crate::peaks::{InitialView, PeakCatalog};
use crate::protocol::{FetchError, ProtocolRegistry, TerrainProtocol, TileFetchRequest};
use crate::source::{ContourDemSource, RasterDemSource, SourceSet, VectorSource};

/// Terrain viewer application with its protocol handler registered.
///
/// Startup order:
/// 1. Archive layout
/// 2. Contour policy (rejects bad tables before anything is registered)
/// 3. Contour template
/// 4. Terrain protocol handler, registered under the configured scheme
/// 5. Style source set
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use terrainview::app::TerrainViewApp;
/// use terrainview::archive::MemoryArchiveReader;
/// use terrainview::config::ConfigFile;
///
/// let reader = Arc::new(MemoryArchiveReader::new());
/// let app = TerrainViewApp::start(&ConfigFile::default(), reader).unwrap();
///
/// assert_eq!(app.registry().schemes(), vec!["mapterhorn"]);
/// assert!(app.template().as_str().starts_with("dem-contour://"));
/// ```
pub struct TerrainViewApp {
    layout: ArchiveLayout,
    policy: ContourPolicy,
    template: ContourTemplate,
    registry: ProtocolRegistry,
    sources: SourceSet,
    peaks: PeakCatalog,
    view: InitialView,
    shutdown: CancellationToken,
}

impl TerrainViewApp {
    /// Validate `config` and start the application on top of `reader`.
    ///
    /// # Errors
    ///
    /// The first [`AppError`] raised by validation or registration.
    pub fn start<R>(config: &ConfigFile, reader: Arc<R>) -> Result<Self, AppError>
    where
        R: ArchiveReader + 'static,
    {
        let config = AppConfig::from_config_file(config)?;
        Self::start_with(config, reader)
    }

    /// Start from an already validated [`AppConfig`].
    pub fn start_with<R>(config: AppConfig, reader: Arc<R>) -> Result<Self, AppError>
    where
        R: ArchiveReader + 'static,
    {
        info!(
            scheme = %config.scheme,
            reader = reader.name(),
            "Starting terrain viewer"
        );

        // 1. Archive layout
        let layout = config.layout;
        info!(
            low_zoom_cutoff = layout.low_zoom_cutoff(),
            low_zoom_key = layout.low_zoom_key(),
            grid_shift = layout.grid_shift(),
            "Archive layout ready"
        );

        // 2. Contour policy (already validated by AppConfig)
        let policy = config.policy;
        info!(bands = policy.bands().len(), "Contour policy ready");

        // 3. Contour template
        let template = ContourTemplate::build(&policy, &config.fields, DEFAULT_PROTOCOL_ID)?;
        info!(template = template.as_str(), "Contour template built");

        // 4. Protocol handler
        let handler = TerrainProtocol::with_scheme(config.scheme.clone(), layout.clone(), reader);
        let mut registry = ProtocolRegistry::new();
        registry.register(Arc::new(handler))?;

        // 5. Sources
        let dem = if config.dem.use_protocol {
            RasterDemSource::from_protocol(&config.scheme, config.dem.encoding)
        } else {
            RasterDemSource::from_tilejson(config.dem.tilejson_url.clone(), config.dem.encoding)
        }
        .with_tile_size(config.dem.tile_size)
        .with_zoom_range(config.dem.min_zoom, config.dem.max_zoom)
        .with_attribution(config.dem.attribution.clone());

        let contour_dem = ContourDemSource {
            url: config.contour_dem_url,
            encoding: config.dem.encoding,
            maxzoom: config.contour_dem_max_zoom,
            worker: true,
        };
        let contour = VectorSource::from_template(&template, config.contour_max_zoom);
        let sources = SourceSet::new(dem, contour, contour_dem, config.dem.exaggeration);

        info!("Terrain viewer started");

        Ok(Self {
            layout,
            policy,
            template,
            registry,
            sources,
            peaks: PeakCatalog::japan(),
            view: InitialView::default(),
            shutdown: CancellationToken::new(),
        })
    }

    /// Fetch a tile through the registered handlers.
    ///
    /// The request is cancelled if [`shutdown`](Self::shutdown) is called
    /// while it is in flight.
    pub async fn fetch(&self, url: &str) -> Result<Bytes, FetchError> {
        let request = TileFetchRequest::new(url);
        self.registry
            .dispatch(&request, self.shutdown.child_token())
            .await
    }

    /// Cancel every in-flight and future fetch.
    pub fn shutdown(&self) {
        info!("Shutting down terrain viewer");
        self.shutdown.cancel();
    }

    /// Whether [`shutdown`](Self::shutdown) has been called.
    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    /// Style fragment for the map engine.
    pub fn style_json(&self) -> Result<Value, serde_json::Error> {
        self.sources.to_style_json()
    }

    pub fn layout(&self) -> &ArchiveLayout {
        &self.layout
    }

    pub fn policy(&self) -> &ContourPolicy {
        &self.policy
    }

    pub fn template(&self) -> &ContourTemplate {
        &self.template
    }

    pub fn registry(&self) -> &ProtocolRegistry {
        &self.registry
    }

    pub fn sources(&self) -> &SourceSet {
        &self.sources
    }

    pub fn peaks(&self) -> &PeakCatalog {
        &self.peaks
    }

    pub fn initial_view(&self) -> &InitialView {
        &self.view
    }
}

impl std::fmt::Debug for TerrainViewApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerrainViewApp")
            .field("layout", &self.layout)
            .field("template", &self.template.as_str())
            .field("registry", &self.registry)
            .finish()
    }
}
