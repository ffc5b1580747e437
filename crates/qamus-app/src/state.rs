use std::sync::Arc;

use kanal::AsyncSender;
use qamus_audio::AudioSink;
use qamus_config::Config;
use qamus_core::favorites::FavoritesStore;
use qamus_core::lookup::LookupOrchestrator;
use qamus_core::quote::fallback_quote;
use qamus_core::speech::Speaker;
use qamus_core::storage::KeyValueStore;
use qamus_core::theme::restore_theme;
use qamus_genai::WordService;
use qamus_types::{AppEvent, Theme};
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub service: Arc<dyn WordService>,
    pub store: Arc<dyn KeyValueStore>,
    pub lookup: LookupOrchestrator,
    pub speaker: Arc<Speaker>,
    pub favorites: RwLock<FavoritesStore>,
    pub theme: RwLock<Theme>,
    pub quote: RwLock<String>,
}

impl AppState {
    /// Restores favorites and theme from `store`
    pub fn new(
        config: Config,
        service: Arc<dyn WordService>,
        store: Arc<dyn KeyValueStore>,
        sink: Arc<dyn AudioSink>,
        updates: AsyncSender<AppEvent>,
    ) -> Self {
        let favorites = FavoritesStore::restore(store.clone(), config.storage.favorites_key.clone());
        let theme = restore_theme(store.as_ref(), &config.storage.theme_key);

        let lookup = LookupOrchestrator::new(service.clone()).with_updates(updates);
        let speaker = Arc::new(Speaker::new(
            service.clone(),
            sink,
            config.audio.sample_rate,
            config.audio.channels,
        ));

        Self {
            config: Arc::new(RwLock::new(config)),
            service,
            store,
            lookup,
            speaker,
            favorites: RwLock::new(favorites),
            theme: RwLock::new(theme),
            quote: RwLock::new(fallback_quote().to_string()),
        }
    }
}
