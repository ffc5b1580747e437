//! Lookup flow: word card first, illustration in the background.
//!
//! Each lookup takes a fresh token from a monotonically increasing counter.
//! Responses that arrive for a token other than the session's current one
//! belong to a superseded search and are dropped, so an illustration can only
//! ever land on the card it was requested for.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use kanal::AsyncSender;
use qamus_genai::WordService;
use qamus_types::{AppEvent, FailureKind, WordResult};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

/// Display mode of the lookup screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Ready(WordResult),
    Failed(FailureKind),
}

#[derive(Debug, Clone, Default)]
pub struct LookupSession {
    pub phase: Phase,
    pub query: String,
    /// Illustration request in flight for the current card
    pub image_loading: bool,
    pub token: u64,
}

impl LookupSession {
    pub fn result(&self) -> Option<&WordResult> {
        match &self.phase {
            Phase::Ready(word) => Some(word),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum LookupOutcome {
    /// Blank query, nothing happened
    Skipped,
    /// Card shown; the illustration task is still running
    Found {
        token: u64,
        illustration: JoinHandle<()>,
    },
    Failed(FailureKind),
    /// A newer lookup or a reset happened while this one was in flight
    Superseded,
}

#[derive(Clone)]
pub struct LookupOrchestrator {
    service: Arc<dyn WordService>,
    session: Arc<RwLock<LookupSession>>,
    generation: Arc<AtomicU64>,
    updates: Option<AsyncSender<AppEvent>>,
}

impl LookupOrchestrator {
    pub fn new(service: Arc<dyn WordService>) -> Self {
        Self {
            service,
            session: Arc::new(RwLock::new(LookupSession::default())),
            generation: Arc::new(AtomicU64::new(0)),
            updates: None,
        }
    }

    /// Send `AppEvent::SessionChanged` after every state change
    pub fn with_updates(mut self, tx: AsyncSender<AppEvent>) -> Self {
        self.updates = Some(tx);
        self
    }

    pub async fn session(&self) -> LookupSession {
        self.session.read().await.clone()
    }

    pub async fn current_result(&self) -> Option<WordResult> {
        self.session.read().await.result().cloned()
    }

    /// Look up `query`. On success the illustration for the translated word is
    /// requested on a spawned task
    pub async fn perform_lookup(&self, query: &str) -> LookupOutcome {
        if query.trim().is_empty() {
            return LookupOutcome::Skipped;
        }

        let token = self.next_token();
        {
            let mut session = self.session.write().await;
            *session = LookupSession {
                phase: Phase::Loading,
                query: query.to_string(),
                image_loading: false,
                token,
            };
        }
        self.publish().await;

        tracing::info!("Looking up '{}' (token {})", query, token);
        let result = self.service.lookup_word(query).await;

        let mut session = self.session.write().await;
        if session.token != token {
            tracing::debug!("Dropping lookup response for stale token {}", token);
            return LookupOutcome::Superseded;
        }

        match result {
            Ok(word) => {
                let subject = word.translation.clone();
                session.phase = Phase::Ready(word);
                session.image_loading = true;
                drop(session);
                self.publish().await;

                let this = self.clone();
                let illustration = tokio::spawn(async move {
                    this.illustrate(token, subject).await;
                });

                LookupOutcome::Found {
                    token,
                    illustration,
                }
            }
            Err(e) => {
                let kind = e.failure_kind();
                tracing::warn!("Lookup of '{}' failed ({:?}): {}", query, kind, e);
                session.phase = Phase::Failed(kind);
                drop(session);
                self.publish().await;

                LookupOutcome::Failed(kind)
            }
        }
    }

    /// Back to idle. Pending responses become stale
    pub async fn reset(&self) {
        let token = self.next_token();
        {
            let mut session = self.session.write().await;
            *session = LookupSession {
                token,
                ..LookupSession::default()
            };
        }
        self.publish().await;
    }

    /// Show an already known word, such as a favorite, without calling the
    /// service. Pending responses become stale
    pub async fn show_saved(&self, word: WordResult) {
        let token = self.next_token();
        {
            let mut session = self.session.write().await;
            *session = LookupSession {
                query: word.original.clone(),
                phase: Phase::Ready(word),
                image_loading: false,
                token,
            };
        }
        self.publish().await;
    }

    async fn illustrate(&self, token: u64, subject: String) {
        let result = self.service.illustrate(&subject).await;

        let mut session = self.session.write().await;
        if session.token != token {
            tracing::debug!("Discarding illustration for stale token {}", token);
            return;
        }
        session.image_loading = false;

        match result {
            Ok(Some(url)) => {
                if let Phase::Ready(word) = &mut session.phase {
                    word.image_url = Some(url);
                }
            }
            Ok(None) => tracing::debug!("No illustration returned for '{}'", subject),
            Err(e) => tracing::warn!("Illustration for '{}' failed: {}", subject, e),
        }
        drop(session);

        self.publish().await;
    }

    fn next_token(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    async fn publish(&self) {
        if let Some(tx) = &self.updates
            && let Err(e) = tx.send(AppEvent::SessionChanged).await
        {
            tracing::debug!("Session update not delivered: {}", e);
        }
    }
}
