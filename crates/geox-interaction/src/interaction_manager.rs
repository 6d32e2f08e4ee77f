use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use geox_core::analysis::ModelType;
use geox_core::config::EngineConfig;
use geox_core::error::Result;
use geox_core::locale::{Language, LocaleCatalog};
use geox_core::responder::{CannedResponder, Responder};
use geox_core::session::{
    ConversationMessage, IgnoreReason, Session, SessionEvent, SubmitOutcome, transcript,
};
use tokio::sync::{RwLock, broadcast};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::deferred::DeferredTask;

/// Capacity of the change-event channel.
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Manages user interaction and conversation for one session.
///
/// The `InteractionManager` handles:
/// - Accepting user submissions (one pending reply at a time)
/// - Resolving replies after the configured delay
/// - Synthesizing onboarding when content first becomes available
/// - Publishing [`SessionEvent`]s to subscribers
///
/// The session lives exactly as long as the manager. Dropping the manager (or
/// calling [`close`](Self::close)) cancels any pending reply; a reply that
/// fires after teardown is discarded.
pub struct InteractionManager {
    /// The message log and compose state
    session: Arc<RwLock<Session>>,
    /// Produces assistant replies
    responder: Arc<dyn Responder>,
    /// Read-only string tables
    catalog: Arc<LocaleCatalog>,
    /// Injected settings
    config: EngineConfig,
    /// Current display language
    language: RwLock<Language>,
    /// Change notifications
    events: broadcast::Sender<SessionEvent>,
    /// Cancelled on teardown; parent of every deferred reply
    shutdown: CancellationToken,
    /// The outstanding deferred reply, if any
    pending: Mutex<Option<DeferredTask>>,
}

impl InteractionManager {
    /// Creates a manager around a fresh, empty session.
    ///
    /// # Arguments
    ///
    /// * `config` - Delay, language and default model
    /// * `catalog` - Localized strings, owned by the presentation layer
    /// * `responder` - Reply source
    pub fn new(
        config: EngineConfig,
        catalog: Arc<LocaleCatalog>,
        responder: Arc<dyn Responder>,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let session = Session::new(config.default_model);
        debug!(session_id = %session.id, model = %config.default_model, "session created");

        Self {
            session: Arc::new(RwLock::new(session)),
            responder,
            catalog,
            language: RwLock::new(config.language),
            config,
            events,
            shutdown: CancellationToken::new(),
            pending: Mutex::new(None),
        }
    }

    /// Creates a manager with the built-in catalog and canned responder.
    pub fn with_config(config: EngineConfig) -> Self {
        Self::new(
            config,
            Arc::new(LocaleCatalog::builtin()),
            Arc::new(CannedResponder),
        )
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub async fn session_id(&self) -> String {
        self.session.read().await.id.clone()
    }

    /// Subscribes to change events from this point on.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    // ============================================================================
    // Submission
    // ============================================================================

    /// Submits user text.
    ///
    /// On acceptance the user message is in the log when this returns, and
    /// the reply is scheduled after the configured delay. Empty text, text
    /// while a reply is pending, and text after teardown are ignored.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        if self.is_closed() {
            debug!("submission after close ignored");
            return SubmitOutcome::Ignored(IgnoreReason::Closed);
        }

        let (outcome, appended) = {
            let mut session = self.session.write().await;
            let outcome = session.submit(text, Utc::now());
            let appended = outcome
                .is_accepted()
                .then(|| session.messages().last().cloned())
                .flatten();
            (outcome, appended)
        };

        match outcome {
            SubmitOutcome::Accepted(id) => {
                info!(message_id = %id, "user message accepted");
                if let Some(message) = appended {
                    self.publish(SessionEvent::MessageAppended { message });
                }
                self.publish(SessionEvent::ComposingChanged { composing: true });
                self.schedule_reply();
            }
            SubmitOutcome::Ignored(reason) => {
                debug!(?reason, "submission ignored");
            }
        }
        outcome
    }

    /// Submits the suggested question at `index` for the current language.
    pub async fn submit_suggestion(&self, index: usize) -> SubmitOutcome {
        let questions = self.suggested_questions().await;
        match questions.get(index) {
            Some(question) => self.submit(question).await,
            None => {
                debug!(index, "no suggested question at index");
                SubmitOutcome::Ignored(IgnoreReason::UnknownSuggestion)
            }
        }
    }

    fn schedule_reply(&self) {
        let session = Arc::downgrade(&self.session);
        let responder = Arc::clone(&self.responder);
        let events = self.events.clone();
        let alive = self.shutdown.clone();

        let task = DeferredTask::spawn(
            self.config.reply_delay(),
            self.shutdown.child_token(),
            async move {
                let Some(session) = session.upgrade() else {
                    debug!("session dropped before reply; suppressed");
                    return;
                };
                let mut session = session.write().await;
                if alive.is_cancelled() {
                    debug!("session closed before reply; suppressed");
                    return;
                }
                let Some(prompt) = session.pending_prompt().map(|m| m.content.clone()) else {
                    return;
                };

                // The model type is read now, not at submission time.
                let reply = responder.respond(session.model_type(), &prompt);
                if let Some(message) = session.complete_reply(reply, Utc::now()) {
                    info!(message_id = %message.id, model = %session.model_type(), "reply applied");
                    let _ = events.send(SessionEvent::MessageAppended { message });
                    let _ = events.send(SessionEvent::ComposingChanged { composing: false });
                }
            },
        );

        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(task);
    }

    /// Waits for the outstanding reply, if any. Returns `true` if a reply was
    /// applied.
    pub async fn wait_for_reply(&self) -> bool {
        let task = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match task {
            Some(task) => task.join().await,
            None => false,
        }
    }

    // ============================================================================
    // External inputs
    // ============================================================================

    /// Feeds the content-availability signal.
    ///
    /// On the first `false -> true` edge with an empty log, the onboarding
    /// messages are appended. Returns how many messages were synthesized.
    pub async fn set_content_ready(&self, ready: bool) -> usize {
        if self.is_closed() {
            return 0;
        }
        let added = self
            .session
            .write()
            .await
            .set_content_ready(ready, Utc::now());

        let count = added.len();
        if count > 0 {
            info!(count, "onboarding synthesized");
            for message in added {
                self.publish(SessionEvent::MessageAppended { message });
            }
            self.publish(SessionEvent::OnboardingCompleted { count });
        }
        count
    }

    pub async fn set_model_type(&self, model_type: ModelType) {
        self.session.write().await.set_model_type(model_type);
        debug!(model = %model_type, "model type changed");
    }

    pub async fn model_type(&self) -> ModelType {
        self.session.read().await.model_type()
    }

    pub async fn set_language(&self, language: Language) {
        *self.language.write().await = language;
        debug!(%language, "language changed");
    }

    pub async fn language(&self) -> Language {
        *self.language.read().await
    }

    // ============================================================================
    // Outputs
    // ============================================================================

    /// A copy of the message log in append order.
    pub async fn messages(&self) -> Vec<ConversationMessage> {
        self.session.read().await.messages().to_vec()
    }

    pub async fn message_count(&self) -> usize {
        self.session.read().await.len()
    }

    pub async fn is_composing(&self) -> bool {
        self.session.read().await.is_composing()
    }

    pub async fn content_ready(&self) -> bool {
        self.session.read().await.content_ready()
    }

    /// Quick-reply questions for the current language.
    ///
    /// Empty until content is available.
    pub async fn suggested_questions(&self) -> Vec<&'static str> {
        if !self.content_ready().await {
            return Vec::new();
        }
        let language = self.language().await;
        self.catalog.suggested_questions(language).to_vec()
    }

    /// Localized label of the active model.
    pub async fn model_label(&self) -> &'static str {
        let language = self.language().await;
        let model_type = self.model_type().await;
        self.catalog.model_label(language, model_type)
    }

    /// The message log as JSON.
    pub async fn transcript_json(&self) -> Result<String> {
        transcript::to_json(self.session.read().await.messages())
    }

    // ============================================================================
    // Teardown
    // ============================================================================

    /// Tears the session down. Pending replies are discarded and further
    /// submissions are ignored.
    pub fn close(&self) {
        if !self.shutdown.is_cancelled() {
            info!("session closed");
        }
        self.shutdown.cancel();
    }

    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    fn publish(&self, event: SessionEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}

impl Drop for InteractionManager {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
