use std::fmt::Write;
use std::sync::Arc;

use kanal::AsyncReceiver;
use qamus_core::lookup::{LookupSession, Phase};
use qamus_types::{AppEvent, FailureKind, SavedWord, Theme};
use tokio_util::sync::CancellationToken;

use crate::events::text_input::HELP;
use crate::state::AppState;

const IDLE_PROMPT: &str = "اكتب كلمة جديدة لتتعلمها يا بطل... (:help for commands)";
const QUOTA_MESSAGE: &str = "لقد سألتم الكثير من الأسئلة الرائعة اليوم! انتظر دقيقة واحدة ثم اكتب :retry لتستمر في رحلة العلم.";
const GENERIC_MESSAGE: &str = "Oops, something went wrong. Try again or look up another word.";

/// Terminal renderer
pub async fn ui_loop(
    state: Arc<AppState>,
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    loop {
        let event = tokio::select! {
            event = app_to_ui_rx.recv() => event?,
            _ = cancel.cancelled() => return Ok(()),
        };

        let output = match event {
            AppEvent::SessionChanged => {
                let session = state.lookup.session().await;
                let is_favorite = match session.result() {
                    Some(word) => state.favorites.read().await.is_favorite(&word.original),
                    None => false,
                };
                let theme = *state.theme.read().await;
                let show_image_status = state.config.read().await.ui.show_image_status;
                render_session(&session, is_favorite, theme, show_image_status)
            }
            AppEvent::FavoritesChanged => {
                let count = state.favorites.read().await.len();
                format!("❤️  {} saved words", count)
            }
            AppEvent::ShowFavorites(items) => render_favorites(&items),
            AppEvent::ShowQuote(quote) => format!("💬 {}", quote),
            AppEvent::ThemeChanged(theme) => format!("Theme: {}", theme.as_str()),
            AppEvent::Notice(notice) => notice,
            AppEvent::Help => HELP.to_string(),
            _ => continue,
        };

        println!("{}", output);
    }
}

fn rule(theme: Theme) -> String {
    match theme {
        Theme::Light => "─".repeat(40),
        Theme::Dark => "═".repeat(40),
    }
}

pub fn render_session(
    session: &LookupSession,
    is_favorite: bool,
    theme: Theme,
    show_image_status: bool,
) -> String {
    match &session.phase {
        Phase::Idle => IDLE_PROMPT.to_string(),
        Phase::Loading => format!("🔎 Looking up '{}'...", session.query),
        Phase::Failed(FailureKind::Quota) => format!("⏳ {}", QUOTA_MESSAGE),
        Phase::Failed(FailureKind::Generic) => format!("⚠️  {}", GENERIC_MESSAGE),
        Phase::Ready(word) => {
            let mut out = String::new();
            let heart = if is_favorite { "❤️" } else { "🤍" };
            let _ = writeln!(out, "{}", rule(theme));
            let _ = writeln!(out, "{} {}  →  {}", heart, word.original, word.translation);
            let _ = writeln!(out, "   ({})", word.part_of_speech);
            let _ = writeln!(out, "   {}", word.definition);
            let _ = writeln!(out, "   🇸🇦 {}", word.example_ar);
            let _ = writeln!(out, "   🇬🇧 {}", word.example_en);
            if show_image_status {
                let image = match (&word.image_url, session.image_loading) {
                    (Some(url), _) => format!("🖼  illustration ready ({} bytes)", url.len()),
                    (None, true) => "🎨 drawing an illustration...".to_string(),
                    (None, false) => "🖼  (no illustration)".to_string(),
                };
                let _ = writeln!(out, "   {}", image);
            }
            out.push_str(&rule(theme));
            out
        }
    }
}

pub fn render_favorites(items: &[SavedWord]) -> String {
    if items.is_empty() {
        return "Your treasure bag is empty".to_string();
    }

    let mut out = String::from("❤️  Your treasures:");
    for item in items {
        let _ = write!(
            out,
            "\n  [{}] {} → {}",
            item.id, item.word.original, item.word.translation
        );
    }
    out
}
