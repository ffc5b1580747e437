use qamus_core::lookup::{LookupSession, Phase};
use qamus_types::{FailureKind, SavedWord, Theme};

use super::word;
use crate::ui::{render_favorites, render_session};

fn session(phase: Phase) -> LookupSession {
    LookupSession {
        phase,
        query: "Robot".to_string(),
        image_loading: false,
        token: 1,
    }
}

#[test]
fn loading_and_failures() {
    assert!(render_session(&session(Phase::Loading), false, Theme::Light, true).contains("Robot"));

    let quota = render_session(&session(Phase::Failed(FailureKind::Quota)), false, Theme::Light, true);
    assert!(quota.contains(":retry"));

    let generic =
        render_session(&session(Phase::Failed(FailureKind::Generic)), false, Theme::Light, true);
    assert!(generic.contains("went wrong"));
}

#[test]
fn card_shows_favorite_and_illustration_state() {
    let mut s = session(Phase::Ready(word("Robot")));
    s.image_loading = true;
    let card = render_session(&s, true, Theme::Dark, true);
    assert!(card.contains("❤️ Robot  →  Robot-ar"));
    assert!(card.contains("drawing"));
    assert!(card.contains('═'));

    s.image_loading = false;
    let card = render_session(&s, false, Theme::Light, true);
    assert!(card.contains("🤍"));
    assert!(card.contains("no illustration"));

    let card = render_session(&s, false, Theme::Light, false);
    assert!(!card.contains("illustration"));
}

#[test]
fn favorites_listing() {
    assert!(render_favorites(&[]).contains("empty"));

    let items = vec![SavedWord {
        id: "42".to_string(),
        timestamp: 42,
        word: word("Kind"),
    }];
    assert!(render_favorites(&items).contains("[42] Kind → Kind-ar"));
}
