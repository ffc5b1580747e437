use qamus_types::{AppEvent, SpeechTarget};

pub const HELP: &str = "\
Type a word to look it up. Commands:
  :fav             save or unsave the current word
  :list            show saved words
  :open <id>       show a saved word again
  :rm <id>         remove a saved word
  :clear-favs      remove all saved words
  :say ar|en       hear the translation (ar) or the word (en)
  :say ex-ar|ex-en hear an example sentence
  :topic <name>    random word from school, tech, travel, emotions
  :retry           repeat the last lookup
  :reset           clear the screen
  :quote           a new wisdom line
  :theme           switch light/dark
  :quit            leave";

/// Turn a typed line into an event. Blank lines produce nothing
pub fn parse_input(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let Some(command) = line.strip_prefix(':') else {
        return Some(AppEvent::Search(line.to_string()));
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command, ""),
    };

    let event = match name.to_lowercase().as_str() {
        "fav" | "f" => AppEvent::ToggleFavorite,
        "list" | "favs" => AppEvent::ListFavorites,
        "rm" if !arg.is_empty() => AppEvent::RemoveFavorite(arg.to_string()),
        "rm" => AppEvent::Notice("Usage: :rm <id>".to_string()),
        "open" if !arg.is_empty() => AppEvent::OpenFavorite(arg.to_string()),
        "open" => AppEvent::Notice("Usage: :open <id>".to_string()),
        "clear-favs" => AppEvent::ClearFavorites,
        "say" => match parse_speech_target(arg) {
            Some(target) => AppEvent::Speak(target),
            None => AppEvent::Notice("Usage: :say ar|en|ex-ar|ex-en".to_string()),
        },
        "topic" if !arg.is_empty() => AppEvent::Topic(arg.to_string()),
        "topic" => AppEvent::Notice("Usage: :topic school|tech|travel|emotions".to_string()),
        "retry" => AppEvent::Retry,
        "reset" => AppEvent::Reset,
        "quote" => AppEvent::RefreshQuote,
        "theme" => AppEvent::ToggleTheme,
        "help" | "h" | "?" => AppEvent::Help,
        "quit" | "q" | "exit" => AppEvent::Quit,
        other => AppEvent::Notice(format!("Unknown command :{}, try :help", other)),
    };

    Some(event)
}

fn parse_speech_target(arg: &str) -> Option<SpeechTarget> {
    match arg.to_lowercase().as_str() {
        "ar" | "" => Some(SpeechTarget::Translation),
        "en" => Some(SpeechTarget::Original),
        "ex-ar" => Some(SpeechTarget::ExampleAr),
        "ex-en" => Some(SpeechTarget::ExampleEn),
        _ => None,
    }
}
