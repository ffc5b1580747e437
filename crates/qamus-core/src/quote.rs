use qamus_genai::WordService;
use rand::seq::SliceRandom;

/// Shown when the quote service has nothing for us
pub const BACKUP_WISDOM: [&str; 5] = [
    "العلم يرفع بيوتاً لا عماد لها، والجهل يهدم بيت العز والكرم.",
    "يا بني، اجعل من العلم زاداً لك، ومن الأخلاق ثوباً ترتديه.",
    "من طلب العلا سهر الليالي، ومن زرع الجد حصد النجاح.",
    "الأدب قبل العلم، فكن مؤدباً لترتقي بعلمك.",
    "أحفادي الأبطال، أنتم أمل المستقبل وبكم يزدهر الوطن.",
];

pub fn fallback_quote() -> &'static str {
    BACKUP_WISDOM
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(BACKUP_WISDOM[0])
}

/// Quote from the service, or a random local one. Never fails
pub async fn fetch_motivational_quote(service: &dyn WordService) -> String {
    match service.motivational_quote().await {
        Ok(Some(quote)) if !quote.trim().is_empty() => quote.trim().to_string(),
        Ok(_) => {
            tracing::debug!("Quote service returned nothing, using a local quote");
            fallback_quote().to_string()
        }
        Err(e) => {
            tracing::warn!("Quote service failed: {}", e);
            fallback_quote().to_string()
        }
    }
}
