//! Automated-client detection from the User-Agent string.

use regex::Regex;
use std::sync::LazyLock;

/// Substrings that identify link previewers, crawlers and other bots.
///
/// Matched case-insensitively anywhere in the agent string. The generic
/// `bot` entry already covers most named bots; the explicit names are kept
/// so the list documents the traffic we expect to see.
pub const BOT_PATTERNS: &[&str] = &[
    "facebookexternalhit",
    "twitterbot",
    "discordbot",
    "bot",
    "crawler",
    "spider",
];

static BOT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = BOT_PATTERNS
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!("(?i){alternation}")).expect("bot patterns are valid regex")
});

/// Returns `true` if the client agent looks automated.
///
/// Undetected bots are a known limitation; an empty agent is treated as human.
pub fn is_bot(client_agent: &str) -> bool {
    BOT_REGEX.is_match(client_agent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_bots_detected() {
        assert!(is_bot("Googlebot/2.1 (+http://www.google.com/bot.html)"));
        assert!(is_bot("facebookexternalhit/1.1"));
        assert!(is_bot("Twitterbot/1.0"));
        assert!(is_bot("Mozilla/5.0 (compatible; Discordbot/2.0)"));
        assert!(is_bot("SomeCrawler 3.0"));
        assert!(is_bot("Baiduspider"));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(is_bot("GOOGLEBOT"));
        assert!(is_bot("FaceBookExternalHit"));
        assert!(is_bot("CRAWLER"));
    }

    #[test]
    fn test_browsers_are_human() {
        assert!(!is_bot("Mozilla/5.0"));
        assert!(!is_bot(
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0 Safari/537.36"
        ));
        assert!(!is_bot("curl/8.4.0"));
    }

    #[test]
    fn test_empty_agent_is_human() {
        assert!(!is_bot(""));
    }
}
