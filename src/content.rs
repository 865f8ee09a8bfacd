//! Static educational content: per-app flashcards, protection tips, and the
//! privacy-news list. Inert data keyed by display name, entirely separate
//! from the dataset file.

/// Rendered when a selected app has no flashcard entry.
pub const NO_FLASHCARDS: &str = "No detailed data available for this app.";

/// How each covered app collects data, five bullets per app in fixed order.
/// Keys are display names as derived by `AppPrivacyRecord::display_name`.
const FLASHCARDS: &[(&str, &[&str])] = &[
    (
        "Instagram",
        &[
            "📸 Uses your camera input to apply face filters and analyze engagement.",
            "📍 Collects GPS and background location for reels & ad targeting.",
            "📱 Tracks in-app activity — likes, scroll behavior, stories viewed.",
            "🔗 Integrates Facebook SDK to collect cross-platform data.",
            "🗣️ Records voice input and usage during Reels or Lives.",
        ],
    ),
    (
        "Whatsapp",
        &[
            "📇 Accesses your contact list to auto-populate messaging options.",
            "📊 Collects metadata — who you chat with, how often, and when.",
            "🛰️ Tracks IP, OS version, and battery level for diagnostics.",
            "💾 Syncs media shared (images/audio) for cloud backup.",
            "🔐 Doesn’t access message content (E2E encrypted), but collects usage stats.",
        ],
    ),
    (
        "Facebook",
        &[
            "🧑‍💻 Captures all profile info, posts, likes, comments, and photos.",
            "🌐 Tracks off-platform browsing via Facebook Pixel.",
            "📍 Monitors real-time location to show local events & ads.",
            "🗂️ Gathers device identifiers, cookies, and connection info.",
            "📱 Records app activity like scrolling speed and reading time.",
        ],
    ),
    (
        "Twitter",
        &[
            "📝 Tracks tweets, retweets, quote tweets, and engagement time.",
            "📍 Collects location when geotagging is enabled.",
            "🔎 Logs search queries and hashtags followed.",
            "📲 Captures device data and app version.",
            "🎯 Uses ad interaction behavior to tailor promoted tweets.",
        ],
    ),
    (
        "Snapchat",
        &[
            "🎭 Uses face mapping through AR lenses in real-time.",
            "📸 Continuously accesses camera and mic for content creation.",
            "📡 Collects GPS data for geo-filters and nearby stories.",
            "🧠 Tracks snap views, screenshot attempts, and story replays.",
            "🔗 SDK links with Bitmoji and Snap Ads to collect cross-data.",
        ],
    ),
    (
        "Telegram",
        &[
            "📱 Only collects phone number and basic device data.",
            "👥 Syncs contact list to show known Telegram users.",
            "🌐 Stores IP address for session control and security.",
            "🔐 Doesn’t track message content or usage analytics.",
            "🛡️ End-to-end encrypted messages for secret chats only.",
        ],
    ),
    (
        "Youtube",
        &[
            "📺 Tracks watch history and video interactions (likes/comments).",
            "🔍 Analyzes search queries and autocomplete usage.",
            "🧠 Records pause/skip/rewatch behavior for recommendations.",
            "🎤 Collects voice input if enabled for search.",
            "🌐 Shares data across Google services for ad targeting.",
        ],
    ),
    (
        "Linkedin",
        &[
            "💼 Collects work history, resume uploads, and application data.",
            "📲 Tracks scroll behavior, profile views, and job clicks.",
            "🎯 Uses ad interaction to profile user intent and interest.",
            "🧑‍🤝‍🧑 Monitors connection network and message metadata.",
            "🧠 Analyzes typing speed and mouse movement for fraud detection.",
        ],
    ),
    (
        "Sharechat",
        &[
            "📍 Detects region and language preference automatically.",
            "📱 Collects content interactions like shares, likes, time spent.",
            "🎙️ Uses voice inputs for regional content engagement.",
            "📡 Tracks device info, connection strength, and location.",
            "🎯 Pushes regional trend-based suggestions using behavior modeling.",
        ],
    ),
    (
        "Messenger",
        &[
            "📞 Accesses call logs and audio for call features.",
            "📨 Collects contacts and chat metadata.",
            "📲 Tracks active status and message timing.",
            "🔗 Integrates with Facebook data to create unified profiles.",
            "🔒 Chats may be encrypted depending on user settings.",
        ],
    ),
    (
        "Tiktok",
        &[
            "📹 Uses camera, mic, and device motion sensors.",
            "📍 Collects device location and usage patterns.",
            "🎯 Tracks watch history and user preferences for algorithmic feeds.",
            "🧠 Learns user behavior via interaction timing and content pauses.",
            "📦 Shares data with advertisers and partners via embedded SDKs.",
        ],
    ),
    (
        "Bigo live",
        &[
            "📸 Constant camera/mic usage during live streams.",
            "🌐 IP address and device data logged for moderation.",
            "📊 Tracks interactions — likes, comments, gifts.",
            "🔔 Collects push notification tokens and activity sessions.",
            "🎤 Analyzes voice and screen content for violations or ads.",
        ],
    ),
];

/// Flashcard bullets for a display name; exact match, `None` when uncovered.
pub fn flashcards_for(display_name: &str) -> Option<&'static [&'static str]> {
    FLASHCARDS
        .iter()
        .find(|(name, _)| *name == display_name)
        .map(|(_, bullets)| *bullets)
}

/// Protection tips: (title, body).
pub const TIPS: &[(&str, &str)] = &[
    (
        "Limit Permissions:",
        "Only necessary access—esp. camera, mic, location.",
    ),
    (
        "Review Settings:",
        "Check permissions and privacy controls periodically.",
    ),
    (
        "Use Privacy-Friendly Apps:",
        "Eg: Signal instead of mainstream messengers.",
    ),
    ("Avoid Social Logins:", "Reduces cross-app tracking."),
    ("Clear Data Often:", "Especially for apps you rarely use."),
];

/// Privacy-news items: (title, external link).
pub const NEWS: &[(&str, &str)] = &[
    (
        "Instagram rolls out new privacy dashboard in India",
        "https://economictimes.indiatimes.com/news/international/us/instagram-launches-new-teen-accounts-with-privacy-controls-amid-growing-concerns/articleshow/113436849.cms",
    ),
    (
        "WhatsApp updates location-sharing controls globally",
        "https://faq.whatsapp.com/6780014865351544",
    ),
    (
        "Facebook fined over data policy violations",
        "https://www.nytimes.com/2023/05/22/business/meta-facebook-eu-privacy-fine.html",
    ),
    (
        "Snapchat introduces encrypted backups",
        "https://www.socialsamosa.com/2019/01/snapchat-end-to-end-encryption/",
    ),
    (
        "Twitter tightens data retention rules for user DMs",
        "https://economictimes.indiatimes.com/tech/technology/twitter-restricts-dms-for-unverified-accounts-to-reduce-spam/articleshow/102034511.cms?",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instagram_has_five_bullets_in_fixed_order() {
        let bullets = flashcards_for("Instagram").unwrap();
        assert_eq!(bullets.len(), 5);
        assert!(bullets[0].contains("camera input"));
        assert!(bullets[4].contains("voice input"));
    }

    #[test]
    fn uncovered_app_has_no_flashcards() {
        assert!(flashcards_for("Unknownapp").is_none());
        // Lookup is exact, not case-insensitive.
        assert!(flashcards_for("instagram").is_none());
    }

    #[test]
    fn every_entry_carries_five_bullets() {
        for (name, bullets) in FLASHCARDS {
            assert_eq!(bullets.len(), 5, "flashcards for {name}");
        }
    }

    #[test]
    fn tips_and_news_are_fixed_lists_of_five() {
        assert_eq!(TIPS.len(), 5);
        assert_eq!(NEWS.len(), 5);
        assert!(NEWS.iter().all(|(_, url)| url.starts_with("https://")));
    }
}
