//! Static keyword-to-section table.

/// A trigger keyword and the knowledge-base section it surfaces.
pub struct KeywordEntry {
    /// Lowercase substring that triggers this entry.
    pub keyword: &'static str,
    /// Top-level section label shown above the matched content.
    pub label: &'static str,
    /// Path into the document, one segment per nesting level.
    pub path: &'static [&'static str],
}

/// The full keyword table. Several keywords may surface the same section;
/// matched sections are deduplicated downstream, so table order does not
/// affect the final reply.
pub const KEYWORD_TABLE: &[KeywordEntry] = &[
    KeywordEntry {
        keyword: "price",
        label: "pricing",
        path: &["pricing"],
    },
    KeywordEntry {
        keyword: "cost",
        label: "pricing",
        path: &["pricing"],
    },
    KeywordEntry {
        keyword: "license",
        label: "pricing",
        path: &["pricing"],
    },
    KeywordEntry {
        keyword: "feature",
        label: "features",
        path: &["features"],
    },
    KeywordEntry {
        keyword: "plugin",
        label: "plugins",
        path: &["plugins"],
    },
    KeywordEntry {
        keyword: "reaplug",
        label: "plugins",
        path: &["plugins", "reaPlugs"],
    },
    KeywordEntry {
        keyword: "jsfx",
        label: "plugins",
        path: &["plugins", "jsfx"],
    },
    KeywordEntry {
        keyword: "extension",
        label: "extensions",
        path: &["extensions"],
    },
    KeywordEntry {
        keyword: "sws",
        label: "extensions",
        path: &["extensions", "sws"],
    },
    KeywordEntry {
        keyword: "reapack",
        label: "extensions",
        path: &["extensions", "reaPack"],
    },
    KeywordEntry {
        keyword: "playtime",
        label: "extensions",
        path: &["extensions", "playtime2"],
    },
    KeywordEntry {
        keyword: "realearn",
        label: "extensions",
        path: &["extensions", "reaLearn"],
    },
    KeywordEntry {
        keyword: "script",
        label: "scripting",
        path: &["scripting"],
    },
    KeywordEntry {
        keyword: "lua",
        label: "scripting",
        path: &["scripting"],
    },
    KeywordEntry {
        keyword: "theme",
        label: "themes",
        path: &["themes"],
    },
    KeywordEntry {
        keyword: "shortcut",
        label: "shortcuts",
        path: &["shortcuts"],
    },
    KeywordEntry {
        keyword: "keyboard",
        label: "shortcuts",
        path: &["shortcuts"],
    },
    KeywordEntry {
        keyword: "hotkey",
        label: "shortcuts",
        path: &["shortcuts"],
    },
    KeywordEntry {
        keyword: "loop",
        label: "liveLooping",
        path: &["liveLooping"],
    },
    KeywordEntry {
        keyword: "live",
        label: "liveLooping",
        path: &["liveLooping"],
    },
    KeywordEntry {
        keyword: "super8",
        label: "liveLooping",
        path: &["liveLooping"],
    },
    KeywordEntry {
        keyword: "perform",
        label: "liveLooping",
        path: &["liveLooping"],
    },
    KeywordEntry {
        keyword: "podcast",
        label: "workflows",
        path: &["workflows", "podcast"],
    },
    KeywordEntry {
        keyword: "audiobook",
        label: "workflows",
        path: &["workflows", "audiobook"],
    },
    KeywordEntry {
        keyword: "film",
        label: "workflows",
        path: &["workflows", "filmScoring"],
    },
    KeywordEntry {
        keyword: "video",
        label: "workflows",
        path: &["workflows", "filmScoring"],
    },
    KeywordEntry {
        keyword: "require",
        label: "systemRequirements",
        path: &["systemRequirements"],
    },
    KeywordEntry {
        keyword: "system",
        label: "systemRequirements",
        path: &["systemRequirements"],
    },
    KeywordEntry {
        keyword: "windows",
        label: "systemRequirements",
        path: &["systemRequirements", "windows"],
    },
    KeywordEntry {
        keyword: "mac",
        label: "systemRequirements",
        path: &["systemRequirements", "macos"],
    },
    KeywordEntry {
        keyword: "linux",
        label: "systemRequirements",
        path: &["systemRequirements", "linux"],
    },
    KeywordEntry {
        keyword: "trouble",
        label: "troubleshooting",
        path: &["troubleshooting"],
    },
    KeywordEntry {
        keyword: "problem",
        label: "troubleshooting",
        path: &["troubleshooting"],
    },
    KeywordEntry {
        keyword: "issue",
        label: "troubleshooting",
        path: &["troubleshooting"],
    },
    KeywordEntry {
        keyword: "latency",
        label: "troubleshooting",
        path: &["troubleshooting"],
    },
    KeywordEntry {
        keyword: "learn",
        label: "learningResources",
        path: &["learningResources"],
    },
    KeywordEntry {
        keyword: "tutorial",
        label: "learningResources",
        path: &["learningResources"],
    },
    KeywordEntry {
        keyword: "resource",
        label: "learningResources",
        path: &["learningResources"],
    },
];
