pub const PERFORMANCE_METRICS: [&str; 4] = [
    "first-contentful-paint",
    "largest-contentful-paint",
    "total-blocking-time",
    "cumulative-layout-shift",
];

pub const PWA_AUDITS: [&str; 6] = [
    "installable-manifest",
    "service-worker",
    "splash-screen",
    "themed-omnibox",
    "content-width",
    "viewport",
];

/// Audits reported as plain PASS/FAIL in the summary.
pub const PWA_BOOLEAN_AUDITS: [(&str, &str); 2] = [
    ("installable-manifest", "Installable Manifest"),
    ("service-worker", "Service Worker"),
];

pub const COLOR_CONTRAST: &str = "color-contrast";
pub const LCP_ELEMENT: &str = "largest-contentful-paint-element";
pub const USES_REL_PRELOAD: &str = "uses-rel-preload";
pub const LAYOUT_SHIFT_ELEMENTS: &str = "layout-shift-elements";
pub const MODERN_IMAGE_FORMATS: &str = "modern-image-formats";

pub const PWA_CATEGORY: &str = "pwa";

pub const DETAILS_SUMMARY_LIMIT: usize = 200;
pub const ELLIPSIS: &str = "...";

/// Placeholder rendered for absent values.
pub const ABSENT: &str = "n/a";

/// UTF-8 text re-read as Latin-1/Windows-1252. Longer sequences first so a
/// line is attributed to the most specific match.
pub const MOJIBAKE_SEQUENCES: [&str; 4] = ["Ã“", "â ³", "Ã", "Â"];

pub const LINE_PREVIEW_CHARS: usize = 50;
