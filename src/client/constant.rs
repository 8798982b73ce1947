pub const SITE_NAME: &str = "Site Shell";
pub const SITE_DESCRIPTION: &str = "A persistent header above whatever the page supplies.";

/// Platform features compiled into this build.
pub const PLATFORMS: &[&str] = &[
    #[cfg(feature = "web")]
    "web",
    #[cfg(feature = "desktop")]
    "desktop",
    #[cfg(feature = "mobile")]
    "mobile",
    #[cfg(feature = "server")]
    "server",
];
