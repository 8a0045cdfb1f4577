//! Application configuration.
//!
//! Centralized configuration for the Defect Scan frontend.
//! Everything here is fixed at build time: set `DEFECT_SCAN_API_BASE`
//! when running `trunk build` to point at another analysis service.

use url::Url;

/// Local development analysis service.
pub const DEV_API_BASE: &str = "http://localhost:3001";

/// Deployed analysis service.
pub const PROD_API_BASE: &str = "https://objects-defect-detection-backend-production.up.railway.app";

/// Analysis service base URL.
///
/// `DEFECT_SCAN_API_BASE` wins when set at build time, otherwise debug
/// builds talk to the local service and release builds to the deployed one.
pub const API_BASE: &str = match option_env!("DEFECT_SCAN_API_BASE") {
    Some(url) => url,
    None => {
        if cfg!(debug_assertions) {
            DEV_API_BASE
        } else {
            PROD_API_BASE
        }
    }
};

/// Batch analysis endpoint, relative to [`API_BASE`].
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Path segment under which the service serves processed images.
pub const UPLOADS_PATH: &str = "/uploads/";

/// Multipart field name, repeated once per uploaded image.
pub const UPLOAD_FIELD: &str = "files";

/// Declared content type prefix every uploaded file must carry.
pub const IMAGE_MIME_PREFIX: &str = "image/";

/// A remote location images may be rendered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RemotePattern {
    pub protocol: &'static str,
    pub hostname: &'static str,
    /// `None` means the scheme's default port.
    pub port: Option<u16>,
    pub pathname_prefix: &'static str,
}

/// Image-domain allowlist for result thumbnails and full-size images.
///
/// The configured [`API_BASE`] is always allowed on top of these.
pub const IMAGE_SOURCES: &[RemotePattern] = &[
    RemotePattern {
        protocol: "http",
        hostname: "localhost",
        port: Some(3001),
        pathname_prefix: "/uploads/",
    },
    RemotePattern {
        protocol: "https",
        hostname: "objects-defect-detection-backend-production.up.railway.app",
        port: None,
        pathname_prefix: "/uploads/",
    },
];

impl RemotePattern {
    /// Check a parsed URL against this pattern.
    ///
    /// `Url` has already resolved dot segments and dropped default ports.
    pub fn matches(&self, url: &Url) -> bool {
        url.scheme() == self.protocol
            && url
                .host_str()
                .is_some_and(|host| host.eq_ignore_ascii_case(self.hostname))
            && url.port() == self.port
            && url.path().starts_with(self.pathname_prefix)
    }
}

/// Whether `url` sits under `{api_base}/uploads/`.
fn is_under_uploads(api_base: &str, url: &Url) -> bool {
    let Ok(base) = Url::parse(api_base) else {
        return false;
    };
    let prefix = format!("{}{}", base.path().trim_end_matches('/'), UPLOADS_PATH);

    url.scheme() == base.scheme()
        && url.host_str() == base.host_str()
        && url.port() == base.port()
        && url.path().starts_with(&prefix)
}

/// Whether `url` may be rendered as an image for a service at `api_base`.
pub fn is_allowed_for(api_base: &str, url: &str) -> bool {
    let Ok(url) = Url::parse(url) else {
        return false;
    };
    IMAGE_SOURCES.iter().any(|pattern| pattern.matches(&url)) || is_under_uploads(api_base, &url)
}

/// Whether `url` may be rendered as an image.
pub fn is_allowed_image_url(url: &str) -> bool {
    is_allowed_for(API_BASE, url)
}

/// Build `{base}/api/analyze`.
pub fn analyze_url(api_base: &str) -> String {
    format!("{}{}", api_base.trim_end_matches('/'), ANALYZE_PATH)
}

/// Build `{base}/uploads/{path}` for a path returned by the service.
pub fn uploads_url(api_base: &str, path: &str) -> String {
    format!("{}{}{}", api_base.trim_end_matches('/'), UPLOADS_PATH, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uploads_url() {
        assert_eq!(
            uploads_url("http://localhost:3001", "abc/thumb_1.jpg"),
            "http://localhost:3001/uploads/abc/thumb_1.jpg"
        );
        // Trailing slash on the base is ignored
        assert_eq!(
            uploads_url("http://localhost:3001/", "a.png"),
            "http://localhost:3001/uploads/a.png"
        );
    }

    #[test]
    fn test_analyze_url() {
        assert_eq!(analyze_url(PROD_API_BASE), format!("{}/api/analyze", PROD_API_BASE));
        assert_eq!(analyze_url("http://x/"), "http://x/api/analyze");
    }

    #[test]
    fn test_allowlist_accepts_both_backends() {
        assert!(is_allowed_image_url("http://localhost:3001/uploads/a.png"));
        assert!(is_allowed_image_url(&uploads_url(PROD_API_BASE, "thumb_a.png")));
    }

    #[test]
    fn test_allowlist_rejects_mismatches() {
        // Wrong port
        assert!(!is_allowed_image_url("http://localhost:8080/uploads/a.png"));
        // Explicit port where none is expected
        assert!(!is_allowed_image_url(
            "https://objects-defect-detection-backend-production.up.railway.app:8443/uploads/a.png"
        ));
        // Wrong protocol
        assert!(!is_allowed_image_url("https://localhost:3001/uploads/a.png"));
        // Outside the uploads prefix
        assert!(!is_allowed_image_url("http://localhost:3001/api/analyze"));
        // Unknown host
        assert!(!is_allowed_image_url("http://example.com/uploads/a.png"));
        // Not a URL
        assert!(!is_allowed_image_url("uploads/a.png"));
    }

    #[test]
    fn test_dot_segments_cannot_leave_uploads() {
        assert!(!is_allowed_image_url(&uploads_url(DEV_API_BASE, "../api/analyze")));
        assert!(!is_allowed_image_url(&uploads_url(DEV_API_BASE, "a/../../api/analyze")));
        assert!(!is_allowed_image_url(&uploads_url(DEV_API_BASE, "%2e%2e/api/analyze")));
        assert!(!is_allowed_image_url(&uploads_url(PROD_API_BASE, "../index.html")));

        // Staying inside the prefix is fine
        assert!(is_allowed_image_url(&uploads_url(DEV_API_BASE, "batch/../thumb_a.png")));
    }

    #[test]
    fn test_default_port_is_normalized() {
        assert!(is_allowed_image_url(
            "https://objects-defect-detection-backend-production.up.railway.app:443/uploads/a.png"
        ));
        assert!(!is_allowed_image_url("http://localhost/uploads/a.png"));
    }

    #[test]
    fn test_configured_base_is_always_allowed() {
        for path in ["a.png", "batch-7/thumb_one.jpg", "my photo.jpg"] {
            assert!(is_allowed_image_url(&uploads_url(API_BASE, path)), "{}", path);
        }
    }

    #[test]
    fn test_custom_base_allows_its_own_uploads() {
        let base = "http://10.0.0.5:8080";
        assert!(is_allowed_for(base, &uploads_url(base, "a.png")));
        assert!(!is_allowed_for(base, "http://10.0.0.5:8081/uploads/a.png"));
        assert!(!is_allowed_for(base, &uploads_url(base, "../api/analyze")));

        // A base mounted under a path prefix keeps that prefix
        let base = "https://example.com/defects/";
        assert!(is_allowed_for(base, &uploads_url(base, "a.png")));
        assert!(!is_allowed_for(base, "https://example.com/uploads/a.png"));

        // An unparseable base only falls back to the static list
        assert!(!is_allowed_for("not a url", "http://10.0.0.5:8080/uploads/a.png"));
        assert!(is_allowed_for("not a url", "http://localhost:3001/uploads/a.png"));
    }

    #[test]
    fn test_api_base_is_one_of_known_targets_by_default() {
        if option_env!("DEFECT_SCAN_API_BASE").is_none() {
            assert!(API_BASE == DEV_API_BASE || API_BASE == PROD_API_BASE);
        }
    }
}
