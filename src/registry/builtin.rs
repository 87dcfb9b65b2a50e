//! Built-in bundle table
//!
//! Must be kept in sync by hand with what the dependency tree actually ships.

use crate::bundle::BundleSpec;

/// Directory most bundles are staged into
pub const VENDOR_DIR: &str = "vendor";

/// Get default bundle definitions, in registration order
pub fn default_bundles() -> Vec<(String, BundleSpec)> {
    vec![
        // React
        vendor("react", "node_modules/react/dist", &["react.js"]),
        vendor("reactDom", "node_modules/react-dom/dist", &["react-dom.js"]),
        vendor("qrcodejs", "node_modules/qrcodejs", &["qrcode.min.js"]),
        vendor(
            "tablesorter",
            "node_modules/tablesorter/dist/js",
            &["jquery.tablesorter.min.js"],
        ),
        // Test harness
        vendor("chai", "node_modules/chai", &["chai.js"]),
        vendor("chai-dom", "node_modules/chai-dom", &["chai-dom.js"]),
        vendor("mocha", "node_modules/mocha", &["mocha.css", "mocha.js"]),
        vendor("core-js", "node_modules/core-js/client", &["core.js"]),
        vendor(
            "ua-parser-js",
            "node_modules/ua-parser-js/dist",
            &["ua-parser.min.js"],
        ),
        vendor("moment", "node_modules/moment/min", &["moment.min.js"]),
        vendor(
            "moment-range",
            "node_modules/moment-range/dist",
            &["moment-range.js"],
        ),
        vendor(
            "simple-statistics",
            "node_modules/simple-statistics/dist",
            &["simple-statistics.min.js"],
        ),
        vendor(
            "@cliqz/adblocker",
            "node_modules/@cliqz/adblocker",
            &["adblocker.umd.js", "adblocker-cosmetics.umd.js"],
        ),
        // Whole dist directory, staged under its own name
        (
            "cliqz-history".to_string(),
            BundleSpec::new("node_modules/cliqz-history/dist", "cliqz-history"),
        ),
        vendor(
            "@cliqz-oss/dexie",
            "node_modules/@cliqz-oss/dexie/dist",
            &["dexie.min.js"],
        ),
        vendor(
            "@cliqz-oss/pouchdb",
            "node_modules/@cliqz-oss/pouchdb/dist",
            &["pouchdb.js"],
        ),
        vendor("jquery", "node_modules/jquery/dist", &["jquery.min.js"]),
        vendor(
            "handlebars",
            "node_modules/handlebars/dist",
            &["handlebars.min.js"],
        ),
        vendor("mathjs", "node_modules/mathjs/dist", &["math.min.js"]),
        vendor("rxjs", "node_modules/rxjs/bundles", &["Rx.min.js"]),
        vendor("pako", "node_modules/pako/dist", &["pako.min.js"]),
        // Tooltipster ships scripts, styles and themes from separate directories
        vendor(
            "tooltipster-js",
            "node_modules/tooltipster/dist/js",
            &["tooltipster.bundle.min.js"],
        ),
        vendor(
            "tooltipster-css",
            "node_modules/tooltipster/dist/css",
            &["tooltipster.bundle.min.css"],
        ),
        vendor(
            "tooltipster-sideTip-theme",
            "node_modules/tooltipster/dist/css/plugins/tooltipster/sideTip/themes",
            &["tooltipster-sideTip-shadow.min.css"],
        ),
        vendor("tldjs", "node_modules/tldjs", &["tld.min.js"]),
    ]
}

fn vendor(name: &str, src: &str, include: &[&str]) -> (String, BundleSpec) {
    (
        name.to_string(),
        BundleSpec::new(src, VENDOR_DIR).with_include(include.iter().copied()),
    )
}
