/// Default location of the gas.js library.
pub const DEFAULT_SCRIPT_URL: &str = "//cdnjs.cloudflare.com/ajax/libs/gas/1.10.1/gas.min.js";

pub const SET_ACCOUNT: &str = "_setAccount";
pub const SET_DOMAIN_NAME: &str = "_setDomainName";
pub const SET_ALLOW_LINKER: &str = "_setAllowLinker";
pub const MULTI_DOMAIN: &str = "_gasMultiDomain";
pub const MULTI_DOMAIN_TRIGGER: &str = "click";

/// Methods that keep every registration instead of overwriting a single slot.
pub const MULTI_METHODS: [&str; 2] = [SET_ACCOUNT, SET_DOMAIN_NAME];

/// Separates a tracker namespace from the method name (`custom._setAccount`).
pub const NAMESPACE_SEPARATOR: char = '.';

pub(crate) const PUSH_PLACEHOLDER: &str = "[PUSH]";

/// Calls registered by [`GasTag::defaults`](crate::gas::GasTag::defaults) after the account and
/// domain, in emission order. The flag marks trackers pushed with `{force: true}`.
pub(crate) const DEFAULT_TRACKERS: [(&str, bool); 8] = [
    ("_trackPageview", false),
    ("_gasTrackForms", false),
    ("_gasTrackOutboundLinks", false),
    ("_gasTrackMaxScroll", false),
    ("_gasTrackDownloads", false),
    ("_gasTrackYoutube", true),
    ("_gasTrackVimeo", true),
    ("_gasTrackMailto", false),
];
