//! Constants shared across the workspace.

/// Default depth budget for field signatures. One level of nesting is expanded.
pub const DEFAULT_MAX_DEPTH: usize = 2;

/// Default scan cadence of the polling driver, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

/// View names carrying this prefix are user templates.
pub const TEMPLATE_PREFIX: &str = "Template.";

/// Prefix given to collections found in the host's namespaced scope.
pub const NAMESPACE_PREFIX: &str = "Meteor.";

/// Separator between signature paths in a shape key.
pub const SHAPE_KEY_SEPARATOR: &str = ",";

/// Rendering of an explicitly undefined subscription parameter.
pub const UNDEFINED_MARKER: &str = "undefined";

/// Built-in and infrastructure templates never reported.
pub const IGNORED_TEMPLATES: &[&str] = &[
    "body",
    "__body__",
    "__dynamic",
    "__dynamicWithDataContext",
    "__DynamicTemplateError__",
    "__IronDefaultLayout__",
    "__IronRouterNotFound__",
    "__IronRouterNoRoutes__",
    "ensureSignedIn",
    "atError",
    "atForm",
    "atInput",
    "atTextInput",
    "atCheckboxInput",
    "atSelectInput",
    "atRadioInput",
    "atHiddenInput",
    "atMessage",
    "atNavButton",
    "atOauth",
    "atPwdForm",
    "atPwdFormBtn",
    "atPwdLink",
    "atReCaptcha",
    "atResult",
    "atSep",
    "atSigninLink",
    "atSignupLink",
    "atSocial",
    "atTermsLink",
    "atResendVerificationEmailLink",
    "atTitle",
    "fullPageAtForm",
    "reactiveTable",
    "reactiveTableFilter",
];

/// Dictionary methods the host mixes into helper and event maps.
pub const INTERNAL_MEMBER_NAMES: &[&str] = &["has", "get", "set"];
