//! Built-in bundle table

/// Bundle name and its sources, in build order.
pub static BUILTIN_BUNDLES: &[(&str, &[&str])] = &[
    ("vkbm-frontend.min.css", &["variables.scss", "common.scss"]),
    (
        "vkbm-auth.min.css",
        &[
            "variables.scss",
            "buttons.scss",
            "alert.scss",
            "auth-forms.scss",
        ],
    ),
    (
        "vkbm-editor.min.css",
        &[
            "variables.scss",
            "utility.scss",
            "buttons.scss",
            "alert.scss",
            "auth-forms.scss",
            "admin-editor-fixes.scss",
            "common.scss",
        ],
    ),
    (
        "vkbm-admin.min.css",
        &[
            "variables.scss",
            "utility.scss",
            "buttons.scss",
            "admin-notice.scss",
            "admin-table.scss",
            "admin-schedule.scss",
            "admin-provider-settings.scss",
            "admin-shift-editor.scss",
            "admin-shift-bulk-create.scss",
            "admin-shift-dashboard.scss",
            "admin-service-menu-quick-edit.scss",
            "admin-post-order.scss",
            "admin-term-order.scss",
            "admin-style-guide.scss",
            "admin-core.scss",
            "common.scss",
        ],
    ),
];
