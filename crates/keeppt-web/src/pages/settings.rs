//! Settings page

use leptos::prelude::*;

use crate::components::{use_current_user, EmptyState};

/// Settings page, also the target of the "Account settings" menu item
#[component]
pub fn Settings() -> impl IntoView {
    let hint = if use_current_user().as_value().is_null() {
        "Sign in to change account settings"
    } else {
        "Changes apply to this account only"
    };

    view! {
        <div class="page settings-page">
            <EmptyState title="Settings" description="Account and display preferences." hint />
        </div>
    }
}
