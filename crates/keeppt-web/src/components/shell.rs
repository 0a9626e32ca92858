//! Dashboard shell: header, collapsible sidebar and the page content slot

use keeppt_core::{
    avatar_url, ColorScheme, CurrentUser, ShellAction, ShellConfig, ShellState, UserId,
    ViewportClass, NAVIGATION,
};
use leptos::prelude::*;

use super::header::Header;
use super::sidebar::Sidebar;
use crate::theme::{layout_class, scheme_class};

/// Full-page layout wrapping the routed page.
///
/// All collaborators are passed in: the current path and `on_navigate` come
/// from the router, `viewport`, `compact` and `color_scheme` from the layout
/// hooks, `user_id` from local storage. `ShellState` starts closed on every
/// mount. The root carries the layout class so the stylesheet never measures
/// the window itself.
#[component]
pub fn DashboardShell(
    config: ShellConfig,
    /// Current resolved route path
    #[prop(into)]
    current_path: Signal<String>,
    #[prop(into)] viewport: Signal<ViewportClass>,
    /// Viewport below `xs`: the user menu is hidden
    #[prop(into, optional)]
    compact: MaybeProp<bool>,
    #[prop(into)] color_scheme: Signal<ColorScheme>,
    /// Session user, handed to page content untouched
    user: CurrentUser,
    /// Stored avatar id, if any
    user_id: Option<UserId>,
    /// Routing collaborator, fire-and-forget
    on_navigate: Callback<String>,
    children: Children,
) -> impl IntoView {
    provide_context(user);

    let avatar = avatar_url(&config.avatar_url_template, user_id.as_ref());
    let brand = config.brand.clone();
    let badge = config.badge.clone();

    let state = RwSignal::new(ShellState::new());
    let config = StoredValue::new(config);

    let dispatch = shell_dispatch(state, config, on_navigate);

    let sidebar_visible = Signal::derive(move || state.get().sidebar_visible(viewport.get()));

    view! {
        <div class=move || {
            let compact = if compact.get().unwrap_or(false) { " shell-compact" } else { "" };
            format!(
                "shell {} {}{compact}",
                layout_class(viewport.get()),
                scheme_class(color_scheme.get())
            )
        }>
            <Header viewport state brand badge avatar dispatch />
            <div class="shell-body">
                <Sidebar visible=sidebar_visible current_path entries=NAVIGATION dispatch />
                <main class="shell-main">{children()}</main>
            </div>
        </div>
    }
}

/// Reduce each action against the shell state and hand any navigation to
/// `on_navigate`
fn shell_dispatch(
    state: RwSignal<ShellState>,
    config: StoredValue<ShellConfig>,
    on_navigate: Callback<String>,
) -> Callback<ShellAction> {
    Callback::new(move |action: ShellAction| {
        let navigator = |path: &str| on_navigate.run(path.to_string());
        config.with_value(|config| {
            state.update(|state| state.dispatch(action, config, &navigator));
        });
    })
}

/// Session user provided by the enclosing [`DashboardShell`]
pub fn use_current_user() -> CurrentUser {
    use_context::<CurrentUser>().unwrap_or_default()
}
