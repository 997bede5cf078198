//! Route-aware navigation sidebar.
//!
//! On wide viewports the panel is pinned in place by the stylesheet. Below
//! [`MOBILE_BREAKPOINT_PX`] it acts as a drawer: the page shell owns the
//! `open` flag, and this component asks to be dismissed (backdrop click,
//! close button, or any route change) through `on_close`. While the drawer
//! is open the page behind it cannot scroll.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// One entry in the documentation navigation.
pub struct NavEntry {
    pub title: &'static str,
    pub path: &'static str,
}

/// Fixed navigation table; order matches the rendered list top to bottom.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { title: "Introduction", path: "/" },
    NavEntry { title: "Getting Started", path: "/getting-started" },
    NavEntry { title: "Installation", path: "/installation" },
    NavEntry { title: "Configuration", path: "/configuration" },
    NavEntry { title: "Commands", path: "/commands" },
    NavEntry { title: "Clients", path: "/clients" },
    NavEntry { title: "Validator Setup", path: "/validator" },
    NavEntry { title: "Requirements", path: "/requirements" },
    NavEntry { title: "Contributing", path: "/contributing" },
];

/// Viewport width below which the sidebar behaves as a drawer. Must match
/// the stylesheet breakpoint.
pub const MOBILE_BREAKPOINT_PX: f64 = 1024.0;

/// Whether `entry_path` should be highlighted for `current_path`.
///
/// The root entry matches only the root route; every other entry matches
/// itself and any deeper sub-path. This is a plain prefix test, so an entry
/// would also match a sibling route that extends its path (`/validator` vs
/// a hypothetical `/validators`). The route table has no such pair.
pub fn is_active(entry_path: &str, current_path: &str) -> bool {
    if entry_path == "/" {
        return current_path == "/";
    }
    current_path.starts_with(entry_path)
}

/// Whether a viewport of `width` CSS pixels gets the drawer behavior.
fn is_mobile_width(width: f64) -> bool {
    width < MOBILE_BREAKPOINT_PX
}

fn viewport_is_mobile() -> bool {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .is_some_and(is_mobile_width)
}

/// Suspend page scrolling while the drawer covers the content.
fn lock_page_scroll() {
    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        let _ = body.style().set_property("overflow", "hidden");
    }
}

/// Release the scroll lock; a no-op if it was never engaged.
fn unlock_page_scroll() {
    if let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        let _ = body.style().remove_property("overflow");
    }
}

#[component]
pub fn Sidebar(
    /// Drawer visibility on small viewports; owned by the page shell.
    #[prop(into)]
    open: Signal<bool>,
    /// Invoked whenever the sidebar wants to be dismissed.
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let pathname = use_location().pathname;

    // Navigation implicitly dismisses the drawer.
    let last_path = StoredValue::new(pathname.get_untracked());
    Effect::new(move || {
        let path = pathname.get();
        if path != last_path.get_value() {
            last_path.set_value(path);
            if open.get_untracked() {
                on_close.run(());
            }
        }
    });

    // The lock follows the open flag; wide viewports never engage it.
    Effect::new(move || {
        if open.get() && viewport_is_mobile() {
            lock_page_scroll();
        } else {
            unlock_page_scroll();
        }
    });
    // Teardown is an exit path too: never leak a locked page.
    on_cleanup(unlock_page_scroll);

    view! {
        <Show when=move || open.get()>
            <div class="sidebar-backdrop" on:click=move |_| on_close.run(()) />
        </Show>
        <aside class=move || if open.get() { "sidebar sidebar-open" } else { "sidebar" }>
            <div class="sidebar-header">
                <a href="/" class="sidebar-brand">
                    <h1 class="sidebar-title">"starknode-kit"</h1>
                    <p class="sidebar-subtitle">"Documentation"</p>
                </a>
                <button class="sidebar-close" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
            </div>
            <nav class="sidebar-nav">
                {NAV_ENTRIES
                    .iter()
                    .map(|entry| {
                        let path = entry.path;
                        view! {
                            <a
                                href=path
                                class=move || {
                                    if is_active(path, &pathname.get()) {
                                        "nav-link active"
                                    } else {
                                        "nav-link"
                                    }
                                }
                            >
                                {entry.title}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn active_titles(current_path: &str) -> Vec<&'static str> {
        NAV_ENTRIES
            .iter()
            .filter(|entry| is_active(entry.path, current_path))
            .map(|entry| entry.title)
            .collect()
    }

    #[test]
    fn root_entry_matches_only_root() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/", "/validator"));
        assert!(!is_active("/", "/getting-started"));
    }

    #[test]
    fn entries_match_their_own_path_and_sub_paths() {
        assert!(is_active("/validator", "/validator"));
        assert!(is_active("/validator", "/validator/advanced"));
        assert!(!is_active("/validator", "/commands"));
    }

    #[test]
    fn prefix_match_extends_to_sibling_spellings() {
        // Known consequence of the plain prefix rule; the real route table
        // contains no such sibling pair.
        assert!(is_active("/validator", "/validators"));
    }

    #[test]
    fn exactly_one_entry_active_per_route() {
        assert_eq!(active_titles("/"), vec!["Introduction"]);
        assert_eq!(active_titles("/validator"), vec!["Validator Setup"]);
        assert_eq!(active_titles("/validator/advanced"), vec!["Validator Setup"]);
        assert_eq!(active_titles("/commands"), vec!["Commands"]);
    }

    #[test]
    fn unknown_route_highlights_nothing() {
        assert_eq!(active_titles("/no-such-page"), Vec::<&str>::new());
    }

    #[test]
    fn nav_table_paths_are_unique_and_root_first() {
        assert_eq!(NAV_ENTRIES.len(), 9);
        assert_eq!(NAV_ENTRIES[0].path, "/");
        for (i, a) in NAV_ENTRIES.iter().enumerate() {
            for b in &NAV_ENTRIES[i + 1..] {
                assert_ne!(a.path, b.path);
            }
        }
    }

    #[test]
    fn breakpoint_classification() {
        assert!(is_mobile_width(375.0));
        assert!(is_mobile_width(1023.9));
        assert!(!is_mobile_width(1024.0));
        assert!(!is_mobile_width(1920.0));
    }
}
