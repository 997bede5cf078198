//! Code sample block with a copy-to-clipboard button.

use std::time::Duration;

use leptos::prelude::*;

/// How long the "Copied" confirmation stays on the button.
const COPY_RESET_DELAY: Duration = Duration::from_millis(2000);

/// Button caption for the given confirmation state.
fn copy_label(copied: bool) -> &'static str {
    if copied { "✓ Copied!" } else { "Copy" }
}

/// A command or code sample rendered verbatim, with a button that writes
/// the exact text to the system clipboard.
///
/// The `language` tag is cosmetic; it only feeds the `language-*` class on
/// the `<code>` element.
#[component]
pub fn CodeBlock(
    /// The exact text to display and copy.
    #[prop(into)]
    code: String,
    /// Cosmetic language tag, defaults to bash.
    #[prop(into, default = String::from("bash"))]
    language: String,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let reset_timer: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

    // Leaving the page must not fire a reset against a dropped signal.
    on_cleanup(move || {
        if let Some(handle) = reset_timer.get_value() {
            handle.clear();
        }
    });

    let clipboard_text = code.clone();
    let copy = move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        // Fire-and-forget: a failed clipboard write is silent.
        let _ = window.navigator().clipboard().write_text(&clipboard_text);
        set_copied.set(true);
        // A repeat click restarts the countdown; the superseded timer must
        // not flip the label back early.
        if let Some(stale) = reset_timer.get_value() {
            stale.clear();
        }
        if let Ok(handle) = set_timeout_with_handle(move || set_copied.set(false), COPY_RESET_DELAY)
        {
            reset_timer.set_value(Some(handle));
        }
    };

    let code_class = format!("language-{language}");

    view! {
        <div class="code-block">
            <button class="code-copy-btn" on:click=copy>
                {move || copy_label(copied.get())}
            </button>
            <pre class="code-block-pre">
                <code class=code_class>{code}</code>
            </pre>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn label_tracks_confirmation_state() {
        assert_eq!(copy_label(false), "Copy");
        assert_eq!(copy_label(true), "✓ Copied!");
    }

    #[test]
    fn reset_delay_is_two_seconds() {
        assert_eq!(COPY_RESET_DELAY, Duration::from_millis(2000));
    }
}
