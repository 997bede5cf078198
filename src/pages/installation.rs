// Installation page - install script, from source, verify, troubleshoot
use crate::components::CodeBlock;
use leptos::prelude::*;

#[component]
pub fn InstallationPage() -> impl IntoView {
    view! {
        <article class="prose">
            <h1>"Installation"</h1>
            <p class="lead">"Install starknode-kit with the install script or build it from source."</p>

            <h2>"Install Script"</h2>
            <p>"The recommended way on macOS and Linux:"</p>
            <CodeBlock code=r#"/bin/bash -c "$(curl -sSL https://raw.githubusercontent.com/thebuidl-grid/starknode-kit/main/install.sh)""# />
            <p>"The script downloads the latest release binary and places it on your PATH."</p>

            <h2>"From Source"</h2>
            <h3>"1. Install with Go"</h3>
            <CodeBlock code=r#"go install -ldflags="-X 'github.com/thebuidl-grid/starknode-kit/pkg/versions.StarkNodeVersion=main'" github.com/thebuidl-grid/starknode-kit@latest"# />
            <h3>"2. Build and Install"</h3>
            <CodeBlock code="git clone https://github.com/thebuidl-grid/starknode-kit.git
cd starknode-kit
make install" />

            <h2>"Verify Installation"</h2>
            <CodeBlock code="starknode-kit --help" />
            <p>"You should see the command overview with all available subcommands."</p>

            <h2>"Initial Setup"</h2>
            <p>"Create the default configuration before anything else:"</p>
            <CodeBlock code="starknode-kit config new" />
            <p>"This writes "<code>"~/.starknode-kit/starknode.yml"</code>" with sensible defaults."</p>

            <h2>"Uninstallation"</h2>
            <p>"Remove the binary and, if you want a clean slate, the configuration directory:"</p>
            <CodeBlock code="rm /usr/local/bin/starknode-kit
rm -rf ~/.starknode-kit" />
            <div class="callout callout-warning">
                <p><strong>"⚠️ Note"</strong></p>
                <p>"Removing "<code>"~/.starknode-kit"</code>" also deletes downloaded client data."</p>
            </div>

            <h2>"Troubleshooting"</h2>
            <h3>"Command not found"</h3>
            <p>"Make sure the install location is on your PATH:"</p>
            <CodeBlock code="export PATH=$PATH:/usr/local/bin" />
            <h3>"Permission denied"</h3>
            <p>"Re-run the install script with a user that can write to the install directory, or pick a user-writable prefix."</p>

            <div class="callout">
                <h3>"📖 Next Steps"</h3>
                <p>"Continue with "<a href="/getting-started">"Getting Started"</a>"."</p>
            </div>
        </article>
    }
}
