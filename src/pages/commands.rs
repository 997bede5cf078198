// Commands reference page
use crate::components::CodeBlock;
use leptos::prelude::*;

/// Command summary table rows.
const COMMANDS: &[(&str, &str)] = &[
    ("add", "Add an Ethereum or Starknet client to the config"),
    ("completion", "Generate the autocompletion script for the specified shell"),
    ("config", "Create, show, and update your Starknet node configuration"),
    ("monitor", "Launch real-time monitoring dashboard"),
    ("remove", "Remove a specified resource"),
    ("run", "Run a specific local infrastructure service"),
    ("start", "Run the configured Ethereum clients"),
    ("status", "Display status of running clients"),
    ("stop", "Stop the configured Ethereum clients"),
    ("update", "Check for and install client updates"),
    ("validator", "Manage the Starknet validator client"),
    ("version", "Show version of starknode-kit or a specific client"),
];

#[component]
pub fn CommandsPage() -> impl IntoView {
    view! {
        <article class="prose">
            <h1>"Commands Reference"</h1>
            <p class="lead">
                "Complete reference for all starknode-kit commands. Each command helps you \
                 manage different aspects of your Ethereum and Starknet nodes."
            </p>

            <h2>"Command Overview"</h2>
            <table class="command-table">
                <thead>
                    <tr>
                        <th>"Command"</th>
                        <th>"Description"</th>
                    </tr>
                </thead>
                <tbody>
                    {COMMANDS
                        .iter()
                        .map(|(name, description)| {
                            view! {
                                <tr>
                                    <td><code>{*name}</code></td>
                                    <td>{*description}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>

            <h2>"Quick Examples"</h2>
            <h3>"Add Clients"</h3>
            <CodeBlock code="starknode-kit add --consensus_client lighthouse --execution_client geth" />
            <h3>"Configure Network"</h3>
            <CodeBlock code="starknode-kit config set network sepolia" />
            <h3>"Start and Stop"</h3>
            <CodeBlock code="starknode-kit start" />
            <CodeBlock code="starknode-kit stop" />
            <h3>"Monitor Nodes"</h3>
            <CodeBlock code="starknode-kit monitor" />
            <h3>"Check Status"</h3>
            <CodeBlock code="starknode-kit status" />
            <h3>"Run a Single Service"</h3>
            <CodeBlock code="starknode-kit run juno" />
            <h3>"Check Version"</h3>
            <CodeBlock code="starknode-kit version" />

            <h2>"Getting Help"</h2>
            <p>"Every command accepts "<code>"--help"</code>" for detailed flags and usage:"</p>
            <CodeBlock code="starknode-kit add --help" />

            <h2>"Shell Completion"</h2>
            <p>"Generate a completion script for your shell:"</p>
            <CodeBlock code="starknode-kit completion zsh > ~/.zsh/completions/_starknode-kit" />

            <div class="callout">
                <h3>"📖 Next Steps"</h3>
                <p>"See the "<a href="/configuration">"Configuration"</a>" page for everything behind "<code>"config set"</code>"."</p>
            </div>
        </article>
    }
}
