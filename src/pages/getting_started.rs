// Getting Started page - install, add clients, start, monitor
use crate::components::CodeBlock;
use leptos::prelude::*;

#[component]
pub fn GettingStartedPage() -> impl IntoView {
    view! {
        <article class="prose">
            <h1>"Getting Started"</h1>
            <p class="lead">
                "Get your Ethereum and Starknet nodes up and running in a few minutes."
            </p>

            <h2>"Prerequisites"</h2>
            <p>"Before you begin, make sure you have:"</p>
            <ul>
                <li>"A machine that meets the "<a href="/requirements">"hardware requirements"</a></li>
                <li>"A stable internet connection with sufficient bandwidth"</li>
                <li>"Enough free disk space for the networks you plan to sync"</li>
            </ul>

            <h2>"Installation"</h2>
            <p>"Install starknode-kit with the install script:"</p>
            <CodeBlock code=r#"/bin/bash -c "$(curl -sSL https://raw.githubusercontent.com/thebuidl-grid/starknode-kit/main/install.sh)""# />
            <p>"Then generate a fresh configuration file:"</p>
            <CodeBlock code="starknode-kit config new" />

            <h2>"Add Clients"</h2>
            <p>"Add an execution and consensus client pair:"</p>
            <CodeBlock code="starknode-kit add --consensus_client lighthouse --execution_client geth" />
            <p>"Or with Reth and Prysm:"</p>
            <CodeBlock code="starknode-kit add --consensus_client prysm --execution_client reth" />

            <h3>"Starknet Client"</h3>
            <p>"To add a Starknet client (Juno):"</p>
            <CodeBlock code="starknode-kit add --starknet_client juno" />

            <h2>"Configure Network"</h2>
            <p>"Pick the network your nodes should join:"</p>
            <CodeBlock code="starknode-kit config set network sepolia" />

            <h2>"Start Your Nodes"</h2>
            <p>"Start every configured client at once:"</p>
            <CodeBlock code="starknode-kit start" />
            <div class="callout callout-warning">
                <p><strong>"⚠️ Important"</strong></p>
                <p>"Initial sync can take from hours to days depending on the network and your hardware."</p>
            </div>
            <p>"To run a specific client:"</p>
            <CodeBlock code="starknode-kit run juno" />

            <h2>"Monitor Your Nodes"</h2>
            <p>"Open the built-in monitoring dashboard:"</p>
            <CodeBlock code="starknode-kit monitor" />
            <p>"The dashboard shows node sync status, current block height, peer connections, and system resource usage in real time."</p>

            <h2>"Check Status"</h2>
            <p>"For a quick snapshot without the dashboard:"</p>
            <CodeBlock code="starknode-kit status" />

            <div class="callout">
                <h3>"📖 Next Steps"</h3>
                <p>
                    "Tune your setup on the "<a href="/configuration">"Configuration"</a>
                    " page, or head straight to "<a href="/validator">"Validator Setup"</a>"."
                </p>
            </div>
        </article>
    }
}
