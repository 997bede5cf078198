// Introduction page - welcome, quick start, feature overview
use crate::components::CodeBlock;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <article class="prose">
            <h1>"Welcome to starknode-kit"</h1>
            <p class="lead">
                "A powerful command-line tool to help developers and node operators easily \
                 set up, manage, and maintain Ethereum and Starknet nodes."
            </p>

            <div class="card-grid">
                <a href="/getting-started" class="card">
                    <h3>"🚀 Getting Started"</h3>
                    <p>"Learn how to install and configure starknode-kit for your node setup."</p>
                </a>
                <a href="/commands" class="card">
                    <h3>"📘 Commands"</h3>
                    <p>"Explore all available commands and their usage."</p>
                </a>
                <a href="/configuration" class="card">
                    <h3>"⚙️ Configuration"</h3>
                    <p>"Configure your Ethereum and Starknet clients."</p>
                </a>
                <a href="/validator" class="card">
                    <h3>"🔐 Validator Setup"</h3>
                    <p>"Set up and manage your Starknet validator node."</p>
                </a>
            </div>

            <h2>"Quick Start"</h2>
            <p>"Install starknode-kit with a single command:"</p>
            <CodeBlock code=r#"/bin/bash -c "$(curl -sSL https://raw.githubusercontent.com/thebuidl-grid/starknode-kit/main/install.sh)""# />
            <p>"Generate your configuration file:"</p>
            <CodeBlock code="starknode-kit config new" />
            <p>"Add your first client pair:"</p>
            <CodeBlock code="starknode-kit add --consensus_client lighthouse --execution_client geth" />

            <h2>"Key Features"</h2>
            <ul>
                <li><strong>"Easy Setup"</strong>" — get your node running in minutes"</li>
                <li><strong>"Multi-Client Support"</strong>" — works with Geth, Reth, Lighthouse, Prysm, and Juno"</li>
                <li><strong>"Real-time Monitoring"</strong>" — built-in dashboard to monitor your nodes"</li>
                <li><strong>"Auto Updates"</strong>" — keep your clients up to date automatically"</li>
                <li><strong>"Validator Management"</strong>" — simplified Starknet validator operations"</li>
                <li><strong>"Network Flexibility"</strong>" — support for mainnet, sepolia, and custom networks"</li>
            </ul>

            <h2>"Supported Clients"</h2>
            <div class="card-grid card-grid-3">
                <div class="card">
                    <h4>"Execution Layer"</h4>
                    <ul>
                        <li>"Geth"</li>
                        <li>"Reth"</li>
                    </ul>
                </div>
                <div class="card">
                    <h4>"Consensus Layer"</h4>
                    <ul>
                        <li>"Lighthouse"</li>
                        <li>"Prysm"</li>
                    </ul>
                </div>
                <div class="card">
                    <h4>"Starknet"</h4>
                    <ul>
                        <li>"Juno"</li>
                        <li>"Starknet Validator"</li>
                    </ul>
                </div>
            </div>

            <div class="callout">
                <h3>"📖 Next Steps"</h3>
                <p>"Ready to dive deeper? Check out the "<a href="/installation">"Installation Guide"</a>"."</p>
            </div>
        </article>
    }
}
