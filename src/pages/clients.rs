// Supported clients page
use crate::components::CodeBlock;
use leptos::prelude::*;

#[component]
pub fn ClientsPage() -> impl IntoView {
    view! {
        <article class="prose">
            <h1>"Supported Clients"</h1>
            <p class="lead">
                "starknode-kit manages a curated set of Ethereum and Starknet clients and keeps them updated for you."
            </p>

            <h2>"Why Multiple Clients?"</h2>
            <p>
                "Running a minority client strengthens the network: a bug in one implementation \
                 cannot take the whole chain down when stake and nodes are spread across several."
            </p>

            <h2>"Ethereum Clients"</h2>
            <h3>"Execution Clients"</h3>
            <h4>"Geth"</h4>
            <p>"The most battle-tested execution client, written in Go. A safe default with broad documentation and tooling."</p>
            <h4>"Reth"</h4>
            <p>"A modular, high-performance execution client written in Rust. Fast sync and low resource usage."</p>

            <h3>"Consensus Clients"</h3>
            <h4>"Lighthouse"</h4>
            <p>"A Rust consensus client focused on security and performance. Pairs well with either execution client."</p>
            <h4>"Prysm"</h4>
            <p>"A Go consensus client with a mature validator workflow and first-class gRPC APIs."</p>

            <h2>"Starknet Clients"</h2>
            <h4>"Juno"</h4>
            <p>
                "A Starknet full node written in Go. Provides the JSON-RPC endpoint the Starknet \
                 validator connects to."
            </p>

            <h2>"Client Combinations"</h2>
            <p>"Any execution client can be paired with any consensus client:"</p>
            <CodeBlock code="starknode-kit add --consensus_client lighthouse --execution_client geth" />
            <CodeBlock code="starknode-kit add --consensus_client prysm --execution_client reth" />

            <h2>"Switching Clients"</h2>
            <p>"Remove one client and add another; the chain data of unrelated clients stays untouched:"</p>
            <CodeBlock code="starknode-kit remove --execution_client geth
starknode-kit add --execution_client reth" />

            <div class="callout">
                <h3>"📖 Next Steps"</h3>
                <p>"Check the "<a href="/requirements">"Requirements"</a>" page for per-client disk and memory needs."</p>
            </div>
        </article>
    }
}
