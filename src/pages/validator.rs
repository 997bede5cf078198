// Validator setup page - staking v2 validator on top of Juno
use crate::components::CodeBlock;
use leptos::prelude::*;

#[component]
pub fn ValidatorPage() -> impl IntoView {
    view! {
        <article class="prose">
            <h1>"Validator Setup"</h1>
            <p class="lead">"Run a Starknet staking validator on top of your own Juno node."</p>

            <h2>"Prerequisites"</h2>
            <ul>
                <li>"A fully synced Juno node (see "<a href="/getting-started">"Getting Started"</a>")"</li>
                <li>"A funded Starknet wallet for staking"</li>
                <li>"Operational and reward addresses prepared"</li>
            </ul>

            <h2>"Validator Commands"</h2>
            <h3>"Check Validator Status"</h3>
            <CodeBlock code="starknode-kit validator status" />
            <h3>"Get Validator Version"</h3>
            <CodeBlock code="starknode-kit validator --version" />
            <h3>"Set Juno RPC Endpoint"</h3>
            <p>"Point the validator at your local Juno node:"</p>
            <CodeBlock code="starknode-kit validator --rpc http://localhost:6060" />
            <p>"Or at a remote node:"</p>
            <CodeBlock code="starknode-kit validator --rpc https://your-juno-node.example.com" />

            <h2>"Setting Up Environment Variables"</h2>
            <p>"Keep signing material out of the config file:"</p>
            <CodeBlock code=r#"export STARKNET_WALLET="0x..."
export STARKNET_PRIVATE_KEY="0x..."
export STARKNET_PUBLIC_KEY="0x...""# />

            <h2>"Starting Your Validator"</h2>
            <h3>"Step 1: Ensure Juno is Running"</h3>
            <CodeBlock code="starknode-kit run juno" />
            <h3>"Step 2: Verify Configuration"</h3>
            <CodeBlock code="starknode-kit config show --all" />
            <h3>"Step 3: Start the Validator"</h3>
            <CodeBlock code="starknode-kit run starknet-staking-v2" />

            <h2>"Monitoring Your Validator"</h2>
            <p>"The "<a href="/commands">"monitor"</a>" dashboard includes attestation activity and the validator's connection to Juno."</p>

            <h2>"Security Best Practices"</h2>
            <ul>
                <li>"Keep the private key in an environment variable or secret store, never in the YAML file"</li>
                <li>"Use separate operational and reward addresses"</li>
                <li>"Restrict the Juno RPC port to localhost or a private network"</li>
            </ul>

            <h2>"Troubleshooting"</h2>
            <h3>"Validator Not Connecting to Juno"</h3>
            <p>"Confirm Juno is synced and the RPC endpoint in the config matches the port Juno listens on."</p>
            <h3>"Keys Not Loading"</h3>
            <p>"Check that the environment variables are visible to the process:"</p>
            <CodeBlock code="echo $STARKNET_PRIVATE_KEY" />
            <h3>"Validator Offline"</h3>
            <p>"Inspect "<code>"starknode-kit status"</code>" and the Juno logs; the validator exits when its RPC connection drops."</p>

            <div class="callout">
                <h3>"📖 Next Steps"</h3>
                <p>"Review the "<a href="/requirements">"Requirements"</a>" for validator-grade hardware."</p>
            </div>
        </article>
    }
}
