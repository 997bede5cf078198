// Configuration page - config file location, structure, and editing
use crate::components::CodeBlock;
use leptos::prelude::*;

const CONFIG_STRUCTURE: &str = r#"network: mainnet

execution_client:
  name: geth
  ports:
    - 8545  # HTTP RPC
    - 8546  # WebSocket RPC
    - 30303 # P2P

consensus_client:
  name: lighthouse
  ports:
    - 5052  # HTTP API
    - 9000  # P2P
  consensus_checkpoint: ""

juno_client:
  port: 6060
  eth_node: "http://localhost:8545"
  environment: []

is_validator_node: false

wallet:
  name: ""
  reward_address: ""
  commision: ""

validator_config:
  provider_config:
    juno_rpc_http: "http://localhost:6060"
    juno_rpc_ws: "ws://localhost:6060"
  signer:
    operational_address: ""
    privateKey: """#;

#[component]
pub fn ConfigurationPage() -> impl IntoView {
    view! {
        <article class="prose">
            <h1>"Configuration"</h1>
            <p class="lead">"Learn how to configure starknode-kit for your Ethereum and Starknet nodes."</p>

            <h2>"Configuration File"</h2>
            <p>"starknode-kit stores its configuration in a YAML file located at:"</p>
            <CodeBlock code="~/.starknode-kit/starknode.yml" />
            <p>"Generate a new configuration file with default settings:"</p>
            <CodeBlock code="starknode-kit config new" />

            <h2>"Viewing Configuration"</h2>
            <p>"View your entire configuration:"</p>
            <CodeBlock code="starknode-kit config show --all" />
            <p>"View specific sections:"</p>
            <CodeBlock code="# View execution client config
starknode-kit config show --el

# View consensus client config
starknode-kit config show --cl

# View Juno (Starknet) config
starknode-kit config show --juno" />

            <h2>"Configuration Structure"</h2>
            <p>"The configuration file has the following structure:"</p>
            <CodeBlock code=CONFIG_STRUCTURE language="yaml" />

            <h2>"Modifying Configuration"</h2>
            <h3>"Change Network"</h3>
            <p>"Switch between mainnet, sepolia, or custom networks:"</p>
            <CodeBlock code="starknode-kit config set network sepolia" />
            <p>"Set execution client and ports:"</p>
            <CodeBlock code="starknode-kit config set execution_client.name reth" />
            <p>"Set consensus client and checkpoint:"</p>
            <CodeBlock code="starknode-kit config set consensus_client.consensus_checkpoint https://checkpoint-sync.sepolia.ethpandaops.io" />

            <h2>"Environment Variables"</h2>
            <p>"Sensitive data can be stored as environment variables instead of in the file:"</p>
            <ul>
                <li><code>"STARKNET_WALLET"</code>" — wallet address"</li>
                <li><code>"STARKNET_PRIVATE_KEY"</code>" — private key"</li>
                <li><code>"STARKNET_PUBLIC_KEY"</code>" — public key"</li>
                <li><code>"STARKNET_CLASS_HASH"</code>" — class hash"</li>
                <li><code>"STARKNET_SALT"</code>" — salt value"</li>
            </ul>

            <h2>"Best Practices"</h2>
            <ol>
                <li><strong>"Backup your config"</strong>" — keep a copy of the configuration file"</li>
                <li><strong>"Use environment variables"</strong>" — never commit private keys"</li>
                <li><strong>"Document changes"</strong>" — keep notes of custom configurations"</li>
                <li><strong>"Test on testnet"</strong>" — try changes on sepolia first"</li>
            </ol>

            <h2>"Troubleshooting"</h2>
            <h3>"Configuration not loading"</h3>
            <ul>
                <li>"File exists at "<code>"~/.starknode-kit/starknode.yml"</code></li>
                <li>"File is readable by your user"</li>
            </ul>
            <h3>"Port conflicts"</h3>
            <p>"Check whether a port is already in use:"</p>
            <CodeBlock code="lsof -i :8545" />

            <div class="callout">
                <h3>"📖 Next Steps"</h3>
                <p>"Validator nodes need extra settings; see "<a href="/validator">"Validator Setup"</a>"."</p>
            </div>
        </article>
    }
}
