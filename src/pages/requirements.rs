// Requirements page - hardware, software, network
use crate::components::CodeBlock;
use leptos::prelude::*;

#[component]
pub fn RequirementsPage() -> impl IntoView {
    view! {
        <article class="prose">
            <h1>"Requirements"</h1>
            <p class="lead">"What your machine needs before running Ethereum and Starknet nodes."</p>

            <h2>"Hardware Requirements"</h2>
            <h3>"Minimum"</h3>
            <ul>
                <li>"4-core CPU"</li>
                <li>"16 GB RAM"</li>
                <li>"2 TB SSD"</li>
                <li>"25 Mbps internet connection"</li>
            </ul>
            <h3>"Recommended"</h3>
            <ul>
                <li>"8-core CPU"</li>
                <li>"32 GB RAM"</li>
                <li>"4 TB NVMe SSD"</li>
                <li>"100 Mbps internet connection"</li>
            </ul>

            <h2>"Storage Requirements"</h2>
            <p>
                "An Ethereum full node currently needs well over 1 TB and grows continuously; \
                 Juno adds several hundred GB more. Spinning disks are too slow for sync — \
                 use an SSD, preferably NVMe."
            </p>

            <h2>"Software Requirements"</h2>
            <h3>"Operating System"</h3>
            <ul>
                <li>"Linux (Ubuntu 22.04+ recommended)"</li>
                <li>"macOS 13+"</li>
            </ul>
            <h3>"Required Software"</h3>
            <h4>"Go (for building from source)"</h4>
            <CodeBlock code="go version  # 1.22 or newer" />
            <h4>"Rust (for Starknet clients)"</h4>
            <CodeBlock code="curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh" />
            <h4>"Make"</h4>
            <CodeBlock code="make --version" />

            <h2>"Network Requirements"</h2>
            <p>"Expect a steady 10–25 Mbps of traffic while synced. These ports must be reachable:"</p>
            <ul>
                <li><code>"30303"</code>" — execution P2P"</li>
                <li><code>"9000"</code>" — consensus P2P"</li>
                <li><code>"6060"</code>" — Juno RPC (keep private)"</li>
            </ul>

            <h2>"For Validator Nodes"</h2>
            <p>
                "Validators should exceed the recommended tier and run on an uninterruptible \
                 power supply; downtime costs attestations."
            </p>

            <div class="callout">
                <h3>"📖 Next Steps"</h3>
                <p>"Hardware ready? Continue with "<a href="/installation">"Installation"</a>"."</p>
            </div>
        </article>
    }
}
