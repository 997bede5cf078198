// Contributing page
use crate::components::CodeBlock;
use leptos::prelude::*;

#[component]
pub fn ContributingPage() -> impl IntoView {
    view! {
        <article class="prose">
            <h1>"Contributing"</h1>
            <p class="lead">"starknode-kit is open source and welcomes issues, docs, and code."</p>

            <h2>"Getting Started"</h2>
            <h3>"1. Fork the Repository"</h3>
            <p>"Visit "<a href="https://github.com/thebuidl-grid/starknode-kit" target="_blank">"github.com/thebuidl-grid/starknode-kit"</a>" and click Fork."</p>
            <h3>"2. Clone Your Fork"</h3>
            <CodeBlock code="git clone https://github.com/<your-username>/starknode-kit.git
cd starknode-kit" />
            <h3>"3. Set Up Development Environment"</h3>
            <CodeBlock code="make build" />
            <h3>"4. Create a Branch"</h3>
            <CodeBlock code="git checkout -b feature/your-feature-name" />

            <h2>"Development Workflow"</h2>
            <p>"Run the tests before and after your change:"</p>
            <CodeBlock code="make test" />
            <p>"Format and vet the code the way CI does:"</p>
            <CodeBlock code="make fmt && make lint" />

            <h2>"Submitting Changes"</h2>
            <CodeBlock code=r#"git add .
git commit -m "feat: describe your change"
git push origin feature/your-feature-name"# />
            <p>"Then open a pull request against "<code>"main"</code>". Keep PRs focused; describe what changed and why."</p>

            <h2>"Reporting Bugs"</h2>
            <p>
                "Open an issue with your OS, starknode-kit version, the command you ran, and \
                 the full output. Logs from "<code>"starknode-kit status"</code>" help a lot."
            </p>

            <h2>"Getting Help"</h2>
            <p>"Questions that aren't bugs are welcome in the repository discussions."</p>
        </article>
    }
}
