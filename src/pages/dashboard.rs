use leptos::prelude::*;

struct Goal {
    title: &'static str,
    progress: u8,
}

const GOALS: &[Goal] = &[Goal {
    title: "Q2: pass the registered electrical engineer fundamentals exam",
    progress: 30,
}];

// Chart widgets are placeholders; only the goal list carries data.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <div class="dashboard-page" style="max-width: 64rem; margin: 0 auto; padding: 2rem 0;">
            <h1>"Growth tracking"</h1>
            <div class="chart-grid" style="display: grid; grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr)); gap: 1.5rem;">
                <div class="chart-card">
                    <h3>"Input / output curve"</h3>
                    <div class="chart-placeholder">"Line chart placeholder"</div>
                </div>
                <div class="chart-card">
                    <h3>"Skill radar"</h3>
                    <div class="chart-placeholder">"Radar chart placeholder"</div>
                </div>
            </div>
            <section class="goals">
                <h2>"This quarter's OKRs"</h2>
                {GOALS
                    .iter()
                    .map(|goal| {
                        let progress = goal.progress.min(100);
                        view! {
                            <div class="goal-card">
                                <h4>{goal.title}</h4>
                                <div class="progress-track">
                                    <div class="progress-fill" style=format!("width: {progress}%;")></div>
                                </div>
                                <p class="goal-progress" style="text-align: right;">{format!("{progress}%")}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
