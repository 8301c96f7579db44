use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdSparkles;
use dioxus_free_icons::Icon;
use shared_types::{AppError, FeatureFlags, InFlight, Insight, InsightSource, Role};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, SkeletonLines,
};

/// "AI insight" card for a view. Each click starts a new request; a result
/// arriving for an older click is discarded.
#[component]
pub fn InsightPanel(role: Role, topic: String) -> Element {
    let flags: FeatureFlags = use_context();
    let mut flight = use_signal(InFlight::default);
    let mut insight = use_signal(|| Option::<Insight>::None);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let request_topic = topic.clone();
    let request = move |_: MouseEvent| {
        let topic = request_topic.clone();
        let ticket = flight.write().begin();
        error_msg.set(None);
        spawn(async move {
            let result = server::api::generate_insight(role, topic).await;
            if !flight.write().finish(ticket) {
                tracing::debug!("discarding superseded insight response");
                return;
            }
            match result {
                Ok(fresh) => insight.set(Some(fresh)),
                Err(e) => {
                    tracing::error!(error = %e, "insight request failed");
                    error_msg.set(Some(AppError::friendly_message(&e.to_string())));
                }
            }
        });
    };

    let loading = flight.read().is_loading();
    let has_insight = insight.read().is_some();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./insight_panel.css") }
        Card { class: "insight-panel",
            CardHeader {
                div { class: "insight-panel-heading",
                    Icon::<LdSparkles> { icon: LdSparkles, width: 18, height: 18 }
                    CardTitle { "AI Insight" }
                    if let Some(current) = insight.read().as_ref() {
                        if current.source == InsightSource::Canned {
                            Badge { variant: BadgeVariant::Secondary, "Sample" }
                        }
                    }
                }
                if !flags.ai_insights {
                    CardDescription { "Live generation is off. Sample insights are shown instead." }
                }
            }
            CardContent {
                if loading {
                    SkeletonLines { lines: 3 }
                } else if let Some(err) = error_msg() {
                    div { class: "insight-panel-error", "{err}" }
                } else if let Some(current) = insight.read().as_ref() {
                    p { class: "insight-panel-text", "{current.text}" }
                } else {
                    p { class: "insight-panel-hint", "Generate a short summary for this page." }
                }
                div {
                    Button {
                        variant: ButtonVariant::Secondary,
                        size: ButtonSize::Small,
                        onclick: request,
                        if has_insight { "Regenerate" } else { "Generate insight" }
                    }
                }
            }
        }
    }
}
