//! "AI insight" text for dashboard panels.
//!
//! With the `ai_insights` flag on and an API key present, the prompt goes to
//! the configured text-generation service. Otherwise, or when that call fails,
//! the canned text for the role and topic is returned.

use serde_json::{json, Value};
use shared_types::{AiConfig, AppError, Insight, InsightSource, Role};

/// Pre-written insight text. Topics are view ids; unknown topics get the
/// role's general insight.
pub fn canned_text(role: Role, topic: &str) -> &'static str {
    match (role, topic) {
        (Role::Admin, "admissions") => "Applications are up 12% on last term, driven by Grade 7. Two sections are close to capacity; consider opening a waitlist before the next intake.",
        (Role::Admin, "fees") => "Collection is at 86% for the term. Most overdue balances sit with families on monthly plans; an earlier reminder date would likely lift on-time payments.",
        (Role::Admin, _) => "Enrollment is steady at 412 students across five cohorts. Attendance dipped slightly in Grade 9 this month while fee collection remains on track.",
        (Role::Teacher, "lessonGenerator") => "Suggested outline: a 10-minute recap quiz, a guided example worked on the board, paired practice with three graded problems, and an exit ticket that checks the key misconception.",
        (Role::Teacher, "studentInsights") => "Five students in Grade 8B scored below 60% on the last two assessments and also missed more than three classes. Their gaps cluster around fractions and ratios.",
        (Role::Teacher, "questionBank") => "Your bank is strongest on recall questions. Adding application questions for the current unit would balance the next assessment.",
        (Role::Teacher, _) => "Class averages are holding steady. Grade 8B attendance has slipped over two weeks and 18 submissions are still ungraded.",
        (Role::Student, "aiTutor") => "Photosynthesis turns light energy into chemical energy. Chlorophyll absorbs light, water is split to release oxygen, and carbon dioxide is fixed into glucose in the Calvin cycle.",
        (Role::Student, "quizGenerator") => "1. What pigment absorbs light in plants? 2. Which gas is released during photosynthesis? 3. Where in the cell does the Calvin cycle take place?",
        (Role::Student, "studyPlanner") => "Spend Monday and Tuesday on the Algebra worksheet, Wednesday reviewing Biology notes, and keep Thursday free for History essay revisions before Friday's deadline.",
        (Role::Student, _) => "You are on track in four of six subjects. Mathematics and Chemistry scores dropped since last month; short daily practice would help before the next test.",
        (Role::Parent, _) => "Amara's attendance is 96% this term. Her Science and English grades improved, while Mathematics needs attention; her teacher recommends extra practice at home.",
        (Role::Management, "aiForecasts") => "Enrollment is projected to rise 6% next year. At current fee levels this covers the planned science lab expansion with a modest surplus.",
        (Role::Management, _) => "Academic performance improved 3% year over year. Staff costs are 4% above budget due to substitute cover, while fee collection is ahead of target.",
    }
}

pub fn canned(role: Role, topic: &str) -> Insight {
    Insight {
        role,
        topic: topic.to_string(),
        text: canned_text(role, topic).to_string(),
        source: InsightSource::Canned,
    }
}

/// Prompt sent to the text-generation service.
pub fn prompt(role: Role, topic: &str) -> String {
    format!(
        "You are an assistant inside a school management system. Write a short, \
         practical insight (at most three sentences) for a {} looking at the '{}' page. \
         Base it on this context: {}",
        role.display_name().to_lowercase(),
        topic,
        canned_text(role, topic)
    )
}

/// Pull the first candidate's text out of a `generateContent` response.
pub fn extract_text(response: &Value) -> Option<String> {
    response["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[tracing::instrument(skip(api_key, prompt))]
async fn request_remote(ai: &AiConfig, api_key: &str, prompt: &str) -> Result<String, AppError> {
    let body = json!({ "contents": [{ "parts": [{ "text": prompt }] }] });

    let client = reqwest::Client::new();
    let response = client
        .post(ai.generate_url())
        .query(&[("key", api_key)])
        .json(&body)
        .send()
        .await
        .map_err(|e| AppError::upstream(format!("Insight request failed: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::upstream(format!(
            "Insight service error ({status}): {body}"
        )));
    }

    let value: Value = response
        .json()
        .await
        .map_err(|e| AppError::upstream(format!("Insight response unreadable: {e}")))?;
    extract_text(&value).ok_or_else(|| AppError::upstream("Insight response had no text"))
}

/// Produce an insight. Never fails: remote errors fall back to canned text.
pub async fn generate(role: Role, topic: &str) -> Insight {
    if !crate::config::feature_flags().ai_insights {
        return canned(role, topic);
    }
    let Some(api_key) = crate::config::ai_api_key() else {
        tracing::warn!("ai_insights is enabled but AI_API_KEY is not set, using canned text");
        return canned(role, topic);
    };

    match request_remote(crate::config::ai_config(), &api_key, &prompt(role, topic)).await {
        Ok(text) => Insight {
            role,
            topic: topic.to_string(),
            text,
            source: InsightSource::Generated,
        },
        Err(e) => {
            tracing::error!(error = %e, role = %role, topic, "insight generation failed, using canned text");
            canned(role, topic)
        }
    }
}
