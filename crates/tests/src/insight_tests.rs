use pretty_assertions::assert_eq;
use server::insights;
use shared_types::registry::{
    AdminView, ManagementView, ParentView, StudentView, TeacherView, ViewSet,
};
use shared_types::{InsightSource, Role};

fn ids<V: ViewSet>() -> Vec<(Role, &'static str)> {
    V::ALL.iter().map(|view| (V::ROLE, view.id())).collect()
}

fn every_registered_view() -> Vec<(Role, &'static str)> {
    let mut all = ids::<AdminView>();
    all.extend(ids::<TeacherView>());
    all.extend(ids::<StudentView>());
    all.extend(ids::<ParentView>());
    all.extend(ids::<ManagementView>());
    all
}

#[test]
fn every_registered_view_has_canned_text() {
    for (role, view) in every_registered_view() {
        assert!(!insights::canned_text(role, view).is_empty(), "{role}/{view}");
    }
}

#[test]
fn unknown_topic_gets_the_role_general_text() {
    assert_eq!(
        insights::canned_text(Role::Student, "somethingElse"),
        insights::canned_text(Role::Student, "dashboard")
    );
}

#[tokio::test]
async fn generate_without_the_flag_returns_canned_text() {
    let insight = insights::generate(Role::Teacher, "lessonGenerator").await;
    assert_eq!(insight.source, InsightSource::Canned);
    assert_eq!(insight.role, Role::Teacher);
    assert_eq!(insight.topic, "lessonGenerator");
    assert_eq!(
        insight.text,
        insights::canned_text(Role::Teacher, "lessonGenerator")
    );
}

#[tokio::test]
async fn concurrent_generation_is_independent_per_role() {
    let (admin, parent) = tokio::join!(
        insights::generate(Role::Admin, "fees"),
        insights::generate(Role::Parent, "aiInsights"),
    );
    assert_eq!(admin.role, Role::Admin);
    assert_eq!(parent.role, Role::Parent);
    assert_ne!(admin.text, parent.text);
}
