use std::sync::Arc;

use async_trait::async_trait;
use backend::{ApiError, Backend, InMemoryBackend, StudentGateway, TrainerGateway};
use drive_core::model::{
    Amount, BookingDetail, BookingId, BookingStatus, BookingSummary, DashboardStats, ListQuery,
    PackageId, PackageInfo, PackageTranslation, Page, PaymentStatus, Role, School, SchoolId,
    SeriesPoint, SessionRequest, Student, Trainer, TrainerId, TrainerPackage, TrainerProfile,
    TrainerUserId,
};

use super::test_harness::{
    ViewKind, setup_app_harness, setup_view_harness, setup_view_harness_with_backend,
};
use crate::route_table::route_tree;

fn pending_booking(id: u64) -> BookingDetail {
    BookingDetail {
        summary: BookingSummary {
            id: BookingId::new(id),
            booking_code: Some(format!("BK-{id:05}")),
            student_name: "Amal Haddad".into(),
            trainer_name: "Karim Saleh".into(),
            package_name: Some("Starter".into()),
            status: BookingStatus::Pending,
            payment_status: PaymentStatus::Paid,
            total: Some(Amount::new(120.0)),
            created_at: None,
        },
        sessions: vec![SessionRequest {
            start_time: "2024-01-01 10:00".into(),
            end_time: "11:00".into(),
            session_no: [1, 2],
        }],
        pickup_address: None,
    }
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_stat_cards() {
    let mut harness = setup_view_harness(ViewKind::Dashboard, Role::Admin);
    harness.repo.set_stats(DashboardStats {
        total_bookings: 42,
        bookings_by_month: vec![SeriesPoint {
            label: "Jan".into(),
            value: 4.0,
        }],
        ..DashboardStats::default()
    });

    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Bookings"), "missing card label in {html}");
    assert!(html.contains("42"), "missing total in {html}");
    assert!(html.contains("Jan"), "missing chart bar in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_lists_render_no_data() {
    for view in [
        ViewKind::Bookings,
        ViewKind::Students,
        ViewKind::Trainers,
        ViewKind::Schools,
        ViewKind::Payouts,
    ] {
        let mut harness = setup_view_harness(view, Role::Admin);
        harness.settle().await;
        let html = harness.render();
        assert!(html.contains("No data"), "{view:?} missing empty state in {html}");
    }
}

#[tokio::test(flavor = "current_thread")]
async fn booking_list_hides_create_link_for_collectors() {
    let mut harness = setup_view_harness(ViewKind::Bookings, Role::Collector);
    harness.repo.add_booking(pending_booking(1));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("BK-00001"), "missing row in {html}");
    assert!(!html.contains("New booking"), "unexpected create link in {html}");

    let mut harness = setup_view_harness(ViewKind::Bookings, Role::Assistant);
    harness.settle().await;
    assert!(harness.render().contains("New booking"));
}

#[tokio::test(flavor = "current_thread")]
async fn pending_booking_detail_offers_decisions() {
    let mut harness = setup_view_harness(ViewKind::BookingDetail(7), Role::Admin);
    harness.repo.add_booking(pending_booking(7));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("BK-00007"), "missing code in {html}");
    assert!(html.contains("Sessions 1 &amp; 2") || html.contains("Sessions 1 & 2"));
    assert!(html.contains("Accept"), "missing accept in {html}");
    assert!(html.contains("Reject"), "missing reject in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_booking_shows_not_found_message() {
    let mut harness = setup_view_harness(ViewKind::BookingDetail(99), Role::Admin);
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("This record does not exist."), "missing error in {html}");
    assert!(html.contains("Retry"));
}

#[tokio::test(flavor = "current_thread")]
async fn school_detail_renders_overview_tab() {
    let mut harness = setup_view_harness(ViewKind::SchoolDetail(3), Role::Admin);
    harness.repo.add_school(School {
        id: SchoolId::new(3),
        name: "Northside Driving".into(),
        email: Some("info@northside.test".into()),
        phone: None,
        address: None,
        is_active: true,
        logo_url: None,
        trainers_count: 4,
    });
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Northside Driving"), "missing name in {html}");
    assert!(html.contains("Overview"));
    assert!(html.contains("Edit"));
}

#[tokio::test(flavor = "current_thread")]
async fn school_rows_start_in_read_mode_with_edit_action() {
    let mut harness = setup_view_harness(ViewKind::Schools, Role::Admin);
    for (id, name) in [(1, "Northside Driving"), (2, "Harbor Road School")] {
        harness.repo.add_school(School {
            id: SchoolId::new(id),
            name: name.into(),
            email: None,
            phone: None,
            address: None,
            is_active: true,
            logo_url: None,
            trainers_count: 0,
        });
    }
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Harbor Road School"), "missing row in {html}");
    assert_eq!(html.matches(">Edit<").count(), 2, "one edit action per row in {html}");
    assert!(!html.contains("Cancel"), "no row should start in edit mode: {html}");
    assert!(!html.contains("row--editing"));
}

struct FailingStudents;

#[async_trait]
impl StudentGateway for FailingStudents {
    async fn list_students(&self, _query: &ListQuery) -> Result<Page<Student>, ApiError> {
        Err(ApiError::Status(500))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn failing_list_offers_retry() {
    let mut backend = Backend::in_memory();
    backend.students = Arc::new(FailingStudents);
    let mut harness = setup_view_harness_with_backend(ViewKind::Students, Role::Admin, &backend);
    harness.settle().await;
    let html = harness.render();
    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error in {html}"
    );
    assert!(html.contains("Retry"));
}

#[tokio::test(flavor = "current_thread")]
async fn wizard_starts_on_student_step() {
    let mut harness = setup_view_harness(ViewKind::BookingCreate, Role::Admin);
    harness.repo.add_student(Student {
        id: drive_core::model::StudentId::new(1),
        name: "Amal Haddad".into(),
        email: "amal@example.com".into(),
        phone: None,
        photo_url: None,
        user_addresses: Vec::new(),
    });
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("New booking"));
    assert!(html.contains("step step--active"), "missing active step in {html}");
    assert!(html.contains("Amal Haddad"), "missing student in {html}");
    assert!(html.contains("Back"));
    assert!(html.contains("Next"));
    assert!(!html.contains("Submit"));
}

fn trainer(id: u64, user_id: u64, name: &str) -> Trainer {
    Trainer {
        id: TrainerId::new(id),
        user_id: TrainerUserId::new(user_id),
        name: name.into(),
        email: None,
        is_active: true,
        license_number: None,
        user: TrainerProfile::default(),
    }
}

/// Serves the repo, except that one trainer's packages never arrive.
struct StalledPackages {
    repo: InMemoryBackend,
    stalled: TrainerUserId,
}

#[async_trait]
impl TrainerGateway for StalledPackages {
    async fn list_trainers(&self, query: &ListQuery) -> Result<Page<Trainer>, ApiError> {
        self.repo.list_trainers(query).await
    }

    async fn list_trainer_packages(
        &self,
        trainer: TrainerUserId,
        query: &ListQuery,
    ) -> Result<Page<TrainerPackage>, ApiError> {
        if trainer == self.stalled {
            std::future::pending::<()>().await;
        }
        self.repo.list_trainer_packages(trainer, query).await
    }
}

#[tokio::test(flavor = "current_thread")]
async fn switching_trainer_hides_previous_packages_while_loading() {
    let repo = InMemoryBackend::new();
    let karim = trainer(1, 10, "Karim Saleh");
    let lina = trainer(2, 20, "Lina Nasser");
    repo.add_trainer(karim.clone());
    repo.add_trainer(lina.clone());
    repo.add_package(
        karim.user_id,
        TrainerPackage {
            package_id: PackageId::new(7),
            price: Amount::new(300.0),
            package: PackageInfo {
                number_of_sessions: 10,
                translations: vec![PackageTranslation {
                    locale: "en".into(),
                    title: "Karim Starter".into(),
                    description: None,
                }],
            },
        },
    );
    let mut backend = Backend::from_memory(&repo);
    backend.trainers = Arc::new(StalledPackages {
        repo: repo.clone(),
        stalled: lina.user_id,
    });
    let mut harness =
        setup_view_harness_with_backend(ViewKind::BookingCreate, Role::Admin, &backend);
    harness.settle().await;

    harness.edit_wizard(|wizard| wizard.select_trainer(karim));
    harness.drive().await;
    let html = harness.render();
    assert!(html.contains("Karim Starter"), "missing package in {html}");

    harness.edit_wizard(|wizard| wizard.select_trainer(lina));
    harness.drive().await;
    let html = harness.render();
    assert!(!html.contains("Karim Starter"), "stale package offered in {html}");
    assert!(html.contains("Loading..."), "missing loading state in {html}");
}

fn sidebar(html: &str) -> &str {
    let start = html.find("<nav class=\"sidebar\"").expect("sidebar rendered");
    let end = start + html[start..].find("</nav>").expect("sidebar closed");
    &html[start..end]
}

#[tokio::test(flavor = "current_thread")]
async fn collector_cannot_open_booking_creation() {
    let mut harness = setup_app_harness(Role::Collector, "/bookings/new");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("Page not found"), "expected not-found in {html}");
    assert!(!html.contains("New booking"), "wizard leaked in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn sidebar_lists_only_the_role_tree() {
    let mut harness = setup_app_harness(Role::Collector, "/payouts");
    harness.settle().await;
    let html = harness.render();
    let nav = sidebar(&html);
    let tree = route_tree(Role::Collector);
    assert_eq!(nav.matches("<li").count(), tree.len(), "{nav}");
    for node in &tree {
        assert!(nav.contains(node.label), "missing {} in {nav}", node.label);
    }
    for hidden in ["Students", "Trainers", "Packages", "Schools"] {
        assert!(!nav.contains(hidden), "{hidden} shown to collector: {nav}");
    }
    assert!(!html.contains("Page not found"), "payouts should open: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn admin_opens_booking_creation() {
    let mut harness = setup_app_harness(Role::Admin, "/bookings/new");
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("New booking"), "missing wizard in {html}");
    assert!(!html.contains("Page not found"));
    assert!(sidebar(&html).contains("Schools"));
}
