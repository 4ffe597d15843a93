use std::rc::Rc;
use std::sync::Arc;

use backend::{Backend, InMemoryBackend};
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use dioxus_router::{Routable, Router};
use drive_core::BookingWizard;
use drive_core::model::Role;
use drive_core::time::fixed_clock;
use services::AppServices;

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::bookings::WizardTestHandles;
use crate::views::{
    BookingCreateView, BookingDetailView, BookingListView, DashboardView, PayoutListView,
    SchoolDetailView, SchoolListView, StudentListView, ToastStack, Toasts, TrainerListView,
};

#[derive(Clone)]
struct TestApp {
    role: Role,
    services: AppServices,
}

impl UiApp for TestApp {
    fn role(&self) -> Role {
        self.role
    }

    fn page_size(&self) -> u32 {
        10
    }

    fn services(&self) -> AppServices {
        self.services.clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Bookings,
    BookingDetail(u64),
    BookingCreate,
    Students,
    Trainers,
    Schools,
    SchoolDetail(u64),
    Payouts,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    wizard_handles: Option<WizardTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(Toasts::new);
    if let Some(handles) = props.wizard_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! { Router::<TestRoute> {} }
}

#[derive(Props, Clone)]
struct AppHarnessProps {
    app: Arc<TestApp>,
    path: String,
}

impl PartialEq for AppHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

/// The production route table and layout, opened at `path`.
#[component]
fn AppRouterHarness(props: AppHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(Toasts::new);
    use_context_provider(|| {
        Rc::new(MemoryHistory::with_initial_path(props.path.clone())) as Rc<dyn History>
    });
    rsx! { Router::<Route> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    let body = match view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Bookings => rsx! { BookingListView {} },
        ViewKind::BookingDetail(id) => rsx! { BookingDetailView { id } },
        ViewKind::BookingCreate => rsx! { BookingCreateView {} },
        ViewKind::Students => rsx! { StudentListView {} },
        ViewKind::Trainers => rsx! { TrainerListView {} },
        ViewKind::Schools => rsx! { SchoolListView {} },
        ViewKind::SchoolDetail(id) => rsx! { SchoolDetailView { id } },
        ViewKind::Payouts => rsx! { PayoutListView {} },
    };
    rsx! {
        {body}
        ToastStack {}
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub repo: InMemoryBackend,
    pub wizard_handles: Option<WizardTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Rebuild, then let pending resources resolve.
    pub async fn settle(&mut self) {
        self.rebuild();
        self.drive().await;
    }

    /// Let pending work resolve without rebuilding.
    pub async fn drive(&mut self) {
        for _ in 0..4 {
            self.drive_async().await;
        }
    }

    /// Apply an edit to the booking wizard of a `BookingCreate` harness.
    pub fn edit_wizard(&mut self, edit: impl FnOnce(&mut BookingWizard)) {
        let mut wizard = self
            .wizard_handles
            .as_ref()
            .expect("booking create harness")
            .wizard();
        self.dom.in_runtime(|| edit(&mut wizard.write()));
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, role: Role) -> ViewHarness {
    let repo = InMemoryBackend::new();
    let services = AppServices::in_memory(&repo, fixed_clock());
    build_harness(view, role, services, repo)
}

/// Harness over a hand-built backend, for swapping in failing gateways.
pub fn setup_view_harness_with_backend(view: ViewKind, role: Role, backend: &Backend) -> ViewHarness {
    let services = AppServices::new(backend, fixed_clock());
    build_harness(view, role, services, InMemoryBackend::new())
}

/// Harness over the real router, entered at `path` as `role`.
pub fn setup_app_harness(role: Role, path: &str) -> ViewHarness {
    let repo = InMemoryBackend::new();
    let services = AppServices::in_memory(&repo, fixed_clock());
    let app = Arc::new(TestApp { role, services });
    let dom = VirtualDom::new_with_props(
        AppRouterHarness,
        AppHarnessProps {
            app,
            path: path.to_owned(),
        },
    );
    ViewHarness {
        dom,
        repo,
        wizard_handles: None,
    }
}

fn build_harness(
    view: ViewKind,
    role: Role,
    services: AppServices,
    repo: InMemoryBackend,
) -> ViewHarness {
    let app = Arc::new(TestApp { role, services });
    let wizard_handles = (view == ViewKind::BookingCreate).then(WizardTestHandles::default);
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            wizard_handles: wizard_handles.clone(),
        },
    );
    ViewHarness {
        dom,
        repo,
        wizard_handles,
    }
}
