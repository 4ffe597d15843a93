use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_route};

use crate::context::AppContext;
use crate::route_table::{Screen, allows, route_tree};
use crate::views::{
    BookingCreateView, BookingDetailView, BookingListView, DashboardView, NotFoundView,
    PackageDetailView, PackageListView, PayoutListView, SchoolDetailView, SchoolListView,
    StudentListView, ToastStack, TrainerListView,
};

#[derive(Clone, Routable, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/bookings", BookingListView)] Bookings {},
        #[route("/bookings/new", BookingCreateView)] BookingCreate {},
        #[route("/bookings/:id", BookingDetailView)] BookingDetail { id: u64 },
        #[route("/students", StudentListView)] Students {},
        #[route("/trainers", TrainerListView)] Trainers {},
        #[route("/packages", PackageListView)] Packages {},
        #[route("/trainers/:trainer/packages/:package/:slug", PackageDetailView)]
        PackageDetail { trainer: u64, package: u64, slug: String },
        #[route("/schools", SchoolListView)] Schools {},
        #[route("/schools/:id", SchoolDetailView)] SchoolDetail { id: u64 },
        #[route("/payouts", PayoutListView)] Payouts {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

impl Route {
    #[must_use]
    pub fn screen(&self) -> Option<Screen> {
        let screen = match self {
            Route::Dashboard {} => Screen::Dashboard,
            Route::Bookings {} => Screen::Bookings,
            Route::BookingCreate {} => Screen::BookingCreate,
            Route::BookingDetail { .. } => Screen::BookingDetail,
            Route::Students {} => Screen::Students,
            Route::Trainers {} => Screen::Trainers,
            Route::Packages {} => Screen::Packages,
            Route::PackageDetail { .. } => Screen::PackageDetail,
            Route::Schools {} => Screen::Schools,
            Route::SchoolDetail { .. } => Screen::SchoolDetail,
            Route::Payouts {} => Screen::Payouts,
            Route::NotFound { .. } => return None,
        };
        Some(screen)
    }
}

#[component]
fn Layout() -> Element {
    let ctx = use_context::<AppContext>();
    let route = use_route::<Route>();
    // Unmatched paths have no screen and fall through to the not-found route.
    let permitted = route
        .screen()
        .is_none_or(|screen| allows(ctx.role(), screen));
    if !permitted {
        tracing::debug!(role = ?ctx.role(), path = %route, "route not available for role");
    }

    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                if permitted {
                    Outlet::<Route> {}
                } else {
                    NotFoundView { segments: Vec::new() }
                }
            }
            ToastStack {}
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let role = ctx.role();
    let nodes = route_tree(role);

    rsx! {
        nav { class: "sidebar",
            h1 { "Drive Admin" }
            p { class: "sidebar-role", "{role.label()}" }
            ul {
                for node in nodes {
                    li { key: "{node.path}",
                        Link { to: node.path, "{node.label}" }
                    }
                }
            }
        }
    }
}
