//! Role-specific route trees.
//!
//! Each role sees one static tree. The router knows every route; the layout
//! consults the tree to decide what to render and what the sidebar lists.

use drive_core::model::Role;

use crate::paths;

/// Screens a route can resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Dashboard,
    Bookings,
    BookingCreate,
    BookingDetail,
    Students,
    Trainers,
    Packages,
    PackageDetail,
    Schools,
    SchoolDetail,
    Payouts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    pub path: &'static str,
    pub screen: Screen,
    pub label: &'static str,
    pub children: Vec<RouteNode>,
}

impl RouteNode {
    fn leaf(path: &'static str, screen: Screen, label: &'static str) -> Self {
        Self {
            path,
            screen,
            label,
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<RouteNode>) -> Self {
        self.children = children;
        self
    }

    fn contains(&self, screen: Screen) -> bool {
        self.screen == screen || self.children.iter().any(|child| child.contains(screen))
    }
}

/// The route tree for `role`.
#[must_use]
pub fn route_tree(role: Role) -> Vec<RouteNode> {
    match role {
        Role::Admin => admin_tree(),
        Role::SchoolAdmin => school_admin_tree(),
        Role::Collector => collector_tree(),
        Role::Assistant => assistant_tree(),
    }
}

/// Whether `screen` appears anywhere in the tree for `role`.
#[must_use]
pub fn allows(role: Role, screen: Screen) -> bool {
    route_tree(role).iter().any(|node| node.contains(screen))
}

fn dashboard() -> RouteNode {
    RouteNode::leaf(paths::DASHBOARD, Screen::Dashboard, "Dashboard")
}

fn bookings(with_create: bool) -> RouteNode {
    let mut children = Vec::new();
    if with_create {
        children.push(RouteNode::leaf(
            paths::BOOKING_NEW,
            Screen::BookingCreate,
            "New booking",
        ));
    }
    children.push(RouteNode::leaf(
        paths::BOOKING_DETAILS,
        Screen::BookingDetail,
        "Booking",
    ));
    RouteNode::leaf(paths::BOOKINGS, Screen::Bookings, "Bookings").with_children(children)
}

fn students() -> RouteNode {
    RouteNode::leaf(paths::STUDENTS, Screen::Students, "Students")
}

fn trainers() -> RouteNode {
    RouteNode::leaf(paths::TRAINERS, Screen::Trainers, "Trainers")
}

fn packages() -> RouteNode {
    RouteNode::leaf(paths::PACKAGES, Screen::Packages, "Packages").with_children(vec![
        RouteNode::leaf(paths::PACKAGE_DETAILS, Screen::PackageDetail, "Package"),
    ])
}

fn schools() -> RouteNode {
    RouteNode::leaf(paths::SCHOOLS, Screen::Schools, "Schools").with_children(vec![
        RouteNode::leaf(paths::SCHOOL_DETAILS, Screen::SchoolDetail, "School"),
    ])
}

fn payouts() -> RouteNode {
    RouteNode::leaf(paths::PAYOUTS, Screen::Payouts, "Payouts")
}

fn admin_tree() -> Vec<RouteNode> {
    vec![
        dashboard(),
        bookings(true),
        students(),
        trainers(),
        packages(),
        schools(),
        payouts(),
    ]
}

fn school_admin_tree() -> Vec<RouteNode> {
    vec![dashboard(), bookings(true), students(), trainers(), packages()]
}

fn collector_tree() -> Vec<RouteNode> {
    vec![dashboard(), bookings(false), payouts()]
}

fn assistant_tree() -> Vec<RouteNode> {
    vec![bookings(true), students(), trainers()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_level(role: Role) -> Vec<Screen> {
        route_tree(role).into_iter().map(|node| node.screen).collect()
    }

    #[test]
    fn admin_sees_everything() {
        for screen in [
            Screen::Dashboard,
            Screen::BookingCreate,
            Screen::PackageDetail,
            Screen::SchoolDetail,
            Screen::Payouts,
        ] {
            assert!(allows(Role::Admin, screen), "{screen:?}");
        }
    }

    #[test]
    fn each_named_role_gets_its_own_tree() {
        assert_eq!(
            top_level(Role::SchoolAdmin),
            vec![
                Screen::Dashboard,
                Screen::Bookings,
                Screen::Students,
                Screen::Trainers,
                Screen::Packages
            ]
        );
        assert_eq!(
            top_level(Role::Collector),
            vec![Screen::Dashboard, Screen::Bookings, Screen::Payouts]
        );
        assert_eq!(
            top_level(Role::Assistant),
            vec![Screen::Bookings, Screen::Students, Screen::Trainers]
        );
    }

    #[test]
    fn unknown_or_missing_user_type_resolves_to_admin_tree() {
        for raw in [None, Some(""), Some("SUPERUSER"), Some("school_admin")] {
            let role = Role::from_user_type(raw);
            assert_eq!(route_tree(role), route_tree(Role::Admin), "{raw:?}");
        }
        assert_eq!(
            route_tree(Role::from_user_type(Some("COLLECTOR"))),
            collector_tree()
        );
    }

    #[test]
    fn nested_screens_follow_their_parent() {
        assert!(!allows(Role::Collector, Screen::BookingCreate));
        assert!(allows(Role::Collector, Screen::BookingDetail));
        assert!(!allows(Role::SchoolAdmin, Screen::SchoolDetail));
        assert!(!allows(Role::Assistant, Screen::Dashboard));
    }
}
