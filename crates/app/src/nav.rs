use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Wrench,
    Complaint,
    Users,
    Calendar,
    Settings,
}

/// Main entries come first, then a separator, then the account entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavSection {
    Main,
    Account,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub route: Route,
    pub label: &'static str,
    pub icon: NavIcon,
    pub section: NavSection,
}

impl NavEntry {
    pub fn path(&self) -> String {
        self.route.to_string()
    }
}

/// Side navigation of the student portal, in display order.
pub static STUDENT_NAV: [NavEntry; 6] = [
    NavEntry {
        route: Route::StudentDashboard {},
        label: "Dashboard",
        icon: NavIcon::Dashboard,
        section: NavSection::Main,
    },
    NavEntry {
        route: Route::Maintenance {},
        label: "Maintenance",
        icon: NavIcon::Wrench,
        section: NavSection::Main,
    },
    NavEntry {
        route: Route::Complaints {},
        label: "Complaints",
        icon: NavIcon::Complaint,
        section: NavSection::Main,
    },
    NavEntry {
        route: Route::GuestManagement {},
        label: "Guest Management",
        icon: NavIcon::Users,
        section: NavSection::Main,
    },
    NavEntry {
        route: Route::SleepoverRequests {},
        label: "Sleepover Requests",
        icon: NavIcon::Calendar,
        section: NavSection::Main,
    },
    NavEntry {
        route: Route::Settings {},
        label: "Settings",
        icon: NavIcon::Settings,
        section: NavSection::Account,
    },
];

pub fn entries(section: NavSection) -> impl Iterator<Item = &'static NavEntry> {
    STUDENT_NAV.iter().filter(move |e| e.section == section)
}

/// Label of the entry for `route`, used as the header title.
pub fn label_for(route: &Route) -> Option<&'static str> {
    STUDENT_NAV
        .iter()
        .find(|e| &e.route == route)
        .map(|e| e.label)
}
