use super::catalog::CatalogEntry;

/// Handlers the host executes itself instead of forwarding.
pub mod handlers {
    pub const QUIT: &str = "app.quit";
    pub const HELP: &str = "app.help";
    pub const THEME: &str = "app.theme";
}

pub const HOME_DESTINATION: &str = "/employee/workspace";

#[must_use]
pub fn builtin_entries() -> Vec<CatalogEntry> {
    vec![
        // --- My Workspace ---
        CatalogEntry::navigation("today", "Today", HOME_DESTINATION)
            .subtitle("My Workspace")
            .keywords(["home", "dashboard", "inbox"])
            .icon("home"),
        CatalogEntry::navigation("tasks", "Tasks", "/employee/workspace/tasks")
            .subtitle("My Workspace")
            .keywords(["todo", "follow-ups"])
            .icon("check"),
        // --- Core ---
        CatalogEntry::navigation("jobs", "Jobs", "/employee/workspace/jobs")
            .subtitle("Core")
            .keywords(["positions", "requisitions", "openings"])
            .icon("briefcase"),
        CatalogEntry::navigation("candidates", "Candidates", "/employee/workspace/candidates")
            .subtitle("Core")
            .keywords(["talent", "applicants", "resumes"])
            .icon("person"),
        CatalogEntry::navigation("submissions", "Submissions", "/employee/workspace/submissions")
            .subtitle("Core")
            .keywords(["pipeline", "interviews"])
            .icon("send"),
        CatalogEntry::navigation("placements", "Placements", "/employee/workspace/placements")
            .subtitle("Core")
            .keywords(["starts", "hires"])
            .icon("star"),
        CatalogEntry::navigation("accounts", "Accounts", "/employee/workspace/accounts")
            .subtitle("CRM")
            .keywords(["clients", "companies"])
            .icon("building"),
        CatalogEntry::navigation("contacts", "Contacts", "/employee/workspace/contacts")
            .subtitle("CRM")
            .keywords(["people", "hiring managers"])
            .icon("person"),
        CatalogEntry::navigation("leads", "Leads", "/employee/workspace/leads")
            .subtitle("CRM")
            .keywords(["prospects", "bant"])
            .icon("target"),
        CatalogEntry::navigation("deals", "Deals", "/employee/workspace/deals")
            .subtitle("CRM")
            .keywords(["opportunities", "revenue"])
            .icon("money"),
        CatalogEntry::navigation("campaigns", "Campaigns", "/employee/workspace/campaigns")
            .subtitle("CRM")
            .keywords(["outreach", "sequences"])
            .icon("megaphone"),
        // --- Manage ---
        CatalogEntry::navigation("pods", "Pods", "/employee/workspace/pods")
            .subtitle("Manage")
            .keywords(["teams", "squads"])
            .icon("people"),
        CatalogEntry::navigation("analytics", "Analytics", "/employee/workspace/analytics")
            .subtitle("Manage")
            .keywords(["reports", "benchmarking", "forecasting"])
            .icon("chart"),
        // --- Bench ---
        CatalogEntry::navigation("consultants", "Consultants", "/employee/bench/consultants")
            .subtitle("Bench")
            .keywords(["bench", "available"])
            .icon("person"),
        CatalogEntry::navigation("hotlists", "Hotlists", "/employee/bench/hotlists")
            .subtitle("Bench")
            .keywords(["marketing", "bench"])
            .icon("flame"),
        CatalogEntry::navigation("immigration", "Immigration", "/employee/bench/immigration")
            .subtitle("Bench")
            .keywords(["visa", "h1b"])
            .icon("passport"),
        CatalogEntry::navigation("vendors", "Vendors", "/employee/bench/vendors")
            .subtitle("Bench")
            .keywords(["partners", "suppliers"])
            .icon("building"),
        // --- HR ---
        CatalogEntry::navigation("employees", "Employees", "/employee/hr/people")
            .subtitle("HR")
            .keywords(["people", "staff", "directory"])
            .icon("people"),
        CatalogEntry::navigation("onboarding", "Onboarding", "/employee/hr/onboarding")
            .subtitle("HR")
            .keywords(["new hires", "paperwork"])
            .icon("door"),
        CatalogEntry::navigation("payroll", "Payroll", "/employee/hr/payroll")
            .subtitle("HR")
            .keywords(["salary", "pay", "billing"])
            .icon("money"),
        CatalogEntry::navigation("time", "Time & Attendance", "/employee/hr/time")
            .subtitle("HR")
            .keywords(["timesheets", "hours", "pto"])
            .icon("clock"),
        CatalogEntry::navigation("benefits", "Benefits", "/employee/hr/benefits")
            .subtitle("HR")
            .keywords(["insurance", "401k"])
            .icon("heart"),
        CatalogEntry::navigation("performance", "Performance", "/employee/hr/performance")
            .subtitle("HR")
            .keywords(["reviews", "nine-box", "calibration"])
            .icon("chart"),
        CatalogEntry::navigation("compliance", "Compliance", "/employee/hr/compliance")
            .subtitle("HR")
            .keywords(["audit", "policies"])
            .icon("shield"),
        CatalogEntry::navigation("org-chart", "Org Chart", "/employee/hr/org-chart")
            .subtitle("HR")
            .keywords(["hierarchy", "reporting lines"])
            .icon("tree"),
        // --- Admin ---
        CatalogEntry::navigation("audit-rules", "Audit Alert Rules", "/employee/admin/audit")
            .subtitle("Admin")
            .keywords(["security", "alerts"])
            .icon("shield"),
        CatalogEntry::navigation("integrations", "Integrations", "/employee/admin/integrations")
            .subtitle("Admin")
            .keywords(["api", "connectors", "webhooks"])
            .icon("plug"),
        CatalogEntry::navigation("drills", "Emergency Drills", "/employee/admin/emergency")
            .subtitle("Admin")
            .keywords(["disaster recovery", "incident"])
            .icon("siren"),
        // --- Actions ---
        CatalogEntry::action("create-job", "Create Job", "jobs.create")
            .subtitle("Open a new requisition")
            .keywords(["new", "position"])
            .icon("plus"),
        CatalogEntry::action("create-candidate", "Add Candidate", "candidates.create")
            .subtitle("Source a new candidate")
            .keywords(["new", "talent"])
            .icon("plus"),
        CatalogEntry::action("create-lead", "Create Lead", "leads.create")
            .subtitle("Capture a new prospect")
            .keywords(["new", "prospect"])
            .icon("plus"),
        CatalogEntry::action("log-activity", "Log Activity", "activities.log")
            .subtitle("Record a call, email or meeting")
            .keywords(["call", "note"])
            .icon("pencil"),
        CatalogEntry::action("create-invoice", "Create Invoice", "billing.invoice")
            .subtitle("Bill a client for placed hours")
            .keywords(["billing", "invoice"])
            .icon("money"),
        CatalogEntry::action("switch-theme", "Switch Theme", handlers::THEME)
            .subtitle("Cycle the color palette")
            .keywords(["colors", "appearance"])
            .icon("palette"),
        CatalogEntry::action("shortcuts", "Keyboard Shortcuts", handlers::HELP)
            .subtitle("Show the key bindings")
            .keywords(["help", "keys"])
            .icon("keyboard"),
        CatalogEntry::action("quit", "Quit", handlers::QUIT)
            .subtitle("Exit staffdesk")
            .keywords(["exit", "close"])
            .icon("power"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::Catalog;

    #[test]
    fn test_builtin_ids_are_unique() {
        let catalog = Catalog::new(builtin_entries()).unwrap();
        assert_eq!(catalog.len(), builtin_entries().len());
        assert!(catalog.find_destination(HOME_DESTINATION).is_some());
    }
}
