// API request/response types
// Response bodies and the fixed admin dashboard snapshot

use serde::Serialize;

/// `{"message": ...}` acknowledgement body
#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// `{"error": ...}` failure body; never carries internal detail
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

/// Aggregate figures shown on the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub total_projects: u32,
    pub active_projects: u32,
    pub total_clients: u32,
    /// Energy generated across all projects, in GWh
    pub energy_generated: f64,
    pub recent_contacts: &'static [RecentContact],
    pub project_updates: &'static [ProjectUpdate],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentContact {
    pub id: u32,
    pub name: &'static str,
    pub email: &'static str,
    pub service: &'static str,
    pub submitted_at: &'static str,
    pub status: ContactStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    New,
    Contacted,
    Qualified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpdate {
    pub id: u32,
    pub project_name: &'static str,
    pub status: ProjectStatus,
    /// Percent complete, 0..=100
    pub completion: u8,
    pub next_milestone: &'static str,
    pub updated_at: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    OnHold,
}

/// The dashboard has no backing store; this value is all it ever reports.
pub const DASHBOARD_SNAPSHOT: DashboardSnapshot = DashboardSnapshot {
    total_projects: 250,
    active_projects: 15,
    total_clients: 180,
    energy_generated: 152.5,
    recent_contacts: &[
        RecentContact {
            id: 1,
            name: "John Smith",
            email: "john.smith@example.com",
            service: "NDT Inspection",
            submitted_at: "2024-01-15T10:30:00Z",
            status: ContactStatus::New,
        },
        RecentContact {
            id: 2,
            name: "Sarah Johnson",
            email: "sarah.j@example.com",
            service: "Solar Installation",
            submitted_at: "2024-01-14T15:45:00Z",
            status: ContactStatus::Contacted,
        },
        RecentContact {
            id: 3,
            name: "Mike Chen",
            email: "mike.chen@example.com",
            service: "Energy Audit",
            submitted_at: "2024-01-13T09:20:00Z",
            status: ContactStatus::Qualified,
        },
    ],
    project_updates: &[
        ProjectUpdate {
            id: 1,
            project_name: "Riverside Solar Farm",
            status: ProjectStatus::InProgress,
            completion: 75,
            next_milestone: "Inverter commissioning",
            updated_at: "2024-01-15T08:00:00Z",
        },
        ProjectUpdate {
            id: 2,
            project_name: "Coastal Wind Turbine Inspection",
            status: ProjectStatus::Planning,
            completion: 20,
            next_milestone: "Site survey",
            updated_at: "2024-01-14T12:00:00Z",
        },
        ProjectUpdate {
            id: 3,
            project_name: "Industrial Park Energy Audit",
            status: ProjectStatus::Completed,
            completion: 100,
            next_milestone: "Final report delivery",
            updated_at: "2024-01-12T17:30:00Z",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_json_shape() {
        let json = serde_json::to_value(DASHBOARD_SNAPSHOT).unwrap();
        assert_eq!(json["totalProjects"], 250);
        assert_eq!(json["activeProjects"], 15);
        assert_eq!(json["totalClients"], 180);
        assert_eq!(json["energyGenerated"], 152.5);

        let contact = &json["recentContacts"][0];
        assert_eq!(contact["submittedAt"], "2024-01-15T10:30:00Z");
        assert_eq!(contact["status"], "new");

        let update = &json["projectUpdates"][0];
        assert_eq!(update["projectName"], "Riverside Solar Farm");
        assert_eq!(update["status"], "in-progress");
        assert_eq!(update["nextMilestone"], "Inverter commissioning");
    }

    #[test]
    fn test_completion_is_a_percentage() {
        assert!(DASHBOARD_SNAPSHOT
            .project_updates
            .iter()
            .all(|p| p.completion <= 100));
    }
}
