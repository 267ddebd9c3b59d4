//! Participation report generation service.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use volhub_core::types::id::{EventId, VolunteerId};
use volhub_entity::event::Urgency;
use volhub_store::{EventStore, MatchStore, VolunteerStore};

/// Per-volunteer row of the participation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerParticipation {
    /// The volunteer.
    pub volunteer_id: VolunteerId,
    /// Volunteer name.
    pub name: String,
    /// Skills the volunteer offers.
    pub skills: Vec<String>,
    /// How many assignments the volunteer holds.
    pub assignment_count: usize,
    /// The events assigned, in match order.
    pub event_ids: Vec<EventId>,
}

/// Participation summary across every volunteer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerParticipationReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Registered volunteer count.
    pub total_volunteers: usize,
    /// Total match records.
    pub total_assignments: usize,
    /// One row per volunteer, registration order.
    pub volunteers: Vec<VolunteerParticipation>,
}

/// Per-event row of the assignment report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAssignment {
    /// The event.
    pub event_id: EventId,
    /// Event name.
    pub name: String,
    /// Event date.
    pub event_date: NaiveDate,
    /// Event urgency.
    pub urgency: Urgency,
    /// How many assignments the event has.
    pub volunteer_count: usize,
    /// Names of assigned volunteers, in match order. A volunteer that has
    /// since been removed appears as their raw identifier.
    pub volunteer_names: Vec<String>,
}

/// Assignment summary across every event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventAssignmentReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Registered event count.
    pub total_events: usize,
    /// Total match records.
    pub total_assignments: usize,
    /// One row per event, creation order.
    pub events: Vec<EventAssignment>,
}

/// Generates participation reports over the live stores.
#[derive(Debug, Clone)]
pub struct ParticipationReportService {
    /// Volunteer registry.
    volunteer_store: Arc<VolunteerStore>,
    /// Event registry.
    event_store: Arc<EventStore>,
    /// Match records.
    match_store: Arc<MatchStore>,
}

impl ParticipationReportService {
    /// Creates a new report service.
    pub fn new(
        volunteer_store: Arc<VolunteerStore>,
        event_store: Arc<EventStore>,
        match_store: Arc<MatchStore>,
    ) -> Self {
        Self {
            volunteer_store,
            event_store,
            match_store,
        }
    }

    /// Builds the volunteer participation report.
    pub async fn volunteers(&self) -> VolunteerParticipationReport {
        let volunteers = self.volunteer_store.list_all().await;
        let matches = self.match_store.list_all().await;

        let rows = volunteers
            .iter()
            .map(|v| {
                let event_ids: Vec<EventId> = matches
                    .iter()
                    .filter(|m| m.volunteer_id == v.id)
                    .map(|m| m.event_id)
                    .collect();
                VolunteerParticipation {
                    volunteer_id: v.id,
                    name: v.name.clone(),
                    skills: v.skills.clone(),
                    assignment_count: event_ids.len(),
                    event_ids,
                }
            })
            .collect();

        VolunteerParticipationReport {
            generated_at: Utc::now(),
            total_volunteers: volunteers.len(),
            total_assignments: matches.len(),
            volunteers: rows,
        }
    }

    /// Builds the event assignment report.
    pub async fn events(&self) -> EventAssignmentReport {
        let events = self.event_store.list_all().await;
        let volunteers = self.volunteer_store.list_all().await;
        let matches = self.match_store.list_all().await;

        let rows = events
            .iter()
            .map(|e| {
                let volunteer_names: Vec<String> = matches
                    .iter()
                    .filter(|m| m.event_id == e.id)
                    .map(|m| {
                        volunteers
                            .iter()
                            .find(|v| v.id == m.volunteer_id)
                            .map(|v| v.name.clone())
                            .unwrap_or_else(|| m.volunteer_id.to_string())
                    })
                    .collect();
                EventAssignment {
                    event_id: e.id,
                    name: e.name.clone(),
                    event_date: e.event_date,
                    urgency: e.urgency,
                    volunteer_count: volunteer_names.len(),
                    volunteer_names,
                }
            })
            .collect();

        EventAssignmentReport {
            generated_at: Utc::now(),
            total_events: events.len(),
            total_assignments: matches.len(),
            events: rows,
        }
    }

    /// Renders the volunteer participation report as CSV.
    pub async fn volunteers_csv(&self) -> String {
        let report = self.volunteers().await;
        let mut out = String::from("volunteerId,name,skills,assignmentCount,eventIds\n");
        for row in &report.volunteers {
            let skills = row.skills.join(";");
            let event_ids = row
                .event_ids
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(";");
            out.push_str(&format!(
                "{},{},{},{},{}\n",
                row.volunteer_id,
                csv_escape(&row.name),
                csv_escape(&skills),
                row.assignment_count,
                event_ids
            ));
        }
        out
    }

    /// Renders the event assignment report as CSV.
    pub async fn events_csv(&self) -> String {
        let report = self.events().await;
        let mut out = String::from("eventId,name,eventDate,urgency,volunteerCount,volunteerNames\n");
        for row in &report.events {
            let names = row.volunteer_names.join(";");
            out.push_str(&format!(
                "{},{},{},{},{},{}\n",
                row.event_id,
                csv_escape(&row.name),
                row.event_date,
                row.urgency,
                row.volunteer_count,
                csv_escape(&names)
            ));
        }
        out
    }
}

/// Quote a CSV field when it contains a delimiter, quote, or newline.
fn csv_escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
