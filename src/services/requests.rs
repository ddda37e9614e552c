//! Maintenance request lifecycle service

use rust_decimal::Decimal;

use crate::{
    error::{AppError, AppResult},
    models::{
        enums::{RequestType, Stage},
        request::{
            CalendarEntry, CompleteRequest, CreateRequest, KanbanBoard, KanbanCard,
            MaintenanceRequest, UpdateStage,
        },
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct RequestsService {
    repository: Repository,
}

impl RequestsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Create a request, copying team and technician from the equipment
    pub async fn create(&self, data: CreateRequest) -> AppResult<i32> {
        let (subject, request_type, equipment_id) = validate_create(&data)?;
        self.repository
            .requests
            .create_for_equipment(subject, request_type, equipment_id, data.scheduled_date)
            .await
    }

    /// Move a request to a new stage, retiring the equipment on scrap
    pub async fn set_stage(&self, id: i32, data: UpdateStage) -> AppResult<Stage> {
        let stage = parse_stage(&data)?;
        self.repository.requests.set_stage(id, stage).await?;
        Ok(stage)
    }

    /// Record the hours spent and mark the request repaired
    pub async fn complete(&self, id: i32, data: CompleteRequest) -> AppResult<Decimal> {
        let hours = validate_duration(&data)?;
        self.repository.requests.complete(id, hours).await?;
        Ok(hours)
    }

    /// Kanban board with every request grouped by stage
    pub async fn kanban(&self) -> AppResult<KanbanBoard> {
        let rows = self.repository.requests.kanban_rows().await?;
        Ok(partition_by_stage(rows))
    }

    /// Calendar of scheduled preventive work
    pub async fn calendar(&self) -> AppResult<Vec<CalendarEntry>> {
        self.repository.requests.calendar().await
    }

    /// Requests assigned to a technician
    pub async fn for_technician(&self, technician_id: i32) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository
            .requests
            .list_by_technician(technician_id)
            .await
    }

    /// Full request history for a piece of equipment
    pub async fn for_equipment(&self, equipment_id: i32) -> AppResult<Vec<MaintenanceRequest>> {
        self.repository
            .requests
            .list_by_equipment(equipment_id)
            .await
    }
}

/// Check the create payload, equipment before subject
fn validate_create(data: &CreateRequest) -> AppResult<(&str, RequestType, i32)> {
    let Some(equipment_id) = data.equipment_id else {
        return Err(AppError::MissingField("equipment_id is required".to_string()));
    };
    let subject = data.subject.as_deref().unwrap_or_default();
    if subject.is_empty() {
        return Err(AppError::MissingField("subject is required".to_string()));
    }
    Ok((subject, data.request_type.unwrap_or_default(), equipment_id))
}

fn parse_stage(data: &UpdateStage) -> AppResult<Stage> {
    let Some(raw) = data.stage.as_deref() else {
        return Err(AppError::MissingField("stage is required".to_string()));
    };
    raw.parse::<Stage>()
        .map_err(|e| AppError::InvalidStage(e.to_string()))
}

fn validate_duration(data: &CompleteRequest) -> AppResult<Decimal> {
    let Some(hours) = data.duration_hours else {
        return Err(AppError::MissingField(
            "duration_hours is required".to_string(),
        ));
    };
    if hours <= Decimal::ZERO {
        return Err(AppError::InvalidDuration(
            "duration_hours must be a positive number".to_string(),
        ));
    }
    Ok(hours)
}

/// Group cards into the four stage buckets. A missing or empty stage lands
/// in `new`; a value outside the known set drops the card from the board.
fn partition_by_stage(rows: Vec<KanbanCard>) -> KanbanBoard {
    let mut board = KanbanBoard::default();
    for card in rows {
        let stage = match card.stage.as_deref() {
            None | Some("") => Stage::New,
            Some(s) => match s.parse::<Stage>() {
                Ok(stage) => stage,
                Err(_) => continue,
            },
        };
        match stage {
            Stage::New => board.new.push(card),
            Stage::InProgress => board.in_progress.push(card),
            Stage::Repaired => board.repaired.push(card),
            Stage::Scrap => board.scrap.push(card),
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn card(id: i32, stage: Option<&str>) -> KanbanCard {
        KanbanCard {
            id,
            subject: format!("Request {}", id),
            request_type: "corrective".to_string(),
            equipment_id: 1,
            maintenance_team_id: None,
            assigned_technician_id: None,
            scheduled_date: None,
            stage: stage.map(str::to_string),
            duration_hours: None,
            created_at: Utc::now(),
            technician: None,
        }
    }

    fn payload(subject: Option<&str>, equipment_id: Option<i32>) -> CreateRequest {
        CreateRequest {
            subject: subject.map(str::to_string),
            request_type: None,
            equipment_id,
            scheduled_date: None,
        }
    }

    #[test]
    fn create_requires_equipment_before_subject() {
        let err = validate_create(&payload(None, None)).unwrap_err();
        assert!(err.to_string().contains("equipment_id is required"));

        let err = validate_create(&payload(None, Some(1))).unwrap_err();
        assert!(err.to_string().contains("subject is required"));
    }

    #[test]
    fn create_rejects_empty_subject() {
        let err = validate_create(&payload(Some(""), Some(1))).unwrap_err();
        assert!(err.to_string().contains("subject is required"));
    }

    #[test]
    fn create_defaults_to_corrective() {
        let data = payload(Some("Grinder jammed"), Some(7));
        let (subject, request_type, equipment_id) = validate_create(&data).unwrap();
        assert_eq!(subject, "Grinder jammed");
        assert_eq!(request_type, RequestType::Corrective);
        assert_eq!(equipment_id, 7);
    }

    #[test]
    fn stage_must_be_present_and_known() {
        let err = parse_stage(&UpdateStage { stage: None }).unwrap_err();
        assert!(err.to_string().contains("stage is required"));

        let err = parse_stage(&UpdateStage {
            stage: Some("approved".to_string()),
        })
        .unwrap_err();
        assert!(err.to_string().contains("Invalid stage"));

        let stage = parse_stage(&UpdateStage {
            stage: Some("in_progress".to_string()),
        })
        .unwrap();
        assert_eq!(stage, Stage::InProgress);
    }

    #[test]
    fn duration_must_be_positive() {
        let err = validate_duration(&CompleteRequest {
            duration_hours: None,
        })
        .unwrap_err();
        assert!(err.to_string().contains("duration_hours is required"));

        let err = validate_duration(&CompleteRequest {
            duration_hours: Some(Decimal::ZERO),
        })
        .unwrap_err();
        assert!(err.to_string().contains("positive"));

        let err = validate_duration(&CompleteRequest {
            duration_hours: Some(Decimal::new(-25, 1)),
        })
        .unwrap_err();
        assert!(err.to_string().contains("positive"));

        let hours = validate_duration(&CompleteRequest {
            duration_hours: Some(Decimal::new(25, 1)),
        })
        .unwrap();
        assert_eq!(hours, Decimal::new(25, 1));
    }

    #[test]
    fn validation_failures_keep_their_kind() {
        let missing = [
            validate_create(&payload(None, None)).unwrap_err(),
            validate_create(&payload(None, Some(1))).unwrap_err(),
            parse_stage(&UpdateStage { stage: None }).unwrap_err(),
            validate_duration(&CompleteRequest {
                duration_hours: None,
            })
            .unwrap_err(),
        ];
        for err in missing {
            assert!(err.to_string().starts_with("Missing field:"));
        }

        let err = parse_stage(&UpdateStage {
            stage: Some("archived".to_string()),
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("Invalid stage:"));

        let err = validate_duration(&CompleteRequest {
            duration_hours: Some(Decimal::ZERO),
        })
        .unwrap_err();
        assert!(err.to_string().starts_with("Invalid duration:"));
    }

    #[test]
    fn partition_groups_by_stage() {
        let board = partition_by_stage(vec![
            card(1, Some("new")),
            card(2, Some("in_progress")),
            card(3, Some("repaired")),
            card(4, Some("scrap")),
            card(5, Some("new")),
        ]);
        assert_eq!(board.new.len(), 2);
        assert_eq!(board.in_progress.len(), 1);
        assert_eq!(board.repaired.len(), 1);
        assert_eq!(board.scrap.len(), 1);
    }

    #[test]
    fn partition_defaults_missing_stage_to_new() {
        let board = partition_by_stage(vec![card(1, None), card(2, Some(""))]);
        assert_eq!(board.new.len(), 2);
        assert!(board.new.iter().any(|c| c.id == 1));
        assert!(board.new.iter().any(|c| c.id == 2));
    }

    #[test]
    fn partition_drops_unknown_stages() {
        let board = partition_by_stage(vec![card(1, Some("archived")), card(2, Some("new"))]);
        assert_eq!(board.new.len(), 1);
        assert!(board.in_progress.is_empty());
        assert!(board.repaired.is_empty());
        assert!(board.scrap.is_empty());
    }

    #[test]
    fn partition_keeps_raw_stage_on_cards() {
        let board = partition_by_stage(vec![card(9, Some("repaired"))]);
        assert_eq!(board.repaired[0].stage.as_deref(), Some("repaired"));
    }

    #[test]
    fn partition_accounts_for_every_card_but_unknown() {
        let board = partition_by_stage(vec![
            card(1, Some("new")),
            card(2, Some("in_progress")),
            card(3, Some("repaired")),
            card(4, Some("scrap")),
            card(5, None),
            card(6, Some("")),
            card(7, Some("archived")),
        ]);
        let total =
            board.new.len() + board.in_progress.len() + board.repaired.len() + board.scrap.len();
        assert_eq!(total, 6);
        assert_eq!(board.new.len(), 3);
    }
}
