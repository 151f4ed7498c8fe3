//! Wire types for the academic administration backend.
//!
//! The backend is not consistent about naming: academic resources
//! (disciplines, timetable entries, educators) use camelCase fields, while
//! rooms and blocks use snake_case and Portuguese enum strings. The DTOs
//! here mirror the wire verbatim instead of normalizing, since the backend
//! is an external collaborator.

use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;

/// Weekly workload of a discipline. The backend only accepts 40 or 80.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Workload {
    Forty,
    Eighty,
}

impl TryFrom<u16> for Workload {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            40 => Ok(Workload::Forty),
            80 => Ok(Workload::Eighty),
            other => Err(format!("workload must be 40 or 80, got {other}")),
        }
    }
}

impl From<Workload> for u16 {
    fn from(value: Workload) -> Self {
        match value {
            Workload::Forty => 40,
            Workload::Eighty => 80,
        }
    }
}

/// Mandatory vs optional discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DisciplineKind {
    #[serde(rename = "OBG")]
    Mandatory,
    #[serde(rename = "OPT")]
    Optional,
}

/// A course/subject with a semester placement and workload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Discipline {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub semester: u32,
    pub workload: Workload,
    #[serde(rename = "type")]
    pub kind: DisciplineKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Educator {
    pub id: i64,
    pub name: String,
    #[serde(rename = "lattesLink", skip_serializing_if = "Option::is_none")]
    pub lattes_link: Option<String>,
}

/// A scheduled occurrence of a discipline.
///
/// `days` and `hours` are space-delimited parallel lists: position i of
/// `days` pairs with position i of `hours` to form one concrete (day, slot)
/// occupation. An 80-hour discipline typically carries two pairs per week,
/// a 40-hour one a single pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub id: i64,
    #[serde(rename = "disciplineId")]
    pub discipline_id: i64,
    pub days: String,
    pub hours: String,
    pub educator: Educator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
}

impl TimetableEntry {
    /// The individual day codes, in wire order.
    pub fn day_codes(&self) -> Vec<&str> {
        self.days.split_whitespace().collect()
    }

    /// The individual slot codes, in wire order.
    pub fn hour_codes(&self) -> Vec<&str> {
        self.hours.split_whitespace().collect()
    }

    /// Whether the parallel lists have matching cardinality.
    pub fn is_aligned(&self) -> bool {
        self.day_codes().len() == self.hour_codes().len()
    }
}

/// Directed dependency: `discipline_id` requires `prerequisite_id` first.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prerequisite {
    pub id: i64,
    pub discipline_id: i64,
    pub prerequisite_id: i64,
}

/// Wire values are the backend's Portuguese display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomType {
    #[serde(rename = "Sala de Aula")]
    Classroom,
    #[serde(rename = "Laboratório")]
    Laboratory,
    #[serde(rename = "Auditório")]
    Auditorium,
    #[serde(rename = "Sala Docentes")]
    TeachersRoom,
    #[serde(rename = "Administrativo")]
    Administrative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BlockStatus {
    Active,
    Inactive,
    Building,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: i64,
    pub description: String,
    pub status: BlockStatus,
    pub number_of_floors: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub description: String,
    pub floor: i32,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub kind: RoomType,
    pub block_id: i64,
    #[serde(default)]
    pub block: Option<Block>,
}

// ---------------------------------------------------------------------------
// Creation/update payloads.
//
// These are explicit field allow-lists: nothing besides the declared fields
// ever reaches the wire.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisciplinePayload {
    pub name: String,
    pub code: String,
    pub semester: u32,
    pub workload: Workload,
    #[serde(rename = "type")]
    pub kind: DisciplineKind,
}

impl DisciplinePayload {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::invalid_payload("discipline name is required"));
        }
        if self.code.trim().is_empty() {
            return Err(ApiError::invalid_payload("discipline code is required"));
        }
        if self.semester == 0 {
            return Err(ApiError::invalid_payload("semester must be positive"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisciplineUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semester: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workload: Option<Workload>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<DisciplineKind>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetablePayload {
    pub discipline_id: i64,
    pub educator_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    pub days: String,
    pub hours: String,
}

impl TimetablePayload {
    /// Rejects entries we would originate malformed. Rows already stored by
    /// the backend may still be misaligned; the grid builder tolerates
    /// those, but nothing misaligned leaves this service.
    pub fn validate(&self) -> Result<(), ApiError> {
        let days: Vec<&str> = self.days.split_whitespace().collect();
        let hours: Vec<&str> = self.hours.split_whitespace().collect();
        if days.is_empty() {
            return Err(ApiError::invalid_payload("days are required"));
        }
        if hours.is_empty() {
            return Err(ApiError::invalid_payload("hours are required"));
        }
        if days.len() != hours.len() {
            return Err(ApiError::invalid_payload(
                "days and hours must have the same number of entries",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discipline_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub educator_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrerequisitePayload {
    pub discipline_id: i64,
    pub prerequisite_id: i64,
}

impl PrerequisitePayload {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.discipline_id <= 0 || self.prerequisite_id <= 0 {
            return Err(ApiError::invalid_payload("ids must be positive"));
        }
        if self.discipline_id == self.prerequisite_id {
            return Err(ApiError::invalid_payload(
                "a discipline cannot be its own prerequisite",
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducatorPayload {
    pub name: String,
    #[serde(rename = "lattesLink", skip_serializing_if = "Option::is_none")]
    pub lattes_link: Option<String>,
}

impl EducatorPayload {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::invalid_payload("educator name is required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomPayload {
    pub description: String,
    pub floor: i32,
    pub block_id: i64,
    pub capacity: u32,
    #[serde(rename = "type")]
    pub kind: RoomType,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<RoomType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockPayload {
    pub description: String,
    pub status: BlockStatus,
    pub number_of_floors: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlockUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<BlockStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_floors: Option<u32>,
}

// ---------------------------------------------------------------------------
// Student registration and support directory.
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
    Separated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NeedDuration {
    Permanent,
    Temporary,
}

/// Full registration payload assembled by the multi-step wizard. The
/// `special_need_subcategories` list comes from the deduplicated
/// need/subcategory selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpf: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rg: Option<String>,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cep: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_student: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observations: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub need_duration: Option<NeedDuration>,
    #[serde(default)]
    pub special_need_subcategories: Vec<i64>,
}

impl StudentPayload {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(ApiError::invalid_payload("first and last name are required"));
        }
        if !self.email.contains('@') {
            return Err(ApiError::invalid_payload("a valid email is required"));
        }
        if self.password.len() < 6 {
            return Err(ApiError::invalid_payload(
                "password must be at least 6 characters",
            ));
        }
        Ok(())
    }
}

/// One need + subcategory pick from the registration wizard, before
/// deduplication. Labels ride along for display in the selection list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeedSelection {
    pub special_need_id: i64,
    pub special_need_subcategory_id: i64,
    #[serde(default)]
    pub special_need_name: String,
    #[serde(default)]
    pub special_need_subcategory_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub is_student: Option<bool>,
    #[serde(default)]
    pub special_need_subcategories: Vec<SpecialNeedSubcategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialNeed {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialNeedSubcategory {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub special_need_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HelperOccupation {
    Professional,
    Volunteer,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Helper {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub occupation: HelperOccupation,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HelperPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub occupation: HelperOccupation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl HelperPayload {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(ApiError::invalid_payload("first and last name are required"));
        }
        if !self.email.contains('@') {
            return Err(ApiError::invalid_payload("a valid email is required"));
        }
        if self.password.len() < 6 {
            return Err(ApiError::invalid_payload(
                "password must be at least 6 characters",
            ));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// List envelopes.
// ---------------------------------------------------------------------------

/// Pagination metadata as returned inside `{ data, pagination }` envelopes.
/// The backend does not document which fields are always present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagedResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// List endpoints sometimes return a bare array and sometimes a
/// `{ data, pagination }` envelope. Anything else is a shape error.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Paged(PagedResponse<T>),
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    pub fn into_items(self) -> Vec<T> {
        match self {
            ListEnvelope::Paged(paged) => paged.data,
            ListEnvelope::Bare(items) => items,
        }
    }

    pub fn into_parts(self) -> (Vec<T>, Option<Pagination>) {
        match self {
            ListEnvelope::Paged(paged) => (paged.data, paged.pagination),
            ListEnvelope::Bare(items) => (items, None),
        }
    }
}

/// Disciplines and timetable entries fetched together for grid and
/// statistics computation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub disciplines: Vec<Discipline>,
    pub timetables: Vec<TimetableEntry>,
    pub fetched_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(days: &str, hours: &str) -> TimetableEntry {
        TimetableEntry {
            id: 1,
            discipline_id: 10,
            days: days.to_string(),
            hours: hours.to_string(),
            educator: Educator {
                id: 5,
                name: "Ana".to_string(),
                lattes_link: None,
            },
            room: None,
        }
    }

    #[test]
    fn test_timetable_wire_shape() {
        let json = r#"{
            "id": 3,
            "disciplineId": 7,
            "days": "SEG QUA",
            "hours": "AB-M CD-M",
            "educator": {"id": 2, "name": "Ana", "lattesLink": "http://lattes"}
        }"#;
        let parsed: TimetableEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.discipline_id, 7);
        assert_eq!(parsed.day_codes(), vec!["SEG", "QUA"]);
        assert_eq!(parsed.hour_codes(), vec!["AB-M", "CD-M"]);
        assert!(parsed.is_aligned());
        assert!(parsed.room.is_none());
    }

    #[test]
    fn test_misaligned_entry_detected() {
        assert!(!entry("SEG QUA", "AB-M").is_aligned());
    }

    #[test]
    fn test_workload_rejects_other_values() {
        let ok: Discipline = serde_json::from_str(
            r#"{"id":1,"name":"Redes","code":"RED1","semester":3,"workload":80,"type":"OBG"}"#,
        )
        .unwrap();
        assert_eq!(ok.workload, Workload::Eighty);
        assert_eq!(ok.kind, DisciplineKind::Mandatory);

        let bad = serde_json::from_str::<Discipline>(
            r#"{"id":1,"name":"Redes","code":"RED1","semester":3,"workload":60,"type":"OBG"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_room_type_portuguese_wire_values() {
        let room: Room = serde_json::from_str(
            r#"{"id":1,"description":"Sala 101","floor":1,"capacity":40,
                "type":"Sala de Aula","block_id":2,
                "block":{"id":2,"description":"Bloco A","status":"ACTIVE","number_of_floors":3}}"#,
        )
        .unwrap();
        assert_eq!(room.kind, RoomType::Classroom);
        assert_eq!(room.block.unwrap().status, BlockStatus::Active);
    }

    #[test]
    fn test_list_envelope_accepts_both_shapes() {
        let bare: ListEnvelope<SpecialNeed> =
            serde_json::from_str(r#"[{"id":1,"name":"Visual"}]"#).unwrap();
        assert_eq!(bare.into_items().len(), 1);

        let paged: ListEnvelope<SpecialNeed> = serde_json::from_str(
            r#"{"data":[{"id":1,"name":"Visual"}],"pagination":{"page":1,"total":1}}"#,
        )
        .unwrap();
        let (items, pagination) = paged.into_parts();
        assert_eq!(items.len(), 1);
        assert_eq!(pagination.unwrap().total, Some(1));
    }

    #[test]
    fn test_list_envelope_rejects_other_shapes() {
        let bad = serde_json::from_str::<ListEnvelope<SpecialNeed>>(r#"{"items":[]}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_timetable_payload_alignment() {
        let payload = TimetablePayload {
            discipline_id: 1,
            educator_id: 2,
            room_id: None,
            days: "SEG QUA".to_string(),
            hours: "AB-M".to_string(),
        };
        assert!(payload.validate().is_err());

        let aligned = TimetablePayload {
            hours: "AB-M CD-M".to_string(),
            ..payload
        };
        assert!(aligned.validate().is_ok());
    }

    #[test]
    fn test_prerequisite_payload_rejects_self_reference() {
        let payload = PrerequisitePayload {
            discipline_id: 4,
            prerequisite_id: 4,
        };
        assert!(payload.validate().is_err());

        let ok = PrerequisitePayload {
            discipline_id: 4,
            prerequisite_id: 2,
        };
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_student_payload_skips_absent_fields() {
        let payload = StudentPayload {
            first_name: "Rui".to_string(),
            last_name: "Souza".to_string(),
            email: "rui@example.com".to_string(),
            password: "secret1".to_string(),
            phone_number: None,
            birth_date: None,
            cpf: None,
            rg: None,
            gender: Gender::Male,
            marital_status: MaritalStatus::Single,
            cep: None,
            state: None,
            city: None,
            neighborhood: None,
            street: None,
            number: None,
            complement: None,
            is_student: Some(true),
            observations: None,
            support_notes: None,
            need_duration: None,
            special_need_subcategories: vec![3, 9],
        };
        assert!(payload.validate().is_ok());
        let wire = serde_json::to_value(&payload).unwrap();
        assert!(wire.get("cpf").is_none());
        assert_eq!(wire["specialNeedSubcategories"], serde_json::json!([3, 9]));
        assert_eq!(wire["maritalStatus"], "single");
    }
}
