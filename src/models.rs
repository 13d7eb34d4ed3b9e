use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record destined for a fixed collection path. The key becomes the
/// child node name and is never serialized into the record body.
pub trait SeedRecord: Serialize {
    const PATH: &'static str;

    fn key(&self) -> &str;
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "O+")]
    OPositive,
    #[serde(rename = "O-")]
    ONegative,
    #[serde(rename = "A+")]
    APositive,
    #[serde(rename = "A-")]
    ANegative,
    #[serde(rename = "B+")]
    BPositive,
    #[serde(rename = "B-")]
    BNegative,
    #[serde(rename = "AB+")]
    AbPositive,
    #[serde(rename = "AB-")]
    AbNegative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum UrgencyLevel {
    Immediate,
    Within12Hours,
    Within24Hours,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    Registered,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualificationStatus {
    Pending,
    Qualified,
    Disqualified,
}

/// An open request for blood at a hospital. Timestamps are optional in the
/// literal data and stamped at seeding time when absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodRequest {
    #[serde(skip)]
    pub id: String,
    pub full_name: String,
    pub blood_type: BloodType,
    pub contact_number: String,
    pub hospital_name: String,
    pub reason: String,
    pub urgency_level: UrgencyLevel,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub status: RequestStatus,
    pub location: GeoPoint,
    pub requester_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub donor_id: Option<String>,
}

impl SeedRecord for BloodRequest {
    const PATH: &'static str = "bloodRequests";

    fn key(&self) -> &str {
        &self.id
    }
}

/// A scheduled donation drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(skip)]
    pub id: String,
    pub title: String,
    pub organizer: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub description: String,
    pub blood_types_needed: Vec<BloodType>,
    pub image: String,
    pub registered_donors: u32,
    pub target_donors: u32,
    pub coordinates: GeoPoint,
}

impl SeedRecord for Campaign {
    const PATH: &'static str = "campaigns";

    fn key(&self) -> &str {
        &self.id
    }
}

/// A donor signed up for a campaign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignRegistration {
    #[serde(skip)]
    pub id: String,
    pub campaign_id: String,
    pub user_id: String,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
}

impl SeedRecord for CampaignRegistration {
    const PATH: &'static str = "campaignRegistrations";

    fn key(&self) -> &str {
        &self.id
    }
}

/// A yes/no screening question shown to donors, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualificationQuestion {
    #[serde(skip)]
    pub id: String,
    pub text: String,
    pub order: u32,
}

impl SeedRecord for QualificationQuestion {
    const PATH: &'static str = "qualificationQuestions";

    fn key(&self) -> &str {
        &self.id
    }
}

/// A donor's screening answers for one blood request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonorQualification {
    #[serde(skip)]
    pub id: String,
    pub request_id: String,
    pub donor_id: String,
    pub status: QualificationStatus,
    pub responses: BTreeMap<String, bool>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SeedRecord for DonorQualification {
    const PATH: &'static str = "donorQualifications";

    fn key(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn blood_request_serializes_camel_case_without_id() {
        let request = BloodRequest {
            id: "req1".to_string(),
            full_name: "John Smith".to_string(),
            blood_type: BloodType::OPositive,
            contact_number: "+1 (555) 123-4567".to_string(),
            hospital_name: "Ruby Hall Clinic".to_string(),
            reason: "surgery".to_string(),
            urgency_level: UrgencyLevel::Within24Hours,
            address: "40 Sassoon Road, Pune".to_string(),
            created_at: Some(
                Utc.with_ymd_and_hms(2025, 3, 6, 10, 30, 0).unwrap(),
            ),
            updated_at: None,
            status: RequestStatus::Pending,
            location: GeoPoint {
                lat: 18.5308,
                lng: 73.8475,
            },
            requester_id: "user123".to_string(),
            donor_id: None,
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();

        assert!(object.get("id").is_none());
        assert_eq!(object["fullName"], "John Smith");
        assert_eq!(object["bloodType"], "O+");
        assert_eq!(object["urgencyLevel"], "within24Hours");
        assert_eq!(object["status"], "pending");
        assert_eq!(object["requesterId"], "user123");
        assert_eq!(object["location"]["lat"], 18.5308);
        assert!(object.get("updatedAt").is_none());
        assert!(object.get("donorId").is_none());
    }

    #[test]
    fn urgency_levels_use_app_vocabulary() {
        assert_eq!(
            serde_json::to_value(UrgencyLevel::Immediate).unwrap(),
            "immediate"
        );
        assert_eq!(
            serde_json::to_value(UrgencyLevel::Within12Hours).unwrap(),
            "within12Hours"
        );
        assert_eq!(
            serde_json::to_value(UrgencyLevel::Within24Hours).unwrap(),
            "within24Hours"
        );
    }

    #[test]
    fn blood_types_round_trip_wire_names() {
        for (blood_type, name) in [
            (BloodType::OPositive, "O+"),
            (BloodType::ONegative, "O-"),
            (BloodType::APositive, "A+"),
            (BloodType::ANegative, "A-"),
            (BloodType::BPositive, "B+"),
            (BloodType::BNegative, "B-"),
            (BloodType::AbPositive, "AB+"),
            (BloodType::AbNegative, "AB-"),
        ] {
            assert_eq!(serde_json::to_value(blood_type).unwrap(), name);
            let parsed: BloodType =
                serde_json::from_value(serde_json::json!(name)).unwrap();
            assert_eq!(parsed, blood_type);
        }
    }

    #[test]
    fn qualification_responses_keep_question_order() {
        let qualification = DonorQualification {
            id: "dq1".to_string(),
            request_id: "req3".to_string(),
            donor_id: "user001".to_string(),
            status: QualificationStatus::Qualified,
            responses: BTreeMap::from([
                ("q2".to_string(), true),
                ("q1".to_string(), false),
            ]),
            created_at: Utc.with_ymd_and_hms(2025, 3, 6, 16, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2025, 3, 6, 16, 15, 0).unwrap(),
        };

        let value = serde_json::to_value(&qualification).unwrap();
        let keys: Vec<&String> =
            value["responses"].as_object().unwrap().keys().collect();

        assert_eq!(keys, ["q1", "q2"]);
        assert_eq!(value["status"], "qualified");
    }
}
