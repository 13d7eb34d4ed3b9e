//! The literal sample records written by the seeder. Shapes mirror the
//! collections the application reads at runtime.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use serde_json::json;

use crate::models::{
    BloodRequest, BloodType, Campaign, CampaignRegistration, DonorQualification,
    GeoPoint, QualificationQuestion, QualificationStatus, RegistrationStatus,
    RequestStatus, UrgencyLevel,
};

pub const INCREMENT_PATH: &str = "__increment";

fn ts(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

pub fn blood_requests() -> Vec<BloodRequest> {
    vec![
        BloodRequest {
            id: "req1".to_string(),
            full_name: "John Smith".to_string(),
            blood_type: BloodType::OPositive,
            contact_number: "+1 (555) 123-4567".to_string(),
            hospital_name: "Ruby Hall Clinic".to_string(),
            reason: "surgery".to_string(),
            urgency_level: UrgencyLevel::Within24Hours,
            address: "40 Sassoon Road, Pune, Maharashtra, India".to_string(),
            created_at: Some(ts(2025, 3, 6, 10, 30)),
            updated_at: None,
            status: RequestStatus::Pending,
            location: GeoPoint {
                lat: 18.5308,
                lng: 73.8475,
            },
            requester_id: "user123".to_string(),
            donor_id: None,
        },
        BloodRequest {
            id: "req2".to_string(),
            full_name: "Sarah Johnson".to_string(),
            blood_type: BloodType::ANegative,
            contact_number: "+1 (555) 987-6543".to_string(),
            hospital_name: "Jehangir Hospital".to_string(),
            reason: "accident".to_string(),
            urgency_level: UrgencyLevel::Immediate,
            address: "32 Sassoon Road, Pune, Maharashtra, India".to_string(),
            created_at: Some(ts(2025, 3, 7, 8, 15)),
            updated_at: None,
            status: RequestStatus::Pending,
            location: GeoPoint {
                lat: 18.5193,
                lng: 73.8567,
            },
            requester_id: "user456".to_string(),
            donor_id: None,
        },
        BloodRequest {
            id: "req3".to_string(),
            full_name: "Robert Williams".to_string(),
            blood_type: BloodType::BPositive,
            contact_number: "+1 (555) 234-5678".to_string(),
            hospital_name: "Aditya Birla Memorial Hospital".to_string(),
            reason: "chronic condition".to_string(),
            urgency_level: UrgencyLevel::Within12Hours,
            address: "Aditya Birla Hospital Road, Thergaon, Pune, Maharashtra, India"
                .to_string(),
            created_at: Some(ts(2025, 3, 6, 15, 45)),
            updated_at: None,
            status: RequestStatus::Accepted,
            location: GeoPoint {
                lat: 18.6210,
                lng: 73.7868,
            },
            requester_id: "user789".to_string(),
            donor_id: Some("user001".to_string()),
        },
        BloodRequest {
            id: "req4".to_string(),
            full_name: "Maria Garcia".to_string(),
            blood_type: BloodType::AbPositive,
            contact_number: "+1 (555) 345-6789".to_string(),
            hospital_name: "Sahyadri Hospital".to_string(),
            reason: "childbirth".to_string(),
            urgency_level: UrgencyLevel::Within24Hours,
            address: "Plot No. 30-C, Karve Road, Pune, Maharashtra, India"
                .to_string(),
            created_at: Some(ts(2025, 3, 6, 20, 10)),
            updated_at: None,
            status: RequestStatus::Pending,
            location: GeoPoint {
                lat: 18.5073,
                lng: 73.8289,
            },
            requester_id: "user234".to_string(),
            donor_id: None,
        },
        BloodRequest {
            id: "req5".to_string(),
            full_name: "David Brown".to_string(),
            blood_type: BloodType::ONegative,
            contact_number: "+1 (555) 456-7890".to_string(),
            hospital_name: "KEM Hospital".to_string(),
            reason: "emergency".to_string(),
            urgency_level: UrgencyLevel::Immediate,
            address: "489, Rasta Peth, Pune, Maharashtra, India".to_string(),
            created_at: Some(ts(2025, 3, 7, 7, 30)),
            updated_at: None,
            status: RequestStatus::Pending,
            location: GeoPoint {
                lat: 18.5233,
                lng: 73.8717,
            },
            requester_id: "user567".to_string(),
            donor_id: None,
        },
    ]
}

pub fn campaigns() -> Vec<Campaign> {
    vec![
        Campaign {
            id: "camp1".to_string(),
            title: "City General Hospital Blood Drive".to_string(),
            organizer: "City General Hospital".to_string(),
            date: "2025-03-15".to_string(),
            time: "9:00 AM - 5:00 PM".to_string(),
            location: "City General Hospital Auditorium".to_string(),
            description: "Annual blood drive to replenish hospital blood bank supplies. \
                 All blood types needed, especially O- and B-."
                .to_string(),
            blood_types_needed: vec![
                BloodType::OPositive,
                BloodType::ONegative,
                BloodType::APositive,
                BloodType::ANegative,
                BloodType::BPositive,
                BloodType::BNegative,
                BloodType::AbPositive,
                BloodType::AbNegative,
            ],
            image: "https://firebasestorage.googleapis.com/v0/b/bloodlink-app.appspot.com/o/campaigns%2Fhospital-drive.jpg"
                .to_string(),
            registered_donors: 45,
            target_donors: 100,
            coordinates: GeoPoint {
                lat: 40.7128,
                lng: -74.0060,
            },
        },
        Campaign {
            id: "camp2".to_string(),
            title: "Red Cross Mobile Blood Drive".to_string(),
            organizer: "American Red Cross".to_string(),
            date: "2025-03-20".to_string(),
            time: "10:00 AM - 4:00 PM".to_string(),
            location: "Central Park Community Center".to_string(),
            description: "Mobile blood drive with the Red Cross bloodmobile. \
                 Walk-ins welcome, but appointments preferred."
                .to_string(),
            blood_types_needed: vec![
                BloodType::OPositive,
                BloodType::ONegative,
                BloodType::BPositive,
                BloodType::BNegative,
            ],
            image: "https://firebasestorage.googleapis.com/v0/b/bloodlink-app.appspot.com/o/campaigns%2Fredcross-drive.jpg"
                .to_string(),
            registered_donors: 28,
            target_donors: 50,
            coordinates: GeoPoint {
                lat: 40.7729,
                lng: -73.9712,
            },
        },
        Campaign {
            id: "camp3".to_string(),
            title: "University Campus Blood Donation Week".to_string(),
            organizer: "University Medical School".to_string(),
            date: "2025-03-25".to_string(),
            time: "11:00 AM - 7:00 PM".to_string(),
            location: "University Student Center".to_string(),
            description: "Week-long blood drive at the university campus. \
                 Special focus on reaching young donors. Free refreshments provided."
                .to_string(),
            blood_types_needed: vec![
                BloodType::APositive,
                BloodType::ANegative,
                BloodType::AbPositive,
                BloodType::AbNegative,
            ],
            image: "https://firebasestorage.googleapis.com/v0/b/bloodlink-app.appspot.com/o/campaigns%2Funiversity-drive.jpg"
                .to_string(),
            registered_donors: 75,
            target_donors: 200,
            coordinates: GeoPoint {
                lat: 40.7291,
                lng: -73.9965,
            },
        },
    ]
}

pub fn campaign_registrations() -> Vec<CampaignRegistration> {
    vec![CampaignRegistration {
        id: "creg1".to_string(),
        campaign_id: "camp2".to_string(),
        user_id: "user001".to_string(),
        status: RegistrationStatus::Registered,
        created_at: Utc::now(),
    }]
}

pub fn qualification_questions() -> Vec<QualificationQuestion> {
    vec![
        QualificationQuestion {
            id: "q1".to_string(),
            text: "Have you donated blood in the last 8 weeks?".to_string(),
            order: 1,
        },
        QualificationQuestion {
            id: "q2".to_string(),
            text: "Do you weigh at least 110 pounds (50 kg)?".to_string(),
            order: 2,
        },
        QualificationQuestion {
            id: "q3".to_string(),
            text: "Have you been feeling well and in good health?".to_string(),
            order: 3,
        },
        QualificationQuestion {
            id: "q4".to_string(),
            text: "Have you had a tattoo in the last 3 months?".to_string(),
            order: 4,
        },
        QualificationQuestion {
            id: "q5".to_string(),
            text: "Have you traveled to malaria-risk areas in the last year?"
                .to_string(),
            order: 5,
        },
    ]
}

pub fn donor_qualifications() -> Vec<DonorQualification> {
    vec![DonorQualification {
        id: "dq1".to_string(),
        request_id: "req3".to_string(),
        donor_id: "user001".to_string(),
        status: QualificationStatus::Qualified,
        responses: BTreeMap::from([
            ("q1".to_string(), false),
            ("q2".to_string(), true),
            ("q3".to_string(), true),
            ("q4".to_string(), false),
            ("q5".to_string(), false),
        ]),
        created_at: ts(2025, 3, 6, 16, 0),
        updated_at: ts(2025, 3, 6, 16, 15),
    }]
}

/// Stand-in for Firestore's increment, applied client-side by the app.
pub fn increment_descriptor() -> serde_json::Value {
    json!({
        "description": "Simulates Firestore's increment function for the Realtime Database",
        "function": "function(current, amount) { return (current || 0) + amount; }",
    })
}
