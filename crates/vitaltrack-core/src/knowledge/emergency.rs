//! Emergency service numbers and the primary doctor card.

use serde::Serialize;

/// A public emergency line.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct EmergencyService {
    pub label: &'static str,
    pub number: &'static str,
}

/// Contact card for the user's primary doctor.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DoctorContact {
    pub name: &'static str,
    pub specialty: &'static str,
    pub hospital: &'static str,
    pub phone: &'static str,
    pub address: &'static str,
}

impl DoctorContact {
    /// `tel:` URI for the call button.
    pub fn dial_uri(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }
}

pub static EMERGENCY_SERVICES: [EmergencyService; 3] = [
    EmergencyService {
        label: "Emergency",
        number: "911",
    },
    EmergencyService {
        label: "Poison Control",
        number: "1-800-222-1222",
    },
    EmergencyService {
        label: "Mental Health",
        number: "988",
    },
];

pub const PRIMARY_DOCTOR: DoctorContact = DoctorContact {
    name: "Dr. Sarah Johnson",
    specialty: "General Practitioner",
    hospital: "City Medical Center",
    phone: "+1-555-0123",
    address: "123 Health Street, Medical City, MC 12345",
};

/// Look up an emergency line by label (case-insensitive).
pub fn emergency_service(label: &str) -> Option<&'static EmergencyService> {
    EMERGENCY_SERVICES
        .iter()
        .find(|s| s.label.eq_ignore_ascii_case(label.trim()))
}
