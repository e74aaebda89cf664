//! The fixed set of medical departments the assistant may recommend.
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Department {
    pub name: &'static str,
    /// Short description embedded in the system prompt
    pub focus: &'static str,
    /// Longer description for the department guide shown to users
    pub guide: &'static str,
}

impl Department {
    const fn new(name: &'static str, focus: &'static str, guide: &'static str) -> Self {
        Self { name, focus, guide }
    }
}

pub const DEPARTMENTS: [Department; 12] = [
    Department::new("Cardiology", "heart", "Heart and cardiovascular system"),
    Department::new("Dermatology", "skin", "Skin, hair, nails"),
    Department::new("Endocrinology", "hormones", "Hormones and metabolism"),
    Department::new("Gastroenterology", "digestive", "Digestive system"),
    Department::new("Neurology", "nervous system", "Brain and nervous system"),
    Department::new("Ophthalmology", "eyes", "Eyes and vision"),
    Department::new("Orthopedics", "bones", "Bones, joints, muscles"),
    Department::new("ENT", "ears, nose, throat", "Ears, nose, throat"),
    Department::new("Pediatrics", "children", "Children's health"),
    Department::new("Pulmonology", "lungs", "Lungs and breathing"),
    Department::new("Rheumatology", "joints", "Joints and autoimmune diseases"),
    Department::new("Urology", "urinary", "Urinary system"),
];
