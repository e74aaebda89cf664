//! Public types for the departments API
use serde::Serialize;

use crate::ai::departments::Department;

#[derive(Serialize)]
pub struct DepartmentsResponse {
    pub departments: Vec<Department>,
}
