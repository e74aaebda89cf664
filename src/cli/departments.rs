use crate::ai::departments::DEPARTMENTS;

pub fn run() {
    println!("Medical Departments Guide:");
    for dept in DEPARTMENTS.iter() {
        println!("- {}: {}", dept.name, dept.guide);
    }
}
