//! Demo records loaded at startup when `seed_demo_data` is on.

use models::{MarksInput, StudentInput};

pub fn demo_students() -> Vec<StudentInput> {
    [
        ("B25AI2113", "Ravi varman", 16),
        ("B25AI2114", "Rahul Kumar", 17),
        ("B25AI2115", "Priya Sharma", 16),
    ]
    .into_iter()
    .map(|(rollno, name, age)| StudentInput { rollno: rollno.into(), name: name.into(), age })
    .collect()
}

pub fn demo_marks() -> Vec<MarksInput> {
    [("B25AI2113", 92.5), ("B25AI2114", 88.0), ("B25AI2115", 95.5)]
        .into_iter()
        .map(|(rollno, marks)| MarksInput { rollno: rollno.into(), marks })
        .collect()
}
