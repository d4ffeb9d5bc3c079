use anyhow::Result;

use fitness_tracker::WorkoutCode;

pub fn list_codes() -> Result<()> {
    println!("{:<6}{:<16}Values", "Code", "Workout");

    for code in WorkoutCode::ALL {
        println!(
            "{:<6}{:<16}{}",
            code.as_str(),
            code.training_type(),
            code.fields().join(", ")
        );
    }

    Ok(())
}
