use std::fs::File;

use rand::seq::IndexedRandom;
use rand::Rng;

const FIRST_NAMES: [&str; 10] = [
    "Ana", "Bruno", "Carla", "Diego", "Elisa", "Fabio", "Gina", "Hugo", "Iris", "Joao",
];
const LAST_NAMES: [&str; 8] = [
    "Silva", "Souza", "Oliveira", "Pereira", "Costa", "Rodrigues", "Almeida", "Nascimento",
];
const GENDERS: [&str; 3] = ["female", "male", "other"];
const TYPES: [&str; 2] = ["Adult", "Child"];

/// Generate a mock batch CSV with random participant rows. This is used to
/// exercise the staging pipeline by hand.
pub fn generator(output: &str, count: usize) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let mut wtr = csv::Writer::from_writer(file);
    wtr.write_record(["name", "birth_date", "gender", "inscription_type"])?;

    let mut rng = rand::rng();

    for _ in 0..count {
        let first = FIRST_NAMES.choose(&mut rng).unwrap_or(&"Ana");
        let last = LAST_NAMES.choose(&mut rng).unwrap_or(&"Silva");
        let gender = GENDERS.choose(&mut rng).unwrap_or(&"other");
        let inscription_type = TYPES.choose(&mut rng).unwrap_or(&"Adult");

        // day capped at 28 so every generated date is a real calendar date
        let day = rng.random_range(1..=28);
        let month = rng.random_range(1..=12);
        let year = rng.random_range(1960..=2015);

        wtr.write_record([
            &format!("{} {}", first, last),
            &format!("{:02}/{:02}/{}", day, month, year),
            &gender.to_string(),
            &inscription_type.to_string(),
        ])?;
    }

    wtr.flush()?;
    println!("✓ Generated {} participant rows to {}", count, output);
    Ok(())
}
