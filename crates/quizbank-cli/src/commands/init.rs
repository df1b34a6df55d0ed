//! The `quizbank init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create quizbank.toml
    if std::path::Path::new("quizbank.toml").exists() {
        println!("quizbank.toml already exists, skipping.");
    } else {
        std::fs::write("quizbank.toml", SAMPLE_CONFIG)?;
        println!("Created quizbank.toml");
    }

    // Create example question bank
    if std::path::Path::new("questions.json").exists() {
        println!("questions.json already exists, skipping.");
    } else {
        std::fs::write("questions.json", EXAMPLE_BANK)?;
        println!("Created questions.json");
    }

    println!("\nNext steps:");
    println!("  1. Edit questions.json with your question bank");
    println!("  2. Run: quizbank validate");
    println!("  3. Run: quizbank submit --answers answers.json --student alice");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# quizbank configuration

questions_path = "questions.json"
progress_path = "progress.json"
default_student = "guest"
report_dir = "./quizbank-reports"
"#;

const EXAMPLE_BANK: &str = r#"[
  {
    "id": "vec-1",
    "topic": "Vectors",
    "prompt": "Which of these quantities has both magnitude and direction?",
    "choices": ["Speed", "Velocity", "Distance", "Mass"],
    "answer": "Velocity"
  },
  {
    "id": "vec-2",
    "topic": "Vectors",
    "prompt": "Two vectors are added head-to-tail. What is the result called?",
    "choices": ["Scalar", "Resultant", "Component", "Magnitude"],
    "answer": "Resultant"
  },
  {
    "id": "kin-1",
    "topic": "Kinematics",
    "prompt": "In v = u + at, what does 'a' stand for?",
    "choices": ["Area", "Acceleration", "Amplitude", "Angle"],
    "answer": "Acceleration"
  },
  {
    "id": "proj-1",
    "topic": "Projectile Motion",
    "prompt": "On level ground, range is maximized at which launch angle?",
    "choices": ["30 degrees", "45 degrees", "60 degrees", "90 degrees"],
    "answer": "45 degrees"
  }
]
"#;
