// Lesson 5: Value kinds vs reference kinds
use value_semantics::{lessons, LessonError, Narrator, OutputConfig};

fn main() -> Result<(), LessonError> {
    let mut narrator = Narrator::stdout(OutputConfig::from_env());
    lessons::value_and_reference_kinds(&mut narrator)
}
