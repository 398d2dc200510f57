// Lesson 2: Mutating through a value receiver
use value_semantics::{lessons, LessonError, Narrator, OutputConfig};

fn main() -> Result<(), LessonError> {
    let mut narrator = Narrator::stdout(OutputConfig::from_env());
    lessons::value_receiver(&mut narrator)
}
