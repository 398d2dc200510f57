// Lesson 1: Three ways to build a struct
use value_semantics::{lessons, LessonError, Narrator, OutputConfig};

fn main() -> Result<(), LessonError> {
    let mut narrator = Narrator::stdout(OutputConfig::from_env());
    lessons::struct_initialization(&mut narrator)
}
