// Lesson 4: Slices share their backing storage
use value_semantics::{lessons, LessonError, Narrator, OutputConfig};

fn main() -> Result<(), LessonError> {
    let mut narrator = Narrator::stdout(OutputConfig::from_env());
    lessons::slice_aliasing(&mut narrator)
}
