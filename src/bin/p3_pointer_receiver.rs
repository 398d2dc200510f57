// Lesson 3: Mutating through a reference receiver
use value_semantics::{lessons, LessonError, Narrator, OutputConfig};

fn main() -> Result<(), LessonError> {
    let mut narrator = Narrator::stdout(OutputConfig::from_env());
    lessons::pointer_receiver(&mut narrator)?;
    narrator.blank()?;
    lessons::rename_round_trip(&mut narrator)
}
