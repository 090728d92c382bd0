use masterbrain_types::{Code, Feedback, Mark, CODE_LENGTH};

/// Score `guess` against `secret` slot by slot.
///
/// A color that is in the secret but not at this slot is `Present` every time
/// it appears in the guess. Secrets never repeat colors, so there is no
/// multiplicity to cap.
#[must_use]
pub fn compute_feedback(guess: &Code, secret: &Code) -> Feedback {
    let mut marks = [Mark::Absent; CODE_LENGTH];
    for (idx, mark) in marks.iter_mut().enumerate() {
        let color = guess.get(idx);
        *mark = if color == secret.get(idx) {
            Mark::Correct
        } else if secret.contains(color) {
            Mark::Present
        } else {
            Mark::Absent
        };
    }
    Feedback(marks)
}
