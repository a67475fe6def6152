/// What became of a workflow trigger.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome<T> {
    /// Nothing was sent.
    Ignored(Ignored),
    /// The request ran but a newer request or a reset superseded it, so its
    /// result was dropped.
    Stale,
    Completed(T),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ignored {
    BlankIdentifier,
    InProgress,
    NothingToSubmit,
    NoPatient,
}

impl<T> Outcome<T> {
    pub fn completed(self) -> Option<T> {
        match self {
            Outcome::Completed(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored(_))
    }
}
