use super::{InstructionToggle, MAX_SELECTED_INSTRUCTIONS};

/// Ordered, duplicate-free set of at most three toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstructionSelection(Vec<InstructionToggle>);

impl InstructionSelection {
    /// Keeps selection order; a repeated toggle stays at its first position.
    pub fn new(toggles: Vec<InstructionToggle>) -> Result<Self, InstructionError> {
        let mut selected: Vec<InstructionToggle> = Vec::with_capacity(toggles.len());
        for toggle in toggles {
            if !selected.contains(&toggle) {
                selected.push(toggle);
            }
        }

        if selected.len() > MAX_SELECTED_INSTRUCTIONS {
            return Err(InstructionError::TooManyInstructions {
                selected: selected.len(),
                max: MAX_SELECTED_INSTRUCTIONS,
            });
        }

        Ok(Self(selected))
    }

    pub fn toggles(&self) -> &[InstructionToggle] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fragments(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.iter().map(InstructionToggle::fragment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstructionError {
    #[error("You can select at most {max} custom instructions ({selected} selected).")]
    TooManyInstructions { selected: usize, max: usize },
    #[error("Unknown custom instruction: {0}")]
    Unknown(String),
}
