use syllabus_tutor::application::services::{PromptComposer, compose_system_instruction};
use syllabus_tutor::domain::{InstructionSelection, InstructionToggle};

const BASE: &str = "You are a tutor.";

#[test]
fn given_no_toggles_when_composing_then_returns_base_unchanged() {
    let selection = InstructionSelection::default();
    assert_eq!(compose_system_instruction(BASE, &selection), BASE);
}

#[test]
fn given_two_toggles_when_composing_then_fragments_appear_in_selection_order() {
    let selection = InstructionSelection::new(vec![
        InstructionToggle::DataScience,
        InstructionToggle::SimpleLanguage,
    ])
    .unwrap();

    let prompt = compose_system_instruction(BASE, &selection);

    let data_science = prompt
        .find(InstructionToggle::DataScience.fragment())
        .expect("data science fragment present");
    let simple = prompt
        .find(InstructionToggle::SimpleLanguage.fragment())
        .expect("simple language fragment present");
    assert!(data_science < simple);
}

#[test]
fn given_toggles_when_composing_then_uses_preferences_block_layout() {
    let selection = InstructionSelection::new(vec![InstructionToggle::Visual]).unwrap();

    let prompt = compose_system_instruction(BASE, &selection);

    assert_eq!(
        prompt,
        "You are a tutor.\n\nADDITIONAL USER PREFERENCES:\n- Describe concepts in visual terms (diagrams, graphs) when possible."
    );
}

#[test]
fn given_unselected_toggle_when_composing_then_fragment_absent() {
    let selection = InstructionSelection::new(vec![InstructionToggle::Visual]).unwrap();

    let prompt = compose_system_instruction(BASE, &selection);

    assert!(!prompt.contains(InstructionToggle::CodingApplications.fragment()));
}

#[test]
fn given_tutor_name_when_building_composer_then_base_names_tutor() {
    let composer = PromptComposer::new("Ada's Math Explainer");

    assert!(
        composer
            .base_instruction()
            .starts_with("You are an expert math tutor named Ada's Math Explainer.")
    );
    assert!(composer.base_instruction().contains("LaTeX"));
}

#[test]
fn given_composer_when_composing_then_base_precedes_preferences() {
    let composer = PromptComposer::default();
    let selection = InstructionSelection::new(vec![InstructionToggle::StepByStep]).unwrap();

    let prompt = composer.compose(&selection);

    assert!(prompt.starts_with(composer.base_instruction()));
    assert!(prompt.ends_with(InstructionToggle::StepByStep.fragment()));
}
