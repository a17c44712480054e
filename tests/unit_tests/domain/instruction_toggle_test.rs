use syllabus_tutor::domain::{
    InstructionError, InstructionSelection, InstructionToggle, MAX_SELECTED_INSTRUCTIONS,
};

#[test]
fn given_catalog_when_listed_then_has_six_distinct_toggles() {
    let keys: Vec<&str> = InstructionToggle::ALL.iter().map(|t| t.key()).collect();
    assert_eq!(keys.len(), 6);

    let mut deduped = keys.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), 6);
}

#[test]
fn given_key_when_parsing_then_returns_toggle() {
    assert_eq!(
        "step_by_step".parse::<InstructionToggle>(),
        Ok(InstructionToggle::StepByStep)
    );
}

#[test]
fn given_label_when_parsing_then_returns_toggle() {
    assert_eq!(
        "Connect to Data Science".parse::<InstructionToggle>(),
        Ok(InstructionToggle::DataScience)
    );
}

#[test]
fn given_unknown_name_when_parsing_then_returns_error() {
    assert!("interpretive_dance".parse::<InstructionToggle>().is_err());
}

#[test]
fn given_toggle_when_serialized_then_uses_snake_case_key() {
    let json = serde_json::to_string(&InstructionToggle::RealWorldExamples).unwrap();
    assert_eq!(json, "\"real_world_examples\"");
}

#[test]
fn given_three_toggles_when_selecting_then_keeps_selection_order() {
    let selection = InstructionSelection::new(vec![
        InstructionToggle::Visual,
        InstructionToggle::SimpleLanguage,
        InstructionToggle::DataScience,
    ])
    .unwrap();

    assert_eq!(
        selection.toggles(),
        &[
            InstructionToggle::Visual,
            InstructionToggle::SimpleLanguage,
            InstructionToggle::DataScience,
        ]
    );
}

#[test]
fn given_four_toggles_when_selecting_then_rejected_not_truncated() {
    let result = InstructionSelection::new(vec![
        InstructionToggle::Visual,
        InstructionToggle::SimpleLanguage,
        InstructionToggle::DataScience,
        InstructionToggle::StepByStep,
    ]);

    assert_eq!(
        result,
        Err(InstructionError::TooManyInstructions {
            selected: 4,
            max: MAX_SELECTED_INSTRUCTIONS,
        })
    );
}

#[test]
fn given_repeated_toggle_when_selecting_then_counted_once_at_first_position() {
    let selection = InstructionSelection::new(vec![
        InstructionToggle::Visual,
        InstructionToggle::StepByStep,
        InstructionToggle::Visual,
        InstructionToggle::DataScience,
    ])
    .unwrap();

    assert_eq!(selection.len(), 3);
    assert_eq!(selection.toggles()[0], InstructionToggle::Visual);
}

#[test]
fn given_no_toggles_when_selecting_then_selection_is_empty() {
    let selection = InstructionSelection::new(Vec::new()).unwrap();
    assert!(selection.is_empty());
}
